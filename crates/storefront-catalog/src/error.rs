//! Catalog error types.

use thiserror::Error;

/// Errors that can occur while loading or querying the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Two fixture entries share an identifier.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(String),

    /// Fixture file could not be read.
    #[error("Failed to read catalog fixture {path}: {source}")]
    Fixture {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Fixture content is not a valid product list.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The data source could not answer the query.
    #[error("Data source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::SerializationError(e.to_string())
    }
}
