//! Render pipeline errors.

use storefront_catalog::CatalogError;
use thiserror::Error;

/// Errors raised while loading or rendering a page.
///
/// None of these escape [`Storefront::render`](crate::Storefront::render);
/// they become the error document there.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A route parameter the loader needs was absent or empty.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// The data service failed.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A loader payload did not have the shape its renderer expects.
    #[error("Invalid page payload: {0}")]
    Payload(#[from] serde_json::Error),
}

impl RenderError {
    /// Create a missing-parameter error.
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Check if this is a product lookup miss.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Catalog(CatalogError::ProductNotFound(_)))
    }
}
