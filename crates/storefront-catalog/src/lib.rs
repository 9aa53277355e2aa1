//! Product catalog for the storefront rendering pipeline.
//!
//! The catalog is a fixed, read-only product collection loaded once at
//! startup. [`CatalogService`] answers the three queries every page needs:
//!
//! - **List**: search, category filters, sorting and pagination
//! - **Detail**: single product lookup with synthesized detail fields
//! - **Categories**: the two-level `category1 -> category2` tree
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_catalog::prelude::*;
//!
//! let catalog = Arc::new(Catalog::from_path("fixtures/items.json")?);
//! let service = CatalogService::new(catalog);
//!
//! let query = ProductQuery::new()
//!     .with_search("젤리")
//!     .with_sort(SortOption::PriceDesc)
//!     .with_pagination(1, 20);
//! let list = service.list_products(&query).await?;
//! println!("{} of {}", list.products.len(), list.pagination.total);
//! ```

pub mod catalog;
pub mod category;
pub mod error;
pub mod product;
pub mod random;
pub mod search;
pub mod service;

pub use catalog::Catalog;
pub use category::CategoryTree;
pub use error::CatalogError;
pub use product::{Product, ProductDetail, ProductId};
pub use random::{DetailRandom, FixedDetailRandom, ThreadDetailRandom};
pub use search::{AppliedFilters, Pagination, ProductList, ProductQuery, SortOption};
pub use service::{CatalogService, ProductSource};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::category::CategoryTree;
    pub use crate::error::CatalogError;
    pub use crate::product::{Product, ProductDetail, ProductId};
    pub use crate::random::{DetailRandom, FixedDetailRandom, ThreadDetailRandom};
    pub use crate::search::{AppliedFilters, Pagination, ProductList, ProductQuery, SortOption};
    pub use crate::service::{CatalogService, ProductSource};
}
