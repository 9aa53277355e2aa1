//! Search module.
//!
//! Query parameters, sort ordering, and paginated result types.

mod collate;
mod query;
mod results;

pub use collate::compare_titles;
pub use query::{ProductQuery, SortOption, DEFAULT_LIMIT};
pub use results::{AppliedFilters, Pagination, ProductList};
