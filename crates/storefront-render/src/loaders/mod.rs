//! Data loaders.
//!
//! Loaders adapt request parameters into data service calls and shape the
//! result into the payload their page renders. They only depend on the
//! [`ProductSource`](storefront_catalog::ProductSource) seam.

mod detail;
mod home;

pub use detail::{DetailLoader, DetailPayload, RELATED_LIMIT};
pub use home::{HomeLoader, HomePayload};
