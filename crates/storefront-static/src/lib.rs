//! Static site generation for the storefront.
//!
//! Pre-renders every page through the SSR [`Storefront`] and writes a
//! deployable tree of HTML files. See [`Generator`].
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_static::{generate, GenerateOptions};
//!
//! let options = GenerateOptions::new("dist").with_base_path("/shop");
//! let report = generate(&storefront, &catalog.product_ids(), options).await?;
//! println!("{}/{} product pages", report.succeeded, report.attempted);
//! ```
//!
//! [`Storefront`]: storefront_render::Storefront

pub mod error;
pub mod generator;
pub mod manifest;
pub mod template;

pub use error::GenerateError;
pub use generator::{
    generate, AssetSource, GenerateOptions, GenerationReport, Generator, ItemOutcome,
    DEFAULT_PROGRESS_INTERVAL,
};
pub use manifest::AssetManifest;
pub use template::{build_html, serialize_initial_data};
