//! Server-side rendering for the storefront.
//!
//! A [`Storefront`] owns a fixed route table. Each bound route pairs a
//! [`Loader`] with a [`Renderer`]:
//!
//! ```text
//! /               HomeLoader   -> HomeRenderer
//! /product/:id/   DetailLoader -> DetailRenderer
//! *               (404)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_catalog::{Catalog, CatalogService};
//! use storefront_render::Storefront;
//!
//! let catalog = Arc::new(Catalog::from_path("fixtures/items.json")?);
//! let storefront = Storefront::new(Arc::new(CatalogService::new(catalog)), "")?;
//!
//! let page = storefront.render("/product/85067212996/", &Default::default()).await;
//! println!("{}", page.head);
//! ```

pub mod error;
pub mod head;
pub mod loaders;
pub mod orchestrator;
pub mod page;
pub mod pages;
pub mod sections;

pub use error::RenderError;
pub use head::HeadContent;
pub use loaders::{DetailLoader, DetailPayload, HomeLoader, HomePayload};
pub use orchestrator::{PageBinding, RenderResult, RenderStatus, RouteEntry, Storefront, StorefrontBuilder};
pub use page::{Loader, PageContent, PageKind, Renderer};
pub use pages::{DetailRenderer, HomeRenderer};
