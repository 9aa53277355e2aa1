//! Loader and renderer seams.
//!
//! A page is a loader paired with a renderer. The loader's payload travels
//! to the renderer as a JSON value and is embedded verbatim as the
//! document's initial data, so it must survive a JSON round trip.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use storefront_router::{QueryParams, RouteParams};

use crate::error::RenderError;

/// Markup fragments produced by a renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageContent {
    /// Fragment placed inside `<head>`.
    pub head: String,
    /// Fragment placed inside the root element.
    pub html: String,
}

impl PageContent {
    pub fn new(head: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            head: head.into(),
            html: html.into(),
        }
    }
}

/// Fetches the data a page needs.
#[async_trait]
pub trait Loader: Send + Sync {
    /// Load the payload for a request.
    async fn load(&self, query: &QueryParams, params: &RouteParams) -> Result<Value, RenderError>;
}

/// Turns a loader payload into markup.
pub trait Renderer: Send + Sync {
    /// Render the payload. A payload of the wrong shape is an error.
    fn render(&self, data: &Value) -> Result<PageContent, RenderError>;
}

/// Which page a route is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Product listing with search and filters.
    Home,
    /// Single product with related items.
    ProductDetail,
}

impl PageKind {
    /// Route template the page is served under.
    pub fn route(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::ProductDetail => "/product/:id/",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::ProductDetail => "product-detail",
        }
    }
}

impl std::fmt::Display for PageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
