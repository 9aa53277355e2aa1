//! Request orchestration.
//!
//! Each request runs `match -> load -> render -> assemble`. A path with no
//! bound page ends in the 404 document; a loader or renderer failure ends
//! in the error document. [`Storefront::render`] itself never fails.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_catalog::ProductSource;
use storefront_router::{parse_query, QueryParams, RouteError, RouteParams, Router};

use crate::error::RenderError;
use crate::loaders::{DetailLoader, HomeLoader};
use crate::page::{Loader, PageContent, PageKind, Renderer};
use crate::pages::{error_page, not_found_page, DetailRenderer, HomeRenderer};

/// How a render ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStatus {
    /// A page was loaded and rendered.
    Ok,
    /// No page is bound to the path.
    NotFound,
    /// Loading or rendering failed; the error document was produced.
    Error,
}

impl RenderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::Error => "error",
        }
    }
}

/// A rendered page ready to be placed in the document template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderResult {
    /// Fragment for `<head>`.
    pub head: String,
    /// Fragment for the root element.
    pub html: String,
    /// Loader payload, embedded verbatim for client hydration.
    pub initial_data: Value,
    pub status: RenderStatus,
    /// Failure message behind an error document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RenderResult {
    /// Successful render of `data`.
    pub fn ok(content: PageContent, data: Value) -> Self {
        Self {
            head: content.head,
            html: content.html,
            initial_data: data,
            status: RenderStatus::Ok,
            error: None,
        }
    }

    /// The 404 document.
    pub fn not_found() -> Self {
        Self::fallback(not_found_page(), RenderStatus::NotFound, None)
    }

    /// The error document for a failure message.
    pub fn error(message: &str) -> Self {
        Self::fallback(error_page(message), RenderStatus::Error, Some(message.to_string()))
    }

    fn fallback(content: PageContent, status: RenderStatus, error: Option<String>) -> Self {
        Self {
            head: content.head,
            html: content.html,
            initial_data: Value::Object(Default::default()),
            status,
            error,
        }
    }

    /// Why this render is not a page, if it is not.
    pub fn failure_reason(&self) -> Option<String> {
        match self.status {
            RenderStatus::Ok => None,
            RenderStatus::NotFound => Some("no page matches this path".to_string()),
            RenderStatus::Error => Some(self.error.clone().unwrap_or_else(|| "render failed".to_string())),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == RenderStatus::Ok
    }

    /// Whether the path matched a bound page.
    pub fn matched(&self) -> bool {
        self.status != RenderStatus::NotFound
    }
}

/// A loader paired with its renderer.
#[derive(Clone)]
pub struct PageBinding {
    loader: Arc<dyn Loader>,
    renderer: Arc<dyn Renderer>,
}

impl PageBinding {
    pub fn new(loader: Arc<dyn Loader>, renderer: Arc<dyn Renderer>) -> Self {
        Self { loader, renderer }
    }

    async fn run(&self, query: &QueryParams, params: &RouteParams) -> Result<RenderResult, RenderError> {
        let data = self.loader.load(query, params).await?;
        let content = self.renderer.render(&data)?;
        Ok(RenderResult::ok(content, data))
    }
}

/// One row of the route table, in match order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry<'a> {
    pub pattern: &'a str,
    pub page: Option<PageKind>,
    pub bound: bool,
}

/// Builds a [`Storefront`]. The catch-all is appended by [`build`](Self::build).
pub struct StorefrontBuilder {
    router: Router<PageKind>,
    pages: HashMap<PageKind, PageBinding>,
}

impl StorefrontBuilder {
    pub fn new(base_path: &str) -> Self {
        Self {
            router: Router::new(base_path),
            pages: HashMap::new(),
        }
    }

    /// Register `kind`'s route and bind it.
    pub fn page(mut self, kind: PageKind, binding: PageBinding) -> Result<Self, RouteError> {
        self.router.add_route(kind.route(), kind)?;
        self.pages.insert(kind, binding);
        Ok(self)
    }

    /// Register `kind`'s route without binding a page to it.
    pub fn route(mut self, kind: PageKind) -> Result<Self, RouteError> {
        self.router.add_route(kind.route(), kind)?;
        Ok(self)
    }

    pub fn build(mut self) -> Storefront {
        self.router.add_catch_all();
        Storefront {
            router: self.router,
            pages: self.pages,
        }
    }
}

/// The SSR entry point. Routes and bindings are fixed at construction.
pub struct Storefront {
    router: Router<PageKind>,
    pages: HashMap<PageKind, PageBinding>,
}

impl Storefront {
    /// Storefront serving the home and product detail pages from `source`.
    pub fn new(source: Arc<dyn ProductSource>, base_path: &str) -> Result<Self, RouteError> {
        let home = PageBinding::new(Arc::new(HomeLoader::new(source.clone())), Arc::new(HomeRenderer));
        let detail = PageBinding::new(Arc::new(DetailLoader::new(source)), Arc::new(DetailRenderer));

        Ok(StorefrontBuilder::new(base_path)
            .page(PageKind::Home, home)?
            .page(PageKind::ProductDetail, detail)?
            .build())
    }

    pub fn builder(base_path: &str) -> StorefrontBuilder {
        StorefrontBuilder::new(base_path)
    }

    pub fn base_path(&self) -> &str {
        self.router.base_path()
    }

    /// The route table in match order.
    pub fn routes(&self) -> Vec<RouteEntry<'_>> {
        self.router
            .routes()
            .iter()
            .map(|route| RouteEntry {
                pattern: route.pattern.as_str(),
                page: route.handler,
                bound: route
                    .handler
                    .is_some_and(|kind| self.pages.contains_key(&kind)),
            })
            .collect()
    }

    /// Render a request.
    ///
    /// `query` wins when non-empty; otherwise the query string in `url` is
    /// parsed.
    pub async fn render(&self, url: &str, query: &QueryParams) -> RenderResult {
        let parsed;
        let query = if query.is_empty() {
            parsed = parse_query(url);
            &parsed
        } else {
            query
        };

        let matched = self.router.match_path(url);
        tracing::debug!(
            url,
            route = matched.route.unwrap_or("-"),
            matched = matched.matched,
            "SSR match"
        );

        let Some(kind) = matched.handler.copied() else {
            return RenderResult::not_found();
        };
        let Some(binding) = self.pages.get(&kind) else {
            tracing::warn!(route = kind.route(), "No page bound to route");
            return RenderResult::not_found();
        };

        tracing::info!(url, page = %kind, "Rendering page");
        match binding.run(query, &matched.params).await {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(url, page = %kind, error = %e, "Render failed");
                RenderResult::error(&e.to_string())
            }
        }
    }
}
