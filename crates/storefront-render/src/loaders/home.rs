//! Home page loader.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_catalog::{AppliedFilters, CategoryTree, Pagination, Product, ProductQuery, ProductSource};
use storefront_router::{QueryParams, RouteParams};

use crate::error::RenderError;
use crate::page::Loader;

/// Payload for the product listing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomePayload {
    pub products: Vec<Product>,
    pub categories: CategoryTree,
    pub total_count: usize,
    pub pagination: Pagination,
    pub filters: AppliedFilters,
}

/// Loads one listing page plus the category tree.
#[derive(Clone)]
pub struct HomeLoader {
    source: Arc<dyn ProductSource>,
}

impl HomeLoader {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// Fetch products and categories concurrently. Either failure fails
    /// the load.
    pub async fn load_payload(&self, query: &QueryParams) -> Result<HomePayload, RenderError> {
        let query = ProductQuery::from_params(query);
        tracing::debug!(
            page = query.page,
            limit = query.limit,
            sort = %query.sort,
            "Loading home page data"
        );

        let (list, categories) = futures::try_join!(
            self.source.list_products(&query),
            self.source.list_categories()
        )?;

        Ok(HomePayload {
            total_count: list.pagination.total,
            products: list.products,
            categories,
            pagination: list.pagination,
            filters: list.filters,
        })
    }
}

#[async_trait]
impl Loader for HomeLoader {
    async fn load(&self, query: &QueryParams, _params: &RouteParams) -> Result<Value, RenderError> {
        let payload = self.load_payload(query).await?;
        Ok(serde_json::to_value(payload)?)
    }
}
