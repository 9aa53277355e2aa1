//! Product detail loader.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use storefront_catalog::{Product, ProductDetail, ProductQuery, ProductSource};
use storefront_router::{QueryParams, RouteParams};

use crate::error::RenderError;
use crate::page::Loader;

/// How many same-category products to fetch for the related list.
pub const RELATED_LIMIT: u32 = 20;

/// Payload for the product detail page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailPayload {
    pub product: ProductDetail,
    pub related_products: Vec<Product>,
    pub product_id: String,
}

/// Loads a product and the products sharing its second-level category.
#[derive(Clone)]
pub struct DetailLoader {
    source: Arc<dyn ProductSource>,
}

impl DetailLoader {
    pub fn new(source: Arc<dyn ProductSource>) -> Self {
        Self { source }
    }

    /// Load the detail payload for `params.id`.
    ///
    /// The product lookup must succeed. The related fetch is best effort:
    /// its failure is logged and yields an empty list.
    pub async fn load_payload(&self, params: &RouteParams) -> Result<DetailPayload, RenderError> {
        let product_id = params
            .get("id")
            .filter(|id| !id.is_empty())
            .ok_or_else(|| RenderError::missing("id"))?;

        let product = self.source.get_product(product_id).await?;
        let related_products = match product.product.category2() {
            Some(category2) => self.related(product_id, category2).await,
            None => Vec::new(),
        };

        Ok(DetailPayload {
            product,
            related_products,
            product_id: product_id.clone(),
        })
    }

    async fn related(&self, product_id: &str, category2: &str) -> Vec<Product> {
        let query = ProductQuery::new()
            .with_category2(category2)
            .with_pagination(1, RELATED_LIMIT);

        match self.source.list_products(&query).await {
            Ok(list) => list
                .products
                .into_iter()
                .filter(|p| p.product_id.as_str() != product_id)
                .collect(),
            Err(e) => {
                tracing::warn!(
                    product_id,
                    category2,
                    error = %e,
                    "Related products unavailable"
                );
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl Loader for DetailLoader {
    async fn load(&self, _query: &QueryParams, params: &RouteParams) -> Result<Value, RenderError> {
        let payload = self.load_payload(params).await?;
        Ok(serde_json::to_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{params, source, FlakySource};
    use storefront_catalog::CatalogError;

    #[tokio::test]
    async fn test_related_excludes_current() {
        let loader = DetailLoader::new(source());
        let payload = loader.load_payload(&params(&[("id", "3")])).await.unwrap();

        assert_eq!(payload.product_id, "3");
        assert_eq!(payload.product.product.product_id.as_str(), "3");
        assert!(!payload.related_products.is_empty());
        assert!(payload
            .related_products
            .iter()
            .all(|p| p.product_id.as_str() != "3"));
        assert!(payload
            .related_products
            .iter()
            .all(|p| p.category2() == payload.product.product.category2()));
    }

    #[tokio::test]
    async fn test_no_category2_no_related() {
        let loader = DetailLoader::new(source());
        let payload = loader.load_payload(&params(&[("id", "25")])).await.unwrap();
        assert!(payload.related_products.is_empty());
    }

    #[tokio::test]
    async fn test_missing_id() {
        let loader = DetailLoader::new(Arc::new(FlakySource::new().fail_get()));
        let err = loader.load_payload(&RouteParams::new()).await.unwrap_err();
        assert!(matches!(err, RenderError::MissingParameter(ref name) if name == "id"));

        let err = loader.load_payload(&params(&[("id", "")])).await.unwrap_err();
        assert!(matches!(err, RenderError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_unknown_product_propagates() {
        let loader = DetailLoader::new(source());
        let err = loader.load_payload(&params(&[("id", "nope")])).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_related_failure_swallowed() {
        let loader = DetailLoader::new(Arc::new(FlakySource::new().fail_list()));
        let payload = loader.load_payload(&params(&[("id", "3")])).await.unwrap();
        assert!(payload.related_products.is_empty());
    }

    #[tokio::test]
    async fn test_detail_failure_propagates() {
        let loader = DetailLoader::new(Arc::new(FlakySource::new().fail_get()));
        let err = loader.load_payload(&params(&[("id", "3")])).await.unwrap_err();
        assert!(matches!(err, RenderError::Catalog(CatalogError::Unavailable(_))));
    }
}
