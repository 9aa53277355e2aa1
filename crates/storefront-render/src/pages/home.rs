//! Product listing page.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RenderError;
use crate::head::HeadContent;
use crate::loaders::HomePayload;
use crate::page::{PageContent, Renderer};
use crate::sections::{render_page, render_product_grid, render_search_bar, site_title};

/// Renders [`HomePayload`].
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeRenderer;

impl Renderer for HomeRenderer {
    fn render(&self, data: &Value) -> Result<PageContent, RenderError> {
        let payload = HomePayload::deserialize(data)?;
        Ok(render_home_page(&payload))
    }
}

/// Render the listing page.
pub fn render_home_page(payload: &HomePayload) -> PageContent {
    let children = format!(
        "{}\n{}",
        render_search_bar(&payload.filters, payload.pagination.limit, &payload.categories),
        render_product_grid(&payload.products, &payload.pagination, &payload.filters)
    );

    PageContent::new(
        HeadContent::titled("메인페이지").render(),
        render_page(&site_title(), &children),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_renders_payload() {
        let data = json!({
            "products": [{
                "productId": "1", "title": "Zebra Mug", "image": "z.jpg",
                "lprice": "1200", "category1": "Kitchen", "category2": "Cups"
            }],
            "categories": {"Kitchen": {"Cups": {}}},
            "totalCount": 1,
            "pagination": {"page": 1, "limit": 20, "total": 1, "totalPages": 1, "hasNext": false, "hasPrev": false},
            "filters": {"search": "", "category1": "", "category2": "", "sort": "price_asc"}
        });

        let page = HomeRenderer.render(&data).unwrap();
        assert_eq!(page.head, "<title>메인페이지 | 쇼핑몰</title>");
        assert!(page.html.contains("Zebra Mug"));
        assert!(page.html.contains(r#"data-category1="Kitchen""#));
    }

    #[test]
    fn test_wrong_shape_is_error() {
        let err = HomeRenderer.render(&json!({"product": {}})).unwrap_err();
        assert!(matches!(err, RenderError::Payload(_)));
    }
}
