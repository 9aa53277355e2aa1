//! Product detail page.

use serde::Deserialize;
use serde_json::Value;

use crate::error::RenderError;
use crate::head::HeadContent;
use crate::loaders::DetailPayload;
use crate::page::{PageContent, Renderer};
use crate::sections::{render_page, render_product_detail, render_related_products};

/// Renders [`DetailPayload`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailRenderer;

impl Renderer for DetailRenderer {
    fn render(&self, data: &Value) -> Result<PageContent, RenderError> {
        let payload = DetailPayload::deserialize(data)?;
        Ok(render_detail_page(&payload))
    }
}

/// Render the detail page.
pub fn render_detail_page(payload: &DetailPayload) -> PageContent {
    let product = &payload.product.product;
    let header_left = r#"<div class="flex items-center space-x-3">
  <button onclick="window.history.back()" class="p-2 text-gray-700 hover:text-gray-900 transition-colors" aria-label="뒤로 가기">&larr;</button>
  <h1 class="text-lg font-bold text-gray-900">상품 상세</h1>
</div>"#;

    let children = format!(
        "{}\n{}",
        render_product_detail(&payload.product),
        render_related_products(&payload.related_products)
    );

    PageContent::new(
        HeadContent::titled(&product.title)
            .with_meta("description", &payload.product.description)
            .render(),
        render_page(header_left, &children),
    )
}
