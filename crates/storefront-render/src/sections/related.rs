//! Related products section.

use storefront_catalog::Product;

use super::{format_price, html_escape, product_href};

/// Render products sharing the current product's category.
pub fn render_related_products(products: &[Product]) -> String {
    if products.is_empty() {
        return String::new();
    }

    let items: String = products.iter().map(render_related_card).collect();

    format!(
        r#"<div class="bg-white rounded-lg shadow-sm" data-section="related">
  <div class="p-4 border-b border-gray-200">
    <h2 class="text-lg font-bold text-gray-900">관련 상품</h2>
    <p class="text-sm text-gray-600">같은 카테고리의 다른 상품들</p>
  </div>
  <div class="p-4">
    <div class="grid grid-cols-2 gap-3 responsive-grid">
      {items}
    </div>
  </div>
</div>"#
    )
}

fn render_related_card(product: &Product) -> String {
    format!(
        r#"<div class="bg-gray-50 rounded-lg p-3 related-product-card" data-product-id="{id}">
  <a href="{href}" data-link>
    <div class="aspect-square bg-white rounded-md overflow-hidden mb-2">
      <img src="{image}" alt="{title}" class="w-full h-full object-cover" loading="lazy">
    </div>
    <h3 class="text-sm font-medium text-gray-900 mb-1 line-clamp-2">{title}</h3>
    <p class="text-sm font-bold text-blue-600">{price}</p>
  </a>
</div>"#,
        id = html_escape(product.product_id.as_str()),
        href = html_escape(&product_href(product.product_id.as_str())),
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        price = format_price(product.price()),
    )
}
