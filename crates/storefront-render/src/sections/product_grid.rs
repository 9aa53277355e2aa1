//! Product grid with pagination.

use storefront_catalog::{AppliedFilters, Pagination, Product};

use super::{format_price, html_escape, product_href, query_string};

/// Render the product list section.
///
/// An empty page renders the empty state instead of a grid.
pub fn render_product_grid(products: &[Product], pagination: &Pagination, filters: &AppliedFilters) -> String {
    if products.is_empty() {
        return render_empty_state();
    }

    let cards: String = products.iter().map(render_product_card).collect();
    let footer = if pagination.has_next {
        render_pagination(pagination, filters)
    } else {
        format!(
            r#"{}<div class="text-center py-4 text-sm text-gray-500">모든 상품을 확인했습니다</div>"#,
            render_pagination(pagination, filters)
        )
    };

    format!(
        r#"<div class="mb-6">
  <div class="mb-4 text-sm text-gray-600">
    총 <span class="font-medium text-gray-900">{}개</span>의 상품
    <span class="ml-1 text-gray-500" data-range>({}-{})</span>
  </div>
  <div class="grid grid-cols-2 gap-4 mb-6" id="products-grid">
    {}
  </div>
  {}
</div>"#,
        pagination.total,
        pagination.start_item(),
        pagination.end_item(),
        cards,
        footer
    )
}

/// Render one product card.
pub fn render_product_card(product: &Product) -> String {
    let id = html_escape(product.product_id.as_str());
    let brand = if product.brand.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-xs text-gray-500 mb-2">{}</p>"#,
            html_escape(&product.brand)
        )
    };

    format!(
        r#"<div class="bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden product-card" data-product-id="{id}">
  <a href="{href}" data-link class="block">
    <div class="aspect-square bg-gray-100 overflow-hidden">
      <img src="{image}" alt="{title}" class="w-full h-full object-cover" loading="lazy">
    </div>
    <div class="p-3">
      <h3 class="text-sm font-medium text-gray-900 line-clamp-2 mb-1">{title}</h3>
      {brand}
      <p class="text-lg font-bold text-gray-900">{price}</p>
    </div>
  </a>
  <button class="w-full bg-blue-600 text-white text-sm py-2 px-3 rounded-md hover:bg-blue-700 transition-colors add-to-cart-btn" data-product-id="{id}">
    장바구니 담기
  </button>
</div>"#,
        id = id,
        href = html_escape(&product_href(product.product_id.as_str())),
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        brand = brand,
        price = format_price(product.price()),
    )
}

/// Page links that keep the active filters. Empty for a single page.
pub fn render_pagination(pagination: &Pagination, filters: &AppliedFilters) -> String {
    if pagination.total_pages <= 1 {
        return String::new();
    }

    let limit = pagination.limit.to_string();
    let link = |page: u32| {
        let page = page.to_string();
        html_escape(&format!(
            "/{}",
            query_string(&[
                ("search", filters.search.as_str()),
                ("category1", filters.category1.as_str()),
                ("category2", filters.category2.as_str()),
                ("sort", filters.sort.as_str()),
                ("limit", limit.as_str()),
                ("current", page.as_str()),
            ])
        ))
    };

    let pages: String = pagination
        .page_numbers(5)
        .into_iter()
        .map(|page| {
            if page == pagination.page {
                format!(r#"<span class="px-3 py-1 rounded bg-blue-600 text-white" aria-current="page">{page}</span>"#)
            } else {
                format!(
                    r#"<a href="{}" data-link class="px-3 py-1 rounded text-gray-700 hover:bg-gray-100">{page}</a>"#,
                    link(page)
                )
            }
        })
        .collect();

    let prev = if pagination.has_prev {
        format!(r#"<a href="{}" data-link class="px-3 py-1 text-gray-700" aria-label="이전 페이지">&larr;</a>"#, link(pagination.page - 1))
    } else {
        String::new()
    };
    let next = if pagination.has_next {
        format!(r#"<a href="{}" data-link class="px-3 py-1 text-gray-700" aria-label="다음 페이지">&rarr;</a>"#, link(pagination.page + 1))
    } else {
        String::new()
    };

    format!(r#"<nav class="flex justify-center items-center gap-1 py-4" aria-label="페이지">{prev}{pages}{next}</nav>"#)
}

fn render_empty_state() -> String {
    r#"<div class="mb-6">
  <div class="text-center py-12 text-gray-500" data-empty="products">
    <p class="text-lg mb-2">상품을 찾을 수 없습니다</p>
    <p class="text-sm">다른 검색어나 카테고리를 선택해보세요.</p>
  </div>
</div>"#
        .to_string()
}
