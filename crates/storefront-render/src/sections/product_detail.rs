//! Product detail section.

use storefront_catalog::ProductDetail;

use super::{format_price, html_escape, render_breadcrumb};

/// Render the main detail block: breadcrumb, gallery, info, description.
pub fn render_product_detail(detail: &ProductDetail) -> String {
    let product = &detail.product;

    let thumbnails: String = detail
        .images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            format!(
                r#"<img src="{}" alt="{} {}" class="w-16 h-16 object-cover rounded border border-gray-200" loading="lazy">"#,
                html_escape(image),
                html_escape(&product.title),
                i + 1
            )
        })
        .collect();

    let brand = if product.brand.is_empty() {
        String::new()
    } else {
        format!(
            r#"<p class="text-sm text-gray-600 mb-1">{}</p>"#,
            html_escape(&product.brand)
        )
    };

    format!(
        r#"{breadcrumb}
<div class="bg-white rounded-lg shadow-sm mb-6" data-product-id="{id}">
  <div class="p-4">
    <div class="aspect-square bg-gray-100 rounded-lg overflow-hidden mb-4">
      <img src="{image}" alt="{title}" class="w-full h-full object-cover product-detail-image">
    </div>
    <div class="flex gap-2 mb-4">{thumbnails}</div>
    <div>
      {brand}
      <h1 class="text-xl font-bold text-gray-900 mb-3">{title}</h1>
      <div class="flex items-center mb-3">
        {stars}
        <span class="ml-2 text-sm text-gray-600">{rating}.0 ({reviews}개 리뷰)</span>
      </div>
      <div class="mb-3">
        <span class="text-2xl font-bold text-blue-600">{price}</span>
      </div>
      <div class="text-sm text-gray-600 mb-4">재고 {stock}개</div>
      <div class="text-sm text-gray-700 leading-relaxed mb-6">{description}</div>
    </div>
  </div>
  <div class="border-t border-gray-200 p-4">
    <div class="flex items-center justify-between mb-4">
      <span class="text-sm font-medium text-gray-900">수량</span>
      <input type="number" id="quantity-input" value="1" min="1" max="{stock}" class="w-16 h-8 text-center text-sm border border-gray-300">
    </div>
    <button id="add-to-cart-btn" data-product-id="{id}" class="w-full bg-blue-600 text-white py-3 px-4 rounded-md hover:bg-blue-700 transition-colors font-medium">
      장바구니 담기
    </button>
  </div>
</div>
<div class="mb-6">
  <a href="/" data-link class="block w-full text-center bg-gray-100 text-gray-700 py-3 px-4 rounded-md hover:bg-gray-200 transition-colors go-to-product-list">상품 목록으로 돌아가기</a>
</div>"#,
        breadcrumb = render_breadcrumb(&product.category1, product.category2()),
        id = html_escape(product.product_id.as_str()),
        image = html_escape(&product.image),
        title = html_escape(&product.title),
        thumbnails = thumbnails,
        brand = brand,
        stars = render_stars(detail.rating),
        rating = detail.rating,
        reviews = detail.review_count,
        price = format_price(product.price()),
        stock = detail.stock,
        description = html_escape(&detail.description),
    )
}

/// Five stars, `rating` of them filled.
pub fn render_stars(rating: u8) -> String {
    let filled = rating.min(5);
    let mut html = String::from(r#"<span class="stars">"#);

    for _ in 0..filled {
        html.push_str(r#"<span class="star full text-yellow-400">★</span>"#);
    }
    for _ in filled..5 {
        html.push_str(r#"<span class="star empty text-gray-300">☆</span>"#);
    }

    html.push_str("</span>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Product;

    fn detail() -> ProductDetail {
        let product: Product = serde_json::from_value(serde_json::json!({
            "productId": "85067212996",
            "title": "PVC 투명 젤리 쇼핑백",
            "image": "https://shopping-phinf.pstatic.net/main_8506721/85067212996.jpg",
            "lprice": "220",
            "brand": "",
            "category1": "생활/건강",
            "category2": "생활용품"
        }))
        .unwrap();

        ProductDetail {
            description: ProductDetail::describe(&product),
            images: ProductDetail::image_variants(&product.image),
            product,
            rating: 4,
            review_count: 321,
            stock: 42,
        }
    }

    #[test]
    fn test_stars() {
        let html = render_stars(4);
        assert_eq!(html.matches("star full").count(), 4);
        assert_eq!(html.matches("star empty").count(), 1);
    }

    #[test]
    fn test_detail_block() {
        let html = render_product_detail(&detail());

        assert!(html.contains("<h1 class=\"text-xl font-bold text-gray-900 mb-3\">PVC 투명 젤리 쇼핑백</h1>"));
        assert!(html.contains("220원"));
        assert!(html.contains("4.0 (321개 리뷰)"));
        assert!(html.contains("재고 42개"));
        assert!(html.contains("85067212996_3.jpg"));
        assert!(html.contains(">생활용품</button>"));
    }
}
