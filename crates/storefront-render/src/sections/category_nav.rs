//! Category navigation and breadcrumbs.

use storefront_catalog::CategoryTree;

use super::html_escape;

/// Category filter: breadcrumb of the current selection, then buttons for
/// the next level down.
///
/// With no `category1` the buttons list top-level categories; with one
/// they list its children.
pub fn render_category_nav(categories: &CategoryTree, category1: &str, category2: &str) -> String {
    let mut crumbs = vec![r#"<button data-breadcrumb="reset" class="text-xs hover:text-blue-800 hover:underline">전체</button>"#.to_string()];
    if !category1.is_empty() {
        crumbs.push(format!(
            r#"<button data-breadcrumb="category1" data-category1="{0}" class="text-xs hover:text-blue-800 hover:underline">{0}</button>"#,
            html_escape(category1)
        ));
    }
    if !category2.is_empty() {
        crumbs.push(format!(
            r#"<span class="text-xs text-gray-600 cursor-default">{}</span>"#,
            html_escape(category2)
        ));
    }

    let buttons: String = if category1.is_empty() {
        categories
            .top_level()
            .map(|name| {
                format!(
                    r#"<button data-category1="{0}" class="category1-filter-btn text-left px-3 py-2 text-sm rounded-md border transition-colors bg-white border-gray-300 text-gray-700 hover:bg-gray-50">{0}</button>"#,
                    html_escape(name)
                )
            })
            .collect()
    } else {
        categories
            .children(category1)
            .into_iter()
            .map(|name| {
                let state = if name == category2 {
                    "bg-blue-100 border-blue-300 text-blue-800"
                } else {
                    "bg-white border-gray-300 text-gray-700 hover:bg-gray-50"
                };
                format!(
                    r#"<button data-category1="{0}" data-category2="{1}" class="category2-filter-btn text-left px-3 py-2 text-sm rounded-md border transition-colors {2}">{1}</button>"#,
                    html_escape(category1),
                    html_escape(name),
                    state
                )
            })
            .collect()
    };

    let buttons = if buttons.is_empty() {
        r#"<div class="text-sm text-gray-500 italic">카테고리가 없습니다</div>"#.to_string()
    } else {
        buttons
    };

    format!(
        r#"<div class="space-y-2">
  <div class="flex items-center gap-2">
    <label class="text-sm text-gray-600">카테고리:</label>
    {}
  </div>
  <div class="flex flex-wrap gap-2">
    {}
  </div>
</div>"#,
        crumbs.join(r#"<span class="text-xs text-gray-500">&gt;</span>"#),
        buttons
    )
}

/// Breadcrumb trail for a product page: 홈 > category1 > category2.
pub fn render_breadcrumb(category1: &str, category2: Option<&str>) -> String {
    let mut html = String::from(
        r#"<nav class="mb-4"><div class="flex items-center space-x-2 text-sm text-gray-600"><a href="/" data-link class="hover:text-blue-600 transition-colors">홈</a>"#,
    );

    if !category1.is_empty() {
        html.push_str(&format!(
            r#"<span>&gt;</span><button class="breadcrumb-link" data-category1="{0}">{0}</button>"#,
            html_escape(category1)
        ));
    }
    if let Some(category2) = category2 {
        html.push_str(&format!(
            r#"<span>&gt;</span><button class="breadcrumb-link" data-category1="{}" data-category2="{}">{}</button>"#,
            html_escape(category1),
            html_escape(category2),
            html_escape(category2)
        ));
    }

    html.push_str("</div></nav>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_catalog::Product;

    fn tree() -> CategoryTree {
        let products: Vec<Product> = serde_json::from_str(
            r#"[
                {"productId": "1", "title": "a", "image": "", "lprice": "1", "category1": "생활/건강", "category2": "주방용품"},
                {"productId": "2", "title": "b", "image": "", "lprice": "1", "category1": "생활/건강", "category2": "생활용품"},
                {"productId": "3", "title": "c", "image": "", "lprice": "1", "category1": "디지털/가전", "category2": "태블릿PC"}
            ]"#,
        )
        .unwrap();
        CategoryTree::from_products(&products)
    }

    #[test]
    fn test_top_level_buttons() {
        let html = render_category_nav(&tree(), "", "");
        assert!(html.contains(r#"data-category1="생활/건강""#));
        assert!(html.contains(r#"data-category1="디지털/가전""#));
        assert!(!html.contains("category2-filter-btn"));
    }

    #[test]
    fn test_children_buttons_mark_selection() {
        let html = render_category_nav(&tree(), "생활/건강", "생활용품");
        assert!(html.contains(r#"data-category2="주방용품""#));
        assert!(html.contains("bg-blue-100 border-blue-300 text-blue-800\">생활용품</button>"));
        assert!(!html.contains("태블릿PC"));
    }

    #[test]
    fn test_empty_tree() {
        let html = render_category_nav(&CategoryTree::default(), "", "");
        assert!(html.contains("카테고리가 없습니다"));
    }

    #[test]
    fn test_breadcrumb() {
        let html = render_breadcrumb("생활/건강", Some("<b>"));
        assert!(html.contains(">생활/건강</button>"));
        assert!(html.contains("&lt;b&gt;"));

        let html = render_breadcrumb("Gifts", None);
        assert!(!html.contains("data-category2"));
    }
}
