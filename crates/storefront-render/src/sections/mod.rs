//! Markup sections shared by the page renderers.
//!
//! Every section is a pure function from typed data to an HTML string.
//! Interpolated text always goes through [`html_escape`].

mod category_nav;
mod layout;
mod product_detail;
mod product_grid;
mod related;
mod search_bar;

pub use category_nav::{render_breadcrumb, render_category_nav};
pub use layout::{render_page, render_status_page, site_title};
pub use product_detail::{render_product_detail, render_stars};
pub use product_grid::{render_pagination, render_product_card, render_product_grid};
pub use related::render_related_products;
pub use search_bar::{render_search_bar, LIMIT_OPTIONS};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Unreserved characters stay literal in generated links.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Escape text for HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format an integer price with thousands separators, e.g. `12,900원`.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if price < 0 { "-" } else { "" };
    format!("{sign}{grouped}원")
}

/// Build a `?k=v&...` query string, skipping empty values.
pub fn query_string(pairs: &[(&str, &str)]) -> String {
    let encoded: Vec<String> = pairs
        .iter()
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| {
            format!(
                "{}={}",
                utf8_percent_encode(k, COMPONENT),
                utf8_percent_encode(v, COMPONENT)
            )
        })
        .collect();

    if encoded.is_empty() {
        String::new()
    } else {
        format!("?{}", encoded.join("&"))
    }
}

/// Root-relative link to a product page.
pub fn product_href(product_id: &str) -> String {
    format!("/product/{}/", utf8_percent_encode(product_id, COMPONENT))
}
