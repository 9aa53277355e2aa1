//! Product and product detail types.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Catalog product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// A product as stored in the catalog fixture.
///
/// Prices are kept as the numeric strings the fixture carries; use
/// [`Product::price`] for comparisons.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub product_id: ProductId,
    /// Display title.
    pub title: String,
    /// Outbound shop link.
    #[serde(default)]
    pub link: String,
    /// Primary image URL.
    pub image: String,
    /// Lowest price, numeric string.
    pub lprice: String,
    /// Highest price, numeric string (often empty).
    #[serde(default)]
    pub hprice: String,
    /// Seller name.
    #[serde(default)]
    pub mall_name: String,
    /// Upstream product type code.
    #[serde(default)]
    pub product_type: String,
    /// Brand name (may be empty).
    #[serde(default)]
    pub brand: String,
    /// Manufacturer name (may be empty).
    #[serde(default)]
    pub maker: String,
    /// Top-level category.
    pub category1: String,
    /// Second-level category, `None` when the fixture leaves it blank.
    /// Serialized back as `""` so the payload keeps the fixture's shape.
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub category2: Option<String>,
    #[serde(default)]
    pub category3: String,
    #[serde(default)]
    pub category4: String,
}

impl Product {
    /// Lowest price parsed as an integer.
    pub fn price(&self) -> i64 {
        parse_price(&self.lprice)
    }

    /// Second-level category, if any.
    pub fn category2(&self) -> Option<&str> {
        self.category2.as_deref()
    }

    /// Case-insensitive substring match over title or brand.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_search(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.brand.to_lowercase().contains(needle)
    }
}

/// A product with the detail-only fields synthesized at lookup time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    /// Generated marketing description.
    pub description: String,
    /// Rating, 4 or 5.
    pub rating: u8,
    /// Review count, 50..1050.
    pub review_count: u32,
    /// Units in stock, 10..110.
    pub stock: u32,
    /// Primary image followed by two variants.
    pub images: Vec<String>,
}

impl ProductDetail {
    /// Image variant URLs derived from the primary image.
    pub fn image_variants(image: &str) -> Vec<String> {
        vec![
            image.to_string(),
            image.replacen(".jpg", "_2.jpg", 1),
            image.replacen(".jpg", "_3.jpg", 1),
        ]
    }

    /// Description text for a product.
    pub fn describe(product: &Product) -> String {
        format!(
            "{}에 대한 상세 설명입니다. {} 브랜드의 우수한 품질을 자랑하는 상품으로, 고객 만족도가 높은 제품입니다.",
            product.title, product.brand
        )
    }
}

/// Parse a price string the way the catalog compares prices: leading
/// integer digits, anything unparseable is 0.
pub fn parse_price(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map(|v| sign * v).unwrap_or(0)
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12300"), 12300);
        assert_eq!(parse_price(" 450원"), 450);
        assert_eq!(parse_price("-20"), -20);
        assert_eq!(parse_price(""), 0);
        assert_eq!(parse_price("abc"), 0);
    }

    #[test]
    fn test_blank_category2_is_none() {
        let product: Product = serde_json::from_str(
            r#"{"productId": "1", "title": "T", "image": "a.jpg", "lprice": "10",
                "category1": "A", "category2": ""}"#,
        )
        .unwrap();
        assert_eq!(product.category2(), None);

        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["category2"], "");
        assert_eq!(json["productId"], "1");

        let back: Product = serde_json::from_value(json).unwrap();
        assert_eq!(back.category2(), None);
    }

    #[test]
    fn test_search_matches_title_or_brand() {
        let product: Product = serde_json::from_str(
            r#"{"productId": "1", "title": "Steel Kettle", "image": "a.jpg", "lprice": "10",
                "brand": "Hario", "category1": "A"}"#,
        )
        .unwrap();
        assert!(product.matches_search("kettle"));
        assert!(product.matches_search("hario"));
        assert!(!product.matches_search("mug"));
    }

    #[test]
    fn test_image_variants() {
        let images = ProductDetail::image_variants("https://img.example/p/1.jpg");
        assert_eq!(
            images,
            vec![
                "https://img.example/p/1.jpg",
                "https://img.example/p/1_2.jpg",
                "https://img.example/p/1_3.jpg",
            ]
        );
    }

    #[test]
    fn test_detail_flattens_product() {
        let product: Product = serde_json::from_str(
            r#"{"productId": "7", "title": "T", "image": "a.jpg", "lprice": "10",
                "category1": "A", "category2": "B"}"#,
        )
        .unwrap();
        let detail = ProductDetail {
            description: ProductDetail::describe(&product),
            images: ProductDetail::image_variants(&product.image),
            product,
            rating: 4,
            review_count: 120,
            stock: 30,
        };

        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["productId"], "7");
        assert_eq!(json["reviewCount"], 120);

        let back: ProductDetail = serde_json::from_value(json).unwrap();
        assert_eq!(back, detail);
    }
}
