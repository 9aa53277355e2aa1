//! Product query parameters.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Items per page when the request does not say otherwise.
pub const DEFAULT_LIMIT: u32 = 20;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Sort by price, low to high.
    #[default]
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by title A-Z.
    NameAsc,
    /// Sort by title Z-A.
    NameDesc,
}

impl SortOption {
    /// All options in display order.
    pub const ALL: [SortOption; 4] = [
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
    ];

    /// Parse a sort key; unknown keys fall back to price ascending.
    pub fn parse(s: &str) -> Self {
        match s {
            "price_desc" => Self::PriceDesc,
            "name_asc" => Self::NameAsc,
            "name_desc" => Self::NameDesc,
            _ => Self::PriceAsc,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PriceAsc => "가격 낮은순",
            Self::PriceDesc => "가격 높은순",
            Self::NameAsc => "이름순",
            Self::NameDesc => "이름 역순",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product listing query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductQuery {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Case-insensitive search over title and brand.
    pub search: String,
    /// Exact-match top-level category filter.
    pub category1: String,
    /// Exact-match second-level category filter.
    pub category2: String,
    /// Sort option.
    pub sort: SortOption,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductQuery {
    /// Create a query for the first page with default settings.
    pub fn new() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
            search: String::new(),
            category1: String::new(),
            category2: String::new(),
            sort: SortOption::default(),
        }
    }

    /// Build a query from flat request parameters.
    ///
    /// `current` takes precedence over `page` unless it is blank. Missing,
    /// non-numeric or zero values for `page`/`limit` fall back to the
    /// defaults.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str).unwrap_or("");

        let non_blank = |key: &str| params.get(key).filter(|v| !v.trim().is_empty());

        let page = non_blank("current")
            .or_else(|| non_blank("page"))
            .and_then(|v| parse_positive(v))
            .unwrap_or(1);
        let limit = params
            .get("limit")
            .and_then(|v| parse_positive(v))
            .unwrap_or(DEFAULT_LIMIT);

        Self {
            page,
            limit,
            search: get("search").to_string(),
            category1: get("category1").to_string(),
            category2: get("category2").to_string(),
            sort: SortOption::parse(get("sort")),
        }
    }

    /// Set the search term.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the top-level category filter.
    pub fn with_category1(mut self, category: impl Into<String>) -> Self {
        self.category1 = category.into();
        self
    }

    /// Set the second-level category filter.
    pub fn with_category2(mut self, category: impl Into<String>) -> Self {
        self.category2 = category.into();
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination. Both values are clamped to at least 1.
    pub fn with_pagination(mut self, page: u32, limit: u32) -> Self {
        self.page = page.max(1);
        self.limit = limit.max(1);
        self
    }

    /// Index of the first item on the current page.
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit as usize
    }
}

fn parse_positive(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|v| *v > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let query = ProductQuery::from_params(&HashMap::new());
        assert_eq!(query, ProductQuery::new());
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort, SortOption::PriceAsc);
    }

    #[test]
    fn test_current_takes_precedence_over_page() {
        let query = ProductQuery::from_params(&params(&[("page", "2"), ("current", "4")]));
        assert_eq!(query.page, 4);

        let query = ProductQuery::from_params(&params(&[("page", "3")]));
        assert_eq!(query.page, 3);
    }

    #[test]
    fn test_blank_current_defers_to_page() {
        let query = ProductQuery::from_params(&params(&[("current", ""), ("page", "3")]));
        assert_eq!(query.page, 3);

        let query = ProductQuery::from_params(&params(&[("current", " "), ("page", "2")]));
        assert_eq!(query.page, 2);
    }

    #[test]
    fn test_invalid_numbers_fall_back() {
        let query = ProductQuery::from_params(&params(&[("page", "abc"), ("limit", "0")]));
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_unknown_sort_defaults_to_price_asc() {
        assert_eq!(SortOption::parse("rating"), SortOption::PriceAsc);
        assert_eq!(SortOption::parse(""), SortOption::PriceAsc);
        assert_eq!(SortOption::parse("name_desc"), SortOption::NameDesc);
    }

    #[test]
    fn test_sort_serializes_as_key() {
        let json = serde_json::to_value(SortOption::PriceDesc).unwrap();
        assert_eq!(json, "price_desc");
        for option in SortOption::ALL {
            assert_eq!(SortOption::parse(option.as_str()), option);
        }
    }

    #[test]
    fn test_offset() {
        let query = ProductQuery::new().with_pagination(3, 10);
        assert_eq!(query.offset(), 20);
    }
}
