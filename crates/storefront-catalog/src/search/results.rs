//! Listing results and pagination.

use serde::{Deserialize, Serialize};

use crate::product::Product;
use crate::search::{ProductQuery, SortOption};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub limit: u32,
    /// Number of items matching the filters.
    pub total: usize,
    /// Total number of pages, `ceil(total / limit)`.
    pub total_pages: u32,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: u32, limit: u32, total: usize) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit as usize) as u32;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: (page as usize) * (limit as usize) < total,
            has_prev: page > 1,
        }
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: u32) -> Vec<u32> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            ((self.page.max(1) - 1) as usize * self.limit as usize + 1).min(self.total)
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        (self.page as usize * self.limit as usize).min(self.total)
    }
}

/// The filters a listing was computed with, echoed back to the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppliedFilters {
    pub search: String,
    pub category1: String,
    pub category2: String,
    pub sort: SortOption,
}

impl From<&ProductQuery> for AppliedFilters {
    fn from(query: &ProductQuery) -> Self {
        Self {
            search: query.search.clone(),
            category1: query.category1.clone(),
            category2: query.category2.clone(),
            sort: query.sort,
        }
    }
}

/// One page of a product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    /// Products on this page.
    pub products: Vec<Product>,
    /// Pagination info.
    pub pagination: Pagination,
    /// Filters used.
    pub filters: AppliedFilters,
}

impl ProductList {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.products.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_exact_multiple() {
        let p = Pagination::new(2, 10, 20);
        assert_eq!(p.total_pages, 2);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 20, 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next);
        assert!(!p.has_prev);
        assert_eq!(p.start_item(), 0);
    }

    #[test]
    fn test_pagination_page_numbers() {
        let p = Pagination::new(5, 10, 100);
        assert_eq!(p.page_numbers(5), vec![3, 4, 5, 6, 7]);

        let p = Pagination::new(1, 10, 100);
        assert_eq!(p.page_numbers(5), vec![1, 2, 3, 4, 5]);

        let p = Pagination::new(10, 10, 100);
        assert_eq!(p.page_numbers(5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_pagination_item_range() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.start_item(), 11);
        assert_eq!(p.end_item(), 20);
    }

    #[test]
    fn test_serialized_field_names() {
        let json = serde_json::to_value(Pagination::new(1, 20, 3)).unwrap();
        assert_eq!(json["totalPages"], 1);
        assert_eq!(json["hasNext"], false);
        assert_eq!(json["hasPrev"], false);
    }
}
