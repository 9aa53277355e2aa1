//! In-memory data service answering product queries.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::category::CategoryTree;
use crate::error::CatalogError;
use crate::product::{Product, ProductDetail};
use crate::random::{DetailRandom, ThreadDetailRandom};
use crate::search::{compare_titles, AppliedFilters, Pagination, ProductList, ProductQuery, SortOption};

/// Asynchronous product data source used by page loaders.
///
/// [`CatalogService`] is the production implementation; tests substitute
/// sources that fail on demand.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Filter, sort and paginate products.
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductList, CatalogError>;

    /// Look up one product and synthesize its detail fields.
    async fn get_product(&self, id: &str) -> Result<ProductDetail, CatalogError>;

    /// Build the category tree.
    async fn list_categories(&self) -> Result<CategoryTree, CatalogError>;
}

/// Query engine over an immutable [`Catalog`].
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
    random: Arc<dyn DetailRandom>,
}

impl CatalogService {
    /// Create a service with production randomness.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            random: Arc::new(ThreadDetailRandom),
        }
    }

    /// Replace the randomness source used for detail synthesis.
    pub fn with_random(mut self, random: Arc<dyn DetailRandom>) -> Self {
        self.random = random;
        self
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Apply search, category filters and sort, without pagination.
    ///
    /// Works on a copy; the catalog itself is never reordered.
    pub fn filter_products(&self, query: &ProductQuery) -> Vec<Product> {
        let needle = query.search.to_lowercase();

        let mut filtered: Vec<Product> = self
            .catalog
            .products()
            .iter()
            .filter(|p| needle.is_empty() || p.matches_search(&needle))
            .filter(|p| query.category1.is_empty() || p.category1 == query.category1)
            .filter(|p| query.category2.is_empty() || p.category2() == Some(query.category2.as_str()))
            .cloned()
            .collect();

        // sort_by is stable: equal keys keep fixture order
        match query.sort {
            SortOption::PriceAsc => filtered.sort_by_key(Product::price),
            SortOption::PriceDesc => filtered.sort_by(|a, b| b.price().cmp(&a.price())),
            SortOption::NameAsc => filtered.sort_by(|a, b| compare_titles(&a.title, &b.title)),
            SortOption::NameDesc => filtered.sort_by(|a, b| compare_titles(&b.title, &a.title)),
        }

        filtered
    }

    /// Filter, sort and slice one page.
    pub fn list(&self, query: &ProductQuery) -> ProductList {
        let filtered = self.filter_products(query);
        let total = filtered.len();

        let products: Vec<Product> = filtered
            .into_iter()
            .skip(query.offset())
            .take(query.limit as usize)
            .collect();

        ProductList {
            products,
            pagination: Pagination::new(query.page, query.limit, total),
            filters: AppliedFilters::from(query),
        }
    }

    /// Exact-match lookup with synthesized detail fields.
    pub fn detail(&self, id: &str) -> Result<ProductDetail, CatalogError> {
        let product = self
            .catalog
            .find(id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))?
            .clone();

        Ok(ProductDetail {
            description: ProductDetail::describe(&product),
            rating: self.random.between(4, 6) as u8,
            review_count: self.random.between(50, 1050),
            stock: self.random.between(10, 110),
            images: ProductDetail::image_variants(&product.image),
            product,
        })
    }

    /// Full scan building the category tree.
    pub fn categories(&self) -> CategoryTree {
        CategoryTree::from_products(self.catalog.products())
    }
}

#[async_trait]
impl ProductSource for CatalogService {
    async fn list_products(&self, query: &ProductQuery) -> Result<ProductList, CatalogError> {
        Ok(self.list(query))
    }

    async fn get_product(&self, id: &str) -> Result<ProductDetail, CatalogError> {
        self.detail(id)
    }

    async fn list_categories(&self) -> Result<CategoryTree, CatalogError> {
        Ok(self.categories())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::random::FixedDetailRandom;
    use crate::test_fixtures::fixture_catalog;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(fixture_catalog()))
            .with_random(Arc::new(FixedDetailRandom::new(0)))
    }

    fn ids(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.product_id.as_str()).collect()
    }

    #[test]
    fn test_default_query_sorts_by_price() {
        let list = service().list(&ProductQuery::new());
        assert_eq!(ids(&list.products), vec!["200", "100", "300", "500", "400", "600"]);
        assert_eq!(list.pagination.total, 6);
        assert_eq!(list.filters.sort, SortOption::PriceAsc);
    }

    #[test]
    fn test_price_sorts_are_stable() {
        let svc = service();

        // 100 and 300 share a price and keep fixture order both ways
        let asc = svc.filter_products(&ProductQuery::new().with_sort(SortOption::PriceAsc));
        let desc = svc.filter_products(&ProductQuery::new().with_sort(SortOption::PriceDesc));
        assert_eq!(ids(&asc), vec!["200", "100", "300", "500", "400", "600"]);
        assert_eq!(ids(&desc), vec!["600", "400", "500", "100", "300", "200"]);

        assert!(asc.windows(2).all(|w| w[0].price() <= w[1].price()));
        assert!(desc.windows(2).all(|w| w[0].price() >= w[1].price()));
    }

    #[test]
    fn test_name_sorts() {
        let svc = service();
        let asc = svc.filter_products(&ProductQuery::new().with_sort(SortOption::NameAsc));
        let titles: Vec<&str> = asc.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["가습기 필터", "나무 도마", "apple peeler", "Banana Cup", "Gift Card", "Zebra Mug"]
        );

        let desc = svc.filter_products(&ProductQuery::new().with_sort(SortOption::NameDesc));
        let reversed: Vec<&str> = desc.iter().rev().map(|p| p.title.as_str()).collect();
        assert_eq!(reversed, titles);
    }

    #[test]
    fn test_search_is_case_insensitive_over_title_and_brand() {
        let svc = service();
        let list = svc.list(&ProductQuery::new().with_search("ACME"));
        assert_eq!(ids(&list.products), vec!["100", "300"]);

        let list = svc.list(&ProductQuery::new().with_search("cup"));
        assert_eq!(ids(&list.products), vec!["300"]);
    }

    #[test]
    fn test_category_filters() {
        let svc = service();
        let list = svc.list(&ProductQuery::new().with_category1("Kitchen"));
        assert_eq!(list.pagination.total, 4);

        let list = svc.list(
            &ProductQuery::new()
                .with_category1("Kitchen")
                .with_category2("Tools"),
        );
        assert_eq!(ids(&list.products), vec!["200", "500"]);
    }

    #[test]
    fn test_total_independent_of_sort_and_page() {
        let svc = service();
        let base = ProductQuery::new().with_category1("Kitchen");
        let expected = svc.list(&base).pagination.total;

        for sort in SortOption::ALL {
            for (page, limit) in [(1, 1), (2, 3), (5, 2), (1, 100)] {
                let query = base.clone().with_sort(sort).with_pagination(page, limit);
                assert_eq!(svc.list(&query).pagination.total, expected);
            }
        }
    }

    #[test]
    fn test_pages_reconstruct_filtered_set() {
        let svc = service();
        for limit in 1..=7 {
            let base = ProductQuery::new().with_sort(SortOption::NameAsc);
            let first = svc.list(&base.clone().with_pagination(1, limit));
            let total_pages = first.pagination.total_pages;

            let mut seen = Vec::new();
            for page in 1..=total_pages {
                let list = svc.list(&base.clone().with_pagination(page, limit));
                assert!(list.len() <= limit as usize);
                assert_eq!(list.pagination.has_next, page < total_pages);
                assert_eq!(list.pagination.has_prev, page > 1);
                seen.extend(list.products.into_iter().map(|p| p.product_id));
            }

            let unique: HashSet<_> = seen.iter().collect();
            assert_eq!(unique.len(), seen.len(), "duplicates at limit {limit}");
            let all: Vec<_> = svc.filter_products(&base).into_iter().map(|p| p.product_id).collect();
            assert_eq!(seen, all, "gap at limit {limit}");
        }
    }

    #[test]
    fn test_page_past_end_is_empty() {
        let list = service().list(&ProductQuery::new().with_pagination(9, 20));
        assert!(list.is_empty());
        assert_eq!(list.pagination.total, 6);
        assert!(!list.pagination.has_next);
        assert!(list.pagination.has_prev);
    }

    #[test]
    fn test_filtering_does_not_mutate_catalog() {
        let svc = service();
        let before: Vec<_> = svc.catalog().product_ids();
        let _ = svc.list(&ProductQuery::new().with_sort(SortOption::NameDesc));
        assert_eq!(svc.catalog().product_ids(), before);
    }

    #[test]
    fn test_detail_synthesizes_fields() {
        let detail = service().detail("400").unwrap();
        assert_eq!(detail.product.product_id.as_str(), "400");
        assert_eq!(detail.rating, 4);
        assert_eq!(detail.review_count, 50);
        assert_eq!(detail.stock, 10);
        assert_eq!(detail.images.len(), 3);
        assert!(detail.description.starts_with("가습기 필터"));
    }

    #[test]
    fn test_detail_ranges_with_thread_random() {
        let svc = CatalogService::new(Arc::new(fixture_catalog()));
        for _ in 0..50 {
            let detail = svc.detail("100").unwrap();
            assert!((4..=5).contains(&detail.rating));
            assert!((50..1050).contains(&detail.review_count));
            assert!((10..110).contains(&detail.stock));
        }
    }

    #[test]
    fn test_unknown_product_not_found() {
        let err = service().detail("nope").unwrap_err();
        assert!(matches!(err, CatalogError::ProductNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_product_source_impl() {
        let svc = service();
        let source: &dyn ProductSource = &svc;

        let categories = source.list_categories().await.unwrap();
        assert_eq!(categories.len(), 3);

        let list = source.list_products(&ProductQuery::new()).await.unwrap();
        assert_eq!(list.len(), 6);

        assert!(source.get_product("missing").await.is_err());
    }
}
