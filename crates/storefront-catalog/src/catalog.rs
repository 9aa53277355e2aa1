//! The fixed product collection backing the data service.

use std::collections::HashSet;
use std::path::Path;

use crate::error::CatalogError;
use crate::product::{Product, ProductId};

/// Immutable product collection, loaded once and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from products, rejecting duplicate identifiers.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.product_id.as_str()) {
                return Err(CatalogError::DuplicateProduct(
                    product.product_id.to_string(),
                ));
            }
        }
        Ok(Self { products })
    }

    /// Parse a catalog from fixture JSON (an array of products).
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    /// Load a catalog from a fixture file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Fixture {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), products = catalog.len(), "Loaded catalog fixture");
        Ok(catalog)
    }

    /// All products in fixture order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Product identifiers in fixture order.
    pub fn product_ids(&self) -> Vec<ProductId> {
        self.products.iter().map(|p| p.product_id.clone()).collect()
    }

    /// Exact-match lookup by identifier.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id.as_str() == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
