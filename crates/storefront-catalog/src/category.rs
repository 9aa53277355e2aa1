//! Two-level category tree derived from the catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Leaf marker; serializes as an empty object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryLeaf {}

/// Mapping from `category1` to the `category2` values seen under it.
///
/// Serializes as nested objects, `{"생활/건강": {"생활용품": {}}}`, which is
/// the shape the client-side category filter expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTree(BTreeMap<String, BTreeMap<String, CategoryLeaf>>);

impl CategoryTree {
    /// Build the tree with a full scan over `products`.
    pub fn from_products<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        let mut tree: BTreeMap<String, BTreeMap<String, CategoryLeaf>> = BTreeMap::new();
        for product in products {
            let children = tree.entry(product.category1.clone()).or_default();
            if let Some(cat2) = product.category2() {
                children.entry(cat2.to_string()).or_default();
            }
        }
        Self(tree)
    }

    /// Top-level category names, sorted.
    pub fn top_level(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Second-level names under `category1`, sorted.
    pub fn children(&self, category1: &str) -> Vec<&str> {
        self.0
            .get(category1)
            .map(|c| c.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Check whether a top-level category exists.
    pub fn contains(&self, category1: &str) -> bool {
        self.0.contains_key(category1)
    }

    /// Number of top-level categories.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
