use std::collections::HashSet;

use super::model::Product;
use super::source::CatalogSource;
use crate::error::{MotoError, Result};

/// Immutable, in-memory collection of products.
///
/// Created once at startup and shared read-only (usually behind an `Arc`).
/// Iteration order is the order of the source data; every derived view keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Builds a store, rejecting empty or duplicate product ids.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.trim().is_empty() {
                return Err(MotoError::invalid_data(format!(
                    "product '{}' has an empty id",
                    product.name
                )));
            }
            if !seen.insert(product.id.as_str()) {
                return Err(MotoError::invalid_data(format!(
                    "duplicate product id '{}'",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    /// Loads and validates the full product list from a source.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self> {
        let products = source.load()?;
        let store = Self::new(products)?;
        tracing::info!(
            "[Catalog] Loaded {} products from {}",
            store.len(),
            source.describe()
        );
        Ok(store)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Looks up a product by id, returning `NotFound` when absent.
    pub fn require(&self, id: &str) -> Result<&Product> {
        self.get(id).ok_or_else(|| MotoError::not_found("product", id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl<'a> IntoIterator for &'a CatalogStore {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::product;
    use crate::catalog::Category;

    struct StaticSource(Vec<Product>);

    impl CatalogSource for StaticSource {
        fn load(&self) -> Result<Vec<Product>> {
            Ok(self.0.clone())
        }

        fn describe(&self) -> String {
            "static test data".to_string()
        }
    }

    #[test]
    fn test_new_keeps_source_order() {
        let store = CatalogStore::new(vec![
            product("b", "B", Category::Sport),
            product("a", "A", Category::Scooter),
        ])
        .unwrap();

        let ids: Vec<&str> = store.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = CatalogStore::new(vec![
            product("a", "A", Category::Sport),
            product("a", "A again", Category::Retro),
        ]);
        assert!(result.unwrap_err().is_invalid_data());
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let result = CatalogStore::new(vec![product("  ", "Nameless", Category::Retro)]);
        assert!(result.unwrap_err().is_invalid_data());
    }

    #[test]
    fn test_lookup() {
        let store = CatalogStore::new(vec![product("a", "A", Category::Sport)]).unwrap();
        assert_eq!(store.get("a").map(|p| p.name.as_str()), Some("A"));
        assert!(store.get("z").is_none());
        assert!(store.require("z").unwrap_err().is_not_found());
    }

    #[test]
    fn test_from_source() {
        let source = StaticSource(vec![product("a", "A", Category::Electric)]);
        let store = CatalogStore::from_source(&source).unwrap();
        assert!(store.contains("a"));
        assert!(!store.is_empty());
    }
}
