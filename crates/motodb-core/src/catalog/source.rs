//! Catalog source trait.
//!
//! Defines the interface for loading the product list from an external,
//! read-only data source.

use super::model::Product;
use crate::error::Result;

/// A read-only source of product records.
///
/// Implementations load the whole list at once; there is no update or write
/// path. Category tags must be validated during deserialization so that no
/// unknown category ever reaches the store.
pub trait CatalogSource {
    /// Loads every product, in the order the source lists them.
    fn load(&self) -> Result<Vec<Product>>;

    /// Short description of where the data comes from, used in logs.
    fn describe(&self) -> String;
}
