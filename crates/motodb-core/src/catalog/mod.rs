//! Catalog domain module.
//!
//! - `model`: `Product`, `Specs`, `SpecField`, `Category`
//! - `store`: the immutable `CatalogStore`
//! - `source`: the `CatalogSource` trait implemented by loaders

mod model;
mod source;
mod store;

pub use model::{Category, Product, SpecField, Specs};
pub use source::CatalogSource;
pub use store::CatalogStore;
