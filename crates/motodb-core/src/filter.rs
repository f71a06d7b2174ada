//! Catalog filtering.
//!
//! The visible product list is a pure function of the catalog, a free-text
//! query and a category selector. It is recomputed on every change; the
//! catalog is small enough that no caching is worth its invalidation rules.

use std::fmt;
use std::str::FromStr;

use crate::catalog::{Category, CatalogStore, Product};
use crate::error::MotoError;

/// Category selector of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every category passes.
    #[default]
    All,
    /// Only products of the given category pass.
    Only(Category),
}

impl CategoryFilter {
    pub fn admits(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// Chip options in display order: `All` first, then every category.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::all().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = MotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

/// Current query and category of the list screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl CatalogQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        matches(product, &self.text, self.category)
    }

    pub fn apply<'a>(&self, catalog: &'a CatalogStore) -> Vec<&'a Product> {
        filter(catalog, &self.text, self.category)
    }
}

/// Match predicate of the list screen.
///
/// A product passes when the query is empty or is a case-insensitive
/// substring of its name or series, and the category selector admits it.
pub fn matches(product: &Product, query: &str, category: CategoryFilter) -> bool {
    category.admits(product.category) && matches_text(product, query)
}

fn matches_text(product: &Product, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    product.name.to_lowercase().contains(&needle)
        || product.series.to_lowercase().contains(&needle)
}

/// Returns the products passing [`matches`], in catalog order.
pub fn filter<'a>(
    catalog: &'a CatalogStore,
    query: &str,
    category: CategoryFilter,
) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| matches(product, query, category))
        .collect()
}
