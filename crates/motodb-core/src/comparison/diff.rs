use std::collections::HashSet;

use super::selection::{MAX_SELECTION, Selection};
use crate::catalog::{CatalogStore, Product, SpecField};

/// Spec fields shown in the comparison table, in row order.
///
/// Engine type, fuel system, transmission and braking system stay on the
/// detail screen only.
pub const COMPARED_FIELDS: [SpecField; 10] = [
    SpecField::Displacement,
    SpecField::MaxPower,
    SpecField::MaxTorque,
    SpecField::CoolingSystem,
    SpecField::FuelCapacity,
    SpecField::SeatHeight,
    SpecField::CurbWeight,
    SpecField::AbsTcs,
    SpecField::TireFront,
    SpecField::TireRear,
];

/// One row of the comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecRow<'a> {
    pub field: SpecField,
    /// Display values, aligned with the compared products.
    pub values: Vec<&'a str>,
    /// True when the products do not all share the same display value.
    pub is_divergent: bool,
}

impl SpecRow<'_> {
    pub fn label(&self) -> &'static str {
        self.field.label()
    }
}

/// Builds one row per [`COMPARED_FIELDS`] entry.
///
/// Values are compared as exact strings: `"125cc"` and `"125 cc"` diverge.
/// Zero or one product never yields a divergent row.
pub fn diff<'a>(products: &[&'a Product]) -> Vec<SpecRow<'a>> {
    COMPARED_FIELDS
        .iter()
        .map(|&field| {
            let values: Vec<&'a str> = products
                .iter()
                .map(|&product| product.specs.get(field))
                .collect();
            let distinct: HashSet<&str> = values.iter().copied().collect();
            SpecRow {
                field,
                is_divergent: distinct.len() > 1,
                values,
            }
        })
        .collect()
}

/// Resolves selected ids to products, in catalog order.
///
/// Ids that no longer resolve are skipped.
pub fn resolve<'a>(catalog: &'a CatalogStore, selection: &Selection) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| selection.contains(&product.id))
        .collect()
}

/// The compare screen's model: selected products plus their diff rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison<'a> {
    pub products: Vec<&'a Product>,
    pub rows: Vec<SpecRow<'a>>,
}

impl<'a> Comparison<'a> {
    pub fn build(catalog: &'a CatalogStore, selection: &Selection) -> Self {
        let products = resolve(catalog, selection);
        let rows = diff(&products);
        Self { products, rows }
    }

    /// No product selected: the screen shows a placeholder instead of a table.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Number of empty columns offered for adding another product.
    pub fn open_slots(&self) -> usize {
        MAX_SELECTION.saturating_sub(self.products.len())
    }

    pub fn divergent_rows(&self) -> impl Iterator<Item = &SpecRow<'a>> {
        self.rows.iter().filter(|row| row.is_divergent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::test_support::{product_with, sample_catalog};

    #[test]
    fn test_two_products_diverge_on_displacement() {
        let a = product_with("a", "A", "A", Category::Scooter, "125cc");
        let b = product_with("b", "B", "B", Category::Sport, "150cc");

        let rows = diff(&[&a, &b]);
        let displacement = rows
            .iter()
            .find(|row| row.field == SpecField::Displacement)
            .unwrap();
        assert!(displacement.is_divergent);
        assert_eq!(displacement.values, vec!["125cc", "150cc"]);

        // all other fixture specs are identical
        assert_eq!(rows.iter().filter(|row| row.is_divergent).count(), 1);
    }

    #[test]
    fn test_rows_follow_compared_fields() {
        let a = product_with("a", "A", "A", Category::Scooter, "125cc");
        let fields: Vec<SpecField> = diff(&[&a]).iter().map(|row| row.field).collect();
        assert_eq!(fields, COMPARED_FIELDS.to_vec());
        assert!(!fields.contains(&SpecField::EngineType));
    }

    #[test]
    fn test_zero_or_one_product_never_diverges() {
        assert!(diff(&[]).iter().all(|row| !row.is_divergent && row.values.is_empty()));

        let a = product_with("a", "A", "A", Category::Scooter, "125cc");
        assert!(diff(&[&a]).iter().all(|row| !row.is_divergent));
    }

    #[test]
    fn test_identical_products_never_diverge() {
        let a = product_with("a", "A", "A", Category::Scooter, "125cc");
        let b = product_with("b", "B", "B", Category::Retro, "125cc");
        let c = product_with("c", "C", "C", Category::Touring, "125cc");
        assert!(diff(&[&a, &b, &c]).iter().all(|row| !row.is_divergent));
    }

    #[test]
    fn test_formatting_differences_count_as_divergent() {
        let a = product_with("a", "A", "A", Category::Scooter, "125cc");
        let b = product_with("b", "B", "B", Category::Scooter, "125 cc");
        assert!(diff(&[&a, &b])[0].is_divergent);
    }

    #[test]
    fn test_comparison_uses_catalog_order() {
        let catalog = sample_catalog();
        let selection = Selection::from_ids(["zing-150", "like-150"]);
        let comparison = Comparison::build(&catalog, &selection);

        let ids: Vec<&str> = comparison.products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["like-150", "zing-150"]);
        assert_eq!(comparison.open_slots(), 1);
        // both fixtures are 150cc
        assert_eq!(comparison.divergent_rows().count(), 0);
    }

    #[test]
    fn test_empty_comparison_is_placeholder() {
        let catalog = sample_catalog();
        let comparison = Comparison::build(&catalog, &Selection::new());
        assert!(comparison.is_empty());
        assert_eq!(comparison.open_slots(), MAX_SELECTION);
    }

    #[test]
    fn test_unknown_ids_are_skipped() {
        let catalog = sample_catalog();
        let selection = Selection::from_ids(["ghost", "f9"]);
        let products = resolve(&catalog, &selection);
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "f9");
    }
}
