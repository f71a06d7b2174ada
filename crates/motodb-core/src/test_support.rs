//! Product fixtures shared by unit tests.

use crate::catalog::{CatalogStore, Category, Product, Specs};

pub(crate) fn specs(displacement: &str) -> Specs {
    Specs {
        engine_type: "Single cylinder, 4-stroke".into(),
        displacement: displacement.into(),
        max_power: "10.5kW / 8000rpm".into(),
        max_torque: "13.5Nm / 6500rpm".into(),
        cooling_system: "Liquid".into(),
        fuel_system: "EFI".into(),
        transmission: "CVT".into(),
        fuel_capacity: "7L".into(),
        seat_height: "780mm".into(),
        curb_weight: "130kg".into(),
        tire_front: "120/70-12".into(),
        tire_rear: "130/70-12".into(),
        braking_system: "Disc / Disc".into(),
        abs_tcs: "ABS".into(),
    }
}

pub(crate) fn product_with(
    id: &str,
    name: &str,
    series: &str,
    category: Category,
    displacement: &str,
) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        series: series.into(),
        price: "9,980".into(),
        image: format!("https://example.com/{id}.jpg"),
        category,
        description: format!("{name} test fixture"),
        specs: specs(displacement),
    }
}

pub(crate) fn product(id: &str, name: &str, category: Category) -> Product {
    product_with(id, name, name, category, "150cc")
}

pub(crate) fn sample_catalog() -> CatalogStore {
    CatalogStore::new(vec![
        product_with("like-150", "Like 150i", "Like", Category::Scooter, "150cc"),
        product_with("xciting-s-400", "Xciting S 400", "Xciting", Category::Touring, "399cc"),
        product_with("krv-180", "KRV 180", "K-Series", Category::Scooter, "175cc"),
        product_with("krider-400", "Krider 400", "K-Series", Category::Sport, "321cc"),
        product_with("ak-550", "AK 550 Premium", "AK", Category::Touring, "550cc"),
        product_with("f9", "F9", "iONEX", Category::Electric, "N/A"),
        product_with("zing-150", "Zing II 150", "Zing", Category::Retro, "150cc"),
    ])
    .expect("fixture ids are unique")
}
