//! Product domain models.
//!
//! Products are supplied by an external static source and never change after
//! the catalog is loaded. Every spec attribute is a display string: values are
//! shown and compared verbatim, never parsed into numbers or units.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::error::MotoError;

/// Product category.
///
/// External data uses the upper-case tag (`"SCOOTER"`, `"SPORT"`, ...).
/// Any other tag is rejected when the catalog is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Scooter,
    Sport,
    Touring,
    Retro,
    Electric,
}

impl Category {
    /// Human-readable label shown on category chips.
    pub fn label(self) -> &'static str {
        match self {
            Category::Scooter => "Scooter",
            Category::Sport => "Sport",
            Category::Touring => "Touring",
            Category::Retro => "Retro",
            Category::Electric => "Electric",
        }
    }

    /// Lower-case keyword accepted on the command line.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Scooter => "scooter",
            Category::Sport => "sport",
            Category::Touring => "touring",
            Category::Retro => "retro",
            Category::Electric => "electric",
        }
    }

    /// All categories in display order.
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = MotoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Category::iter()
            .find(|category| category.keyword().eq_ignore_ascii_case(needle))
            .ok_or_else(|| MotoError::not_found("category", needle))
    }
}

/// Technical specification sheet of a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specs {
    pub engine_type: String,
    pub displacement: String,
    pub max_power: String,
    pub max_torque: String,
    pub cooling_system: String,
    pub fuel_system: String,
    pub transmission: String,
    pub fuel_capacity: String,
    pub seat_height: String,
    pub curb_weight: String,
    pub tire_front: String,
    pub tire_rear: String,
    pub braking_system: String,
    pub abs_tcs: String,
}

impl Specs {
    /// Returns the display value of a single field.
    pub fn get(&self, field: SpecField) -> &str {
        match field {
            SpecField::EngineType => &self.engine_type,
            SpecField::Displacement => &self.displacement,
            SpecField::MaxPower => &self.max_power,
            SpecField::MaxTorque => &self.max_torque,
            SpecField::CoolingSystem => &self.cooling_system,
            SpecField::FuelSystem => &self.fuel_system,
            SpecField::Transmission => &self.transmission,
            SpecField::FuelCapacity => &self.fuel_capacity,
            SpecField::SeatHeight => &self.seat_height,
            SpecField::CurbWeight => &self.curb_weight,
            SpecField::TireFront => &self.tire_front,
            SpecField::TireRear => &self.tire_rear,
            SpecField::BrakingSystem => &self.braking_system,
            SpecField::AbsTcs => &self.abs_tcs,
        }
    }

    /// All fields with their values, in sheet order.
    pub fn entries(&self) -> impl Iterator<Item = (SpecField, &str)> {
        SpecField::iter().map(move |field| (field, self.get(field)))
    }
}

/// Names one attribute of [`Specs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SpecField {
    EngineType,
    Displacement,
    MaxPower,
    MaxTorque,
    CoolingSystem,
    FuelSystem,
    Transmission,
    FuelCapacity,
    SeatHeight,
    CurbWeight,
    TireFront,
    TireRear,
    BrakingSystem,
    AbsTcs,
}

impl SpecField {
    pub fn label(self) -> &'static str {
        match self {
            SpecField::EngineType => "Engine type",
            SpecField::Displacement => "Displacement",
            SpecField::MaxPower => "Max power",
            SpecField::MaxTorque => "Max torque",
            SpecField::CoolingSystem => "Cooling system",
            SpecField::FuelSystem => "Fuel system",
            SpecField::Transmission => "Transmission",
            SpecField::FuelCapacity => "Fuel capacity",
            SpecField::SeatHeight => "Seat height",
            SpecField::CurbWeight => "Curb weight",
            SpecField::TireFront => "Front tire",
            SpecField::TireRear => "Rear tire",
            SpecField::BrakingSystem => "Braking system",
            SpecField::AbsTcs => "Safety assist (ABS/TCS)",
        }
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, stable for the process lifetime.
    pub id: String,
    pub name: String,
    pub series: String,
    /// Display price, e.g. `"13,980"`.
    pub price: String,
    /// Image URL or path.
    pub image: String,
    pub category: Category,
    pub description: String,
    pub specs: Specs,
}
