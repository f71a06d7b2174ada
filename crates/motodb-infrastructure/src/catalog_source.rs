//! JSON catalog source.
//!
//! The catalog is a JSON array of products. A copy ships inside the binary;
//! `[catalog] path` in config.toml (or `--catalog`) replaces it with a file.

use std::path::{Path, PathBuf};

use motodb_core::catalog::{CatalogSource, Product};
use motodb_core::error::{MotoError, Result};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Embedded,
    File(PathBuf),
}

/// Reads products from JSON, either the built-in data set or a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonCatalogSource {
    origin: Origin,
}

impl JsonCatalogSource {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            origin: Origin::Embedded,
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    /// Uses `path` when given, the embedded catalog otherwise.
    pub fn resolve(path: Option<&Path>) -> Self {
        path.map_or_else(Self::embedded, Self::from_path)
    }
}

/// Parses a JSON product array.
///
/// Unknown categories and missing spec keys are rejected.
pub fn parse_catalog(json: &str) -> Result<Vec<Product>> {
    Ok(serde_json::from_str(json)?)
}

impl CatalogSource for JsonCatalogSource {
    fn load(&self) -> Result<Vec<Product>> {
        match &self.origin {
            Origin::Embedded => parse_catalog(EMBEDDED_CATALOG),
            Origin::File(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    MotoError::io(format!(
                        "Failed to read catalog at {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                parse_catalog(&content)
            }
        }
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::Embedded => "built-in catalog".to_string(),
            Origin::File(path) => path.display().to_string(),
        }
    }
}
