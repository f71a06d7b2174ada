//! Application configuration models (`config.toml`).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Model used when neither config.toml nor secret.json names one.
pub const DEFAULT_MODEL_NAME: &str = "gemini-3-flash-preview";
/// Base URL of the Gemini `models` REST collection.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct RootConfig {
    pub assistant: AssistantConfig,
    pub catalog: CatalogConfig,
}

impl RootConfig {
    /// Parses a config.toml document; missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Settings of the advisor's generative-language backend.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AssistantConfig {
    pub model_name: String,
    pub temperature: f32,
    pub top_p: f32,
    pub base_url: String,
    /// Per-request timeout enforced by the HTTP client.
    pub timeout_secs: u64,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            model_name: DEFAULT_MODEL_NAME.to_string(),
            temperature: 0.7,
            top_p: 0.95,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 60,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON file replacing the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}
