//! Secret management.
//!
//! Defines the secret configuration (API keys) and the interface for loading
//! it from secure storage.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

impl SecretConfig {
    /// The Gemini API key, if one is configured and non-blank.
    pub fn gemini_api_key(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .map(|gemini| gemini.api_key.trim())
            .filter(|key| !key.is_empty())
    }

    /// Model override stored next to the key, if any.
    pub fn gemini_model_name(&self) -> Option<&str> {
        self.gemini
            .as_ref()
            .and_then(|gemini| gemini.model_name.as_deref())
            .filter(|name| !name.trim().is_empty())
    }
}

#[derive(Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Service for managing secret configuration.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Secret files have appropriate permissions (e.g., 600 on Unix)
/// - Secrets are never logged or exposed in error messages
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    /// Loads the secret configuration.
    async fn load_secrets(&self) -> Result<SecretConfig>;

    /// Checks if the secret file exists.
    async fn secret_file_exists(&self) -> bool;
}
