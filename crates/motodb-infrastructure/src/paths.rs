//! Unified path management for motodb configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/motodb/            # Config directory (or the --config override)
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! └── logs/                    # Application logs
//!     └── motodb.log.YYYY-MM-DD
//! ```

use std::path::{Path, PathBuf};

use motodb_core::config::DEFAULT_MODEL_NAME;
use motodb_core::error::{MotoError, Result};
use motodb_core::secret::{GeminiConfig, SecretConfig};

const APP_DIR: &str = "motodb";

/// Resolves every file location from one config directory.
///
/// With no base path the platform config directory is used
/// (XDG on Linux, `Application Support` on macOS, `AppData` on Windows).
#[derive(Debug, Clone)]
pub struct MotodbPaths {
    base: Option<PathBuf>,
}

impl MotodbPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    /// Returns the motodb configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR))
                .ok_or_else(|| MotoError::config("Cannot find home directory")),
        }
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("secret.json"))
    }

    pub fn logs_dir(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join("logs"))
    }

    /// Ensures the secret file exists, creating it with a template if it doesn't.
    ///
    /// On Unix the new file is restricted to mode 600.
    pub fn ensure_secret_file(&self) -> Result<PathBuf> {
        let secret_path = self.secret_file()?;
        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(DEFAULT_MODEL_NAME.to_string()),
            }),
        };
        std::fs::write(&secret_path, serde_json::to_string_pretty(&template)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(0o600);
            std::fs::set_permissions(&secret_path, permissions)?;
        }

        tracing::info!("[Paths] Created secret template at {}", secret_path.display());
        Ok(secret_path)
    }
}

impl Default for MotodbPaths {
    fn default() -> Self {
        Self::new(None)
    }
}
