//! Secret service implementation.
//!
//! Reads the Gemini API key from `secret.json`, falling back to the
//! `GEMINI_API_KEY` and `API_KEY` environment variables when the file has
//! none.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use motodb_core::error::{MotoError, Result};
use motodb_core::secret::{GeminiConfig, SecretConfig, SecretService};
use tokio::sync::RwLock;

use crate::paths::MotodbPaths;

/// Environment variables consulted for the API key, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Service for managing secret configuration.
///
/// The file is read once; later calls return the cached value.
#[derive(Debug, Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    pub fn new(paths: &MotodbPaths) -> Result<Self> {
        Ok(Self::from_file(paths.secret_file()?))
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            secrets: Arc::new(RwLock::new(None)),
        }
    }

    async fn read_file(&self) -> Result<SecretConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(SecretConfig::default()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("[Secret] {} not found", self.path.display());
                Ok(SecretConfig::default())
            }
            Err(e) => Err(MotoError::io(format!(
                "Failed to read secret file at {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// Fills in the API key from `lookup` when the file did not provide one.
///
/// A model name from the file is kept either way.
pub fn with_env_fallback(
    mut secrets: SecretConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> SecretConfig {
    if secrets.gemini_api_key().is_some() {
        return secrets;
    }

    let from_env = API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty());

    if let Some(api_key) = from_env {
        let model_name = secrets.gemini.take().and_then(|gemini| gemini.model_name);
        secrets.gemini = Some(GeminiConfig {
            api_key,
            model_name,
        });
    }
    secrets
}

#[async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        {
            let cached = self.secrets.read().await;
            if let Some(ref secrets) = *cached {
                return Ok(secrets.clone());
            }
        }

        let loaded = with_env_fallback(self.read_file().await?, |name| std::env::var(name).ok());
        if loaded.gemini_api_key().is_none() {
            tracing::warn!("[Secret] No Gemini API key configured; the advisor will answer with its fallback");
        }

        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_file_key_wins_over_env() {
        let secrets: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"from-file"}}"#).unwrap();
        let resolved = with_env_fallback(secrets, |_| Some("from-env".to_string()));
        assert_eq!(resolved.gemini_api_key(), Some("from-file"));
    }

    #[test]
    fn test_env_fills_blank_key_and_keeps_model() {
        let secrets: SecretConfig =
            serde_json::from_str(r#"{"gemini":{"api_key":"","model_name":"gemini-2.5-pro"}}"#)
                .unwrap();
        let resolved = with_env_fallback(secrets, |name| {
            (name == "API_KEY").then(|| "second".to_string())
        });
        assert_eq!(resolved.gemini_api_key(), Some("second"));
        assert_eq!(resolved.gemini_model_name(), Some("gemini-2.5-pro"));
    }

    #[test]
    fn test_env_vars_are_tried_in_order() {
        let resolved = with_env_fallback(SecretConfig::default(), |name| Some(format!("{name}-value")));
        assert_eq!(resolved.gemini_api_key(), Some("GEMINI_API_KEY-value"));
    }

    #[test]
    fn test_nothing_configured_stays_empty() {
        let resolved = with_env_fallback(SecretConfig::default(), no_env);
        assert_eq!(resolved, SecretConfig::default());
    }

    #[tokio::test]
    async fn test_load_secrets_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.json");
        tokio::fs::write(&path, r#"{"gemini":{"api_key":"abc","model_name":"m"}}"#)
            .await
            .unwrap();

        let service = SecretServiceImpl::from_file(&path);
        assert!(service.secret_file_exists().await);
        let secrets = service.load_secrets().await.unwrap();
        assert_eq!(secrets.gemini_api_key(), Some("abc"));
        assert_eq!(secrets.gemini_model_name(), Some("m"));
    }

    #[tokio::test]
    async fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let service = SecretServiceImpl::new(&MotodbPaths::new(Some(dir.path()))).unwrap();

        assert!(!service.secret_file_exists().await);
        assert!(service.load_secrets().await.is_ok());
    }

    #[tokio::test]
    async fn test_malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("secret.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = SecretServiceImpl::from_file(&path)
            .load_secrets()
            .await
            .unwrap_err();
        assert!(err.is_serialization());
    }
}
