use std::time::Duration;

use thiserror::Error;

/// Failure while talking to the generative-language backend.
///
/// Only logged; callers of the gateway see the fallback reply instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request failed: {message}")]
    Request { message: String, is_retryable: bool },

    #[error("HTTP {status}: {message}")]
    Http {
        status: u16,
        message: String,
        is_retryable: bool,
        retry_after: Option<Duration>,
    },

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Failed to render prompt: {0}")]
    Prompt(String),
}

impl GatewayError {
    pub fn is_retryable(&self) -> bool {
        match self {
            GatewayError::Request { is_retryable, .. } | GatewayError::Http { is_retryable, .. } => {
                *is_retryable
            }
            _ => false,
        }
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Request {
            is_retryable: err.is_connect() || err.is_timeout(),
            message: err.to_string(),
        }
    }
}

impl From<minijinja::Error> for GatewayError {
    fn from(err: minijinja::Error) -> Self {
        GatewayError::Prompt(err.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        GatewayError::Parse(err.to_string())
    }
}
