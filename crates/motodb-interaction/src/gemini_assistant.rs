//! GeminiAssistant - advisor backed by the Gemini REST API.
//!
//! One `generateContent` call per question. Whatever goes wrong, the caller
//! gets a displayable reply: blank answers become [`EMPTY_REPLY`] and every
//! failure becomes [`FALLBACK_REPLY`].

use std::time::Duration;

use async_trait::async_trait;
use motodb_core::assistant::{AssistantGateway, EMPTY_REPLY, FALLBACK_REPLY};
use motodb_core::catalog::CatalogStore;
use motodb_core::config::AssistantConfig;
use motodb_core::secret::SecretService;
use reqwest::{Client, StatusCode, header::HeaderValue};
use serde::{Deserialize, Serialize};

use crate::error::GatewayError;
use crate::prompt::AdvisorPrompt;

/// Gateway implementation that talks to the Gemini HTTP API.
pub struct GeminiAssistant {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    generation_config: GenerationConfig,
    prompt: AdvisorPrompt,
}

impl GeminiAssistant {
    /// Creates an assistant for `catalog`.
    ///
    /// Without an API key the assistant is still usable and answers every
    /// question with the fallback reply.
    pub fn new(
        config: &AssistantConfig,
        api_key: Option<String>,
        catalog: &CatalogStore,
    ) -> Result<Self, GatewayError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: config.model_name.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            generation_config: GenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
            },
            prompt: AdvisorPrompt::new(catalog)?,
        })
    }

    /// Builds the assistant from config.toml settings and secret.json.
    ///
    /// A model named in secret.json takes precedence over config.toml.
    pub async fn from_services(
        config: &AssistantConfig,
        secrets: &dyn SecretService,
        catalog: &CatalogStore,
    ) -> Result<Self, GatewayError> {
        let secret_config = match secrets.load_secrets().await {
            Ok(secret_config) => secret_config,
            Err(e) => {
                tracing::warn!("[Gemini] Failed to load secrets: {}", e);
                Default::default()
            }
        };

        let assistant = Self::new(
            config,
            secret_config.gemini_api_key().map(str::to_string),
            catalog,
        )?;
        Ok(match secret_config.gemini_model_name() {
            Some(model) => assistant.with_model(model),
            None => assistant,
        })
    }

    /// Overrides the model after construction.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends one question and returns the model's text, possibly blank.
    pub async fn generate(&self, question: &str) -> Result<String, GatewayError> {
        let api_key = self.api_key.as_deref().ok_or(GatewayError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: self.prompt.render(question)?,
                }],
            }],
            generation_config: self.generation_config,
        };

        self.send_request(api_key, &request).await
    }

    async fn send_request(
        &self,
        api_key: &str,
        body: &GenerateContentRequest,
    ) -> Result<String, GatewayError> {
        let url = format!("{}/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(url)
            .query(&[("key", api_key)])
            .json(body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let retry_after = parse_retry_after(response.headers().get("retry-after"));
            let body_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(map_http_error(status, body_text, retry_after));
        }

        let body_text = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body_text)?;
        Ok(extract_text_response(parsed))
    }
}

#[async_trait]
impl AssistantGateway for GeminiAssistant {
    fn name(&self) -> &str {
        &self.model
    }

    async fn ask(&self, user_text: &str) -> String {
        match self.generate(user_text).await {
            Ok(text) if text.trim().is_empty() => {
                tracing::warn!("[Gemini] Empty reply from {}", self.model);
                EMPTY_REPLY.to_string()
            }
            Ok(text) => text,
            Err(GatewayError::MissingApiKey) => {
                tracing::warn!("[Gemini] No API key configured, skipping request");
                FALLBACK_REPLY.to_string()
            }
            Err(e) => {
                tracing::warn!(
                    "[Gemini] Request to {} failed (retryable: {}): {}",
                    self.model,
                    e.is_retryable(),
                    e
                );
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    code: Option<i32>,
    message: Option<String>,
    status: Option<String>,
}

/// Text of the first candidate's first text part; empty when there is none.
fn extract_text_response(response: GenerateContentResponse) -> String {
    response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .and_then(|candidate| candidate.content)
        .and_then(|content| content.parts.into_iter().find_map(|part| part.text))
        .unwrap_or_default()
}

fn map_http_error(status: StatusCode, body: String, retry_after: Option<Duration>) -> GatewayError {
    let message = serde_json::from_str::<ErrorWrapper>(&body)
        .map(|wrapper| {
            let status_text = wrapper.error.status.unwrap_or_default();
            let msg = wrapper.error.message.unwrap_or_else(|| body.clone());
            if status_text.is_empty() {
                msg
            } else {
                format!("{status_text}: {msg}")
            }
        })
        .unwrap_or_else(|_| body.clone());

    let is_retryable = matches!(
        status,
        StatusCode::TOO_MANY_REQUESTS
            | StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT
    );

    GatewayError::Http {
        status: status.as_u16(),
        message,
        is_retryable,
        retry_after,
    }
}

fn parse_retry_after(header: Option<&HeaderValue>) -> Option<Duration> {
    let value = header?.to_str().ok()?;
    // HTTP-date form is not handled
    value.trim().parse::<u64>().ok().map(Duration::from_secs)
}
