//! Assistant gateway trait.
//!
//! Defines the interface of the external natural-language service that
//! answers free-text questions about the catalog.

use async_trait::async_trait;

/// Reply used when the service cannot be reached or fails.
pub const FALLBACK_REPLY: &str =
    "The advisor is temporarily unavailable. Please try again later.";

/// Reply used when the service answers with no text.
pub const EMPTY_REPLY: &str = "Sorry, I can't offer a suggestion right now.";

/// One-shot, stateless question/answer bridge.
///
/// `ask` may suspend on network I/O but always resolves: implementations
/// recover every internal failure and answer with [`FALLBACK_REPLY`] (or
/// [`EMPTY_REPLY`] for a blank answer) instead of returning an error. No
/// chat history is passed; each call stands alone.
#[async_trait]
pub trait AssistantGateway: Send + Sync {
    /// Short name of the backing service, used in logs.
    fn name(&self) -> &str;

    /// Answers a single question.
    async fn ask(&self, user_text: &str) -> String;
}
