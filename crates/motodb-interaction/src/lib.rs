//! Advisor backends for motodb.
//!
//! `GeminiAssistant` answers questions through the Gemini REST API with the
//! whole catalog embedded in its prompt.

pub mod error;
pub mod gemini_assistant;
pub mod prompt;

pub use crate::error::GatewayError;
pub use crate::gemini_assistant::GeminiAssistant;
pub use crate::prompt::AdvisorPrompt;
