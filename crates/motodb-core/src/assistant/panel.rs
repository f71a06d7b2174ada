use thiserror::Error;

use super::chat::{ChatEntry, ChatHistory, Speaker};
use super::gateway::AssistantGateway;

/// Whether a question is currently awaiting its answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Pending,
}

/// Why a question was not submitted.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("Nothing to send")]
    Blank,

    #[error("Still waiting for the previous answer")]
    Pending,
}

/// Ticket for the one in-flight question.
///
/// Returned by [`AssistantPanel::submit`] and consumed by
/// [`AssistantPanel::resolve`]; it cannot be cloned, so at most one exists.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending request must be resolved to re-enable submission"]
pub struct PendingRequest {
    prompt: String,
}

impl PendingRequest {
    /// The trimmed question text to send to the gateway.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}

/// State of the advisor screen: chat history plus the in-flight guard.
#[derive(Debug, Clone)]
pub struct AssistantPanel {
    history: ChatHistory,
    state: SubmitState,
}

impl AssistantPanel {
    /// A panel whose history starts with the advisor's greeting.
    pub fn new() -> Self {
        Self {
            history: ChatHistory::with_greeting(),
            state: SubmitState::Idle,
        }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmitState::Pending
    }

    /// Whether `text` would be accepted by [`AssistantPanel::submit`].
    pub fn can_submit(&self, text: &str) -> bool {
        !self.is_pending() && !text.trim().is_empty()
    }

    /// Records the user's question and marks the panel pending.
    pub fn submit(&mut self, text: &str) -> Result<PendingRequest, SubmitRejected> {
        if self.is_pending() {
            return Err(SubmitRejected::Pending);
        }
        let prompt = text.trim();
        if prompt.is_empty() {
            return Err(SubmitRejected::Blank);
        }

        self.history.push(Speaker::User, prompt);
        self.state = SubmitState::Pending;
        Ok(PendingRequest {
            prompt: prompt.to_string(),
        })
    }

    /// Appends the answer to a submitted question and re-enables submission.
    pub fn resolve(&mut self, _request: PendingRequest, reply: impl Into<String>) -> &ChatEntry {
        self.state = SubmitState::Idle;
        self.history.push(Speaker::Bot, reply)
    }

    /// Submits `text`, waits for the gateway and records its answer.
    pub async fn ask(
        &mut self,
        gateway: &dyn AssistantGateway,
        text: &str,
    ) -> Result<&ChatEntry, SubmitRejected> {
        let request = self.submit(text)?;
        tracing::info!(
            "[Assistant] Asking {} ({} chars)",
            gateway.name(),
            request.prompt().chars().count()
        );
        let reply = gateway.ask(request.prompt()).await;
        Ok(self.resolve(request, reply))
    }
}

impl Default for AssistantPanel {
    fn default() -> Self {
        Self::new()
    }
}
