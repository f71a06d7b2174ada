//! Chat history types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// First message shown on the advisor screen.
pub const GREETING: &str = "Hi! I'm the KYMCO model advisor. Tell me how you ride and what \
your budget is, and ask me anything about the line-up.";

/// Who wrote a chat entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

/// A single message in the chat history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub speaker: Speaker,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatEntry {
    pub fn new(speaker: Speaker, text: impl Into<String>) -> Self {
        Self {
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Append-only conversation log of one session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatHistory {
    entries: Vec<ChatEntry>,
}

impl ChatHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A history opened by the advisor's greeting.
    pub fn with_greeting() -> Self {
        let mut history = Self::new();
        history.push(Speaker::Bot, GREETING);
        history
    }

    pub fn push(&mut self, speaker: Speaker, text: impl Into<String>) -> &ChatEntry {
        self.entries.push(ChatEntry::new(speaker, text));
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&ChatEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
