//! Advisor chat module.
//!
//! - `chat`: `ChatHistory`, `ChatEntry`, `Speaker`
//! - `gateway`: the `AssistantGateway` trait implemented by service clients
//! - `panel`: `AssistantPanel`, the chat screen state with its in-flight guard

mod chat;
mod gateway;
mod panel;

pub use chat::{ChatEntry, ChatHistory, GREETING, Speaker};
pub use gateway::{AssistantGateway, EMPTY_REPLY, FALLBACK_REPLY};
pub use panel::{AssistantPanel, PendingRequest, SubmitRejected, SubmitState};
