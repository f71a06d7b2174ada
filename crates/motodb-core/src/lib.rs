//! Core domain of MotoDB: the product catalog, list filtering, comparison,
//! navigation state and the advisor chat.
//!
//! Everything here is synchronous and pure except [`assistant::AssistantGateway`],
//! the one suspension point, which is implemented outside this crate.

pub mod assistant;
pub mod catalog;
pub mod comparison;
pub mod config;
pub mod error;
pub mod filter;
pub mod guide;
pub mod secret;
pub mod session;
pub mod view;

#[cfg(test)]
mod test_support;

// Re-export common error type
pub use error::MotoError;
pub use session::Session;
