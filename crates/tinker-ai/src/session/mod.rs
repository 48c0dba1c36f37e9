//! Session controller.
//!
//! A `Session` owns one `ConversationStore` and drives user-message round
//! trips through an `LlmGateway`: append the user turn, call the gateway
//! with the full transcript, append the reply on success.

mod chat;
mod manager;
mod types;

#[cfg(test)]
mod tests;

pub use manager::Session;
pub use types::{Outcome, SessionState};
