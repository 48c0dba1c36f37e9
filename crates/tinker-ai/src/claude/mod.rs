//! Anthropic Claude API client.
//!
//! Implements the `LlmGateway` trait for Claude models via the
//! Anthropic Messages API (https://api.anthropic.com/v1/messages).
//! The credential arrives with each call; the client never holds one.

mod api;
mod client;
mod config;


pub use client::ClaudeClient;
pub use config::{AuthMethod, ClaudeConfig, MAX_RETRIES};
