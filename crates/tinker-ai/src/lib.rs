//! Chat session core for Tinker.
//!
//! Provides:
//! - `ConversationStore`: the append-only transcript of one session
//! - `LlmGateway`: the "send history, get one completion" seam, with
//!   `ClaudeClient` implementing it against the Anthropic Messages API
//! - `Session`: one user-message round trip end to end

pub mod claude;
pub mod conversation;
pub mod credential;
pub mod session;
#[cfg(any(test, feature = "test-support"))]
pub mod testing;

use async_trait::async_trait;

pub use claude::{AuthMethod, ClaudeClient, ClaudeConfig};
pub use conversation::ConversationStore;
pub use credential::Credential;
pub use session::{Outcome, Session, SessionState};

/// Adapter from a transcript to a single backend completion.
///
/// Implementations are stateless per call: everything they need comes
/// from the history, the credential, and the configuration they were
/// built with. One call is one attempt unless configured otherwise.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    async fn complete(
        &self,
        history: &[Turn],
        credential: &Credential,
    ) -> Result<Completion, AiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One role-tagged message in a conversation. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Turn {
    role: Role,
    content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Result of a successful backend call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// First reply text, or empty when the backend sent none.
    pub text: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }

    pub fn add(&mut self, other: &TokenUsage) {
        self.input_tokens = self.input_tokens.saturating_add(other.input_tokens);
        self.output_tokens = self.output_tokens.saturating_add(other.output_tokens);
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// Non-success HTTP status. Displays the backend's body verbatim.
    #[error("{body}")]
    Status { status: u16, body: String },
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    /// The request could not be built (client setup, header encoding).
    #[error("request error: {0}")]
    Request(String),
    #[error("session is busy with another request")]
    Busy,
}

impl AiError {
    /// Whether the failure came from the backend call itself.
    pub fn is_backend(&self) -> bool {
        !matches!(self, AiError::Busy)
    }

    /// Whether a retry could plausibly succeed (network, 429, 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            AiError::Network(_) => true,
            AiError::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}
