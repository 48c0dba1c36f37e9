//! Display bridge wire protocol.
//!
//! Views send `{"command": "send", "text": ..., "credential": ...}` and
//! receive `{"command": "response", "text": ...}`. Failures travel on
//! the same channel with an `Error: ` prefix.

use serde::{Deserialize, Serialize};
use tinker_ai::Outcome;

/// Prefix marking a response as a failure message.
pub const ERROR_PREFIX: &str = "Error: ";

/// Messages a view sends to the bridge.
#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum BridgeRequest {
    Send {
        #[serde(default)]
        text: String,
        /// `apiKey` is the field name older views use.
        #[serde(default, alias = "apiKey")]
        credential: String,
    },
}

/// Messages the bridge sends back to a view.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum BridgeResponse {
    Response { text: String },
}

impl BridgeRequest {
    /// Parse a raw text frame. Unknown commands and malformed JSON yield `None`.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }
}

impl BridgeResponse {
    pub fn reply(text: impl Into<String>) -> Self {
        Self::Response { text: text.into() }
    }

    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Response {
            text: format!("{ERROR_PREFIX}{message}"),
        }
    }

    pub fn from_outcome(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Reply(text) => Self::reply(text),
            Outcome::Failure(message) => Self::error(message),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self)
            .unwrap_or_else(|_| r#"{"command":"response","text":"Error: encoding failed"}"#.into())
    }
}
