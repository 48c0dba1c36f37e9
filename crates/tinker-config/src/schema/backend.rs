//! LLM backend configuration types.

use serde::{Deserialize, Serialize};

/// How the per-request credential is attached to backend calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthScheme {
    /// `x-api-key` header.
    #[default]
    #[serde(rename = "api_key")]
    ApiKey,
    /// `Authorization: Bearer` header.
    #[serde(rename = "oauth")]
    OAuth,
}

/// Backend (Anthropic Messages API) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Messages endpoint URL.
    pub api_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Cap on generated reply length (`max_tokens`).
    pub max_output_tokens: u32,
    pub auth: AuthScheme,
    /// Optional system prompt. Omitted from requests when unset.
    pub system_prompt: Option<String>,
    /// Optional whole-request timeout. No timeout when unset.
    pub request_timeout_secs: Option<u64>,
    /// Extra attempts on transient failures. 0 means a single attempt.
    pub max_retries: u32,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.anthropic.com/v1/messages".into(),
            model: "claude-sonnet-4-20250514".into(),
            max_output_tokens: 1024,
            auth: AuthScheme::ApiKey,
            system_prompt: None,
            request_timeout_secs: None,
            max_retries: 0,
        }
    }
}
