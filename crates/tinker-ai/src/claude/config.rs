//! Claude API client configuration.

use std::time::Duration;

pub(crate) const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1/messages";

/// Upper bound on extra attempts, matching the config file's range.
pub const MAX_RETRIES: u32 = 10;

/// How the per-call credential is attached to the request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMethod {
    /// Anthropic API key (`x-api-key` header).
    #[default]
    ApiKey,
    /// OAuth token (`Authorization: Bearer`).
    OAuth,
}

/// Claude API client configuration.
#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    pub api_url: String,
    pub auth_method: AuthMethod,
    pub model: String,
    pub max_tokens: u32,
    pub system_prompt: Option<String>,
    /// Whole-request timeout. `None` leaves the call unbounded.
    pub request_timeout: Option<Duration>,
    /// Extra attempts on transient failures; 0 is a single attempt.
    /// Values above `MAX_RETRIES` are treated as `MAX_RETRIES`.
    pub max_retries: u32,
}

impl Default for ClaudeConfig {
    fn default() -> Self {
        Self {
            api_url: ANTHROPIC_API_URL.to_string(),
            auth_method: AuthMethod::ApiKey,
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 1024,
            system_prompt: None,
            request_timeout: None,
            max_retries: 0,
        }
    }
}

impl ClaudeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_auth_method(mut self, method: AuthMethod) -> Self {
        self.auth_method = method;
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries.min(MAX_RETRIES);
        self
    }
}
