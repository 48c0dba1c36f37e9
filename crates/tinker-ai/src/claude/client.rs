//! Claude API client struct, request building, and response parsing.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

use crate::{AiError, Completion, Credential, TokenUsage, Turn};

use super::config::{AuthMethod, ClaudeConfig};

pub(crate) const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Claude API client.
pub struct ClaudeClient {
    pub(crate) config: ClaudeConfig,
    pub(crate) http: reqwest::Client,
}

impl ClaudeClient {
    pub fn new(config: ClaudeConfig) -> Result<Self, AiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AiError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClaudeConfig {
        &self.config
    }

    /// Build request headers, attaching the credential per the auth method.
    pub(crate) fn request_headers(&self, credential: &Credential) -> Result<HeaderMap, AiError> {
        let mut headers = HeaderMap::new();

        let (name, raw) = match self.config.auth_method {
            AuthMethod::ApiKey => (
                HeaderName::from_static("x-api-key"),
                credential.expose().to_string(),
            ),
            AuthMethod::OAuth => (AUTHORIZATION, format!("Bearer {}", credential.expose())),
        };
        let mut value = HeaderValue::from_str(&raw)
            .map_err(|_| AiError::Request("credential contains invalid header characters".into()))?;
        value.set_sensitive(true);
        headers.insert(name, value);

        headers.insert(
            "anthropic-version",
            HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Build the JSON request body for the Messages API.
    pub(crate) fn build_request_body(&self, history: &[Turn]) -> serde_json::Value {
        let mut body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": history,
        });

        if let Some(ref system) = self.config.system_prompt {
            body["system"] = serde_json::json!(system);
        }

        body
    }

    /// Parse a success response. Missing fields degrade to empty/zero.
    pub(crate) fn parse_response(json: &serde_json::Value) -> Completion {
        let text = json["content"][0]["text"]
            .as_str()
            .unwrap_or_default()
            .to_string();

        let usage = TokenUsage {
            input_tokens: json["usage"]["input_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["output_tokens"].as_u64().unwrap_or(0),
        };

        Completion { text, usage }
    }
}
