//! LlmGateway implementation for ClaudeClient.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use tracing::{debug, warn};

use crate::{AiError, Completion, Credential, LlmGateway, Turn};

use super::client::ClaudeClient;
use super::config::MAX_RETRIES;

/// Sleep before retry number `attempt + 1`: 100ms, 200ms, 400ms, ...
pub(crate) fn backoff_delay(attempt: u32) -> Duration {
    let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
    Duration::from_millis(100u64.saturating_mul(factor))
}

#[async_trait]
impl LlmGateway for ClaudeClient {
    async fn complete(
        &self,
        history: &[Turn],
        credential: &Credential,
    ) -> Result<Completion, AiError> {
        let body = self.build_request_body(history);
        let headers = self.request_headers(credential)?;

        debug!(
            model = %self.config.model,
            turns = history.len(),
            "Claude API request"
        );

        let max_retries = self.config.max_retries.min(MAX_RETRIES);
        let mut attempt = 0;
        loop {
            match self.send_once(&body, &headers).await {
                Ok(completion) => return Ok(completion),
                Err(e) if attempt < max_retries && e.is_transient() => {
                    let delay = backoff_delay(attempt);
                    attempt += 1;
                    warn!(
                        attempt,
                        max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %e,
                        "Claude API call failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

impl ClaudeClient {
    async fn send_once(
        &self,
        body: &serde_json::Value,
        headers: &HeaderMap,
    ) -> Result<Completion, AiError> {
        let response = self
            .http
            .post(&self.config.api_url)
            .headers(headers.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        if !status.is_success() {
            debug!(status = status.as_u16(), "Claude API returned an error status");
            return Err(AiError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value =
            serde_json::from_str(&text).map_err(|e| AiError::Parse(e.to_string()))?;

        let completion = Self::parse_response(&json);
        debug!(
            input_tokens = completion.usage.input_tokens,
            output_tokens = completion.usage.output_tokens,
            reply_len = completion.text.len(),
            "Claude API response"
        );
        Ok(completion)
    }
}
