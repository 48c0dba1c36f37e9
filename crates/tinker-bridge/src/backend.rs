//! Mapping from the `[backend]` config section to the Claude client.

use std::time::Duration;

use tinker_ai::{AuthMethod, ClaudeConfig};
use tinker_config::{AuthScheme, BackendConfig};

pub fn claude_config(backend: &BackendConfig) -> ClaudeConfig {
    let auth_method = match backend.auth {
        AuthScheme::ApiKey => AuthMethod::ApiKey,
        AuthScheme::OAuth => AuthMethod::OAuth,
    };

    let mut config = ClaudeConfig::new()
        .with_api_url(&backend.api_url)
        .with_auth_method(auth_method)
        .with_model(&backend.model)
        .with_max_tokens(backend.max_output_tokens)
        .with_max_retries(backend.max_retries);

    if let Some(ref prompt) = backend.system_prompt {
        config = config.with_system_prompt(prompt);
    }
    if let Some(secs) = backend.request_timeout_secs {
        config = config.with_request_timeout(Duration::from_secs(secs));
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_map_to_single_untimed_attempt() {
        let config = claude_config(&BackendConfig::default());
        assert_eq!(config.api_url, "https://api.anthropic.com/v1/messages");
        assert_eq!(config.model, "claude-sonnet-4-20250514");
        assert_eq!(config.max_tokens, 1024);
        assert_eq!(config.auth_method, AuthMethod::ApiKey);
        assert_eq!(config.max_retries, 0);
        assert!(config.request_timeout.is_none());
        assert!(config.system_prompt.is_none());
    }

    #[test]
    fn optional_settings_carry_over() {
        let backend = BackendConfig {
            auth: AuthScheme::OAuth,
            system_prompt: Some("Be brief.".into()),
            request_timeout_secs: Some(30),
            max_retries: 2,
            ..BackendConfig::default()
        };
        let config = claude_config(&backend);
        assert_eq!(config.auth_method, AuthMethod::OAuth);
        assert_eq!(config.system_prompt.as_deref(), Some("Be brief."));
        assert_eq!(config.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(config.max_retries, 2);
    }
}
