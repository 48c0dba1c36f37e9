//! Per-section validators for backend and bridge settings.

use crate::schema::TinkerConfig;

use super::helpers::{validate_not_blank, validate_range};

/// Validate backend constraints.
pub(crate) fn validate_backend(errors: &mut Vec<String>, config: &TinkerConfig) {
    let backend = &config.backend;

    validate_not_blank(errors, "backend.model", &backend.model);
    if !(backend.api_url.starts_with("https://") || backend.api_url.starts_with("http://")) {
        errors.push(format!(
            "backend.api_url = {:?} must be an http(s) URL",
            backend.api_url
        ));
    }
    validate_range(
        errors,
        "backend.max_output_tokens",
        backend.max_output_tokens,
        1,
        200_000,
    );
    validate_range(errors, "backend.max_retries", backend.max_retries, 0, 10);
    if backend.request_timeout_secs == Some(0) {
        errors.push("backend.request_timeout_secs must be at least 1 when set".into());
    }
}

/// Validate bridge constraints.
pub(crate) fn validate_bridge(errors: &mut Vec<String>, config: &TinkerConfig) {
    validate_not_blank(errors, "bridge.bind", &config.bridge.bind);
    validate_range(errors, "bridge.port", config.bridge.port, 1, 65535);
    validate_range(
        errors,
        "bridge.max_input_len",
        config.bridge.max_input_len,
        1,
        1_000_000,
    );
}
