//! Configuration validation.
//!
//! Checks values that can be verified without contacting the API.

use reqwest::Url;

use super::{Config, APP_ID_VAR, APP_KEY_VAR, ENDPOINT_VAR, TIMEOUT_VAR};
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (5 minutes).
pub const MAX_TIMEOUT_MS: u64 = 300_000;

/// Validate configuration values.
///
/// Credentials are optional at this stage (they may be supplied later as
/// overrides) but must not be blank when present.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `app_id` or `app_key` is set but blank
/// - `endpoint` is set but not an absolute `http`/`https` URL
/// - `timeout_ms` is outside 1000..=300000
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.app_id.as_deref().is_some_and(|id| id.trim().is_empty()) {
        return Err(ConfigError::InvalidValue {
            var: APP_ID_VAR.into(),
            reason: "must not be empty".into(),
        });
    }

    if config.app_key.as_ref().is_some_and(super::SecretString::is_blank) {
        return Err(ConfigError::InvalidValue {
            var: APP_KEY_VAR.into(),
            reason: "must not be empty".into(),
        });
    }

    if let Some(endpoint) = config.endpoint.as_deref() {
        validate_endpoint(endpoint).map_err(|reason| ConfigError::InvalidValue {
            var: ENDPOINT_VAR.into(),
            reason,
        })?;
    }

    validate_timeout(config.timeout_ms).map_err(|reason| ConfigError::InvalidValue {
        var: TIMEOUT_VAR.into(),
        reason,
    })
}

/// Check that an endpoint is an absolute `http`/`https` URL.
pub(crate) fn validate_endpoint(endpoint: &str) -> Result<(), String> {
    let url = Url::parse(endpoint).map_err(|e| format!("not a valid URL: {e}"))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("unsupported scheme '{other}'")),
    }
}

/// Check that a timeout is within the accepted range.
pub(crate) fn validate_timeout(timeout_ms: u64) -> Result<(), String> {
    if (MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&timeout_ms) {
        Ok(())
    } else {
        Err(format!(
            "must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"
        ))
    }
}
