//! Connection configuration and credentials.

#![allow(clippy::missing_const_for_fn)]

use crate::config::SecretString;
use crate::error::ConfigError;

/// Default base URL of the diagnosis API.
pub const DEFAULT_ENDPOINT: &str = "https://api.infermedica.com/v3";
/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Application credentials sent with every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    app_id: String,
    app_key: SecretString,
}

impl Credentials {
    /// Create credentials, rejecting blank values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] naming `app_id` or
    /// `app_key` when that value is empty.
    pub fn new(
        app_id: impl Into<String>,
        app_key: impl Into<SecretString>,
    ) -> Result<Self, ConfigError> {
        let app_id = app_id.into();
        let app_key = app_key.into();

        if app_id.trim().is_empty() {
            return Err(ConfigError::MissingRequired {
                var: "app_id".into(),
            });
        }
        if app_key.is_blank() {
            return Err(ConfigError::MissingRequired {
                var: "app_key".into(),
            });
        }

        Ok(Self { app_id, app_key })
    }

    /// Application id.
    #[must_use]
    pub fn app_id(&self) -> &str {
        &self.app_id
    }

    /// Application key.
    #[must_use]
    pub const fn app_key(&self) -> &SecretString {
        &self.app_key
    }
}

/// Transport settings for a [`Connection`](super::Connection).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL the request paths are appended to.
    pub endpoint: String,
    /// Knowledge model sent as the `Model` header.
    pub model: Option<String>,
    /// Interview id sent as the `Interview-Id` header.
    pub interview_id: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ConnectionConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the interview id.
    #[must_use]
    pub fn with_interview_id(mut self, interview_id: impl Into<String>) -> Self {
        self.interview_id = Some(interview_id.into());
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: None,
            interview_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}
