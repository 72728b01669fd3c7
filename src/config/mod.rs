//! Client configuration.
//!
//! This module handles:
//! - Default credentials, endpoint, model and interview id
//! - Environment variable loading (with `.env` support)
//! - Per-call overrides merged on top of the defaults
//! - Secure App-Key storage via [`SecretString`]
//!
//! Configuration is an explicit value. Build it once at startup, edit it
//! with [`Config::configure`], and hand it to
//! [`Api::from_config`](crate::api::Api::from_config) together with any
//! [`ApiOverrides`].
//!
//! # Example
//!
//! ```
//! use infermedica_api::config::{ApiOverrides, Config, SecretString};
//!
//! let defaults = Config::new().configure(|c| {
//!     c.app_id = Some("my-app-id".to_string());
//!     c.app_key = Some(SecretString::new("my-app-key"));
//!     c.model = Some("infermedica-en".to_string());
//! });
//!
//! let merged = defaults.merged(&ApiOverrides::new().with_model("infermedica-pl"));
//! assert_eq!(merged.model.as_deref(), Some("infermedica-pl"));
//! assert!(!format!("{merged:?}").contains("my-app-key"));
//! ```

mod secret;
mod validation;

pub use secret::SecretString;
pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};
pub(crate) use validation::{validate_endpoint, validate_timeout};

use crate::connection::{ConnectionConfig, Credentials, DEFAULT_TIMEOUT_MS};
use crate::error::ConfigError;

/// Environment variable holding the application id.
pub const APP_ID_VAR: &str = "INFERMEDICA_APP_ID";
/// Environment variable holding the application key.
pub const APP_KEY_VAR: &str = "INFERMEDICA_APP_KEY";
/// Environment variable overriding the API endpoint.
pub const ENDPOINT_VAR: &str = "INFERMEDICA_ENDPOINT";
/// Environment variable selecting the knowledge model.
pub const MODEL_VAR: &str = "INFERMEDICA_MODEL";
/// Environment variable carrying a fixed interview id.
pub const INTERVIEW_ID_VAR: &str = "INFERMEDICA_INTERVIEW_ID";
/// Environment variable for the request timeout in milliseconds.
pub const TIMEOUT_VAR: &str = "INFERMEDICA_TIMEOUT_MS";

/// Default client configuration.
///
/// Every field except the timeout is optional here; credentials are only
/// required once an [`Api`](crate::api::Api) is built from the merged
/// configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Application id sent as `App-Id`.
    pub app_id: Option<String>,
    /// Application key sent as `App-Key` (redacted in debug output).
    pub app_key: Option<SecretString>,
    /// Base URL of the API. `None` keeps the connection default.
    pub endpoint: Option<String>,
    /// Knowledge model sent as `Model`.
    pub model: Option<String>,
    /// Interview id sent as `Interview-Id`.
    pub interview_id: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Config {
    /// Create an empty configuration with the default timeout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `INFERMEDICA_APP_ID`
    /// - `INFERMEDICA_APP_KEY`
    ///
    /// Optional environment variables:
    /// - `INFERMEDICA_ENDPOINT`: API base URL (default: production host)
    /// - `INFERMEDICA_MODEL`: knowledge model
    /// - `INFERMEDICA_INTERVIEW_ID`: fixed interview id
    /// - `INFERMEDICA_TIMEOUT_MS`: request timeout (default: `30000`)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a required variable is missing, the
    /// timeout is not a valid integer, or any value fails
    /// [`validate_config`].
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let app_id = std::env::var(APP_ID_VAR).map_err(|_| ConfigError::MissingRequired {
            var: APP_ID_VAR.into(),
        })?;
        let app_key = std::env::var(APP_KEY_VAR).map_err(|_| ConfigError::MissingRequired {
            var: APP_KEY_VAR.into(),
        })?;

        let config = Self {
            app_id: Some(app_id),
            app_key: Some(SecretString::new(app_key)),
            endpoint: optional_env(ENDPOINT_VAR),
            model: optional_env(MODEL_VAR),
            interview_id: optional_env(INTERVIEW_ID_VAR),
            timeout_ms: parse_env_u64(TIMEOUT_VAR, DEFAULT_TIMEOUT_MS)?,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// Apply in-place edits and return the updated configuration.
    #[must_use]
    pub fn configure(mut self, edit: impl FnOnce(&mut Self)) -> Self {
        edit(&mut self);
        self
    }

    /// Merge per-call overrides on top of these defaults.
    ///
    /// Any value present in `overrides` wins; absent values fall back to
    /// the defaults.
    #[must_use]
    pub fn merged(&self, overrides: &ApiOverrides) -> Self {
        Self {
            app_id: overrides.app_id.clone().or_else(|| self.app_id.clone()),
            app_key: overrides.app_key.clone().or_else(|| self.app_key.clone()),
            endpoint: overrides.endpoint.clone().or_else(|| self.endpoint.clone()),
            model: overrides.model.clone().or_else(|| self.model.clone()),
            interview_id: overrides
                .interview_id
                .clone()
                .or_else(|| self.interview_id.clone()),
            timeout_ms: overrides.timeout_ms.unwrap_or(self.timeout_ms),
        }
    }

    /// Extract validated credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequired`] if either the id or the key
    /// is missing or blank.
    pub fn credentials(&self) -> Result<Credentials, ConfigError> {
        let app_id = self.app_id.clone().unwrap_or_default();
        let app_key = self
            .app_key
            .clone()
            .unwrap_or_else(|| SecretString::new(""));
        Credentials::new(app_id, app_key)
    }

    /// Build a connection configuration.
    ///
    /// Optional values are forwarded only when set, so unset fields keep the
    /// connection defaults.
    #[must_use]
    pub fn connection_config(&self) -> ConnectionConfig {
        let mut config = ConnectionConfig::new().with_timeout_ms(self.timeout_ms);
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint);
        }
        if let Some(model) = &self.model {
            config = config.with_model(model);
        }
        if let Some(interview_id) = &self.interview_id {
            config = config.with_interview_id(interview_id);
        }
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_id: None,
            app_key: None,
            endpoint: None,
            model: None,
            interview_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// Per-call values that take precedence over [`Config`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiOverrides {
    /// Application id override.
    pub app_id: Option<String>,
    /// Application key override.
    pub app_key: Option<SecretString>,
    /// Endpoint override.
    pub endpoint: Option<String>,
    /// Model override.
    pub model: Option<String>,
    /// Interview id override.
    pub interview_id: Option<String>,
    /// Timeout override in milliseconds.
    pub timeout_ms: Option<u64>,
}

impl ApiOverrides {
    /// Create empty overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the application id.
    #[must_use]
    pub fn with_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.app_id = Some(app_id.into());
        self
    }

    /// Override the application key.
    #[must_use]
    pub fn with_app_key(mut self, app_key: impl Into<SecretString>) -> Self {
        self.app_key = Some(app_key.into());
        self
    }

    /// Override the endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Override the model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Override the interview id.
    #[must_use]
    pub fn with_interview_id(mut self, interview_id: impl Into<String>) -> Self {
        self.interview_id = Some(interview_id.into());
        self
    }

    /// Override the timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }
}

/// Read an optional environment variable, treating empty values as unset.
fn optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}
