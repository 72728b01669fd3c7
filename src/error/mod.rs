//! Error types for the diagnosis API client.
//!
//! This module defines a small error hierarchy:
//! - [`Error`]: Top-level error wrapping both subsystems
//! - [`ApiError`]: Failures while preparing or performing an API call
//! - [`ConfigError`]: Invalid or missing configuration
//! - [`ModelError`]: JSON that does not fit a domain model
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Top-level client error.
///
/// Returned by helpers that can fail either while building the client or
/// while talking to the API.
#[derive(Debug, Error)]
pub enum Error {
    /// API call error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by API operations.
///
/// `MissingField` and `InvalidRequest` are produced locally before any
/// network traffic; the remaining variants describe a request that was sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    #[error("HTTP {status} from {path}: {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Request path relative to the endpoint.
        path: String,
        /// Raw response body.
        body: String,
    },

    /// A success response carried an empty body, invalid JSON, or JSON of
    /// the wrong shape.
    #[error("Malformed response from {path}: {message}")]
    MalformedResponse {
        /// Request path relative to the endpoint.
        path: String,
        /// What was wrong with the body.
        message: String,
    },

    /// A required request field was not set.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The missing field name.
        field: String,
    },

    /// Request arguments were rejected before sending.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// Description of what's invalid.
        message: String,
    },

    /// Network communication error.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },
}

impl ApiError {
    /// HTTP status code, if the API answered with an error status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns true if the API reported the resource as missing (404).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }

    /// Returns true if the error was raised before any request was sent.
    #[must_use]
    pub const fn is_local(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidRequest { .. })
    }
}

/// A JSON payload could not be wrapped in a domain model.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The payload is not a JSON object.
    #[error("{kind} payload is not a JSON object")]
    NotAnObject {
        /// Model name.
        kind: &'static str,
    },

    /// The payload has no string `id` field.
    #[error("{kind} payload has no string 'id'")]
    MissingId {
        /// Model name.
        kind: &'static str,
    },
}

/// Configuration errors.
///
/// These errors are raised while building a client and never reach the
/// network.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Required configuration is missing.
    #[error("Missing required: {var}")]
    MissingRequired {
        /// The missing variable name.
        var: String,
    },

    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
