//! HTTP connection to the diagnosis API.
//!
//! This module provides:
//! - URL construction from the configured endpoint
//! - Authentication and content headers
//! - Status and body handling
//!
//! There is no retry logic: each call is exactly one round trip.

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, Url};
use serde_json::Value;

use super::config::{ConnectionConfig, Credentials};
use super::query::QueryParams;
use crate::config::{validate_endpoint, validate_timeout};
use crate::error::{ApiError, ConfigError};
use crate::traits::Transport;

/// Header carrying the application id.
pub const APP_ID_HEADER: &str = "App-Id";
/// Header carrying the application key.
pub const APP_KEY_HEADER: &str = "App-Key";
/// Header selecting the knowledge model.
pub const MODEL_HEADER: &str = "Model";
/// Header scoping requests to one interview.
pub const INTERVIEW_ID_HEADER: &str = "Interview-Id";

const JSON_CONTENT_TYPE: &str = "application/json";
const USER_AGENT: &str = concat!("infermedica-api-rs/", env!("CARGO_PKG_VERSION"));

/// Authenticated connection to one API endpoint.
#[derive(Debug, Clone)]
pub struct Connection {
    client: Client,
    credentials: Credentials,
    config: ConnectionConfig,
    base_url: Url,
}

impl Connection {
    /// Create a new connection.
    ///
    /// No request is made; the endpoint, timeout and header values are only
    /// checked locally.
    pub fn new(credentials: Credentials, config: ConnectionConfig) -> Result<Self, ConfigError> {
        validate_endpoint(&config.endpoint).map_err(|reason| ConfigError::InvalidValue {
            var: "endpoint".into(),
            reason,
        })?;
        validate_timeout(config.timeout_ms).map_err(|reason| ConfigError::InvalidValue {
            var: "timeout_ms".into(),
            reason,
        })?;

        ensure_header_value("app_id", credentials.app_id())?;
        ensure_header_value("app_key", credentials.app_key().expose())?;
        if let Some(model) = &config.model {
            ensure_header_value("model", model)?;
        }
        if let Some(interview_id) = &config.interview_id {
            ensure_header_value("interview_id", interview_id)?;
        }

        let base_url = Url::parse(&config.endpoint).map_err(|e| ConfigError::InvalidValue {
            var: "endpoint".into(),
            reason: e.to_string(),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                var: "http_client".into(),
                reason: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            credentials,
            config,
            base_url,
        })
    }

    /// Get the endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// Get the connection configuration.
    #[must_use]
    pub const fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Derive a connection scoped to another interview.
    ///
    /// Credentials, endpoint and the underlying HTTP client are shared.
    pub fn with_interview_id(&self, interview_id: impl Into<String>) -> Result<Self, ConfigError> {
        let interview_id = interview_id.into();
        ensure_header_value("interview_id", &interview_id)?;

        let mut scoped = self.clone();
        scoped.config.interview_id = Some(interview_id);
        Ok(scoped)
    }

    /// Build the absolute URL for `path` with `query` appended.
    ///
    /// Path segments are percent-encoded. An empty query leaves the URL
    /// without a `?`.
    pub fn build_url(&self, path: &str, query: &QueryParams) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidRequest {
                message: format!("endpoint cannot take a path: {}", self.base_url),
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.iter());
        }

        Ok(url)
    }

    /// Issue a GET request and parse the JSON response.
    pub async fn get(&self, path: &str, query: &QueryParams) -> Result<Value, ApiError> {
        self.execute(Method::GET, path, None, query).await
    }

    /// Issue a POST request with a JSON body and parse the JSON response.
    pub async fn post(
        &self,
        path: &str,
        body: &Value,
        query: &QueryParams,
    ) -> Result<Value, ApiError> {
        self.execute(Method::POST, path, Some(body), query).await
    }

    /// Execute a single request.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        query: &QueryParams,
    ) -> Result<Value, ApiError> {
        let url = self.build_url(path, query)?;
        let start = Instant::now();

        tracing::debug!(
            method = %method,
            url = %url,
            model = ?self.config.model,
            interview_id = ?self.config.interview_id,
            "Starting API request"
        );

        let mut request = self
            .client
            .request(method.clone(), url.clone())
            .header(APP_ID_HEADER, self.credentials.app_id())
            .header(APP_KEY_HEADER, self.credentials.app_key().expose())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .header(ACCEPT, JSON_CONTENT_TYPE);

        if let Some(model) = &self.config.model {
            request = request.header(MODEL_HEADER, model);
        }
        if let Some(interview_id) = &self.config.interview_id {
            request = request.header(INTERVIEW_ID_HEADER, interview_id);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            let elapsed_ms = elapsed_ms(start);
            if e.is_timeout() {
                tracing::error!(
                    url = %url,
                    elapsed_ms,
                    timeout_ms = self.config.timeout_ms,
                    "API request timed out"
                );
                ApiError::Timeout {
                    timeout_ms: self.config.timeout_ms,
                }
            } else {
                tracing::error!(url = %url, elapsed_ms, error = %e, "API request failed");
                ApiError::Network {
                    message: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network {
            message: format!("Failed to read response body: {e}"),
        })?;

        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = elapsed_ms(start),
            "API response received"
        );

        if !status.is_success() {
            tracing::error!(
                method = %method,
                path,
                status = status.as_u16(),
                "API returned error status"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
                path: path.to_string(),
                body: text,
            });
        }

        parse_body(path, &text)
    }
}

#[async_trait]
impl Transport for Connection {
    async fn get(&self, path: String, query: QueryParams) -> Result<Value, ApiError> {
        Self::get(self, &path, &query).await
    }

    async fn post(&self, path: String, body: Value, query: QueryParams) -> Result<Value, ApiError> {
        Self::post(self, &path, &body, &query).await
    }
}

/// Parse a success body, rejecting empty and non-JSON payloads.
fn parse_body(path: &str, text: &str) -> Result<Value, ApiError> {
    if text.trim().is_empty() {
        return Err(ApiError::MalformedResponse {
            path: path.to_string(),
            message: "empty response body".to_string(),
        });
    }

    serde_json::from_str(text).map_err(|e| ApiError::MalformedResponse {
        path: path.to_string(),
        message: format!("invalid JSON: {e}"),
    })
}

fn ensure_header_value(var: &str, value: &str) -> Result<(), ConfigError> {
    HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| ConfigError::InvalidValue {
            var: var.into(),
            reason: "contains characters not allowed in an HTTP header".into(),
        })
}

fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
