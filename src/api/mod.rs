//! Public operation set of the diagnosis API.
//!
//! [`Api`] wraps a [`Transport`] (a [`Connection`] unless a test swaps it)
//! and turns raw JSON into domain models:
//! - Catalog operations list or fetch conditions, symptoms, lab tests and
//!   risk factors
//! - Interview operations run diagnosis, triage, explain, search, suggest,
//!   red flags and parse
//!
//! # Example
//!
//! ```no_run
//! use infermedica_api::api::Api;
//! use infermedica_api::config::{ApiOverrides, Config};
//! use infermedica_api::models::{Age, DiagnosisRequest, Evidence, Sex};
//!
//! # async fn run() -> Result<(), infermedica_api::error::Error> {
//! let config = Config::from_env()?;
//! let api = Api::from_config(&config, &ApiOverrides::new().with_model("infermedica-en"))?;
//!
//! let request = DiagnosisRequest::new(Sex::Female, Age::years(32))
//!     .with_evidence(Evidence::present("s_21"));
//! let response = api.diagnosis(&request).await?;
//! if let Some(question) = response.question {
//!     println!("{}", question.text);
//! }
//! # Ok(())
//! # }
//! ```

mod catalog;
mod interview;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::{validate_config, ApiOverrides, Config};
use crate::connection::{Connection, ConnectionConfig, Credentials};
use crate::error::{ApiError, ConfigError, ModelError};
use crate::models::Collection;
use crate::traits::Transport;

pub use interview::DEFAULT_SEARCH_MAX_RESULTS;

/// Client for the diagnosis API.
///
/// Cheap to clone; every operation is one request on the underlying
/// transport.
#[derive(Debug, Clone)]
pub struct Api<T = Connection> {
    transport: T,
}

impl Api<Connection> {
    /// Create a client from explicit credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the endpoint, timeout or a header value is
    /// invalid. No request is made.
    pub fn new(credentials: Credentials, config: ConnectionConfig) -> Result<Self, ConfigError> {
        Connection::new(credentials, config).map(Self::with_transport)
    }

    /// Create a client from defaults merged with per-call overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the merged configuration lacks credentials
    /// or fails validation.
    pub fn from_config(config: &Config, overrides: &ApiOverrides) -> Result<Self, ConfigError> {
        let merged = config.merged(overrides);
        validate_config(&merged)?;
        let credentials = merged.credentials()?;
        Self::new(credentials, merged.connection_config())
    }

    /// A client scoped to another interview, sharing everything else.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `interview_id` is not a valid header value.
    pub fn for_interview(&self, interview_id: impl Into<String>) -> Result<Self, ConfigError> {
        self.transport
            .with_interview_id(interview_id)
            .map(Self::with_transport)
    }

    /// The underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.transport
    }
}

impl<T: Transport> Api<T> {
    /// Wrap any transport.
    #[must_use]
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }
}

/// Path of one resource in a collection.
///
/// Ids are sent as a single path segment, so empty ids and ids containing
/// `/` are rejected.
fn resource_path(collection: &str, id: &str) -> Result<String, ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::InvalidRequest {
            message: format!("{collection} id must not be empty"),
        });
    }
    if id.contains('/') {
        return Err(ApiError::InvalidRequest {
            message: format!("{collection} id must not contain '/': {id}"),
        });
    }
    Ok(format!("/{collection}/{id}"))
}

/// Re-index a list response by item `id`. Later duplicates overwrite
/// earlier ones.
fn index_by_id(path: &str, value: Value) -> Result<Collection, ApiError> {
    let Value::Array(items) = value else {
        return Err(malformed(path, "expected a JSON array"));
    };

    let mut collection = Collection::with_capacity(items.len());
    for (position, item) in items.into_iter().enumerate() {
        let id = item
            .get("id")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| malformed(path, format!("item {position} has no string 'id'")))?;
        collection.insert(id, item);
    }

    debug!(path, count = collection.len(), "Indexed collection");
    Ok(collection)
}

/// Wrap a response object in a catalog model.
fn decode_model<M>(path: &str, value: Value) -> Result<M, ApiError>
where
    M: TryFrom<Value, Error = ModelError>,
{
    M::try_from(value).map_err(|e| malformed(path, e.to_string()))
}

/// Deserialize a response into a typed value.
fn decode<R: DeserializeOwned>(path: &str, value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| malformed(path, e.to_string()))
}

fn malformed(path: &str, message: impl Into<String>) -> ApiError {
    ApiError::MalformedResponse {
        path: path.to_string(),
        message: message.into(),
    }
}
