//! HTTP transport for the diagnosis API.
//!
//! This module provides:
//! - [`Connection`]: authenticated GET/POST with JSON bodies
//! - [`ConnectionConfig`] and [`Credentials`]
//! - [`QueryParams`]: ordered, URL-encoded query parameters
//!
//! # Example
//!
//! ```
//! use infermedica_api::connection::{Connection, ConnectionConfig, Credentials, QueryParams};
//!
//! let credentials = Credentials::new("my-app-id", "my-app-key").unwrap();
//! let connection = Connection::new(credentials, ConnectionConfig::new()).unwrap();
//!
//! let url = connection
//!     .build_url("/search", &QueryParams::new().with_param("phrase", "headache"))
//!     .unwrap();
//! assert_eq!(url.as_str(), "https://api.infermedica.com/v3/search?phrase=headache");
//! ```

mod client;
mod config;
mod query;

pub use client::{
    Connection, APP_ID_HEADER, APP_KEY_HEADER, INTERVIEW_ID_HEADER, MODEL_HEADER,
};
pub use config::{ConnectionConfig, Credentials, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
pub use query::QueryParams;

/// Generate a fresh random interview id.
#[must_use]
pub fn new_interview_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
