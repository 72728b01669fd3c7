//! Trait definitions for mockable dependencies.
//!
//! [`Transport`] abstracts the HTTP layer so the [`Api`](crate::api::Api)
//! facade can be exercised without a server.
//!
//! # Mocking
//!
//! The trait is annotated with `#[cfg_attr(test, mockall::automock)]`,
//! which generates `MockTransport` for unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::connection::QueryParams;
use crate::error::ApiError;

/// Request transport used by the API facade.
///
/// Implementations perform exactly one round trip per call and return the
/// parsed JSON body of a success response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a GET request to `path` with `query` appended.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status or a
    /// malformed body.
    async fn get(&self, path: String, query: QueryParams) -> Result<Value, ApiError>;

    /// Issue a POST request to `path` with a JSON `body` and `query`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport failure, non-success status or a
    /// malformed body.
    async fn post(&self, path: String, body: Value, query: QueryParams) -> Result<Value, ApiError>;
}

/// Shared transports delegate to the inner value.
#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn get(&self, path: String, query: QueryParams) -> Result<Value, ApiError> {
        self.as_ref().get(path, query).await
    }

    async fn post(&self, path: String, body: Value, query: QueryParams) -> Result<Value, ApiError> {
        self.as_ref().post(path, body, query).await
    }
}
