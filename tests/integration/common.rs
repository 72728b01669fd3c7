//! Shared helpers for integration tests.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use infermedica_api::connection::{ConnectionConfig, Credentials};
use infermedica_api::models::{Age, DiagnosisRequest, Evidence, Sex};
use infermedica_api::Api;
use tracing_subscriber::EnvFilter;
use wiremock::MockServer;

pub const APP_ID: &str = "test-app-id";
pub const APP_KEY: &str = "test-app-key";

/// Route client logs to the test output; `RUST_LOG` selects the level.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Endpoint with a base path, as the production endpoint has.
pub fn endpoint(server: &MockServer) -> String {
    format!("{}/v3", server.uri())
}

/// An [`Api`] pointed at `server`.
pub fn create_api(server: &MockServer) -> Api {
    init_tracing();
    let credentials = Credentials::new(APP_ID, APP_KEY).expect("valid credentials");
    let config = ConnectionConfig::new()
        .with_endpoint(endpoint(server))
        .with_model("infermedica-en");
    Api::new(credentials, config).expect("valid config")
}

/// A female patient reporting a headache.
pub fn headache_request() -> DiagnosisRequest {
    DiagnosisRequest::new(Sex::Female, Age::years(30)).with_evidence(Evidence::present("s_21"))
}
