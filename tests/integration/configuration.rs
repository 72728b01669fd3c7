//! Building clients from configuration.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::env;

use infermedica_api::config::{
    ApiOverrides, Config, APP_ID_VAR, APP_KEY_VAR, ENDPOINT_VAR, INTERVIEW_ID_VAR, MODEL_VAR,
    TIMEOUT_VAR,
};
use infermedica_api::connection::{new_interview_id, QueryParams};
use infermedica_api::{Api, ConfigError};
use serde_json::json;
use serial_test::serial;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{endpoint, init_tracing};

fn clear_env() {
    for var in [
        APP_ID_VAR,
        APP_KEY_VAR,
        ENDPOINT_VAR,
        MODEL_VAR,
        INTERVIEW_ID_VAR,
        TIMEOUT_VAR,
    ] {
        env::remove_var(var);
    }
}

#[tokio::test]
#[serial]
async fn test_api_from_env_with_overrides() {
    init_tracing();
    let server = MockServer::start().await;
    let interview_id = new_interview_id();
    Mock::given(method("GET"))
        .and(path("/v3/lab_tests"))
        .and(header("App-Id", "env-id"))
        .and(header("App-Key", "env-key"))
        .and(header("Model", "infermedica-de"))
        .and(header("Interview-Id", interview_id.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    clear_env();
    env::set_var(APP_ID_VAR, "env-id");
    env::set_var(APP_KEY_VAR, "env-key");
    env::set_var(MODEL_VAR, "infermedica-en");
    env::set_var(ENDPOINT_VAR, endpoint(&server));

    let config = Config::from_env().unwrap();
    let overrides = ApiOverrides::new()
        .with_model("infermedica-de")
        .with_interview_id(interview_id.clone());
    let api = Api::from_config(&config, &overrides).unwrap();
    clear_env();

    assert!(api.list_lab_tests().await.unwrap().is_empty());
}

#[tokio::test]
#[serial]
async fn test_for_interview_switches_header() {
    init_tracing();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/conditions"))
        .and(header("Interview-Id", "second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config::new().configure(|cfg| {
        cfg.app_id = Some("id".into());
        cfg.app_key = Some("key".into());
        cfg.endpoint = Some(endpoint(&server));
        cfg.interview_id = Some("first".into());
    });
    let api = Api::from_config(&config, &ApiOverrides::new()).unwrap();
    let scoped = api.for_interview("second").unwrap();

    scoped.list_conditions(QueryParams::new()).await.unwrap();
}

#[test]
#[serial]
fn test_from_env_requires_credentials() {
    clear_env();
    env::set_var(APP_ID_VAR, "env-id");

    let err = Config::from_env().unwrap_err();
    clear_env();

    assert!(matches!(err, ConfigError::MissingRequired { .. }));
}

#[test]
fn test_override_supplies_missing_credentials() {
    let config = Config::new();
    let overrides = ApiOverrides::new()
        .with_app_id("override-id")
        .with_app_key("override-key");

    let api = Api::from_config(&config, &overrides).unwrap();

    assert_eq!(api.connection().endpoint(), "https://api.infermedica.com/v3");
}

#[test]
fn test_blank_key_override_is_rejected() {
    let config = Config::new().configure(|cfg| {
        cfg.app_id = Some("id".into());
        cfg.app_key = Some("key".into());
    });
    let overrides = ApiOverrides::new().with_app_key("  ");

    let err = Api::from_config(&config, &overrides).unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
