//! Error mapping over HTTP.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use infermedica_api::connection::QueryParams;
use infermedica_api::{ApiError, Error};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{create_api, headache_request};

#[tokio::test]
async fn test_not_found_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/conditions/c_0"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "condition not found"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let err = api.get_condition("c_0").await.unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(
        err,
        ApiError::Http { status: 404, ref path, ref body }
            if path == "/conditions/c_0" && body.contains("condition not found")
    ));
}

#[tokio::test]
async fn test_server_error_is_sent_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/diagnosis"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let err = api.diagnosis(&headache_request()).await.unwrap_err();

    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_list_with_object_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/lab_tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"items": []})))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let err = api.list_lab_tests().await.unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse { .. }));
    assert!(!err.is_local());
}

#[tokio::test]
async fn test_empty_success_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/info"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let err = api.get_info().await.unwrap_err();

    assert!(matches!(err, ApiError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_local_validation_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_api(&server);

    assert!(api.get_symptom("", QueryParams::new()).await.unwrap_err().is_local());
    assert!(api.search("", QueryParams::new()).await.unwrap_err().is_local());
    assert!(api
        .explain(&headache_request(), QueryParams::new())
        .await
        .unwrap_err()
        .is_local());
}

#[tokio::test]
async fn test_api_error_converts_to_top_level_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/symptoms"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid credentials"))
        .mount(&server)
        .await;

    let api = create_api(&server);
    let result: Result<_, Error> = api
        .list_symptoms(QueryParams::new())
        .await
        .map_err(Error::from);

    assert!(matches!(result, Err(Error::Api(ApiError::Http { status: 401, .. }))));
}
