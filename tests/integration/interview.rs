//! Interview endpoints over HTTP.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use infermedica_api::connection::QueryParams;
use infermedica_api::models::{
    Age, DiagnosisRequest, Evidence, EvidenceState, ParseRequest, TriageLevel,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{create_api, headache_request};

fn diagnosis_body() -> serde_json::Value {
    json!({
        "question": {
            "type": "single",
            "text": "How long have you had a headache?",
            "items": [{
                "id": "s_1193",
                "name": "More than a week",
                "choices": [
                    {"id": "present", "label": "Yes"},
                    {"id": "absent", "label": "No"},
                    {"id": "unknown", "label": "Don't know"}
                ]
            }]
        },
        "conditions": [{"id": "c_49", "name": "Migraine", "probability": 0.62}],
        "should_stop": false
    })
}

#[tokio::test]
async fn test_interview_loop() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/diagnosis"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({
            "sex": "female",
            "age": {"value": 30, "unit": "year"},
            "evidence": [{"id": "s_21", "choice_id": "present"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(diagnosis_body()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/triage"))
        .and(body_partial_json(json!({
            "evidence": [
                {"id": "s_21", "choice_id": "present"},
                {"id": "s_1193", "choice_id": "absent"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "triage_level": "consultation",
            "serious": [],
            "teleconsultation_applicable": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let mut request = headache_request();

    let diagnosis = api.diagnosis(&request).await.unwrap();
    let question = diagnosis.question.expect("question expected");
    request.add_evidence(question.items[0].answer(EvidenceState::Absent));

    let triage = api.triage(&request).await.unwrap();
    assert_eq!(triage.triage_level, TriageLevel::Consultation);
    assert_eq!(triage.teleconsultation_applicable, Some(true));
}

#[tokio::test]
async fn test_covid19_diagnosis_sends_bare_age() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/covid19/diagnosis"))
        .and(body_json(json!({
            "sex": "female",
            "age": 30,
            "evidence": [{"id": "s_21", "choice_id": "present"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(diagnosis_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let request = headache_request();
    api.covid19_diagnosis(&request).await.unwrap();

    assert_eq!(request.age, Age::years(30));
}

#[tokio::test]
async fn test_covid19_triage_sends_bare_age() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/covid19/triage"))
        .and(body_partial_json(json!({"age": 30})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "triage_level": "isolation_call"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let triage = api.covid19_triage(&headache_request()).await.unwrap();

    assert_eq!(triage.triage_level, TriageLevel::IsolationCall);
    assert!(!triage.triage_level.is_emergency());
}

#[tokio::test]
async fn test_covid19_month_age_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/covid19/triage"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let mut request = headache_request();
    request.age = Age::months(9);
    let err = api.covid19_triage(&request).await.unwrap_err();

    assert!(err.is_local());
}

#[tokio::test]
async fn test_diagnosis_sends_nested_unknown_keys() {
    let body = json!({
        "sex": "female",
        "age": {"value": 30, "unit": "year", "extra_age_key": 1},
        "evidence": [
            {"id": "s_21", "choice_id": "present", "observed_at": "2024-01-01"}
        ]
    });
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/diagnosis"))
        .and(body_json(body.clone()))
        .respond_with(ResponseTemplate::new(200).set_body_json(diagnosis_body()))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let request: DiagnosisRequest = serde_json::from_value(body).unwrap();
    api.diagnosis(&request).await.unwrap();
}

#[tokio::test]
async fn test_explain_without_target_sends_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/explain"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let err = api
        .explain(&headache_request(), QueryParams::new())
        .await
        .unwrap_err();

    assert!(err.is_local());
}

#[tokio::test]
async fn test_explain_with_target() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/explain"))
        .and(body_partial_json(json!({"target": "c_49"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "supporting_evidence": [{"id": "s_21", "name": "Headache"}],
            "conflicting_evidence": [],
            "unconfirmed_evidence": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let request = headache_request().with_target("c_49");
    let explanation = api.explain(&request, QueryParams::new()).await.unwrap();

    assert_eq!(explanation.supporting_evidence.len(), 1);
}

#[tokio::test]
async fn test_search_defaults_max_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/search"))
        .and(query_param("phrase", "flu"))
        .and(query_param("max_results", "8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s_98", "label": "Fever"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let results = api.search("flu", QueryParams::new()).await.unwrap();

    assert_eq!(results[0].id, "s_98");
}

#[tokio::test]
async fn test_search_keeps_caller_max_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v3/search"))
        .and(query_param("phrase", "stomach ache"))
        .and(query_param("max_results", "3"))
        .and(query_param("types", "symptom"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let filters = QueryParams::new().with_max_results(3).with_type("symptom");
    let results = api.search("stomach ache", filters).await.unwrap();

    assert!(results.is_empty());
}

#[tokio::test]
async fn test_related_symptoms_and_red_flags() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/suggest"))
        .and(query_param("max_results", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s_13", "name": "Abdominal pain"},
            {"id": "s_156", "name": "Nausea"}
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v3/red_flags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": "s_1", "name": "Chest pain"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let request = headache_request();

    let suggestions = api
        .related_symptoms(&request, QueryParams::new().with_max_results(2))
        .await
        .unwrap();
    let flags = api.red_flags(&request, QueryParams::new()).await.unwrap();

    assert_eq!(suggestions.len(), 2);
    assert_eq!(flags[0].id, "s_1");
}

#[tokio::test]
async fn test_parse_feeds_diagnosis() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v3/parse"))
        .and(body_json(json!({"text": "my head hurts"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "mentions": [{
                "id": "s_21",
                "name": "Headache",
                "orth": "head hurts",
                "choice_id": "present",
                "type": "symptom"
            }],
            "obvious": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = create_api(&server);
    let parsed = api.parse(&ParseRequest::new("my head hurts")).await.unwrap();

    let evidence = parsed.to_evidence();
    assert_eq!(evidence.len(), 1);
    assert!(evidence[0].is_initial());
    assert_eq!(evidence[0].id, Evidence::present("s_21").id);
}
