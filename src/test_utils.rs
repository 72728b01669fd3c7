//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock transports answering a single request
//! - JSON fixtures shaped like real API responses
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use serde_json::{json, Value};

use crate::models::{Age, DiagnosisRequest, Evidence, EvidenceSource, Sex};
use crate::traits::MockTransport;

/// A transport expecting exactly one GET to `path`, answered with `body`.
#[must_use]
pub fn mock_get_once(path: &'static str, body: Value) -> MockTransport {
    let mut transport = MockTransport::new();
    transport
        .expect_get()
        .withf(move |p, _| p == path)
        .times(1)
        .returning(move |_, _| Ok(body.clone()));
    transport
}

/// A transport expecting exactly one POST to `path`, answered with `body`.
#[must_use]
pub fn mock_post_once(path: &'static str, body: Value) -> MockTransport {
    let mut transport = MockTransport::new();
    transport
        .expect_post()
        .withf(move |p, _, _| p == path)
        .times(1)
        .returning(move |_, _, _| Ok(body.clone()));
    transport
}

/// A 30 year old male with one initial and one absent symptom.
#[must_use]
pub fn sample_request() -> DiagnosisRequest {
    DiagnosisRequest::new(Sex::Male, Age::years(30))
        .with_evidence(Evidence::present("s_21").with_source(EvidenceSource::Initial))
        .with_evidence(Evidence::absent("s_98"))
}

/// A neurology condition payload.
#[must_use]
pub fn condition_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "common_name": name,
        "sex_filter": "both",
        "categories": ["Neurology"],
        "prevalence": "common",
        "acuteness": "chronic_with_exacerbations",
        "severity": "moderate",
        "triage_level": "consultation",
        "extras": {
            "hint": "Please consult a neurologist.",
            "icd10_code": "G43"
        }
    })
}

/// A top-level symptom payload with one child.
#[must_use]
pub fn symptom_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "common_name": name,
        "question": format!("Do you have a {}?", name.to_lowercase()),
        "category": "Signs and symptoms",
        "seriousness": "normal",
        "sex_filter": "both",
        "parent_id": null,
        "parent_relation": null,
        "children": [{"id": "s_1193", "parent_relation": "duration"}],
        "image_url": null,
        "image_source": null
    })
}

/// A risk factor payload.
#[must_use]
pub fn risk_factor_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "common_name": name,
        "question": "Is your BMI above 30?",
        "category": "Risk factors",
        "seriousness": "normal",
        "sex_filter": "both",
        "image_url": null,
        "image_source": null
    })
}

/// An `/info` payload.
#[must_use]
pub fn info_json() -> Value {
    json!({
        "api_version": "v3.7.2",
        "updated_at": "2024-03-18T12:30:00Z",
        "conditions_count": 801,
        "symptoms_count": 1578,
        "risk_factors_count": 196,
        "lab_tests_count": 541
    })
}

/// A `/diagnosis` payload asking a single question.
#[must_use]
pub fn diagnosis_json() -> Value {
    json!({
        "question": {
            "type": "single",
            "text": "How long have you had a headache?",
            "items": [{
                "id": "s_1193",
                "name": "Headache, lasting more than a week",
                "choices": [
                    {"id": "present", "label": "Yes"},
                    {"id": "absent", "label": "No"},
                    {"id": "unknown", "label": "Don't know"}
                ]
            }],
            "extras": {}
        },
        "conditions": [
            {"id": "c_151", "name": "Tension-type headaches", "probability": 0.31},
            {"id": "c_49", "name": "Migraine", "common_name": "Migraine", "probability": 0.72}
        ],
        "extras": {},
        "should_stop": false,
        "has_emergency_evidence": false,
        "interview_token": "tok"
    })
}
