//! Request bodies for the action endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Age, Evidence, JsonObject, Sex};
use crate::error::ApiError;

/// Body for `/diagnosis`, `/triage`, `/explain`, `/suggest` and `/red_flags`.
///
/// Keys not modelled here are kept in `other` and sent back unchanged.
///
/// # Example
///
/// ```
/// use infermedica_api::models::{Age, DiagnosisRequest, Evidence, Sex};
///
/// let request = DiagnosisRequest::new(Sex::Female, Age::years(32))
///     .with_evidence(Evidence::present("s_21"))
///     .with_target("c_49");
///
/// assert_eq!(request.target.as_deref(), Some("c_49"));
/// assert_eq!(request.to_json()?["age"]["value"], 32);
/// # Ok::<(), infermedica_api::ApiError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisRequest {
    /// Patient sex.
    pub sex: Sex,
    /// Patient age.
    pub age: Age,
    /// Collected observations.
    #[serde(default)]
    pub evidence: Vec<Evidence>,
    /// Point in time the interview refers to (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluated_at: Option<String>,
    /// Condition to explain; required by `/explain`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Endpoint options such as `disable_groups`.
    #[serde(default, skip_serializing_if = "JsonObject::is_empty")]
    pub extras: JsonObject,
    /// Any other top-level keys.
    #[serde(flatten)]
    pub other: JsonObject,
}

impl DiagnosisRequest {
    /// Request with no evidence yet.
    #[must_use]
    pub fn new(sex: Sex, age: impl Into<Age>) -> Self {
        Self {
            sex,
            age: age.into(),
            evidence: Vec::new(),
            evaluated_at: None,
            target: None,
            extras: JsonObject::new(),
            other: JsonObject::new(),
        }
    }

    /// Append one observation.
    #[must_use]
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence.push(evidence);
        self
    }

    /// Append an observation in place, e.g. between interview steps.
    pub fn add_evidence(&mut self, evidence: Evidence) {
        self.evidence.push(evidence);
    }

    /// Set the condition to explain.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Set the evaluation date.
    #[must_use]
    pub fn with_evaluated_at(mut self, date: impl Into<String>) -> Self {
        self.evaluated_at = Some(date.into());
        self
    }

    /// Set an `extras` option.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Returns the target if it is set and not blank.
    #[must_use]
    pub fn explain_target(&self) -> Option<&str> {
        self.target
            .as_deref()
            .filter(|target| !target.trim().is_empty())
    }

    /// Serialize for the standard endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the request cannot be
    /// represented as JSON.
    pub fn to_json(&self) -> Result<Value, ApiError> {
        to_body(self)
    }

    /// Serialize for the COVID-19 endpoints, which take `age` as a bare
    /// number of years. `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an age in months, which has
    /// no bare-number form.
    pub fn to_covid_json(&self) -> Result<Value, ApiError> {
        let age = self.age.normalized().ok_or_else(|| ApiError::InvalidRequest {
            message: format!(
                "COVID-19 endpoints take age in years, got {} months",
                self.age.value()
            ),
        })?;
        let mut copy = self.clone();
        copy.age = age;
        copy.to_json()
    }
}

/// Body for `/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Free text to analyze.
    pub text: String,
    /// Ids of evidence already collected, used to resolve ambiguity.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub context: Vec<String>,
    /// Return the tokens of the text.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub include_tokens: bool,
    /// Patient age.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    /// Patient sex.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    /// Fix typos before parsing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_spelling: Option<bool>,
}

impl ParseRequest {
    /// Parse `text` without context.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            context: Vec::new(),
            include_tokens: false,
            age: None,
            sex: None,
            correct_spelling: None,
        }
    }

    /// Add a context evidence id.
    #[must_use]
    pub fn with_context(mut self, id: impl Into<String>) -> Self {
        self.context.push(id.into());
        self
    }

    /// Set the patient.
    #[must_use]
    pub fn with_patient(mut self, sex: Sex, age: impl Into<Age>) -> Self {
        self.sex = Some(sex);
        self.age = Some(age.into());
        self
    }

    /// Request the token list.
    #[must_use]
    pub const fn with_tokens(mut self) -> Self {
        self.include_tokens = true;
        self
    }

    /// Enable or disable spelling correction.
    #[must_use]
    pub const fn with_spelling_correction(mut self, enabled: bool) -> Self {
        self.correct_spelling = Some(enabled);
        self
    }

    /// Serialize for `/parse`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] if the request cannot be
    /// represented as JSON.
    pub fn to_json(&self) -> Result<Value, ApiError> {
        to_body(self)
    }
}

fn to_body<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::InvalidRequest {
        message: format!("request body is not valid JSON: {e}"),
    })
}
