//! Domain models for API payloads.
//!
//! This module provides:
//! - Catalog models ([`Condition`], [`Symptom`], [`LabTest`], [`RiskFactor`],
//!   [`Info`]) wrapping the JSON object returned by the API
//! - Patient data ([`Sex`], [`Age`]) and [`Evidence`]
//! - Request bodies ([`DiagnosisRequest`], [`ParseRequest`])
//! - Typed responses for the action endpoints
//!
//! Catalog models keep the whole object they were built from, so
//! serializing one reproduces every field, including fields without a
//! typed accessor and explicit `null`s.
//!
//! # Example
//!
//! ```
//! use infermedica_api::models::Condition;
//! use serde_json::json;
//!
//! let payload = json!({"id": "c_49", "name": "Migraine", "icd10_code": "G43"});
//! let condition = Condition::from_json(payload.clone()).unwrap();
//!
//! assert_eq!(condition.id(), "c_49");
//! assert_eq!(condition.name(), Some("Migraine"));
//! assert_eq!(condition.to_json(), payload);
//! ```

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ModelError;

/// Implements the shared surface of an id-bearing catalog model.
macro_rules! json_model {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "serde_json::Value", into = "serde_json::Value")]
        pub struct $name($crate::models::Payload);

        impl $name {
            #[doc = concat!("Wrap a JSON object as a `", stringify!($name), "`.")]
            ///
            /// # Errors
            ///
            /// Returns [`ModelError`](crate::error::ModelError) if the value
            /// is not an object or has no string `id`.
            pub fn from_json(value: serde_json::Value) -> Result<Self, $crate::error::ModelError> {
                $crate::models::Payload::with_id(value, stringify!($name)).map(Self)
            }

            /// Resource id.
            #[must_use]
            pub fn id(&self) -> &str {
                self.0.str("id").unwrap_or_default()
            }

            /// Raw value of any field, including ones without a typed accessor.
            #[must_use]
            pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
                self.0.get(key)
            }

            /// The JSON object as received.
            #[must_use]
            pub const fn as_object(&self) -> &$crate::models::JsonObject {
                self.0.as_object()
            }

            /// Serialize back to JSON, reproducing every original field.
            #[must_use]
            pub fn to_json(&self) -> serde_json::Value {
                serde_json::Value::Object(self.0.as_object().clone())
            }
        }

        impl TryFrom<serde_json::Value> for $name {
            type Error = $crate::error::ModelError;

            fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
                Self::from_json(value)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(model: $name) -> Self {
                Self::Object(model.0.into_object())
            }
        }
    };
}

pub(crate) use json_model;

mod condition;
mod evidence;
mod info;
mod patient;
mod request;
mod response;
mod risk_factor;
mod symptom;

pub use condition::Condition;
pub use evidence::{Evidence, EvidenceSource, EvidenceState};
pub use info::Info;
pub use lab_test::{LabTest, LabTestResult};
pub use patient::{Age, AgeUnit, Sex, SexFilter};
pub use request::{DiagnosisRequest, ParseRequest};
pub use response::{
    Choice, ConditionProbability, DiagnosisResponse, ExplainResponse, ExplanationEntry, Mention,
    ParseResponse, Question, QuestionItem, SearchResult, SeriousObservation, SuggestedSymptom,
    TriageLevel, TriageResponse,
};
pub use risk_factor::RiskFactor;
pub use symptom::{RelatedSymptom, Symptom};

/// A JSON object as returned by the API.
pub type JsonObject = Map<String, Value>;

/// Raw list items keyed by their `id`.
pub type Collection = HashMap<String, Value>;

/// The JSON object behind a catalog model.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Payload(JsonObject);

impl Payload {
    /// Accept any JSON object.
    pub(crate) fn object(value: Value, kind: &'static str) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ModelError::NotAnObject { kind }),
        }
    }

    /// Accept a JSON object with a string `id`.
    pub(crate) fn with_id(value: Value, kind: &'static str) -> Result<Self, ModelError> {
        let payload = Self::object(value, kind)?;
        if payload.str("id").is_none() {
            return Err(ModelError::MissingId { kind });
        }
        Ok(payload)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub(crate) fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub(crate) fn u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// String field of a nested object, e.g. `extras.hint`.
    pub(crate) fn nested_str(&self, outer: &str, key: &str) -> Option<&str> {
        self.get(outer)?.get(key)?.as_str()
    }

    /// String items of an array field; non-string items are skipped.
    pub(crate) fn strings(&self, key: &str) -> Vec<&str> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Deserialize a field into a typed value, `None` if absent or mismatched.
    pub(crate) fn parse<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.get(key)
            .and_then(|value| T::deserialize(value).ok())
    }

    pub(crate) const fn as_object(&self) -> &JsonObject {
        &self.0
    }

    pub(crate) fn into_object(self) -> JsonObject {
        self.0
    }
}
