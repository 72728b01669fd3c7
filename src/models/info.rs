//! Model metadata from `/info`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Payload;
use crate::error::ModelError;

/// Metadata about the knowledge base behind the selected model.
///
/// Unlike the catalog models, `Info` has no `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Info(Payload);

impl Info {
    /// Wrap the `/info` response.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NotAnObject`] if the value is not an object.
    pub fn from_json(value: Value) -> Result<Self, ModelError> {
        Payload::object(value, "Info").map(Self)
    }

    /// Knowledge base version string.
    #[must_use]
    pub fn api_version(&self) -> Option<&str> {
        self.0.str("api_version")
    }

    /// When the knowledge base was last updated.
    ///
    /// `None` if the field is absent or not an RFC 3339 timestamp.
    #[must_use]
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.0.str("updated_at")?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|timestamp| timestamp.with_timezone(&Utc))
    }

    /// Number of conditions.
    #[must_use]
    pub fn conditions_count(&self) -> Option<u64> {
        self.0.u64("conditions_count")
    }

    /// Number of symptoms.
    #[must_use]
    pub fn symptoms_count(&self) -> Option<u64> {
        self.0.u64("symptoms_count")
    }

    /// Number of risk factors.
    #[must_use]
    pub fn risk_factors_count(&self) -> Option<u64> {
        self.0.u64("risk_factors_count")
    }

    /// Number of lab tests.
    #[must_use]
    pub fn lab_tests_count(&self) -> Option<u64> {
        self.0.u64("lab_tests_count")
    }

    /// Raw value of any field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Serialize back to JSON.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(self.0.as_object().clone())
    }
}

impl TryFrom<Value> for Info {
    type Error = ModelError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_json(value)
    }
}

impl From<Info> for Value {
    fn from(info: Info) -> Self {
        Self::Object(info.0.into_object())
    }
}
