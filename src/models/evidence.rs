//! Evidence submitted with a diagnosis request.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Observation state of a piece of evidence (the API's `choice_id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceState {
    /// The patient has it.
    Present,
    /// The patient does not have it.
    Absent,
    /// The patient does not know.
    Unknown,
}

/// How a piece of evidence was collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceSource {
    /// Reported by the patient at the start of the interview.
    Initial,
    /// Chosen from suggested symptoms.
    Suggest,
    /// Predefined by the integrating application.
    Predefined,
    /// Chosen from red-flag symptoms.
    RedFlags,
}

/// A symptom or risk factor observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Symptom, risk factor or lab test id.
    pub id: String,
    /// Observation state.
    pub choice_id: EvidenceState,
    /// Collection source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<EvidenceSource>,
    /// Any other keys, such as `observed_at`.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Evidence {
    /// Create evidence with an explicit state.
    #[must_use]
    pub fn new(id: impl Into<String>, choice_id: EvidenceState) -> Self {
        Self {
            id: id.into(),
            choice_id,
            source: None,
            extra: JsonObject::new(),
        }
    }

    /// Evidence the patient has.
    #[must_use]
    pub fn present(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceState::Present)
    }

    /// Evidence the patient does not have.
    #[must_use]
    pub fn absent(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceState::Absent)
    }

    /// Evidence the patient is unsure about.
    #[must_use]
    pub fn unknown(id: impl Into<String>) -> Self {
        Self::new(id, EvidenceState::Unknown)
    }

    /// Set the collection source.
    #[must_use]
    pub const fn with_source(mut self, source: EvidenceSource) -> Self {
        self.source = Some(source);
        self
    }

    /// Returns true if the evidence was reported at the start of the interview.
    #[must_use]
    pub fn is_initial(&self) -> bool {
        self.source == Some(EvidenceSource::Initial)
    }
}
