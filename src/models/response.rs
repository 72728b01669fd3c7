//! Typed responses of the action endpoints.
//!
//! Every struct keeps the fields it does not model in `extra`.

use serde::{Deserialize, Serialize};

use super::{Evidence, EvidenceSource, EvidenceState, JsonObject};

/// Response of `/diagnosis` and `/covid19/diagnosis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    /// Next interview question; `None` once the interview can stop.
    #[serde(default)]
    pub question: Option<Question>,
    /// Ranked conditions.
    #[serde(default)]
    pub conditions: Vec<ConditionProbability>,
    /// Whether the interview should stop.
    #[serde(default)]
    pub should_stop: Option<bool>,
    /// Whether emergency evidence was reported.
    #[serde(default)]
    pub has_emergency_evidence: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl DiagnosisResponse {
    /// Most probable condition.
    #[must_use]
    pub fn top_condition(&self) -> Option<&ConditionProbability> {
        self.conditions
            .iter()
            .max_by(|a, b| a.probability.total_cmp(&b.probability))
    }

    /// Returns true if the API asked to stop or sent no question.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.should_stop.unwrap_or(false) || self.question.is_none()
    }
}

/// A follow-up question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// `single`, `group_single` or `group_multiple`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Question text.
    pub text: String,
    /// Answerable items.
    #[serde(default)]
    pub items: Vec<QuestionItem>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One answerable item of a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionItem {
    /// Evidence id the answer refers to.
    pub id: String,
    /// Item label.
    pub name: String,
    /// Allowed answers.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl QuestionItem {
    /// Evidence answering this item with `state`.
    #[must_use]
    pub fn answer(&self, state: EvidenceState) -> Evidence {
        Evidence::new(self.id.clone(), state)
    }
}

/// An allowed answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// Evidence state this answer maps to.
    pub id: EvidenceState,
    /// Answer label.
    pub label: String,
}

/// A condition ranked by a diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionProbability {
    /// Condition id.
    pub id: String,
    /// Medical name.
    pub name: String,
    /// Lay name.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Probability in `0.0..=1.0`.
    pub probability: f64,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Recommended care level.
///
/// The standard levels come first, most to least urgent, followed by the
/// COVID-19 levels in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageLevel {
    /// Call an ambulance.
    EmergencyAmbulance,
    /// Go to the emergency department.
    Emergency,
    /// See a doctor within 24 hours.
    #[serde(rename = "consultation_24")]
    Consultation24,
    /// See a doctor.
    Consultation,
    /// Self care is enough.
    SelfCare,
    /// Isolate and call an ambulance.
    IsolationAmbulance,
    /// Isolate and call a doctor.
    IsolationCall,
    /// Call a doctor.
    CallDoctor,
    /// Stay in quarantine.
    Quarantine,
    /// Monitor symptoms at home.
    SelfMonitoring,
    /// No risk of infection.
    NoRisk,
    /// A level this client does not list, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl TriageLevel {
    /// Returns true for the levels that call for an ambulance or the
    /// emergency department.
    #[must_use]
    pub const fn is_emergency(&self) -> bool {
        matches!(
            self,
            Self::EmergencyAmbulance | Self::Emergency | Self::IsolationAmbulance
        )
    }
}

/// Response of `/triage` and `/covid19/triage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageResponse {
    /// Recommended care level.
    pub triage_level: TriageLevel,
    /// Reported observations that need attention.
    #[serde(default)]
    pub serious: Vec<SeriousObservation>,
    /// Whether a remote consultation is appropriate.
    #[serde(default)]
    pub teleconsultation_applicable: Option<bool>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// A serious observation in a triage result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriousObservation {
    /// Evidence id.
    pub id: String,
    /// Medical name.
    pub name: String,
    /// Lay name.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Whether the observation alone is an emergency.
    #[serde(default)]
    pub is_emergency: bool,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `/explain`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    /// Evidence in favour of the target.
    #[serde(default)]
    pub supporting_evidence: Vec<ExplanationEntry>,
    /// Evidence against the target.
    #[serde(default)]
    pub conflicting_evidence: Vec<ExplanationEntry>,
    /// Evidence the patient did not confirm.
    #[serde(default)]
    pub unconfirmed_evidence: Vec<ExplanationEntry>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// One item of an explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplanationEntry {
    /// Evidence id.
    pub id: String,
    /// Medical name.
    pub name: String,
    /// Lay name.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// An item of `/suggest` or `/red_flags`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestedSymptom {
    /// Symptom id.
    pub id: String,
    /// Medical name.
    pub name: String,
    /// Lay name.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// An item of `/search`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matched observation id.
    pub id: String,
    /// Matched label.
    pub label: String,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

/// Response of `/parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResponse {
    /// Observations recognized in the text.
    #[serde(default)]
    pub mentions: Vec<Mention>,
    /// Whether the whole text was understood.
    #[serde(default)]
    pub obvious: bool,
    /// Remaining fields, including `tokens` when requested.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl ParseResponse {
    /// All mentions as evidence ready for a diagnosis request.
    #[must_use]
    pub fn to_evidence(&self) -> Vec<Evidence> {
        self.mentions.iter().map(Mention::to_evidence).collect()
    }
}

/// An observation found by `/parse`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mention {
    /// Observation id.
    pub id: String,
    /// Medical name.
    pub name: String,
    /// Lay name.
    #[serde(default)]
    pub common_name: Option<String>,
    /// Matched fragment of the text.
    #[serde(default)]
    pub orth: Option<String>,
    /// Observation state.
    pub choice_id: EvidenceState,
    /// `symptom` or `risk_factor`.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Remaining fields.
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Mention {
    /// Evidence for this mention, marked as initially reported.
    #[must_use]
    pub fn to_evidence(&self) -> Evidence {
        Evidence::new(self.id.clone(), self.choice_id).with_source(EvidenceSource::Initial)
    }
}
