//! Symptom catalog entry.

use serde::{Deserialize, Serialize};

use super::{json_model, SexFilter};

json_model! {
    /// A symptom from `/symptoms` or `/covid19/symptoms`.
    Symptom
}

/// A child symptom reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedSymptom {
    /// Child symptom id.
    pub id: String,
    /// How the child refines the parent, e.g. `character` or `location`.
    #[serde(default)]
    pub parent_relation: Option<String>,
}

impl Symptom {
    /// Medical name.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.str("name")
    }

    /// Lay name.
    #[must_use]
    pub fn common_name(&self) -> Option<&str> {
        self.0.str("common_name")
    }

    /// Interview question text.
    #[must_use]
    pub fn question(&self) -> Option<&str> {
        self.0.str("question")
    }

    /// Category name.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.0.str("category")
    }

    /// Seriousness, `normal` or `serious`.
    #[must_use]
    pub fn seriousness(&self) -> Option<&str> {
        self.0.str("seriousness")
    }

    /// Patients the symptom applies to.
    #[must_use]
    pub fn sex_filter(&self) -> Option<SexFilter> {
        self.0.parse("sex_filter")
    }

    /// Parent symptom id.
    #[must_use]
    pub fn parent_id(&self) -> Option<&str> {
        self.0.str("parent_id")
    }

    /// Relation to the parent symptom.
    #[must_use]
    pub fn parent_relation(&self) -> Option<&str> {
        self.0.str("parent_relation")
    }

    /// More specific child symptoms.
    #[must_use]
    pub fn children(&self) -> Vec<RelatedSymptom> {
        self.0.parse("children").unwrap_or_default()
    }

    /// Illustration URL.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        self.0.str("image_url")
    }

    /// Illustration attribution.
    #[must_use]
    pub fn image_source(&self) -> Option<&str> {
        self.0.str("image_source")
    }
}
