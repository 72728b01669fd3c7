//! Condition catalog entry.

use super::{json_model, SexFilter};

json_model! {
    /// A medical condition from `/conditions`.
    Condition
}

impl Condition {
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

    /// Patients the condition applies to.
    #[must_use]
    pub fn sex_filter(&self) -> Option<SexFilter> {
        self.0.parse("sex_filter")
    }

    /// Category names.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        self.0.strings("categories")
    }

    /// Prevalence bucket, e.g. `very_rare`.
    #[must_use]
    pub fn prevalence(&self) -> Option<&str> {
        self.0.str("prevalence")
    }

    /// Acuteness, e.g. `chronic`.
    #[must_use]
    pub fn acuteness(&self) -> Option<&str> {
        self.0.str("acuteness")
    }

    /// Severity, e.g. `moderate`.
    #[must_use]
    pub fn severity(&self) -> Option<&str> {
        self.0.str("severity")
    }

    /// Recommended triage level.
    #[must_use]
    pub fn triage_level(&self) -> Option<&str> {
        self.0.str("triage_level")
    }

    /// Patient-facing advice from `extras.hint`.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        self.0.nested_str("extras", "hint")
    }

    /// ICD-10 code from `extras.icd10_code`.
    #[must_use]
    pub fn icd10_code(&self) -> Option<&str> {
        self.0.nested_str("extras", "icd10_code")
    }
}
