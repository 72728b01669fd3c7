//! Risk factor catalog entry.

use super::{json_model, SexFilter};

json_model! {
    /// A risk factor from `/risk_factors` or `/covid19/risk_factors`.
    RiskFactor
}

impl RiskFactor {
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

    /// Patients the risk factor applies to.
    #[must_use]
    pub fn sex_filter(&self) -> Option<SexFilter> {
        self.0.parse("sex_filter")
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
