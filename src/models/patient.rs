//! Patient demographics.

use serde::{Deserialize, Serialize};

use super::JsonObject;

/// Biological sex of the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    /// Male patient.
    Male,
    /// Female patient.
    Female,
}

impl Sex {
    /// Wire value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

/// Which patients a catalog entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SexFilter {
    /// Applies to everyone.
    Both,
    /// Applies to male patients only.
    Male,
    /// Applies to female patients only.
    Female,
}

impl SexFilter {
    /// Returns true if an entry with this filter applies to `sex`.
    #[must_use]
    pub const fn applies_to(self, sex: Sex) -> bool {
        matches!(
            (self, sex),
            (Self::Both, _) | (Self::Male, Sex::Male) | (Self::Female, Sex::Female)
        )
    }
}

/// Unit of an age value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeUnit {
    /// Years.
    Year,
    /// Months.
    Month,
}

/// Patient age, either a bare number or `{ "value": .., "unit": .. }`.
///
/// The standard endpoints take the object form; the COVID-19 endpoints take
/// the bare number of years, see [`Age::normalized`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Age {
    /// Bare number of years.
    Value(u32),
    /// Value with an optional unit.
    Detailed {
        /// Numeric age.
        value: u32,
        /// Unit of `value`; the API assumes years when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        unit: Option<AgeUnit>,
        /// Any other keys of the age object.
        #[serde(flatten)]
        extra: JsonObject,
    },
}

impl Age {
    /// Age in years, in object form.
    #[must_use]
    pub fn years(value: u32) -> Self {
        Self::with_unit(value, AgeUnit::Year)
    }

    /// Age in months, in object form.
    #[must_use]
    pub fn months(value: u32) -> Self {
        Self::with_unit(value, AgeUnit::Month)
    }

    fn with_unit(value: u32, unit: AgeUnit) -> Self {
        Self::Detailed {
            value,
            unit: Some(unit),
            extra: JsonObject::new(),
        }
    }

    /// Numeric value regardless of form.
    #[must_use]
    pub const fn value(&self) -> u32 {
        match self {
            Self::Value(value) | Self::Detailed { value, .. } => *value,
        }
    }

    /// Unit of the value; a bare number is in years.
    #[must_use]
    pub const fn unit(&self) -> AgeUnit {
        match self {
            Self::Value(_) | Self::Detailed { unit: None, .. } => AgeUnit::Year,
            Self::Detailed {
                unit: Some(unit), ..
            } => *unit,
        }
    }

    /// The bare-number form, or `None` for an age in months.
    ///
    /// A bare number is always read as years, so a month age has no
    /// bare-number form.
    #[must_use]
    pub const fn normalized(&self) -> Option<Self> {
        match self.unit() {
            AgeUnit::Year => Some(Self::Value(self.value())),
            AgeUnit::Month => None,
        }
    }
}

impl From<u32> for Age {
    fn from(value: u32) -> Self {
        Self::years(value)
    }
}
