//! Query parameters and list filters.

use crate::models::Sex;

/// Ordered URL query parameters.
///
/// Used both as the raw query of a request and as the caller-facing filter
/// set of list/search operations. [`with_param`](Self::with_param) replaces
/// an existing key, [`push`](Self::push) appends a repeated key.
///
/// # Example
///
/// ```
/// use infermedica_api::connection::QueryParams;
///
/// let filters = QueryParams::new()
///     .with_max_results(3)
///     .with_type("symptom")
///     .with_type("risk_factor");
///
/// assert_eq!(filters.get("max_results"), Some("3"));
/// assert_eq!(filters.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Create an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Set a parameter, replacing every existing value for `key`.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.set(key, value);
        self
    }

    /// Set a parameter in place, replacing every existing value for `key`.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        self.0.retain(|(k, _)| *k != key);
        self.0.push((key, value.to_string()));
    }

    /// Append a parameter, keeping earlier values for the same key.
    #[must_use]
    pub fn push(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.push((key.into(), value.to_string()));
        self
    }

    /// Limit the number of returned items.
    #[must_use]
    pub fn with_max_results(self, max_results: u32) -> Self {
        self.with_param("max_results", max_results)
    }

    /// Filter by patient sex.
    #[must_use]
    pub fn with_sex(self, sex: Sex) -> Self {
        self.with_param("sex", sex.as_str())
    }

    /// Filter by patient age in years.
    #[must_use]
    pub fn with_age(self, age: u32) -> Self {
        self.with_param("age.value", age)
    }

    /// Restrict search results to a concept type (repeatable).
    #[must_use]
    pub fn with_type(self, concept_type: &str) -> Self {
        self.push("types", concept_type)
    }

    /// First value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of parameters, counting repeated keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Extend<(String, String)> for QueryParams {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
