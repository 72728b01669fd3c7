//! Interview operations: diagnosis, triage, explain, search, suggest, red
//! flags and parse.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{decode, Api};
use crate::connection::QueryParams;
use crate::error::ApiError;
use crate::models::{
    DiagnosisRequest, DiagnosisResponse, ExplainResponse, ParseRequest, ParseResponse,
    SearchResult, SuggestedSymptom, TriageResponse,
};
use crate::traits::Transport;

/// `max_results` sent by [`Api::search`] unless the caller sets one.
pub const DEFAULT_SEARCH_MAX_RESULTS: u32 = 8;

const PHRASE_PARAM: &str = "phrase";
const MAX_RESULTS_PARAM: &str = "max_results";

impl<T: Transport> Api<T> {
    /// Rank conditions and get the next question.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response does not
    /// match [`DiagnosisResponse`].
    pub async fn diagnosis(&self, request: &DiagnosisRequest) -> Result<DiagnosisResponse, ApiError> {
        self.action("/diagnosis", request.to_json()?, QueryParams::new())
            .await
    }

    /// Recommend a care level.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response does not
    /// match [`TriageResponse`].
    pub async fn triage(&self, request: &DiagnosisRequest) -> Result<TriageResponse, ApiError> {
        self.action("/triage", request.to_json()?, QueryParams::new())
            .await
    }

    /// COVID-19 diagnosis. The age is sent as a bare number of years;
    /// `request` itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] without sending anything if the
    /// age is in months, otherwise any transport or decoding error.
    pub async fn covid19_diagnosis(
        &self,
        request: &DiagnosisRequest,
    ) -> Result<DiagnosisResponse, ApiError> {
        self.action("/covid19/diagnosis", request.to_covid_json()?, QueryParams::new())
            .await
    }

    /// COVID-19 triage. The age is sent as a bare number of years; `request`
    /// itself is not modified.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] without sending anything if the
    /// age is in months, otherwise any transport or decoding error.
    pub async fn covid19_triage(&self, request: &DiagnosisRequest) -> Result<TriageResponse, ApiError> {
        self.action("/covid19/triage", request.to_covid_json()?, QueryParams::new())
            .await
    }

    /// Explain which evidence supports the request's `target`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingField`] without sending anything if
    /// `target` is unset or blank, otherwise any transport or decoding
    /// error.
    pub async fn explain(
        &self,
        request: &DiagnosisRequest,
        filters: QueryParams,
    ) -> Result<ExplainResponse, ApiError> {
        if request.explain_target().is_none() {
            return Err(ApiError::MissingField {
                field: "target".into(),
            });
        }
        self.action("/explain", request.to_json()?, filters).await
    }

    /// Search observations by phrase.
    ///
    /// The query starts with `phrase` and `max_results` (the caller's value
    /// or [`DEFAULT_SEARCH_MAX_RESULTS`]) followed by the remaining filters.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for a blank phrase, otherwise any
    /// transport or decoding error.
    pub async fn search(
        &self,
        phrase: &str,
        filters: QueryParams,
    ) -> Result<Vec<SearchResult>, ApiError> {
        if phrase.trim().is_empty() {
            return Err(ApiError::InvalidRequest {
                message: "search phrase must not be empty".into(),
            });
        }

        let max_results = filters
            .get(MAX_RESULTS_PARAM)
            .map_or_else(|| DEFAULT_SEARCH_MAX_RESULTS.to_string(), str::to_owned);
        let mut query = QueryParams::new()
            .with_param(PHRASE_PARAM, phrase)
            .with_param(MAX_RESULTS_PARAM, max_results);
        query.extend(
            filters
                .into_iter()
                .filter(|(key, _)| key != PHRASE_PARAM && key != MAX_RESULTS_PARAM),
        );

        let path = "/search";
        let value = self.transport.get(path.to_string(), query).await?;
        decode(path, value)
    }

    /// Symptoms related to the evidence collected so far (`/suggest`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response is not a
    /// list of suggestions.
    pub async fn related_symptoms(
        &self,
        request: &DiagnosisRequest,
        filters: QueryParams,
    ) -> Result<Vec<SuggestedSymptom>, ApiError> {
        self.action("/suggest", request.to_json()?, filters).await
    }

    /// Alarming symptoms worth asking about given the evidence so far.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response is not a
    /// list of suggestions.
    pub async fn red_flags(
        &self,
        request: &DiagnosisRequest,
        filters: QueryParams,
    ) -> Result<Vec<SuggestedSymptom>, ApiError> {
        self.action("/red_flags", request.to_json()?, filters).await
    }

    /// Find observations mentioned in free text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for blank text, otherwise any
    /// transport or decoding error.
    pub async fn parse(&self, request: &ParseRequest) -> Result<ParseResponse, ApiError> {
        if request.text.trim().is_empty() {
            return Err(ApiError::InvalidRequest {
                message: "text to parse must not be empty".into(),
            });
        }
        self.action("/parse", request.to_json()?, QueryParams::new())
            .await
    }

    async fn action<R: DeserializeOwned>(
        &self,
        path: &str,
        body: Value,
        query: QueryParams,
    ) -> Result<R, ApiError> {
        debug!(path, "Sending interview request");
        let value = self.transport.post(path.to_string(), body, query).await?;
        decode(path, value)
    }
}
