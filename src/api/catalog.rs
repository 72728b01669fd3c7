//! Catalog operations: conditions, symptoms, lab tests, risk factors and
//! model info.

use super::{decode_model, index_by_id, resource_path, Api};
use crate::connection::QueryParams;
use crate::error::{ApiError, ModelError};
use crate::models::{Collection, Condition, Info, LabTest, RiskFactor, Symptom};
use crate::traits::Transport;

impl<T: Transport> Api<T> {
    /// List conditions keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not an array
    /// of objects with string ids.
    pub async fn list_conditions(&self, filters: QueryParams) -> Result<Collection, ApiError> {
        self.list("/conditions", filters).await
    }

    /// Fetch one condition.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an empty id, otherwise any
    /// transport or decoding error.
    pub async fn get_condition(&self, id: &str) -> Result<Condition, ApiError> {
        self.fetch("conditions", id, QueryParams::new()).await
    }

    /// List lab tests keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_lab_tests(&self) -> Result<Collection, ApiError> {
        self.list("/lab_tests", QueryParams::new()).await
    }

    /// Fetch one lab test.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an empty id, otherwise any
    /// transport or decoding error.
    pub async fn get_lab_test(&self, id: &str) -> Result<LabTest, ApiError> {
        self.fetch("lab_tests", id, QueryParams::new()).await
    }

    /// List risk factors keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_risk_factors(&self, filters: QueryParams) -> Result<Collection, ApiError> {
        self.list("/risk_factors", filters).await
    }

    /// List COVID-19 risk factors keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_covid_risk_factors(&self) -> Result<Collection, ApiError> {
        self.list("/covid19/risk_factors", QueryParams::new()).await
    }

    /// Fetch one risk factor.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an empty id, otherwise any
    /// transport or decoding error.
    pub async fn get_risk_factor(
        &self,
        id: &str,
        filters: QueryParams,
    ) -> Result<RiskFactor, ApiError> {
        self.fetch("risk_factors", id, filters).await
    }

    /// List symptoms keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_symptoms(&self, filters: QueryParams) -> Result<Collection, ApiError> {
        self.list("/symptoms", filters).await
    }

    /// List COVID-19 symptoms keyed by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is malformed.
    pub async fn list_covid_symptoms(&self) -> Result<Collection, ApiError> {
        self.list("/covid19/symptoms", QueryParams::new()).await
    }

    /// Fetch one symptom.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidRequest`] for an empty id, otherwise any
    /// transport or decoding error.
    pub async fn get_symptom(&self, id: &str, filters: QueryParams) -> Result<Symptom, ApiError> {
        self.fetch("symptoms", id, filters).await
    }

    /// Fetch metadata about the selected model.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the body is not an
    /// object.
    pub async fn get_info(&self) -> Result<Info, ApiError> {
        let path = "/info";
        let value = self.transport.get(path.to_string(), QueryParams::new()).await?;
        decode_model(path, value)
    }

    async fn list(&self, path: &str, filters: QueryParams) -> Result<Collection, ApiError> {
        let value = self.transport.get(path.to_string(), filters).await?;
        index_by_id(path, value)
    }

    async fn fetch<M>(&self, collection: &str, id: &str, filters: QueryParams) -> Result<M, ApiError>
    where
        M: TryFrom<serde_json::Value, Error = ModelError>,
    {
        let path = resource_path(collection, id)?;
        let value = self.transport.get(path.clone(), filters).await?;
        decode_model(&path, value)
    }
}
