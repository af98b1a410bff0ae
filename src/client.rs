use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{AgeGroupTrends, DashboardResponse, GenderAnalysis, PopulationRisk};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("unexpected status {0}")]
    Status(StatusCode),
    #[error("parse error: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Read-only client for the demographic analytics endpoints. No retry, no
/// caching, no auth; callers handle failures per cycle.
pub struct DashboardClient {
    client: Client,
    base: String,
}

impl DashboardClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base: base.into(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = resp.text().await.map_err(FetchError::Network)?;
        serde_json::from_str(&body).map_err(FetchError::Parse)
    }

    pub async fn fetch_dashboard(&self) -> Result<DashboardResponse, FetchError> {
        self.get_json("/api/demographic/dashboard", &[]).await
    }

    pub async fn fetch_gender_analysis(&self) -> Result<GenderAnalysis, FetchError> {
        self.get_json(
            "/api/demographic/analysis",
            &[("analysis_type", "gender_comparison")],
        )
        .await
    }

    pub async fn fetch_age_group_trends(&self) -> Result<AgeGroupTrends, FetchError> {
        self.get_json(
            "/api/demographic/analysis",
            &[("analysis_type", "age_group_trends")],
        )
        .await
    }

    pub async fn fetch_population_risk(&self) -> Result<PopulationRisk, FetchError> {
        self.get_json(
            "/api/demographic/analysis",
            &[("analysis_type", "population_risk")],
        )
        .await
    }
}
