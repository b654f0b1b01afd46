use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::OnceCell;

use crate::models::{Advice, FeatureScores, UserPreferences, UserType};

/// Errors from the advice provider. None of them reach the end caller; the
/// composer substitutes the local fallback on any of these.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("advice provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid advice response: {0}")]
    InvalidResponse(String),

    #[error("advice provider reported itself unavailable")]
    Unavailable,
}

/// Diagnosis-in-progress payload sent to the advice provider.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisDraft<'a> {
    #[serde(rename = "photographerType")]
    pub user_type: &'a UserType,
    pub scores: &'a FeatureScores,
    #[serde(rename = "likedFeatures")]
    pub liked_features: &'a [String],
    #[serde(rename = "dislikedFeatures")]
    pub disliked_features: &'a [String],
    #[serde(rename = "userPreferences")]
    pub preferences: &'a UserPreferences,
}

/// Client for the external advice provider.
///
/// The provider's health endpoint is consulted lazily and the verdict is
/// cached for the session; an unhealthy provider short-circuits every
/// subsequent advice call to the fallback path.
pub struct AdvisorClient {
    base_url: String,
    client: Client,
    healthy: OnceCell<bool>,
}

impl AdvisorClient {
    pub fn new(base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            client,
            healthy: OnceCell::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Health verdict, computed on first use and cached for the session.
    pub async fn is_available(&self) -> bool {
        *self
            .healthy
            .get_or_init(|| async {
                match self.check_health().await {
                    Ok(healthy) => healthy,
                    Err(e) => {
                        tracing::debug!("Advice provider health check failed: {}", e);
                        false
                    }
                }
            })
            .await
    }

    async fn check_health(&self) -> Result<bool, AdvisorError> {
        let response = self.client.get(self.endpoint("/api/health")).send().await?;
        if !response.status().is_success() {
            return Ok(false);
        }

        let json: Value = response.json().await?;
        Ok(json.get("status").and_then(Value::as_str) == Some("ok"))
    }

    /// Request enriched advice for a diagnosis in progress. Any failure is
    /// returned as a typed error for the caller's fallback path.
    pub async fn generate_advice(&self, draft: &DiagnosisDraft<'_>) -> Result<Advice, AdvisorError> {
        if !self.is_available().await {
            return Err(AdvisorError::Unavailable);
        }

        let response = self
            .client
            .post(self.endpoint("/api/generate-advice"))
            .json(&serde_json::json!({ "diagnosisData": draft }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AdvisorError::Status(response.status()));
        }

        let json: Value = response.json().await?;
        let advice = json
            .get("advice")
            .ok_or_else(|| AdvisorError::InvalidResponse("missing advice field".into()))?;

        serde_json::from_value(advice.clone())
            .map_err(|e| AdvisorError::InvalidResponse(e.to_string()))
    }
}
