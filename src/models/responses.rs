use serde::{Deserialize, Serialize};
use crate::models::domain::{DiagnosisResult, ScoredCamera, UserType};

/// Response for the catalog scoring endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResponse {
    pub cameras: Vec<ScoredCamera>,
    pub total_candidates: usize,
}

/// Response for the user-type inference endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserTypeResponse {
    pub user_type: UserType,
}

/// Response for the full diagnosis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub diagnosis_id: String,
    pub diagnosis: DiagnosisResult,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_ready: bool,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
