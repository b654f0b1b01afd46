use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{SwipeEvent, UserPreferences};

/// Request to score the catalog for a user's stated preferences.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    pub preferences: UserPreferences,
}

/// Request to infer a user type or build a full diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DiagnosisRequest {
    pub preferences: UserPreferences,
    #[serde(default)]
    #[serde(alias = "swipeHistory", alias = "swipe_history")]
    #[validate(length(max = 500))]
    pub history: Vec<SwipeEvent>,
}
