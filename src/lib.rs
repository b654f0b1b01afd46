//! CameraPicker Algo - camera recommendation engine for the CameraPicker quiz
//!
//! This library scores a read-only camera catalog against a user's stated
//! preferences and swipe history, infers a photographer type, and assembles
//! recommendations and advice.

pub mod config;
pub mod core;
pub mod engine;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    scoring::score_catalog,
    traits::{infer_user_type, FixedPicker, NamePicker, RandomPicker},
};
pub use crate::engine::DiagnosisEngine;
pub use crate::models::{
    Advice, CameraRecord, DiagnosisResult, Recommendations, ScoredCamera, ScoringWeights,
    SwipeAction, SwipeEvent, UserPreferences, UserType,
};
pub use crate::services::{AdvisorClient, CatalogService};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let weights = ScoringWeights::default();
        assert_eq!(weights.experience, 20);
        assert!(score_catalog(&[], &sample_preferences(), &weights).is_empty());
    }

    fn sample_preferences() -> UserPreferences {
        UserPreferences {
            experience_level: models::ExperienceLevel::Beginner,
            mode: models::SearchMode::Body,
            budget_preference: models::BudgetPreference::Band(models::PriceRange::Low),
            shooting_style: vec![],
            portability_importance: models::Importance::Medium,
            priorities: vec![],
        }
    }
}
