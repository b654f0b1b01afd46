// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Advice, BudgetPreference, CameraRecord, DiagnosisResult, ExperienceLevel, FeatureScores,
    Importance, PriceRange, Recommendations, ScoredCamera, ScoringWeights, SearchMode,
    SwipeAction, SwipeEvent, UserPreferences, UserType,
};
pub use requests::{DiagnosisRequest, ScoreRequest};
pub use responses::{DiagnosisResponse, ErrorResponse, HealthResponse, ScoreResponse, UserTypeResponse};
