use std::sync::Arc;
use std::time::Duration;

use crate::core::{
    advice::compose_local,
    analysis::{disliked_features, feature_scores, liked_features},
    assembler::assemble,
    scoring::score_catalog,
    traits::{infer_user_type, NamePicker, RandomPicker},
};
use crate::models::{
    Advice, DiagnosisResult, FeatureScores, ScoredCamera, ScoringWeights, SwipeEvent,
    UserPreferences, UserType,
};
use crate::services::{AdvisorClient, CatalogService, DiagnosisDraft};

const DEFAULT_READY_TIMEOUT: Duration = Duration::from_secs(10);

/// Orchestrates the full diagnosis flow.
///
/// Owns the catalog service, the optional advice provider, the scoring
/// weights, and the name-selection strategy; every operation reads the
/// catalog as an immutable snapshot.
pub struct DiagnosisEngine {
    catalog: Arc<CatalogService>,
    advisor: Option<Arc<AdvisorClient>>,
    weights: ScoringWeights,
    picker: Arc<dyn NamePicker>,
    ready_timeout: Duration,
}

impl DiagnosisEngine {
    pub fn new(
        catalog: Arc<CatalogService>,
        advisor: Option<Arc<AdvisorClient>>,
        weights: ScoringWeights,
    ) -> Self {
        Self {
            catalog,
            advisor,
            weights,
            picker: Arc::new(RandomPicker),
            ready_timeout: DEFAULT_READY_TIMEOUT,
        }
    }

    /// Replace the name-selection strategy. Tests use this to pin output.
    pub fn with_picker(mut self, picker: Arc<dyn NamePicker>) -> Self {
        self.picker = picker;
        self
    }

    pub fn with_ready_timeout(mut self, timeout: Duration) -> Self {
        self.ready_timeout = timeout;
        self
    }

    /// Load the catalog and wait for readiness. Returns the readiness flag;
    /// an unready catalog downgrades every later call to empty results
    /// rather than an error.
    pub async fn load_catalog(&self) -> bool {
        self.catalog.load().await;
        self.catalog.await_ready(self.ready_timeout).await
    }

    /// Rank the catalog for the user's stated preferences (top 10).
    pub async fn score_for_preferences(&self, preferences: &UserPreferences) -> Vec<ScoredCamera> {
        let catalog = self.catalog.cameras().await;
        score_catalog(&catalog, preferences, &self.weights)
    }

    /// Infer the photographer type from the swipe session.
    pub fn infer_user_type(&self, history: &[SwipeEvent], preferences: &UserPreferences) -> UserType {
        infer_user_type(preferences, history, self.picker.as_ref())
    }

    /// Build the complete diagnosis: swipe analysis, recommendations, and
    /// advice (remote when available, local otherwise).
    pub async fn build_diagnosis(
        &self,
        user_type: UserType,
        history: &[SwipeEvent],
        preferences: &UserPreferences,
    ) -> DiagnosisResult {
        let catalog = self.catalog.cameras().await;

        let scores = feature_scores(&catalog, history);
        let liked = liked_features(&catalog, history);
        let disliked = disliked_features(&catalog, history);
        let recommendations = assemble(&catalog, &user_type, &scores, preferences);
        let advice = self
            .compose_advice(&user_type, &scores, &liked, &disliked, preferences)
            .await;

        DiagnosisResult {
            user_type,
            scores,
            liked_features: liked,
            disliked_features: disliked,
            recommendations,
            advice,
            preferences: preferences.clone(),
        }
    }

    async fn compose_advice(
        &self,
        user_type: &UserType,
        scores: &FeatureScores,
        liked: &[String],
        disliked: &[String],
        preferences: &UserPreferences,
    ) -> Advice {
        if let Some(advisor) = &self.advisor {
            let draft = DiagnosisDraft {
                user_type,
                scores,
                liked_features: liked,
                disliked_features: disliked,
                preferences,
            };

            match advisor.generate_advice(&draft).await {
                Ok(advice) => return advice,
                Err(e) => {
                    tracing::warn!("Advice provider unavailable ({}), using local advice", e);
                }
            }
        }

        compose_local(user_type, scores, preferences)
    }
}
