use serde::{Deserialize, Serialize};

/// Skill tier of a user, and the tiers a camera is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// Coarse price band of a camera body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Low,
    Medium,
    High,
}

impl Default for PriceRange {
    fn default() -> Self {
        PriceRange::Medium
    }
}

/// What the user is shopping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    Body,
    Lens,
    Combo,
}

/// How much a concern matters to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    Medium,
    High,
}

/// One catalog entry.
///
/// Every set-valued field defaults to empty and every flag to false, so a
/// source record missing a field deserializes with neutral defaults instead
/// of aborting the load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraRecord {
    pub id: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: u32,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub sensor_size: String,
    #[serde(default)]
    pub megapixels: u32,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub best_for: Vec<String>,
    #[serde(default)]
    pub experience_level: Vec<ExperienceLevel>,
    #[serde(default)]
    pub budget_friendly: bool,
    #[serde(default)]
    pub compact: bool,
}

impl CameraRecord {
    /// Whether the camera is pitched at the given skill tier.
    pub fn suits_level(&self, level: ExperienceLevel) -> bool {
        self.experience_level.contains(&level)
    }

    pub fn has_feature(&self, tag: &str) -> bool {
        self.features.iter().any(|f| f == tag)
    }

    pub fn has_strength(&self, tag: &str) -> bool {
        self.strengths.iter().any(|s| s == tag)
    }

    pub fn has_weakness(&self, tag: &str) -> bool {
        self.weaknesses.iter().any(|w| w == tag)
    }

    pub fn best_for_contains(&self, tag: &str) -> bool {
        self.best_for.iter().any(|b| b == tag)
    }
}

/// Budget intent, stated either as a coarse band or as a raw amount.
///
/// Sources disagree on the shape, so both are accepted on the wire and
/// normalized to a band with [`BudgetPreference::band`] before scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BudgetPreference {
    Band(PriceRange),
    Numeric(u32),
}

impl BudgetPreference {
    /// Normalize to a coarse band. Thresholds follow the catalog's pricing:
    /// entry bodies sit under 100 000, the mid range under 250 000.
    pub fn band(self) -> PriceRange {
        match self {
            BudgetPreference::Band(band) => band,
            BudgetPreference::Numeric(amount) if amount < 100_000 => PriceRange::Low,
            BudgetPreference::Numeric(amount) if amount < 250_000 => PriceRange::Medium,
            BudgetPreference::Numeric(_) => PriceRange::High,
        }
    }
}

/// A user's stated intent for one session. Immutable during scoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    pub experience_level: ExperienceLevel,
    pub mode: SearchMode,
    #[serde(alias = "budget")]
    pub budget_preference: BudgetPreference,
    #[serde(default)]
    pub shooting_style: Vec<String>,
    pub portability_importance: Importance,
    #[serde(default)]
    pub priorities: Vec<String>,
}

/// A user's decision on one candidate camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeAction {
    Like,
    Dislike,
    Superlike,
}

impl SwipeAction {
    /// Likes and superlikes count as positive signals.
    pub fn is_positive(self) -> bool {
        matches!(self, SwipeAction::Like | SwipeAction::Superlike)
    }
}

/// One swipe decision. History is kept in arrival order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwipeEvent {
    pub camera_id: String,
    pub action: SwipeAction,
}

/// A catalog camera annotated with its suitability score. Derived, never
/// persisted; recomputed on every scoring request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCamera {
    #[serde(flatten)]
    pub camera: CameraRecord,
    pub score: u32,
}

/// Per-concern scores (0-100) derived from the swipe session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureScores {
    pub image_quality: u32,
    pub autofocus: u32,
    pub video_capability: u32,
    pub portability: u32,
    pub budget_consciousness: u32,
}

impl Default for FeatureScores {
    fn default() -> Self {
        Self {
            image_quality: 50,
            autofocus: 50,
            video_capability: 50,
            portability: 50,
            budget_consciousness: 50,
        }
    }
}

/// The inferred photographer type. Computed once per completed swipe
/// session; not mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserType {
    /// Trait keys, primary trait first.
    pub traits: Vec<String>,
    /// Descriptive keys, parallel to `traits`.
    pub characteristics: Vec<String>,
    pub name: String,
    pub description: String,
    pub experience_level: ExperienceLevel,
}

/// Gear suggestions assembled from scores and traits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendations {
    pub primary: Option<CameraRecord>,
    pub alternatives: Vec<CameraRecord>,
    pub accessories: Vec<String>,
}

/// Guidance strings grouped by horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Advice {
    #[serde(default)]
    pub immediate: Vec<String>,
    #[serde(default)]
    pub long_term: Vec<String>,
    #[serde(default)]
    pub technique: Vec<String>,
}

/// The final diagnosis returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisResult {
    pub user_type: UserType,
    pub scores: FeatureScores,
    pub liked_features: Vec<String>,
    pub disliked_features: Vec<String>,
    pub recommendations: Recommendations,
    pub advice: Advice,
    pub preferences: UserPreferences,
}

/// Points awarded per scoring term.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub experience: u32,
    pub budget: u32,
    pub style: u32,
    pub compact_wanted: u32,
    pub bulk_tolerated: u32,
    pub versatility: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            experience: 20,
            budget: 15,
            style: 10,
            compact_wanted: 10,
            bulk_tolerated: 5,
            versatility: 5,
        }
    }
}
