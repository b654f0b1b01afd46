use crate::models::{CameraRecord, Importance, PriceRange, ScoredCamera, ScoringWeights, UserPreferences};

/// Scoring requests return at most this many cameras.
const MAX_RESULTS: usize = 10;

/// Score every catalog camera against the user's stated preferences and
/// return the top candidates, highest score first.
///
/// Scoring terms (all independently additive):
///     experience match   +20   camera is pitched at the user's tier
///     budget match       +15   band matches (low checks budget_friendly)
///     style match        +10   best_for intersects shooting_style
///     compact wanted     +10   portability high and camera is compact
///     bulk tolerated      +5   portability low and camera is not compact
///     versatility         +5   camera covers more than 3 use cases
///
/// The sort is stable, so cameras with equal scores keep catalog order.
pub fn score_catalog(
    catalog: &[CameraRecord],
    preferences: &UserPreferences,
    weights: &ScoringWeights,
) -> Vec<ScoredCamera> {
    let mut scored: Vec<ScoredCamera> = catalog
        .iter()
        .map(|camera| ScoredCamera {
            score: score_camera(camera, preferences, weights),
            camera: camera.clone(),
        })
        .collect();

    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_RESULTS);
    scored
}

/// Accumulate the weighted terms for one camera. Pure; no early exit, a
/// camera may collect any subset of the terms.
pub fn score_camera(
    camera: &CameraRecord,
    preferences: &UserPreferences,
    weights: &ScoringWeights,
) -> u32 {
    let mut score = 0;

    if camera.suits_level(preferences.experience_level) {
        score += weights.experience;
    }

    let budget_match = match preferences.budget_preference.band() {
        PriceRange::Low => camera.budget_friendly,
        PriceRange::Medium => camera.price_range == PriceRange::Medium,
        PriceRange::High => camera.price_range == PriceRange::High,
    };
    if budget_match {
        score += weights.budget;
    }

    if camera
        .best_for
        .iter()
        .any(|use_case| preferences.shooting_style.iter().any(|s| s == use_case))
    {
        score += weights.style;
    }

    match preferences.portability_importance {
        Importance::High if camera.compact => score += weights.compact_wanted,
        Importance::Low if !camera.compact => score += weights.bulk_tolerated,
        _ => {}
    }

    if camera.best_for.len() > 3 {
        score += weights.versatility;
    }

    score
}
