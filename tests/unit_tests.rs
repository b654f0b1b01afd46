// Unit tests for CameraPicker Algo

use camerapicker_algo::core::{
    analysis::feature_scores,
    assembler::{assemble, recommend_accessories},
    scoring::{score_camera, score_catalog},
    traits::{infer_user_type, name_candidates, FixedPicker, RandomPicker},
};
use camerapicker_algo::models::{
    BudgetPreference, CameraRecord, ExperienceLevel, FeatureScores, Importance, PriceRange,
    ScoringWeights, SearchMode, SwipeAction, SwipeEvent, UserPreferences, UserType,
};
use camerapicker_algo::services::catalog::fallback_catalog;

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn street_preferences() -> UserPreferences {
    UserPreferences {
        experience_level: ExperienceLevel::Beginner,
        mode: SearchMode::Body,
        budget_preference: BudgetPreference::Band(PriceRange::Low),
        shooting_style: tags(&["street"]),
        portability_importance: Importance::High,
        priorities: vec![],
    }
}

fn swipe(id: &str, action: SwipeAction) -> SwipeEvent {
    SwipeEvent {
        camera_id: id.to_string(),
        action,
    }
}

#[test]
fn test_budget_match_scenario() {
    // A budget-friendly compact street camera for a beginner must collect
    // experience + budget + style + portability points.
    let camera = CameraRecord {
        id: "street-compact".to_string(),
        brand: "Test".to_string(),
        name: "Street Compact".to_string(),
        price: 80_000,
        price_range: PriceRange::Low,
        sensor_size: "aps_c".to_string(),
        megapixels: 26,
        features: tags(&["ibis"]),
        strengths: tags(&["image_quality"]),
        weaknesses: vec![],
        best_for: tags(&["street"]),
        experience_level: vec![ExperienceLevel::Beginner],
        budget_friendly: true,
        compact: true,
    };

    let score = score_camera(&camera, &street_preferences(), &ScoringWeights::default());
    assert!(score >= 55, "expected at least 55, got {}", score);
}

#[test]
fn test_score_catalog_sorted_and_bounded() {
    let catalog = fallback_catalog();
    let result = score_catalog(&catalog, &street_preferences(), &ScoringWeights::default());

    assert!(result.len() <= catalog.len().min(10));
    for pair in result.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_scoring_is_deterministic() {
    let catalog = fallback_catalog();
    let preferences = street_preferences();
    let weights = ScoringWeights::default();

    let first = score_catalog(&catalog, &preferences, &weights);
    let second = score_catalog(&catalog, &preferences, &weights);

    let ids = |result: &[camerapicker_algo::ScoredCamera]| {
        result
            .iter()
            .map(|s| (s.camera.id.clone(), s.score))
            .collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second));
}

#[test]
fn test_empty_catalog_scores_empty() {
    let result = score_catalog(&[], &street_preferences(), &ScoringWeights::default());
    assert!(result.is_empty());
}

#[test]
fn test_inference_on_empty_history() {
    let user_type = infer_user_type(&street_preferences(), &[], &FixedPicker(0));

    assert!(!user_type.traits.is_empty());
    assert_eq!(user_type.traits.len(), user_type.characteristics.len());
    assert_eq!(user_type.experience_level, ExperienceLevel::Beginner);
}

#[test]
fn test_inferred_name_comes_from_the_documented_candidates() {
    let preferences = street_preferences();

    for _ in 0..10 {
        let user_type = infer_user_type(&preferences, &[], &RandomPicker);
        let primary = user_type.traits.first().unwrap();
        assert!(
            name_candidates(primary).contains(&user_type.name.as_str()),
            "name '{}' not in the candidate set for '{}'",
            user_type.name,
            primary
        );
    }
}

#[test]
fn test_traits_and_description_are_deterministic() {
    let preferences = street_preferences();
    let history = vec![
        swipe("fujifilm-xt5", SwipeAction::Like),
        swipe("canon-r6ii", SwipeAction::Dislike),
        swipe("sony-a7iv", SwipeAction::Superlike),
    ];

    let first = infer_user_type(&preferences, &history, &RandomPicker);
    let second = infer_user_type(&preferences, &history, &RandomPicker);

    assert_eq!(first.traits, second.traits);
    assert_eq!(first.description, second.description);
}

#[test]
fn test_assemble_idempotent_over_the_fallback_catalog() {
    let catalog = fallback_catalog();
    let preferences = street_preferences();
    let user_type = infer_user_type(&preferences, &[], &FixedPicker(0));
    let scores = FeatureScores::default();

    let first = assemble(&catalog, &user_type, &scores, &preferences);
    let second = assemble(&catalog, &user_type, &scores, &preferences);

    assert_eq!(
        first.primary.as_ref().map(|c| c.id.clone()),
        second.primary.as_ref().map(|c| c.id.clone())
    );
    assert_eq!(first.alternatives.len(), second.alternatives.len());
    assert!(first.alternatives.len() <= 2);
}

#[test]
fn test_assemble_on_empty_catalog() {
    let preferences = street_preferences();
    let user_type = infer_user_type(&preferences, &[], &FixedPicker(0));

    let recs = assemble(&[], &user_type, &FeatureScores::default(), &preferences);

    assert!(recs.primary.is_none());
    assert!(recs.alternatives.is_empty());
    assert!(!recs.accessories.is_empty());
}

#[test]
fn test_accessory_default_for_empty_trait_set() {
    let user_type = UserType {
        traits: vec![],
        characteristics: vec![],
        name: "Nobody".to_string(),
        description: "No traits at all".to_string(),
        experience_level: ExperienceLevel::Beginner,
    };

    let accessories = recommend_accessories(&user_type, &FeatureScores::default());
    assert_eq!(accessories, vec!["Standard zoom lens", "Lightweight tripod"]);
}

#[test]
fn test_feature_scores_over_the_fallback_catalog() {
    let catalog = fallback_catalog();
    let history = vec![
        swipe("fujifilm-xt5", SwipeAction::Like),
        swipe("sony-a7iv", SwipeAction::Like),
        swipe("canon-r6ii", SwipeAction::Dislike),
    ];

    let scores = feature_scores(&catalog, &history);

    // Both liked bodies list image_quality as a strength.
    assert_eq!(scores.image_quality, 70);
    // One of three swipes liked a budget-friendly body.
    assert_eq!(scores.budget_consciousness, 33);
}
