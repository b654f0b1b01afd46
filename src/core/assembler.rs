use crate::models::{CameraRecord, FeatureScores, Recommendations, UserPreferences, UserType};

/// Build the gear recommendations for a diagnosed user.
///
/// Candidates must pass the user-type filter and the score gate; survivors
/// are ranked by price descending (price stands in for overall quality when
/// finer signals are absent) and the top three become the primary pick and
/// up to two alternatives.
pub fn assemble(
    catalog: &[CameraRecord],
    user_type: &UserType,
    scores: &FeatureScores,
    _preferences: &UserPreferences,
) -> Recommendations {
    let mut candidates: Vec<&CameraRecord> = catalog
        .iter()
        .filter(|camera| matches_user_type(camera, user_type))
        .filter(|camera| matches_score_profile(camera, scores))
        .collect();

    candidates.sort_by(|a, b| b.price.cmp(&a.price));

    let mut top = candidates.into_iter().take(3);
    let primary = top.next().cloned();
    let alternatives: Vec<CameraRecord> = top.cloned().collect();

    Recommendations {
        primary,
        alternatives,
        accessories: recommend_accessories(user_type, scores),
    }
}

/// User-type compatibility: the camera must be pitched at the user's tier,
/// and when the primary trait maps to a use case, cover that use case.
fn matches_user_type(camera: &CameraRecord, user_type: &UserType) -> bool {
    if !camera.suits_level(user_type.experience_level) {
        return false;
    }

    match user_type.traits.first().map(String::as_str) {
        Some("portrait-artist") => camera.best_for_contains("portrait"),
        Some("street-photographer") => camera.best_for_contains("street"),
        Some("landscape-master") => camera.best_for_contains("landscape"),
        Some("action-hunter") => camera.best_for_contains("sports"),
        Some("vlog-creator") => camera.has_feature("4k_video"),
        _ => true,
    }
}

/// Score gate. The closing `true` makes the gate accept by default; the
/// positive matches above only ever let a candidate through early. This
/// always-pass behavior is the inherited contract (see DESIGN.md).
fn matches_score_profile(camera: &CameraRecord, scores: &FeatureScores) -> bool {
    if scores.image_quality > 70 && camera.megapixels > 30 {
        return true;
    }
    if scores.video_capability > 70 && camera.has_feature("4k_video") {
        return true;
    }
    if scores.budget_consciousness > 70 && camera.budget_friendly {
        return true;
    }
    true
}

/// Accessory suggestions from trait membership. Never empty: when no rule
/// fires, the generic default pair is returned.
pub fn recommend_accessories(user_type: &UserType, scores: &FeatureScores) -> Vec<String> {
    let has_trait = |key: &str| user_type.traits.iter().any(|t| t == key);
    let mut accessories: Vec<String> = Vec::new();
    let mut add = |item: &str, list: &mut Vec<String>| {
        if !list.iter().any(|seen| seen == item) {
            list.push(item.to_string());
        }
    };

    if has_trait("portrait-artist") {
        add("85mm f/1.4 portrait lens", &mut accessories);
        add("External flash", &mut accessories);
    }
    if has_trait("landscape-master") {
        add("Wide-angle zoom lens (16-35mm)", &mut accessories);
        add("ND and polarizing filter kit", &mut accessories);
    }
    if has_trait("action-hunter") {
        add("Telephoto zoom lens (70-200mm)", &mut accessories);
    }
    if has_trait("landscape-master") || scores.image_quality > 80 {
        add("Lightweight tripod", &mut accessories);
    }

    if accessories.is_empty() {
        accessories.push("Standard zoom lens".to_string());
        accessories.push("Lightweight tripod".to_string());
    }

    accessories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BudgetPreference, ExperienceLevel, Importance, PriceRange, SearchMode,
    };

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_camera(id: &str, price: u32, best_for: &[&str]) -> CameraRecord {
        CameraRecord {
            id: id.to_string(),
            brand: "Test".to_string(),
            name: id.to_string(),
            price,
            price_range: PriceRange::Medium,
            sensor_size: "full_frame".to_string(),
            megapixels: 24,
            features: tags(&["4k_video"]),
            strengths: tags(&["image_quality"]),
            weaknesses: vec![],
            best_for: tags(best_for),
            experience_level: vec![ExperienceLevel::Beginner, ExperienceLevel::Intermediate],
            budget_friendly: false,
            compact: false,
        }
    }

    fn create_user_type(traits: &[(&str, &str)]) -> UserType {
        UserType {
            traits: traits.iter().map(|(t, _)| t.to_string()).collect(),
            characteristics: traits.iter().map(|(_, c)| c.to_string()).collect(),
            name: "Test Type".to_string(),
            description: "Test description".to_string(),
            experience_level: ExperienceLevel::Beginner,
        }
    }

    fn create_preferences() -> UserPreferences {
        UserPreferences {
            experience_level: ExperienceLevel::Beginner,
            mode: SearchMode::Body,
            budget_preference: BudgetPreference::Band(PriceRange::Medium),
            shooting_style: vec![],
            portability_importance: Importance::Medium,
            priorities: vec![],
        }
    }

    #[test]
    fn test_primary_is_the_most_expensive_survivor() {
        let catalog = vec![
            create_camera("mid", 200_000, &["portrait"]),
            create_camera("flagship", 350_000, &["portrait"]),
            create_camera("entry", 90_000, &["portrait"]),
        ];
        let user_type = create_user_type(&[("portrait-artist", "people-focused")]);

        let recs = assemble(
            &catalog,
            &user_type,
            &FeatureScores::default(),
            &create_preferences(),
        );

        assert_eq!(recs.primary.unwrap().id, "flagship");
        assert_eq!(recs.alternatives.len(), 2);
        assert_eq!(recs.alternatives[0].id, "mid");
    }

    #[test]
    fn test_primary_trait_use_case_filter_applies() {
        let catalog = vec![
            create_camera("sports-body", 300_000, &["sports"]),
            create_camera("portrait-body", 250_000, &["portrait"]),
        ];
        let user_type = create_user_type(&[("portrait-artist", "people-focused")]);

        let recs = assemble(
            &catalog,
            &user_type,
            &FeatureScores::default(),
            &create_preferences(),
        );

        assert_eq!(recs.primary.unwrap().id, "portrait-body");
        assert!(recs.alternatives.is_empty());
    }

    #[test]
    fn test_experience_mismatch_excludes_candidate() {
        let mut advanced_only = create_camera("pro", 400_000, &["portrait"]);
        advanced_only.experience_level = vec![ExperienceLevel::Advanced];
        let catalog = vec![advanced_only];
        let user_type = create_user_type(&[("portrait-artist", "people-focused")]);

        let recs = assemble(
            &catalog,
            &user_type,
            &FeatureScores::default(),
            &create_preferences(),
        );

        assert!(recs.primary.is_none());
    }

    #[test]
    fn test_score_gate_accepts_by_default() {
        // No score crosses its threshold, the candidate still passes.
        let mut camera = create_camera("plain", 100_000, &["street"]);
        camera.megapixels = 20;
        camera.features.clear();
        let catalog = vec![camera];
        let user_type = create_user_type(&[("street-photographer", "observant")]);

        let recs = assemble(
            &catalog,
            &user_type,
            &FeatureScores::default(),
            &create_preferences(),
        );

        assert!(recs.primary.is_some());
    }

    #[test]
    fn test_assemble_is_idempotent() {
        let catalog = vec![
            create_camera("a", 200_000, &["portrait"]),
            create_camera("b", 200_000, &["portrait"]),
            create_camera("c", 150_000, &["portrait"]),
        ];
        let user_type = create_user_type(&[("portrait-artist", "people-focused")]);
        let scores = FeatureScores::default();
        let preferences = create_preferences();

        let first = assemble(&catalog, &user_type, &scores, &preferences);
        let second = assemble(&catalog, &user_type, &scores, &preferences);

        assert_eq!(
            first.primary.as_ref().map(|c| &c.id),
            second.primary.as_ref().map(|c| &c.id)
        );
        let ids = |recs: &Recommendations| {
            recs.alternatives.iter().map(|c| c.id.clone()).collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_empty_catalog_yields_no_primary_but_default_accessories() {
        let user_type = create_user_type(&[("explorer", "curious")]);

        let recs = assemble(
            &[],
            &user_type,
            &FeatureScores::default(),
            &create_preferences(),
        );

        assert!(recs.primary.is_none());
        assert!(recs.alternatives.is_empty());
        assert_eq!(recs.accessories, vec!["Standard zoom lens", "Lightweight tripod"]);
    }

    #[test]
    fn test_accessories_default_for_unrecognized_traits() {
        let user_type = create_user_type(&[("mystery", "unknown")]);
        let accessories = recommend_accessories(&user_type, &FeatureScores::default());

        assert_eq!(accessories, vec!["Standard zoom lens", "Lightweight tripod"]);
    }

    #[test]
    fn test_portrait_accessories() {
        let user_type = create_user_type(&[("portrait-artist", "people-focused")]);
        let accessories = recommend_accessories(&user_type, &FeatureScores::default());

        assert!(accessories.iter().any(|a| a.contains("85mm")));
        assert!(accessories.iter().any(|a| a.contains("flash")));
    }

    #[test]
    fn test_high_image_quality_score_adds_a_tripod() {
        let user_type = create_user_type(&[("quality-first", "meticulous")]);
        let scores = FeatureScores {
            image_quality: 90,
            ..FeatureScores::default()
        };

        let accessories = recommend_accessories(&user_type, &scores);
        assert!(accessories.iter().any(|a| a == "Lightweight tripod"));
    }
}
