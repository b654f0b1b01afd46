use crate::models::{Advice, ExperienceLevel, FeatureScores, UserPreferences, UserType};

/// Output bounds keep the local advice compact.
const MAX_IMMEDIATE: usize = 2;
const MAX_LONG_TERM: usize = 1;

/// Compose advice from the local tables. Used when no advice provider is
/// configured or the remote call fails.
pub fn compose_local(
    user_type: &UserType,
    scores: &FeatureScores,
    preferences: &UserPreferences,
) -> Advice {
    let mut advice = Advice::default();

    for trait_key in &user_type.traits {
        for tip in immediate_tips(trait_key) {
            advice.immediate.push(tip.to_string());
        }
    }
    if advice.immediate.is_empty() {
        advice.immediate.extend([
            "Master the functions your camera already offers before buying more gear".to_string(),
            "Set aside ten minutes of shooting every day to build the habit".to_string(),
        ]);
    }

    if scores.image_quality > 80 {
        advice
            .long_term
            .push("Study composition seriously; resolution rewards deliberate framing".to_string());
    }
    if scores.video_capability > 70 {
        advice
            .long_term
            .push("Learn basic video editing to turn clips into stories".to_string());
    }
    if advice.long_term.is_empty() {
        advice.long_term.push(
            "Revisit your shooting style every six months and take on one new technique".to_string(),
        );
    }

    advice.technique = technique_tips(preferences.experience_level)
        .iter()
        .map(|tip| tip.to_string())
        .collect();

    advice.immediate.truncate(MAX_IMMEDIATE);
    advice.long_term.truncate(MAX_LONG_TERM);
    advice
}

fn immediate_tips(trait_key: &str) -> &'static [&'static str] {
    match trait_key {
        "portrait-artist" => &[
            "Practice portraits in natural window light before reaching for strobes",
            "Keep backgrounds simple so the subject carries the frame",
        ],
        "street-photographer" => &[
            "Watch how light and shadow move through your streets",
            "Shoot the same corner at different hours until the timing feels instinctive",
        ],
        "landscape-master" => &[
            "Plan shoots around sunrise and sunset; the light does half the work",
        ],
        "action-hunter" => &[
            "Practice panning on passing traffic before the real event",
        ],
        "vlog-creator" => &[
            "Record short clips daily and review them for pacing",
        ],
        _ => &[],
    }
}

fn technique_tips(level: ExperienceLevel) -> &'static [&'static str] {
    match level {
        ExperienceLevel::Beginner => &[
            "Understand the exposure triangle: aperture, shutter speed, ISO",
            "Practice the rule of thirds until it becomes second nature",
        ],
        ExperienceLevel::Intermediate => &[
            "Work on advanced composition beyond the rule of thirds",
            "Deepen your understanding of lighting, natural and artificial",
        ],
        ExperienceLevel::Advanced => &[
            "Impose deliberate constraints, one lens or one focal length, to sharpen intent",
            "Design full lighting setups instead of adapting to found light",
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetPreference, Importance, PriceRange, SearchMode};

    fn create_user_type(traits: &[&str]) -> UserType {
        UserType {
            traits: traits.iter().map(|t| t.to_string()).collect(),
            characteristics: traits.iter().map(|_| "test".to_string()).collect(),
            name: "Test".to_string(),
            description: "Test".to_string(),
            experience_level: ExperienceLevel::Beginner,
        }
    }

    fn create_preferences(level: ExperienceLevel) -> UserPreferences {
        UserPreferences {
            experience_level: level,
            mode: SearchMode::Body,
            budget_preference: BudgetPreference::Band(PriceRange::Medium),
            shooting_style: vec![],
            portability_importance: Importance::Medium,
            priorities: vec![],
        }
    }

    #[test]
    fn test_output_respects_the_bounds() {
        let user_type = create_user_type(&["portrait-artist", "street-photographer"]);
        let scores = FeatureScores {
            image_quality: 90,
            video_capability: 80,
            ..FeatureScores::default()
        };

        let advice = compose_local(
            &user_type,
            &scores,
            &create_preferences(ExperienceLevel::Beginner),
        );

        assert_eq!(advice.immediate.len(), MAX_IMMEDIATE);
        assert_eq!(advice.long_term.len(), MAX_LONG_TERM);
    }

    #[test]
    fn test_landscape_trait_gets_the_light_timing_tip() {
        let user_type = create_user_type(&["landscape-master"]);
        let advice = compose_local(
            &user_type,
            &FeatureScores::default(),
            &create_preferences(ExperienceLevel::Intermediate),
        );

        assert!(advice.immediate.iter().any(|tip| tip.contains("sunrise")));
    }

    #[test]
    fn test_unknown_traits_fall_back_to_generic_immediate_advice() {
        let user_type = create_user_type(&["mystery"]);
        let advice = compose_local(
            &user_type,
            &FeatureScores::default(),
            &create_preferences(ExperienceLevel::Beginner),
        );

        assert!(!advice.immediate.is_empty());
    }

    #[test]
    fn test_technique_tier_follows_experience_level() {
        let user_type = create_user_type(&["explorer"]);

        let beginner = compose_local(
            &user_type,
            &FeatureScores::default(),
            &create_preferences(ExperienceLevel::Beginner),
        );
        let advanced = compose_local(
            &user_type,
            &FeatureScores::default(),
            &create_preferences(ExperienceLevel::Advanced),
        );

        assert!(beginner.technique[0].contains("exposure triangle"));
        assert!(advanced.technique[0].contains("constraints"));
        assert_ne!(beginner.technique, advanced.technique);
    }

    #[test]
    fn test_every_section_is_non_empty() {
        let user_type = create_user_type(&["explorer"]);
        let advice = compose_local(
            &user_type,
            &FeatureScores::default(),
            &create_preferences(ExperienceLevel::Intermediate),
        );

        assert!(!advice.immediate.is_empty());
        assert!(!advice.long_term.is_empty());
        assert!(!advice.technique.is_empty());
    }
}
