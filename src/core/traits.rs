use rand::Rng;

use crate::models::{ExperienceLevel, PriceRange, SwipeEvent, UserPreferences, UserType};
use crate::core::analysis::partition;

/// Strategy seam for display-name selection, so callers that need
/// deterministic output can pin the choice.
pub trait NamePicker: Send + Sync {
    /// Pick an index into a candidate list of `len` entries (`len` > 0).
    fn pick(&self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomPicker;

impl NamePicker for RandomPicker {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Picker that always selects the same index. Intended for tests and
/// reproducible sessions.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub usize);

impl NamePicker for FixedPicker {
    fn pick(&self, len: usize) -> usize {
        self.0 % len
    }
}

const NEUTRAL_TRAIT: &str = "all-rounder";
const NEUTRAL_CHARACTERISTIC: &str = "balanced";
const NEUTRAL_NAMES: &[&str] = &["All-Round Photographer", "Everyday Shooter"];
const NEUTRAL_DESCRIPTION: &str =
    "Comfortable across genres, picking the right tool for whatever the day brings.";

fn experience_trait(level: ExperienceLevel) -> (&'static str, &'static str) {
    match level {
        ExperienceLevel::Beginner => ("explorer", "curious"),
        ExperienceLevel::Intermediate => ("enthusiast", "dedicated"),
        ExperienceLevel::Advanced => ("specialist", "exacting"),
    }
}

fn budget_trait(band: PriceRange) -> (&'static str, &'static str) {
    match band {
        PriceRange::Low => ("budget-conscious", "resourceful"),
        PriceRange::Medium => ("value-seeker", "pragmatic"),
        PriceRange::High => ("premium-oriented", "ambitious"),
    }
}

fn style_trait(style: &str) -> Option<(&'static str, &'static str)> {
    match style {
        "portrait" => Some(("portrait-artist", "people-focused")),
        "street" => Some(("street-photographer", "observant")),
        "landscape" => Some(("landscape-master", "patient")),
        "sports" => Some(("action-hunter", "fast-reacting")),
        "video" => Some(("vlog-creator", "storytelling")),
        "budget" => Some(("budget-conscious", "resourceful")),
        _ => None,
    }
}

fn priority_trait(priority: &str) -> Option<(&'static str, &'static str)> {
    match priority {
        "image-quality" => Some(("quality-first", "meticulous")),
        "lightweight" => Some(("minimalist", "mobile")),
        "waterproof" => Some(("all-weather", "adventurous")),
        _ => None,
    }
}

/// Candidate display names for a primary trait. Exposed so callers can
/// assert a rendered name belongs to the documented set.
pub fn name_candidates(primary_trait: &str) -> &'static [&'static str] {
    match primary_trait {
        "explorer" => &["First-Light Explorer", "Curious Framer", "New Horizon Shooter"],
        "enthusiast" => &["Weekend Wanderer", "Frame Chaser", "Light Collector"],
        "specialist" => &["Master of the Craft", "Precision Imagist"],
        "budget-conscious" => &["Smart Saver", "Value Hunter"],
        "value-seeker" => &["Balanced Buyer", "Sweet-Spot Seeker"],
        "premium-oriented" => &["Flagship Aficionado", "No-Compromise Shooter"],
        "portrait-artist" => &["Portrait Artist", "Light Sculptor", "Expression Catcher"],
        "street-photographer" => &["Street Poet", "Decisive-Moment Hunter"],
        "landscape-master" => &["Landscape Master", "Golden-Hour Chaser"],
        "action-hunter" => &["Action Hunter", "Shutter Sprinter"],
        "vlog-creator" => &["Vlog Creator", "Moving-Image Maker"],
        "quality-first" => &["Pixel Perfectionist", "Detail Devotee"],
        "minimalist" => &["Light Packer", "Minimalist Shooter"],
        "all-weather" => &["All-Weather Adventurer", "Storm Chaser"],
        "open-minded" => &["Open-Minded Explorer", "Gear Optimist"],
        "selective" => &["Discerning Eye", "Picky Perfectionist"],
        _ => NEUTRAL_NAMES,
    }
}

fn description_for(characteristic: &str) -> &'static str {
    match characteristic {
        "curious" => "Still mapping out what photography can do, and excited by every new frame.",
        "dedicated" => "Past the basics and putting real hours in; gear choices start to matter.",
        "exacting" => "Knows precisely what a camera must deliver and settles for nothing less.",
        "resourceful" => "Gets the most picture out of the least money, and enjoys doing it.",
        "pragmatic" => "Weighs price against capability and lands reliably in the sweet spot.",
        "ambitious" => "Buys for where the work is heading, not where it is today.",
        "people-focused" => "Drawn to faces and expressions; happiest when a portrait comes alive.",
        "observant" => "Reads the street for light, timing, and the moment nobody else saw.",
        "patient" => "Will wait out the weather for the one moment the landscape turns golden.",
        "fast-reacting" => "Chases the split second: peak action, fast glass, no hesitation.",
        "storytelling" => "Thinks in sequences and sound, not single frames.",
        "meticulous" => "Zooms to 100% and notices; resolution and rendering come first.",
        "mobile" => "The best camera is the one light enough to be there.",
        "adventurous" => "Shoots where the forecast says not to.",
        "receptive" => "Open to most gear; a broad shortlist beats a narrow one.",
        "critical" => "A short shortlist, ruthlessly pruned.",
        _ => NEUTRAL_DESCRIPTION,
    }
}

fn push_trait(traits: &mut Vec<String>, characteristics: &mut Vec<String>, pair: (&str, &str)) {
    let (trait_key, characteristic) = pair;
    if traits.iter().any(|t| t == trait_key) {
        return;
    }
    traits.push(trait_key.to_string());
    characteristics.push(characteristic.to_string());
}

/// Infer the photographer type from preferences and swipe history.
///
/// Predicates run in fixed priority order; the first trait appended is the
/// primary trait and drives the name and description lookups. Only the
/// display name is non-deterministic, and only through `picker`.
pub fn infer_user_type(
    preferences: &UserPreferences,
    history: &[SwipeEvent],
    picker: &dyn NamePicker,
) -> UserType {
    let mut traits = Vec::new();
    let mut characteristics = Vec::new();

    push_trait(
        &mut traits,
        &mut characteristics,
        experience_trait(preferences.experience_level),
    );
    push_trait(
        &mut traits,
        &mut characteristics,
        budget_trait(preferences.budget_preference.band()),
    );

    for style in &preferences.shooting_style {
        match style_trait(style) {
            Some(pair) => push_trait(&mut traits, &mut characteristics, pair),
            // Unmapped styles still shape the profile.
            None => {
                let derived = format!("{}-shooter", style);
                if !traits.contains(&derived) {
                    traits.push(derived);
                    characteristics.push("versatile".to_string());
                }
            }
        }
    }

    for priority in &preferences.priorities {
        match priority_trait(priority) {
            Some(pair) => push_trait(&mut traits, &mut characteristics, pair),
            None => {
                if !traits.contains(priority) {
                    traits.push(priority.clone());
                    characteristics.push("individual".to_string());
                }
            }
        }
    }

    let analysis = partition(history);
    if analysis.likes.len() > analysis.dislikes.len() {
        push_trait(&mut traits, &mut characteristics, ("open-minded", "receptive"));
    } else if analysis.dislikes.len() > analysis.likes.len() {
        push_trait(&mut traits, &mut characteristics, ("selective", "critical"));
    }

    if traits.is_empty() {
        push_trait(
            &mut traits,
            &mut characteristics,
            (NEUTRAL_TRAIT, NEUTRAL_CHARACTERISTIC),
        );
    }

    let primary = traits[0].as_str();
    let candidates = name_candidates(primary);
    let name = candidates[picker.pick(candidates.len()) % candidates.len()];
    let description = description_for(characteristics[0].as_str());

    UserType {
        name: name.to_string(),
        description: description.to_string(),
        experience_level: preferences.experience_level,
        traits,
        characteristics,
    }
}
