use crate::models::{CameraRecord, FeatureScores, SwipeEvent};

/// Likes/dislikes partition of a swipe session. Superlikes count as likes.
#[derive(Debug)]
pub struct SwipeAnalysis<'a> {
    pub likes: Vec<&'a SwipeEvent>,
    pub dislikes: Vec<&'a SwipeEvent>,
}

/// Split a history into positive and negative decisions. Order within each
/// partition follows arrival order; aggregation below only counts.
pub fn partition(history: &[SwipeEvent]) -> SwipeAnalysis<'_> {
    let mut likes = Vec::new();
    let mut dislikes = Vec::new();

    for event in history {
        if event.action.is_positive() {
            likes.push(event);
        } else {
            dislikes.push(event);
        }
    }

    SwipeAnalysis { likes, dislikes }
}

fn find_camera<'a>(catalog: &'a [CameraRecord], id: &str) -> Option<&'a CameraRecord> {
    catalog.iter().find(|camera| camera.id == id)
}

/// Count tags across the swiped cameras and keep the most frequent ones.
/// The sort is stable, so tags tied on count stay in first-seen order.
fn ranked_tags<F>(
    catalog: &[CameraRecord],
    events: &[&SwipeEvent],
    pick: F,
    top: usize,
) -> Vec<String>
where
    F: Fn(&CameraRecord) -> &[String],
{
    let mut counts: Vec<(String, u32)> = Vec::new();

    for event in events {
        if let Some(camera) = find_camera(catalog, &event.camera_id) {
            for tag in pick(camera) {
                match counts.iter_mut().find(|(seen, _)| seen == tag) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((tag.clone(), 1)),
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(top).map(|(tag, _)| tag).collect()
}

/// Top 3 strengths among the cameras the user liked.
pub fn liked_features(catalog: &[CameraRecord], history: &[SwipeEvent]) -> Vec<String> {
    let analysis = partition(history);
    ranked_tags(catalog, &analysis.likes, |camera| &camera.strengths, 3)
}

/// Top 2 weaknesses among the cameras the user disliked.
pub fn disliked_features(catalog: &[CameraRecord], history: &[SwipeEvent]) -> Vec<String> {
    let analysis = partition(history);
    ranked_tags(catalog, &analysis.dislikes, |camera| &camera.weaknesses, 2)
}

/// Score one concern from the swipe session: base 50, +10 per liked camera
/// whose strengths carry the tag, +5 per disliked camera whose weaknesses
/// carry it, clamped to 0..=100.
fn feature_score(catalog: &[CameraRecord], analysis: &SwipeAnalysis<'_>, tag: &str) -> u32 {
    let mut score: i64 = 50;

    for event in &analysis.likes {
        if find_camera(catalog, &event.camera_id).is_some_and(|c| c.has_strength(tag)) {
            score += 10;
        }
    }

    for event in &analysis.dislikes {
        if find_camera(catalog, &event.camera_id).is_some_and(|c| c.has_weakness(tag)) {
            score += 5;
        }
    }

    score.clamp(0, 100) as u32
}

/// Budget consciousness: share of swipes that liked a budget-friendly
/// camera, as a percentage. 50 when there are no swipes.
fn budget_score(catalog: &[CameraRecord], analysis: &SwipeAnalysis<'_>) -> u32 {
    let total = analysis.likes.len() + analysis.dislikes.len();
    if total == 0 {
        return 50;
    }

    let budget_likes = analysis
        .likes
        .iter()
        .filter(|event| {
            find_camera(catalog, &event.camera_id).is_some_and(|c| c.budget_friendly)
        })
        .count();

    ((budget_likes as f64 / total as f64) * 100.0).round() as u32
}

/// Derive the per-concern score map for a swipe session.
pub fn feature_scores(catalog: &[CameraRecord], history: &[SwipeEvent]) -> FeatureScores {
    let analysis = partition(history);

    FeatureScores {
        image_quality: feature_score(catalog, &analysis, "image_quality"),
        autofocus: feature_score(catalog, &analysis, "autofocus"),
        video_capability: feature_score(catalog, &analysis, "video_quality"),
        portability: feature_score(catalog, &analysis, "compact"),
        budget_consciousness: budget_score(catalog, &analysis),
    }
}
