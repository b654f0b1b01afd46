use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::{watch, RwLock};

use crate::models::{CameraRecord, ExperienceLevel, PriceRange};

/// Errors that can occur while fetching the catalog. All of them are
/// absorbed inside `load`, which substitutes the fallback catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("catalog source returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid catalog payload: {0}")]
    InvalidPayload(String),

    #[error("catalog source returned no cameras")]
    Empty,

    #[error("no catalog source configured")]
    NotConfigured,
}

/// Loads the camera catalog from the configured source.
///
/// After `load` completes the catalog is never empty: any failure
/// substitutes the built-in fallback catalog, once, with no retries.
/// Readiness is a one-shot signal; `await_ready` suspends on it instead of
/// polling.
pub struct CatalogService {
    client: Client,
    source_url: Option<String>,
    cameras: RwLock<Vec<CameraRecord>>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
}

impl CatalogService {
    pub fn new(source_url: Option<String>, fetch_timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(fetch_timeout)
            .build()
            .expect("Failed to create HTTP client");
        let (ready_tx, ready_rx) = watch::channel(false);

        Self {
            client,
            source_url,
            cameras: RwLock::new(Vec::new()),
            ready_tx,
            ready_rx,
        }
    }

    /// Fetch the catalog and resolve the readiness signal. Called once per
    /// session; a second call refreshes the catalog but readiness stays
    /// resolved.
    pub async fn load(&self) {
        let cameras = match self.fetch().await {
            Ok(cameras) => {
                tracing::info!("Loaded {} cameras from catalog source", cameras.len());
                cameras
            }
            Err(e) => {
                tracing::warn!("Catalog source unavailable ({}), using fallback catalog", e);
                fallback_catalog()
            }
        };

        *self.cameras.write().await = cameras;
        self.ready_tx.send_replace(true);
    }

    async fn fetch(&self) -> Result<Vec<CameraRecord>, CatalogError> {
        let url = self.source_url.as_deref().ok_or(CatalogError::NotConfigured)?;

        tracing::debug!("Fetching catalog from: {}", url);
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(CatalogError::Status(response.status()));
        }

        let json: Value = response.json().await?;
        let cameras = parse_catalog(&json)?;

        if cameras.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(cameras)
    }

    /// Wait until the catalog is populated or the timeout elapses. Returns
    /// the readiness flag; callers that proceed without readiness treat an
    /// empty catalog as "no recommendations".
    pub async fn await_ready(&self, timeout: Duration) -> bool {
        let mut rx = self.ready_rx.clone();
        let ready = matches!(
            tokio::time::timeout(timeout, rx.wait_for(|ready| *ready)).await,
            Ok(Ok(_))
        );
        ready
    }

    /// Non-blocking readiness check.
    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Snapshot of the loaded catalog. Empty until `load` completes.
    pub async fn cameras(&self) -> Vec<CameraRecord> {
        self.cameras.read().await.clone()
    }
}

/// Raw record shape tolerated at the source boundary. Older catalog
/// revisions shipped camelCase field names; the aliases map both schemas
/// into the canonical record.
#[derive(Debug, Deserialize)]
struct RawCameraRecord {
    id: String,
    #[serde(default)]
    brand: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: u32,
    #[serde(default, alias = "priceRange")]
    price_range: PriceRange,
    #[serde(default, alias = "sensorSize")]
    sensor_size: String,
    #[serde(default)]
    megapixels: u32,
    #[serde(default)]
    features: Vec<String>,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default, alias = "bestFor")]
    best_for: Vec<String>,
    #[serde(default, alias = "experienceLevel")]
    experience_level: Vec<ExperienceLevel>,
    #[serde(default, alias = "budgetFriendly")]
    budget_friendly: bool,
    #[serde(default)]
    compact: bool,
}

impl From<RawCameraRecord> for CameraRecord {
    fn from(raw: RawCameraRecord) -> Self {
        CameraRecord {
            id: raw.id,
            brand: raw.brand,
            name: raw.name,
            price: raw.price,
            price_range: raw.price_range,
            sensor_size: raw.sensor_size,
            megapixels: raw.megapixels,
            features: raw.features,
            strengths: raw.strengths,
            weaknesses: raw.weaknesses,
            best_for: raw.best_for,
            experience_level: raw.experience_level,
            budget_friendly: raw.budget_friendly,
            compact: raw.compact,
        }
    }
}

/// Accept either a bare array of records or an object with a `cameras` key.
/// Entries that fail to normalize (non-objects, missing id) are skipped so
/// one bad record never aborts the whole load.
pub fn parse_catalog(json: &Value) -> Result<Vec<CameraRecord>, CatalogError> {
    let entries = match json {
        Value::Array(entries) => entries,
        Value::Object(map) => map
            .get("cameras")
            .and_then(Value::as_array)
            .ok_or_else(|| CatalogError::InvalidPayload("missing cameras array".into()))?,
        _ => {
            return Err(CatalogError::InvalidPayload(
                "expected an array or an object with a cameras key".into(),
            ))
        }
    };

    Ok(entries
        .iter()
        .filter_map(|entry| {
            serde_json::from_value::<RawCameraRecord>(entry.clone())
                .ok()
                .map(CameraRecord::from)
        })
        .collect())
}

fn tags(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Hand-authored substitute catalog. Three bodies spanning the full
/// attribute schema, so every downstream code path stays exercised when the
/// source is unreachable.
pub fn fallback_catalog() -> Vec<CameraRecord> {
    vec![
        CameraRecord {
            id: "sony-a7iv".to_string(),
            brand: "Sony".to_string(),
            name: "α7 IV".to_string(),
            price: 298_000,
            price_range: PriceRange::High,
            sensor_size: "full_frame".to_string(),
            megapixels: 33,
            features: tags(&["4k_video", "ibis", "weather_sealed", "dual_sd"]),
            strengths: tags(&["hybrid_shooting", "autofocus", "image_quality"]),
            weaknesses: tags(&["battery_life", "menu_complexity"]),
            best_for: tags(&["portrait", "wedding", "commercial", "hybrid"]),
            experience_level: vec![ExperienceLevel::Intermediate, ExperienceLevel::Advanced],
            budget_friendly: false,
            compact: false,
        },
        CameraRecord {
            id: "canon-r6ii".to_string(),
            brand: "Canon".to_string(),
            name: "EOS R6 Mark II".to_string(),
            price: 348_000,
            price_range: PriceRange::High,
            sensor_size: "full_frame".to_string(),
            megapixels: 24,
            features: tags(&["4k_video", "ibis", "weather_sealed", "dual_sd"]),
            strengths: tags(&["autofocus", "burst_speed", "low_light"]),
            weaknesses: tags(&["megapixels", "price"]),
            best_for: tags(&["sports", "wildlife", "action", "low_light"]),
            experience_level: vec![ExperienceLevel::Intermediate, ExperienceLevel::Advanced],
            budget_friendly: false,
            compact: false,
        },
        CameraRecord {
            id: "fujifilm-xt5".to_string(),
            brand: "Fujifilm".to_string(),
            name: "X-T5".to_string(),
            price: 248_000,
            price_range: PriceRange::Medium,
            sensor_size: "aps_c".to_string(),
            megapixels: 40,
            features: tags(&["4k_video", "ibis", "weather_sealed", "film_simulation"]),
            strengths: tags(&["image_quality", "color_science", "build_quality"]),
            weaknesses: tags(&["autofocus", "battery_life"]),
            best_for: tags(&["street", "portrait", "landscape", "artistic"]),
            experience_level: vec![
                ExperienceLevel::Beginner,
                ExperienceLevel::Intermediate,
                ExperienceLevel::Advanced,
            ],
            budget_friendly: true,
            compact: true,
        },
    ]
}
