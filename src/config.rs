use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::ScoringWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub advisor: AdvisorSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogSettings {
    /// Catalog source URL. When unset, the built-in fallback catalog is used.
    pub url: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
    pub ready_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdvisorSettings {
    /// Advice provider base URL. When unset, advice is composed locally.
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_experience_weight")]
    pub experience: u32,
    #[serde(default = "default_budget_weight")]
    pub budget: u32,
    #[serde(default = "default_style_weight")]
    pub style: u32,
    #[serde(default = "default_compact_wanted_weight")]
    pub compact_wanted: u32,
    #[serde(default = "default_bulk_tolerated_weight")]
    pub bulk_tolerated: u32,
    #[serde(default = "default_versatility_weight")]
    pub versatility: u32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            experience: default_experience_weight(),
            budget: default_budget_weight(),
            style: default_style_weight(),
            compact_wanted: default_compact_wanted_weight(),
            bulk_tolerated: default_bulk_tolerated_weight(),
            versatility: default_versatility_weight(),
        }
    }
}

impl From<WeightsConfig> for ScoringWeights {
    fn from(config: WeightsConfig) -> Self {
        ScoringWeights {
            experience: config.experience,
            budget: config.budget,
            style: config.style,
            compact_wanted: config.compact_wanted,
            bulk_tolerated: config.bulk_tolerated,
            versatility: config.versatility,
        }
    }
}

fn default_experience_weight() -> u32 { 20 }
fn default_budget_weight() -> u32 { 15 }
fn default_style_weight() -> u32 { 10 }
fn default_compact_wanted_weight() -> u32 { 10 }
fn default_bulk_tolerated_weight() -> u32 { 5 }
fn default_versatility_weight() -> u32 { 5 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with PICKER_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with PICKER_)
            // e.g., PICKER_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("PICKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("PICKER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply the short-form environment overrides used in deployment:
/// CATALOG_URL and ADVISOR_URL take precedence over the file values.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let catalog_url = env::var("CATALOG_URL")
        .or_else(|_| env::var("PICKER_CATALOG__URL"))
        .ok();
    let advisor_url = env::var("ADVISOR_URL")
        .or_else(|_| env::var("PICKER_ADVISOR__BASE_URL"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(url) = catalog_url {
        builder = builder.set_override("catalog.url", url)?;
    }
    if let Some(url) = advisor_url {
        builder = builder.set_override("advisor.base_url", url)?;
    }

    builder.build()
}
