use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the rankings backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Row limit per fetch (a full league season fits well under this)
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            limit: default_limit(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_limit() -> u32 {
    570
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    /// Season loaded on startup (e.g. 2025 for the 2024-25 season)
    #[serde(default = "default_season")]
    pub season: u16,
    /// Seasons selectable in the dashboard, newest first
    #[serde(default = "default_seasons")]
    pub seasons: Vec<u16>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            season: default_season(),
            seasons: default_seasons(),
        }
    }
}

fn default_season() -> u16 {
    2025
}

fn default_seasons() -> Vec<u16> {
    vec![2025, 2024, 2023, 2022]
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from files and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();

        let builder = Config::builder()
            // Load default config file
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            // Load environment-specific config (e.g., config/production.toml)
            .add_source(
                File::from(config_dir.join(
                    std::env::var("COURTSIDE_ENV").unwrap_or_else(|_| "development".to_string()),
                ))
                .required(false),
            )
            // Override with environment variables (COURTSIDE_API__BASE_URL, etc.)
            .add_source(
                Environment::with_prefix("COURTSIDE")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.api.base_url.trim().is_empty() {
            errors.push("api.base_url must not be empty".to_string());
        }

        if self.api.limit == 0 {
            errors.push("api.limit must be positive".to_string());
        }

        if self.ui.seasons.is_empty() {
            errors.push("ui.seasons must not be empty".to_string());
        }

        if !self.ui.seasons.contains(&self.ui.season) {
            errors.push(format!(
                "ui.season {} is not in ui.seasons {:?}",
                self.ui.season, self.ui.seasons
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
