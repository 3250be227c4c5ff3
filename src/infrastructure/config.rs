use crate::domain::moving_average::DEFAULT_WINDOW;
use crate::presentation::theme::ThemeOptions;
use anyhow::Context;
use serde::Deserialize;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_PATH: &str = "config/frametime";
pub const ENV_PREFIX: &str = "FRAMETIME";

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_capture_dir")]
    pub capture_dir: PathBuf,
    #[serde(default)]
    pub smoothing: SmoothingSettings,
    #[serde(default)]
    pub theme: ThemeOptions,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SmoothingSettings {
    #[serde(default = "default_window")]
    pub window: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Filter directive, e.g. "info" or "frametime_graph=debug,warn"
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for SmoothingSettings {
    fn default() -> Self {
        Self {
            window: default_window(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_capture_dir() -> PathBuf {
    PathBuf::from("captures")
}

fn default_window() -> usize {
    DEFAULT_WINDOW
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from(DEFAULT_CONFIG_PATH)
}

/// Load `<path>.{toml,json,yaml,..}` if present, overridden by `FRAMETIME__*` variables
/// (e.g. `FRAMETIME__SMOOTHING__WINDOW=20`)
pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .with_context(|| format!("Failed to read configuration from {}", path))?;

    settings
        .try_deserialize()
        .context("Failed to deserialize configuration")
}
