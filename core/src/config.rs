use crate::model::ViewMode;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;

const DEFAULT_MAX_ROWS: usize = 10_000;

/// Initial state for a freshly created view store.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    pub default_mode: ViewMode,
    pub role: String,
    pub year_min: Option<i32>,
    pub year_max: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ImportConfig {
    /// Upper bound on rows accepted from a single upload.
    pub max_rows: usize,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub view: ViewConfig,
    pub import: ImportConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let default_path = dir.join("default");
        let mode_path = dir.join(&run_mode);

        let builder = Config::builder()
            .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
            .add_source(File::with_name(&mode_path.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("BOARDMAP").separator("__"));

        builder.build()?.try_deserialize()
    }
}
