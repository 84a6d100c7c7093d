use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Console-side configuration; the service itself never reads it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Seed the demo board when the console starts.
    #[serde(default)]
    pub seed_sample_data: bool,

    /// Columns added automatically after `create-board`.
    #[serde(default)]
    pub default_columns: Vec<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = toml::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }
}
