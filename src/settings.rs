use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::modules::routes::Route;
use crate::modules::session_store::write_atomic;

const APP_DIR: &str = "tab-session";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Where "close all" sends the router.
    pub default_path: String,
    /// Name of the persisted session slot.
    pub storage_key: String,
    /// Directory holding the session slot; platform data dir when unset.
    pub state_dir: Option<PathBuf>,
    pub log_level: String, // "error", "warn", "info", "debug", "trace"
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_path: Route::Dashboard.path().to_string(),
            storage_key: "erp-tabs".to_string(),
            state_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn default_file() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join(APP_DIR)
            .join("settings.json")
    }

    pub fn state_dir(&self) -> PathBuf {
        self.state_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(std::env::temp_dir)
                .join(APP_DIR)
        })
    }

    /// Configured level, or `None` if the name is not a known level.
    ///
    /// Callers fall back to `Info`; nothing is logged here because this runs before
    /// a logger is installed.
    pub fn log_level(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }

    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                    log::warn!("[Settings] Failed to parse settings: {}, returning defaults", e);
                    Self::default()
                }),
                Err(e) => {
                    log::warn!("[Settings] Failed to read file: {}, returning defaults", e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        write_atomic(path, &json)
    }
}
