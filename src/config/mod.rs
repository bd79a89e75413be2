use crate::core::reconciler::DuplicateStartPolicy;
use crate::core::schedule::WeeklySchedule;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Fallback weekly schedule for employees without a shift rule of
    /// their own.
    #[serde(default)]
    pub schedule: WeeklySchedule,
    /// REP identifier embedded in the generated compliance files.
    #[serde(default = "default_rep_id")]
    pub rep_id: String,
    /// Directory the export files are written to.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// "absorb" (default) or "restart" — what a duplicate start punch does
    /// to an already-open interval.
    #[serde(default = "default_duplicate_start")]
    pub duplicate_start: String,
}

fn default_rep_id() -> String {
    "1".to_string()
}
fn default_output_dir() -> String {
    ".".to_string()
}
fn default_duplicate_start() -> String {
    "absorb".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: WeeklySchedule::default(),
            rep_id: default_rep_id(),
            output_dir: default_output_dir(),
            duplicate_start: default_duplicate_start(),
        }
    }
}

impl Config {
    /// Standard configuration directory, under the user's home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".jornada")
    }

    /// Full path of the config file.
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("jornada.conf")
    }

    /// Load configuration from the standard location, or fall back to
    /// defaults when missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }
        match Self::load_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warning(format!("Ignoring unreadable config file: {}", e));
                Config::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn duplicate_start_policy(&self) -> DuplicateStartPolicy {
        match self.duplicate_start.as_str() {
            "restart" => DuplicateStartPolicy::Restart,
            _ => DuplicateStartPolicy::Absorb,
        }
    }
}
