use crate::errors::{AppError, AppResult};
use crate::store::SqliteStorage;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// How the weekday appears in the timesheet date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum WeekdayDisplay {
    None,
    #[default]
    Short,
    Long,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_namespace")]
    pub namespace: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default)]
    pub show_weekday: WeekdayDisplay,
}

/// Keys every config file is expected to carry.
pub const CONFIG_KEYS: [&str; 4] = ["database", "namespace", "separator_char", "show_weekday"];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_namespace() -> String {
    SqliteStorage::DEFAULT_NAMESPACE.to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            namespace: default_namespace(),
            separator_char: default_separator_char(),
            show_weekday: WeekdayDisplay::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ractivity")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ractivity")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ractivity.conf")
    }

    /// Return the default path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("ractivity.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Keys of [`CONFIG_KEYS`] missing from the file at `path`.
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let yaml: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = yaml.as_mapping();

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| map.is_none_or(|m| !m.contains_key(*k)))
            .collect())
    }

    /// Initialize the config directory and file (skipped when `is_test`).
    /// Returns the resolved database path.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<PathBuf> {
        // DB path: user provided or default
        let db_path = match custom_db {
            Some(p) => expand_tilde(p),
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(Self::config_dir())?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            fs::write(Self::config_file(), serde_yaml::to_string(&config)?)?;
        }

        Ok(db_path)
    }
}
