//! Configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local use.

use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

use crate::models::locale::Locale;
use crate::time_utils::parse_iso_date;

/// Default number of courses shown before "+N more".
pub const DEFAULT_COURSES_MAX: usize = 3;

/// Runtime configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Session dataset (JSON array)
    pub sessions_path: PathBuf,
    /// Race dataset (JSON array)
    pub races_path: PathBuf,
    /// Fixed "today", for reproducible output; local date when unset
    pub today: Option<NaiveDate>,
    /// Label set for display strings
    pub locale: Locale,
    /// Courses listed per race before truncating
    pub courses_max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sessions_path: PathBuf::from("data/sessions.json"),
            races_path: PathBuf::from("data/races.json"),
            today: None,
            locale: Locale::default(),
            courses_max: DEFAULT_COURSES_MAX,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let today = match var("DIRECTORY_TODAY") {
            Some(raw) => Some(parse_iso_date(&raw).ok_or(ConfigError::Invalid {
                var: "DIRECTORY_TODAY",
                value: raw,
            })?),
            None => None,
        };

        let locale = match var("DIRECTORY_LOCALE") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "DIRECTORY_LOCALE",
                value: raw,
            })?,
            None => defaults.locale,
        };

        let courses_max = match var("DIRECTORY_COURSES_MAX") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                var: "DIRECTORY_COURSES_MAX",
                value: raw,
            })?,
            None => defaults.courses_max,
        };

        Ok(Self {
            sessions_path: var("DIRECTORY_SESSIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.sessions_path),
            races_path: var("DIRECTORY_RACES_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.races_path),
            today,
            locale,
            courses_max,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}
