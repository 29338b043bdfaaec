use std::path::PathBuf;
use thiserror::Error;

pub const FILES_DIR_KEY: &str = "JOB_BOARD_FILES_DIR";
pub const SEED_FIXTURES_KEY: &str = "JOB_BOARD_SEED_FIXTURES";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where uploaded file bytes are written.
    pub files_dir: PathBuf,
    /// Start the stores with the sample rows.
    pub seed_fixtures: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_dir: PathBuf::from("files"),
            seed_fixtures: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let files_dir = lookup(FILES_DIR_KEY)
            .map(PathBuf::from)
            .unwrap_or(defaults.files_dir);
        let seed_fixtures = match lookup(SEED_FIXTURES_KEY) {
            Some(value) => parse_bool(SEED_FIXTURES_KEY, value)?,
            None => defaults.seed_fixtures,
        };
        Ok(Self {
            files_dir,
            seed_fixtures,
        })
    }
}

fn parse_bool(key: &'static str, value: String) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue { key, value }),
    }
}
