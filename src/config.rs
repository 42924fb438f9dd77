//! User configuration
//!
//! Read from `~/.config/kalimat/config.toml`:
//! ```toml
//! words_per_day = 10
//! corpus_path = "/home/me/arabic/levantine_vocabulary.json"
//! audio_dir = "/home/me/arabic/audio"
//! deck_name = "Arabic"
//! tags = ["arabic", "levantine"]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::progress::ProgressStorage;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Could not determine config directory")]
    ConfigDirNotFound,

    #[error("Could not determine local data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// New words introduced per run
    pub words_per_day: u32,
    /// Vocabulary list (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corpus_path: Option<PathBuf>,
    /// Progress file (defaults to the data directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seen_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_dir: Option<PathBuf>,
    pub deck_name: String,
    pub tags: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            words_per_day: 10,
            corpus_path: None,
            seen_path: None,
            audio_dir: None,
            deck_name: "Arabic".to_string(),
            tags: vec!["arabic".to_string(), "levantine".to_string()],
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join("kalimat").join("config.toml"))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Load a config file; a missing file gives the defaults
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    pub fn corpus_path(&self) -> Result<PathBuf> {
        match &self.corpus_path {
            Some(path) => Ok(path.clone()),
            None => Ok(data_dir()?.join("levantine_vocabulary.json")),
        }
    }

    pub fn seen_path(&self) -> Result<PathBuf> {
        match &self.seen_path {
            Some(path) => Ok(path.clone()),
            None => ProgressStorage::default_path().map_err(|_| ConfigError::DataDirNotFound),
        }
    }
}

fn data_dir() -> Result<PathBuf> {
    ProgressStorage::default_data_dir().map_err(|_| ConfigError::DataDirNotFound)
}
