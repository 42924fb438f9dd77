//! Storage for learner progress
//!
//! Layout:
//! ```text
//! ~/.local/share/kalimat/
//! └── seen.json   # { "version": 1, "seen": [...], "history": [...] }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::{Progress, PROGRESS_VERSION};

#[derive(Error, Debug)]
pub enum ProgressError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported progress file version: {0}")]
    UnsupportedVersion(u32),

    #[error("Could not determine local data directory")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ProgressError>;

/// File-backed store for the seen set
pub struct ProgressStorage {
    path: PathBuf,
}

impl ProgressStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default data directory for kalimat
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("kalimat"))
            .ok_or(ProgressError::DataDirNotFound)
    }

    /// Default location of the progress file
    pub fn default_path() -> Result<PathBuf> {
        Ok(Self::default_data_dir()?.join("seen.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load progress, or an empty one if nothing was saved yet
    pub fn load(&self) -> Result<Progress> {
        if !self.path.exists() {
            return Ok(Progress::default());
        }

        let content = fs::read_to_string(&self.path)?;
        let progress: Progress = serde_json::from_str(&content)?;
        if progress.version > PROGRESS_VERSION {
            return Err(ProgressError::UnsupportedVersion(progress.version));
        }
        Ok(progress)
    }

    /// Write progress, replacing the previous file in one rename
    pub fn save(&self, progress: &Progress) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string_pretty(progress)?)?;
        fs::rename(&tmp_path, &self.path)?;

        log::debug!("Saved progress ({} seen) to {:?}", progress.seen.len(), self.path);
        Ok(())
    }

    /// Forget all progress. Returns whether anything was removed.
    pub fn reset(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        fs::remove_file(&self.path)?;
        log::info!("Removed progress file {:?}", self.path);
        Ok(true)
    }
}
