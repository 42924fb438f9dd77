//! Loading the vocabulary corpus
//!
//! The corpus is a single JSON array:
//! ```json
//! [
//!   { "index": 1, "english": "hello", "arabic": "مرحبا", "pronunciation": "marhaba" },
//!   ...
//! ]
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use thiserror::Error;

use super::models::{EntryId, VocabularyEntry};
use crate::selection::SeenSet;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate entry index: {0}")]
    DuplicateId(EntryId),

    #[error("Entry {id} has an empty '{field}' field")]
    InvalidEntry { id: EntryId, field: &'static str },
}

pub type Result<T> = std::result::Result<T, CorpusError>;

/// A validated, immutable list of vocabulary entries
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<VocabularyEntry>,
}

impl Corpus {
    /// Read and validate a corpus file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let entries: Vec<VocabularyEntry> = serde_json::from_str(&content)?;
        let corpus = Self::from_entries(entries)?;
        log::debug!("Loaded {} vocabulary entries from {:?}", corpus.len(), path);
        Ok(corpus)
    }

    /// Build a corpus from already-parsed entries, keeping their order
    pub fn from_entries(entries: Vec<VocabularyEntry>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !ids.insert(entry.id) {
                return Err(CorpusError::DuplicateId(entry.id));
            }
            check_field(entry.id, "english", &entry.english)?;
            check_field(entry.id, "arabic", &entry.arabic)?;
            check_field(entry.id, "pronunciation", &entry.pronunciation)?;
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Number of entries not yet in `seen`
    pub fn unseen_count(&self, seen: &SeenSet) -> usize {
        self.entries.iter().filter(|e| !seen.contains(e.id)).count()
    }

    /// Ids in `seen` that this corpus does not know about
    pub fn unknown_ids(&self, seen: &SeenSet) -> Vec<EntryId> {
        seen.iter().filter(|id| !self.contains(*id)).collect()
    }
}

fn check_field(id: EntryId, field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CorpusError::InvalidEntry { id, field });
    }
    Ok(())
}
