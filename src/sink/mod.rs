//! Hand-off of selected words to the flashcard application
//!
//! A sink receives each day's batch and reports which entries it took.
//! Only accepted entries are recorded as seen, so anything the flashcard
//! side failed to create is offered again on a later run.

pub mod json;

use thiserror::Error;

use crate::vocabulary::{EntryId, VocabularyEntry};

pub use json::{Handoff, HandoffCard, HandoffOptions, JsonFileSink, JsonSink};

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// For sinks backed by a flashcard service that refuses a whole batch.
    /// The bundled JSON sinks never produce it.
    #[error("Sink rejected the batch: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, SinkError>;

/// Outcome of delivering a batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Delivery {
    /// Entries the flashcard side now has, including ones it already had
    pub accepted: Vec<EntryId>,
    /// Entries that could not be delivered, with the reason
    pub failed: Vec<(EntryId, String)>,
}

impl Delivery {
    /// Every entry of `batch` accepted
    pub fn all(batch: &[VocabularyEntry]) -> Self {
        Self {
            accepted: batch.iter().map(|e| e.id).collect(),
            failed: Vec::new(),
        }
    }
}

/// Destination for a day's batch
pub trait BatchSink {
    fn deliver(&mut self, batch: &[VocabularyEntry]) -> Result<Delivery>;
}
