//! JSON hand-off document
//!
//! Written for a separate sync tool that creates the notes (both card
//! directions, audio attachment) in the flashcard application:
//! ```json
//! {
//!   "deck": "Arabic",
//!   "tags": ["arabic", "levantine"],
//!   "cards": [
//!     { "index": 1, "english": "hello", "arabic": "مرحبا",
//!       "pronunciation": "marhaba", "audioFile": "001.mp3",
//!       "audioPath": "/home/me/kalimat/audio/001.mp3" }
//!   ]
//! }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{BatchSink, Delivery, Result};
use crate::vocabulary::{EntryId, VocabularyEntry};

/// Deck metadata attached to every hand-off
#[derive(Debug, Clone)]
pub struct HandoffOptions {
    pub deck_name: String,
    pub tags: Vec<String>,
    /// Directory holding the audio clips; paths are resolved when set
    pub audio_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandoffCard {
    pub index: EntryId,
    pub english: String,
    pub arabic: String,
    pub pronunciation: String,
    pub audio_file: String,
    /// Absent when no audio directory is configured or the clip is missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handoff {
    pub deck: String,
    pub tags: Vec<String>,
    pub cards: Vec<HandoffCard>,
}

impl Handoff {
    pub fn build(batch: &[VocabularyEntry], options: &HandoffOptions) -> Self {
        let cards = batch
            .iter()
            .map(|entry| HandoffCard {
                index: entry.id,
                english: entry.english.clone(),
                arabic: entry.arabic.clone(),
                pronunciation: entry.pronunciation.clone(),
                audio_file: entry.audio_file(),
                audio_path: resolve_audio(entry, options),
            })
            .collect();

        Self {
            deck: options.deck_name.clone(),
            tags: options.tags.clone(),
            cards,
        }
    }
}

fn resolve_audio(entry: &VocabularyEntry, options: &HandoffOptions) -> Option<PathBuf> {
    let dir = options.audio_dir.as_ref()?;
    let path = entry.audio_path(dir);
    if path.exists() {
        Some(path)
    } else {
        log::warn!("Audio file not found: {:?}", path);
        None
    }
}

/// Writes each batch as a pretty-printed [`Handoff`] document
pub struct JsonSink<W: Write> {
    writer: W,
    options: HandoffOptions,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W, options: HandoffOptions) -> Self {
        Self { writer, options }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> BatchSink for JsonSink<W> {
    fn deliver(&mut self, batch: &[VocabularyEntry]) -> Result<Delivery> {
        let handoff = Handoff::build(batch, &self.options);
        serde_json::to_writer_pretty(&mut self.writer, &handoff)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(Delivery::all(batch))
    }
}

/// [`JsonSink`] that creates its file only when a batch arrives
pub struct JsonFileSink {
    path: PathBuf,
    options: HandoffOptions,
}

impl JsonFileSink {
    pub fn new(path: PathBuf, options: HandoffOptions) -> Self {
        Self { path, options }
    }
}

impl BatchSink for JsonFileSink {
    fn deliver(&mut self, batch: &[VocabularyEntry]) -> Result<Delivery> {
        let file = File::create(&self.path)?;
        let mut sink = JsonSink::new(BufWriter::new(file), self.options.clone());
        let delivery = sink.deliver(batch)?;
        log::info!("Wrote {} cards to {:?}", batch.len(), self.path);
        Ok(delivery)
    }
}
