//! Daily Levantine Arabic vocabulary picker.
//!
//! Each run draws a handful of words the learner has not met yet, hands
//! them to a flashcard sync tool, and records them so they are never
//! picked again.

pub mod config;
pub mod daily;
pub mod progress;
pub mod selection;
pub mod sink;
pub mod vocabulary;

pub use config::Config;
pub use selection::{select, SeenSet, SelectionError, WordSelector};
pub use vocabulary::{Corpus, EntryId, VocabularyEntry};
