//! Vocabulary corpus for the daily word picker
//!
//! This module provides:
//! - Vocabulary entry model (English, Arabic script, pronunciation, audio)
//! - Corpus loading from the JSON word list
//! - Validation of entry ids and text fields

pub mod models;
pub mod storage;

pub use models::*;
pub use storage::{Corpus, CorpusError};
