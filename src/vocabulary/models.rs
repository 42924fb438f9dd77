//! Data models for vocabulary entries

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Stable identifier of a vocabulary entry.
///
/// Matches the `index` column of the word list, which also names the
/// entry's audio clip (`001.mp3`, `002.mp3`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntryId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// A single word in the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(rename = "index")]
    pub id: EntryId,
    pub english: String,
    pub arabic: String,
    /// Romanized pronunciation
    pub pronunciation: String,
    /// Audio file name relative to the audio directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
}

impl VocabularyEntry {
    pub fn new(id: u32, english: &str, arabic: &str, pronunciation: &str) -> Self {
        Self {
            id: EntryId(id),
            english: english.to_string(),
            arabic: arabic.to_string(),
            pronunciation: pronunciation.to_string(),
            audio: None,
        }
    }

    /// Audio file name, falling back to the zero-padded index
    pub fn audio_file(&self) -> String {
        match &self.audio {
            Some(name) => name.clone(),
            None => format!("{:03}.mp3", self.id.0),
        }
    }

    /// Full path of the audio file inside `audio_dir`
    pub fn audio_path(&self, audio_dir: &Path) -> PathBuf {
        audio_dir.join(self.audio_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_file_defaults_to_padded_index() {
        let entry = VocabularyEntry::new(7, "water", "مي", "mayy");
        assert_eq!(entry.audio_file(), "007.mp3");

        let entry = VocabularyEntry::new(1234, "house", "بيت", "bayt");
        assert_eq!(entry.audio_file(), "1234.mp3");
    }

    #[test]
    fn test_explicit_audio_file_wins() {
        let mut entry = VocabularyEntry::new(3, "bread", "خبز", "khubz");
        entry.audio = Some("khubz.ogg".to_string());
        assert_eq!(entry.audio_path(Path::new("/audio")), PathBuf::from("/audio/khubz.ogg"));
    }

    #[test]
    fn test_deserialize_index_field() {
        let json = r#"{"index": 12, "english": "car", "arabic": "سيارة", "pronunciation": "sayyara"}"#;
        let entry: VocabularyEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, EntryId(12));
        assert_eq!(entry.audio, None);
    }
}
