//! Data models for learner progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::selection::SeenSet;
use crate::vocabulary::EntryId;

/// Current progress file layout version
pub const PROGRESS_VERSION: u32 = 1;

/// Words introduced by a single run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunRecord {
    pub introduced_at: DateTime<Utc>,
    pub ids: Vec<EntryId>,
}

/// Everything remembered about the learner between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub seen: SeenSet,
    #[serde(default)]
    pub history: Vec<RunRecord>,
}

fn default_version() -> u32 {
    PROGRESS_VERSION
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            version: PROGRESS_VERSION,
            seen: SeenSet::new(),
            history: Vec::new(),
        }
    }
}

impl Progress {
    /// A new progress value with `ids` marked as seen.
    ///
    /// Ids already seen are not repeated in the history entry. An empty
    /// batch returns an unchanged copy.
    pub fn record(&self, ids: &[EntryId], at: DateTime<Utc>) -> Progress {
        let mut fresh: Vec<EntryId> = Vec::new();
        for &id in ids {
            if !self.seen.contains(id) && !fresh.contains(&id) {
                fresh.push(id);
            }
        }

        let mut next = self.clone();
        if fresh.is_empty() {
            return next;
        }

        next.seen = self.seen.merged(fresh.iter().copied());
        next.history.push(RunRecord {
            introduced_at: at,
            ids: fresh,
        });
        next
    }

    /// Time of the most recent run that introduced words
    pub fn last_run(&self) -> Option<DateTime<Utc>> {
        self.history.last().map(|r| r.introduced_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_record_merges_and_logs() {
        let progress = Progress::default();
        let next = progress.record(&[EntryId(4), EntryId(2)], at(1));

        assert!(progress.seen.is_empty());
        assert_eq!(next.seen.len(), 2);
        assert_eq!(next.history.len(), 1);
        assert_eq!(next.history[0].ids, vec![EntryId(4), EntryId(2)]);
        assert_eq!(next.last_run(), Some(at(1)));
    }

    #[test]
    fn test_record_skips_already_seen() {
        let progress = Progress::default().record(&[EntryId(1)], at(1));
        let next = progress.record(&[EntryId(1), EntryId(3), EntryId(3)], at(2));

        assert_eq!(next.seen.len(), 2);
        assert_eq!(next.history[1].ids, vec![EntryId(3)]);
    }

    #[test]
    fn test_empty_batch_adds_no_history() {
        let progress = Progress::default().record(&[EntryId(1)], at(1));
        let next = progress.record(&[], at(2));
        assert_eq!(next, progress);
    }

    #[test]
    fn test_history_uses_camel_case_keys() {
        let progress = Progress::default().record(&[EntryId(6)], at(2));
        let value = serde_json::to_value(&progress).unwrap();

        let run = &value["history"][0];
        assert_eq!(run["introducedAt"], "2026-03-02T08:00:00Z");
        assert_eq!(run["ids"], serde_json::json!([6]));
        assert!(run.get("introduced_at").is_none());
        assert_eq!(value["seen"], serde_json::json!([6]));
    }

    #[test]
    fn test_deserialize_bare_document() {
        let progress: Progress = serde_json::from_str("{}").unwrap();
        assert_eq!(progress, Progress::default());
    }
}
