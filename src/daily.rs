//! One day's run: pick new words, hand them off, remember them
//!
//! Progress is read before the selection and written only after the sink
//! has reported what it accepted.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use thiserror::Error;

use crate::progress::{Progress, ProgressError, ProgressStorage};
use crate::selection::{select, SelectionError};
use crate::sink::{BatchSink, SinkError};
use crate::vocabulary::{Corpus, EntryId, VocabularyEntry};

#[derive(Error, Debug)]
pub enum DailyError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error("Progress error: {0}")]
    Progress(#[from] ProgressError),

    #[error("Delivery failed: {0}")]
    Sink(#[from] SinkError),
}

pub type Result<T> = std::result::Result<T, DailyError>;

/// What a run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub selected: Vec<VocabularyEntry>,
    pub accepted: Vec<EntryId>,
    pub failed: Vec<(EntryId, String)>,
    /// Unseen entries left after this run
    pub remaining: usize,
    /// Every entry of the corpus has been introduced
    pub complete: bool,
}

/// Summary of the learner's position in the corpus
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub total: usize,
    pub seen: usize,
    pub remaining: usize,
    pub runs: usize,
    pub last_run: Option<DateTime<Utc>>,
}

pub fn status(corpus: &Corpus, progress: &Progress) -> Status {
    let remaining = corpus.unseen_count(&progress.seen);
    Status {
        total: corpus.len(),
        seen: corpus.len() - remaining,
        remaining,
        runs: progress.history.len(),
        last_run: progress.last_run(),
    }
}

/// Select a batch without touching any stored state
pub fn plan<R>(
    corpus: &Corpus,
    progress: &Progress,
    count: i64,
    rng: &mut R,
) -> Result<Vec<VocabularyEntry>>
where
    R: Rng + ?Sized,
{
    let unknown = corpus.unknown_ids(&progress.seen);
    if !unknown.is_empty() {
        log::warn!(
            "{} seen ids are not in the corpus and will be ignored: {:?}",
            unknown.len(),
            unknown
        );
    }
    Ok(select(corpus.entries(), &progress.seen, count, rng)?)
}

/// Run a full day: select, deliver, and save the accepted ids
pub fn run<S, R>(
    corpus: &Corpus,
    store: &ProgressStorage,
    sink: &mut S,
    count: i64,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Result<RunReport>
where
    S: BatchSink + ?Sized,
    R: Rng + ?Sized,
{
    let progress = store.load()?;
    let selected = plan(corpus, &progress, count, rng)?;

    if selected.is_empty() {
        let remaining = corpus.unseen_count(&progress.seen);
        if remaining == 0 {
            log::info!("All {} words have been introduced", corpus.len());
        }
        return Ok(RunReport {
            selected,
            accepted: Vec::new(),
            failed: Vec::new(),
            remaining,
            complete: remaining == 0,
        });
    }

    log::info!(
        "Selected {} words from {} remaining",
        selected.len(),
        corpus.unseen_count(&progress.seen)
    );

    let delivery = sink.deliver(&selected)?;
    for (id, reason) in &delivery.failed {
        log::warn!("Entry {} was not delivered: {}", id, reason);
    }

    // Only ids from this batch may enter the seen set.
    let mut accepted: Vec<EntryId> = Vec::new();
    let mut stray: Vec<EntryId> = Vec::new();
    for id in delivery.accepted {
        if !selected.iter().any(|e| e.id == id) {
            stray.push(id);
        } else if !accepted.contains(&id) {
            accepted.push(id);
        }
    }
    if !stray.is_empty() {
        log::warn!(
            "Ignoring {} accepted ids that were not in this batch: {:?}",
            stray.len(),
            stray
        );
    }

    let updated = progress.record(&accepted, now);
    store.save(&updated)?;

    let remaining = corpus.unseen_count(&updated.seen);
    Ok(RunReport {
        selected,
        accepted,
        failed: delivery.failed,
        remaining,
        complete: remaining == 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Delivery;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use tempfile::TempDir;

    /// Accepts everything except the configured ids
    struct RecordingSink {
        refuse: Vec<EntryId>,
        batches: Vec<Vec<EntryId>>,
    }

    impl RecordingSink {
        fn new(refuse: Vec<EntryId>) -> Self {
            Self { refuse, batches: Vec::new() }
        }
    }

    impl BatchSink for RecordingSink {
        fn deliver(&mut self, batch: &[VocabularyEntry]) -> crate::sink::Result<Delivery> {
            self.batches.push(batch.iter().map(|e| e.id).collect());
            let mut delivery = Delivery::default();
            for entry in batch {
                if self.refuse.contains(&entry.id) {
                    delivery.failed.push((entry.id, "note rejected".to_string()));
                } else {
                    delivery.accepted.push(entry.id);
                }
            }
            Ok(delivery)
        }
    }

    struct FailingSink;

    impl BatchSink for FailingSink {
        fn deliver(&mut self, _batch: &[VocabularyEntry]) -> crate::sink::Result<Delivery> {
            Err(SinkError::Rejected("connection refused".to_string()))
        }
    }

    /// Claims ids beyond the batch it was given
    struct OverReportingSink {
        extra: Vec<EntryId>,
    }

    impl BatchSink for OverReportingSink {
        fn deliver(&mut self, batch: &[VocabularyEntry]) -> crate::sink::Result<Delivery> {
            let mut delivery = Delivery::all(batch);
            delivery.accepted.extend(self.extra.iter().copied());
            Ok(delivery)
        }
    }

    fn corpus(n: u32) -> Corpus {
        Corpus::from_entries(
            (1..=n)
                .map(|i| VocabularyEntry::new(i, &format!("word {}", i), "كلمة", "kilme"))
                .collect(),
        )
        .unwrap()
    }

    fn create_test_store() -> (ProgressStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = ProgressStorage::new(temp_dir.path().join("seen.json"));
        (store, temp_dir)
    }

    #[test]
    fn test_daily_runs_never_repeat_and_exhaust() {
        let corpus = corpus(23);
        let (store, _temp) = create_test_store();
        let mut sink = RecordingSink::new(Vec::new());
        let mut rng = StdRng::seed_from_u64(11);

        let mut introduced = HashSet::new();
        let mut reports = Vec::new();
        for _ in 0..4 {
            let report = run(&corpus, &store, &mut sink, 10, &mut rng, Utc::now()).unwrap();
            for entry in &report.selected {
                assert!(introduced.insert(entry.id), "{} introduced twice", entry.id);
            }
            reports.push(report);
        }

        let sizes: Vec<usize> = reports.iter().map(|r| r.selected.len()).collect();
        assert_eq!(sizes, vec![10, 10, 3, 0]);
        assert_eq!(introduced.len(), 23);
        assert!(reports[2].complete);
        assert!(reports[3].complete);
        assert_eq!(store.load().unwrap().history.len(), 3);
    }

    #[test]
    fn test_failed_entries_offered_again() {
        let corpus = corpus(3);
        let (store, _temp) = create_test_store();
        let mut sink = RecordingSink::new(vec![EntryId(2)]);
        let mut rng = StdRng::seed_from_u64(1);

        let report = run(&corpus, &store, &mut sink, 10, &mut rng, Utc::now()).unwrap();
        assert_eq!(report.selected.len(), 3);
        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.remaining, 1);
        assert!(!report.complete);

        let report = run(&corpus, &store, &mut sink, 10, &mut rng, Utc::now()).unwrap();
        assert_eq!(sink.batches[1], vec![EntryId(2)]);
        assert_eq!(report.remaining, 1);
    }

    #[test]
    fn test_accepted_ids_outside_batch_ignored() {
        let corpus = corpus(5);
        let (store, _temp) = create_test_store();
        let mut rng = StdRng::seed_from_u64(4);

        // Claims every corpus id plus one the corpus does not have.
        let mut extra: Vec<EntryId> = (1..=5).map(EntryId).collect();
        extra.push(EntryId(777));
        let mut sink = OverReportingSink { extra };

        let report = run(&corpus, &store, &mut sink, 1, &mut rng, Utc::now()).unwrap();
        assert_eq!(report.selected.len(), 1);
        let selected = report.selected[0].id;
        assert_eq!(report.accepted, vec![selected]);
        assert_eq!(report.remaining, 4);

        let seen: Vec<EntryId> = store.load().unwrap().seen.iter().collect();
        assert_eq!(seen, vec![selected]);
    }

    #[test]
    fn test_sink_failure_keeps_progress() {
        let corpus = corpus(5);
        let (store, _temp) = create_test_store();
        let mut rng = StdRng::seed_from_u64(1);

        let result = run(&corpus, &store, &mut FailingSink, 2, &mut rng, Utc::now());
        match result {
            Err(err @ DailyError::Sink(SinkError::Rejected(_))) => {
                assert_eq!(
                    err.to_string(),
                    "Delivery failed: Sink rejected the batch: connection refused"
                );
            }
            other => panic!("expected rejected delivery, got {:?}", other),
        }
        assert!(!store.path().exists());
    }

    #[test]
    fn test_empty_corpus_is_fatal() {
        let corpus = Corpus::default();
        let (store, _temp) = create_test_store();
        let mut rng = StdRng::seed_from_u64(1);
        let mut sink = RecordingSink::new(Vec::new());

        let result = run(&corpus, &store, &mut sink, 5, &mut rng, Utc::now());
        assert!(matches!(
            result,
            Err(DailyError::Selection(SelectionError::EmptyCorpus))
        ));
        assert!(sink.batches.is_empty());
    }

    #[test]
    fn test_plan_does_not_save() {
        let corpus = corpus(4);
        let (store, _temp) = create_test_store();
        let mut rng = StdRng::seed_from_u64(2);

        let progress = store.load().unwrap();
        let batch = plan(&corpus, &progress, 2, &mut rng).unwrap();
        assert_eq!(batch.len(), 2);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_status_counts() {
        let corpus = corpus(5);
        let progress = Progress::default().record(&[EntryId(1), EntryId(4), EntryId(40)], Utc::now());

        let status = status(&corpus, &progress);
        assert_eq!(status.total, 5);
        assert_eq!(status.seen, 2);
        assert_eq!(status.remaining, 3);
        assert_eq!(status.runs, 1);
        assert!(status.last_run.is_some());
    }
}
