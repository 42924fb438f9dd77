//! Random selection of unseen vocabulary
//!
//! `unseen = corpus - seen`. When the request covers every unseen entry the
//! whole of `unseen` comes back shuffled; otherwise a uniform sample of the
//! requested size is drawn without replacement.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use super::seen::SeenSet;
use crate::vocabulary::VocabularyEntry;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("Vocabulary corpus is empty")]
    EmptyCorpus,

    #[error("Invalid word count: {0} (must be zero or more)")]
    InvalidCount(i64),
}

pub type Result<T> = std::result::Result<T, SelectionError>;

/// Pick up to `count` entries from `corpus` that are not in `seen`
///
/// # Arguments
/// * `corpus` - Candidate entries, in corpus order
/// * `seen` - Ids already introduced; ids unknown to the corpus are ignored
/// * `count` - Requested batch size
/// * `rng` - Random source; a seeded rng gives reproducible batches
///
/// # Returns
/// At most `count` distinct entries in random order. An exhausted corpus
/// gives an empty batch, not an error.
pub fn select<R>(
    corpus: &[VocabularyEntry],
    seen: &SeenSet,
    count: i64,
    rng: &mut R,
) -> Result<Vec<VocabularyEntry>>
where
    R: Rng + ?Sized,
{
    if corpus.is_empty() {
        return Err(SelectionError::EmptyCorpus);
    }
    let count = usize::try_from(count).map_err(|_| SelectionError::InvalidCount(count))?;

    let mut ids = HashSet::with_capacity(corpus.len());
    let mut unseen: Vec<&VocabularyEntry> = corpus
        .iter()
        .filter(|entry| !seen.contains(entry.id) && ids.insert(entry.id))
        .collect();

    let amount = count.min(unseen.len());
    let (picked, _) = unseen.partial_shuffle(rng, amount);

    Ok(picked.iter().map(|entry| (*entry).clone()).collect())
}

/// Word selector owning its random source
pub struct WordSelector<R = StdRng> {
    rng: R,
}

impl WordSelector<StdRng> {
    /// Reproducible selector for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> WordSelector<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn select(
        &mut self,
        corpus: &[VocabularyEntry],
        seen: &SeenSet,
        count: i64,
    ) -> Result<Vec<VocabularyEntry>> {
        select(corpus, seen, count, &mut self.rng)
    }
}
