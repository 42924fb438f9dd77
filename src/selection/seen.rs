use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::vocabulary::EntryId;

/// Ids of entries already introduced to the learner.
///
/// Only grows. Merging produces a new set so the caller decides when the
/// merged set becomes the stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeenSet(BTreeSet<EntryId>);

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = EntryId> + '_ {
        self.0.iter().copied()
    }

    /// A copy of this set with `ids` added
    pub fn merged<I>(&self, ids: I) -> SeenSet
    where
        I: IntoIterator<Item = EntryId>,
    {
        let mut next = self.0.clone();
        next.extend(ids);
        SeenSet(next)
    }
}

impl FromIterator<EntryId> for SeenSet {
    fn from_iter<T: IntoIterator<Item = EntryId>>(iter: T) -> Self {
        SeenSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merged_leaves_source_untouched() {
        let seen: SeenSet = [EntryId(1), EntryId(2)].into_iter().collect();
        let next = seen.merged([EntryId(2), EntryId(5)]);

        assert_eq!(seen.len(), 2);
        assert_eq!(next.len(), 3);
        assert!(next.contains(EntryId(5)));
        assert!(!seen.contains(EntryId(5)));
    }

    #[test]
    fn test_serializes_as_sorted_array() {
        let seen: SeenSet = [EntryId(9), EntryId(3)].into_iter().collect();
        assert_eq!(serde_json::to_string(&seen).unwrap(), "[3,9]");
    }
}
