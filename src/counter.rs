//! Multiset frequency tally.

use alloc::collections::BTreeMap;

use crate::common::GameError;

/// Counts how many times each value has been added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter<K: Ord> {
    values: BTreeMap<K, usize>,
}

impl<K: Ord> Counter<K> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Increment the count of every element yielded by `items`.
    pub fn add<I: IntoIterator<Item = K>>(&mut self, items: I) {
        for item in items {
            *self.values.entry(item).or_insert(0) += 1;
        }
    }

    /// Times `key` has been added so far.
    pub fn count(&self, key: &K) -> usize {
        self.values.get(key).copied().unwrap_or(0)
    }

    /// Highest count of any value, or `GameError::EmptyInput` before anything
    /// was added.
    pub fn max_count(&self) -> Result<usize, GameError> {
        self.values.values().copied().max().ok_or(GameError::EmptyInput)
    }

    /// Value with the highest count. Ties resolve to the smallest key.
    pub fn most_common(&self) -> Option<(&K, usize)> {
        let mut best: Option<(&K, usize)> = None;
        for (k, &n) in &self.values {
            if best.map_or(true, |(_, m)| n > m) {
                best = Some((k, n));
            }
        }
        best
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.values.iter().map(|(k, &n)| (k, n))
    }
}

impl<K: Ord> Default for Counter<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Self::new();
        counter.add(iter);
        counter
    }
}
