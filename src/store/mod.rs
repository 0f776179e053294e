//! Frequency store.
//!
//! Owns the item → count aggregate for one purchase record and answers
//! queries against it:
//! - exact-match lookup by item name
//! - full listing in ascending name order
//! - serialization of the listing to a snapshot file
//!
//! The map is rebuilt from the source record for every query and never
//! mutated after parsing.

pub mod snapshot;

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use snapshot::Snapshot;

/// Result of looking up one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Found(u64),
    NotFound,
}

impl Lookup {
    pub fn count(self) -> Option<u64> {
        match self {
            Lookup::Found(count) => Some(count),
            Lookup::NotFound => None,
        }
    }
}

/// Occurrence count per distinct item name.
///
/// Keys are kept in a `BTreeMap` so listings come out sorted by name and
/// are identical from run to run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<String, u64>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        FrequencyMap::default()
    }

    /// Count one more occurrence of `item`, inserting it at 1 if unseen.
    pub(crate) fn record(&mut self, item: &str) {
        if let Some(count) = self.counts.get_mut(item) {
            *count += 1;
        } else {
            self.counts.insert(item.to_string(), 1);
        }
    }

    pub fn lookup(&self, item: &str) -> Lookup {
        match self.counts.get(item) {
            Some(&count) => Lookup::Found(count),
            None => Lookup::NotFound,
        }
    }

    /// All entries, ascending by item name.
    pub fn list(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .map(|(name, &count)| (name.clone(), count))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens the map was built from.
    pub fn total(&self) -> u64 {
        self.counts.values().fold(0u64, |acc, c| acc.saturating_add(*c))
    }

    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot::from_counts(self.counts.iter().map(|(name, &count)| (name.as_str(), count)))
    }

    /// Replace the file at `path` with this map's listing.
    pub fn write_snapshot(&self, path: &Path) -> Result<()> {
        self.to_snapshot().write(path)
    }
}
