//! Diff result types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Version transition for a component present in both snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionChange {
    pub old: Option<String>,
    pub new: Option<String>,
}

impl VersionChange {
    pub fn new(old: Option<&str>, new: Option<&str>) -> Self {
        Self {
            old: old.map(str::to_string),
            new: new.map(str::to_string),
        }
    }
}

/// Added, removed and updated components keyed by name.
///
/// The maps are unordered. Use the `*_sorted` accessors when presenting
/// results; they order entries by component name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Present only in the new snapshot: name → version
    pub added: HashMap<String, Option<String>>,
    /// Present only in the old snapshot: name → version
    pub removed: HashMap<String, Option<String>>,
    /// Present in both with different versions
    pub updated: HashMap<String, VersionChange>,
    /// Names listed more than once in the old snapshot
    pub duplicates_old: BTreeSet<String>,
    /// Names listed more than once in the new snapshot
    pub duplicates_new: BTreeSet<String>,
}

/// Counts for a change set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub total_changes: usize,
    pub components_added: usize,
    pub components_removed: usize,
    pub components_updated: usize,
}

impl ChangeSet {
    /// Create an empty change set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the snapshots have no drift
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }

    #[must_use]
    pub fn summary(&self) -> DiffSummary {
        DiffSummary {
            total_changes: self.added.len() + self.removed.len() + self.updated.len(),
            components_added: self.added.len(),
            components_removed: self.removed.len(),
            components_updated: self.updated.len(),
        }
    }

    /// Whether either snapshot had names overwritten during indexing
    #[must_use]
    pub fn has_duplicates(&self) -> bool {
        !self.duplicates_old.is_empty() || !self.duplicates_new.is_empty()
    }

    /// Added components ordered by name
    #[must_use]
    pub fn added_sorted(&self) -> Vec<(&str, Option<&str>)> {
        sorted_versions(&self.added)
    }

    /// Removed components ordered by name
    #[must_use]
    pub fn removed_sorted(&self) -> Vec<(&str, Option<&str>)> {
        sorted_versions(&self.removed)
    }

    /// Updated components ordered by name
    #[must_use]
    pub fn updated_sorted(&self) -> Vec<(&str, &VersionChange)> {
        let mut entries: Vec<_> = self
            .updated
            .iter()
            .map(|(name, change)| (name.as_str(), change))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn sorted_versions(map: &HashMap<String, Option<String>>) -> Vec<(&str, Option<&str>)> {
    let mut entries: Vec<_> = map
        .iter()
        .map(|(name, version)| (name.as_str(), version.as_deref()))
        .collect();
    entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
    entries
}
