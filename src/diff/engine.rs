//! Map-based diff engine.

use super::{ChangeSet, VersionChange};
use crate::model::{ComponentIndex, Sbom};

/// Compares two SBOM snapshots by component name.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffEngine;

impl DiffEngine {
    /// Create a new diff engine
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Compare two SBOMs.
    ///
    /// Duplicate names within one SBOM resolve last-write-wins; the affected
    /// names are logged and carried in the result.
    #[must_use]
    pub fn diff(&self, old: &Sbom, new: &Sbom) -> ChangeSet {
        let old_index = ComponentIndex::build(old);
        let new_index = ComponentIndex::build(new);

        old_index.log_collision_summary("Old");
        new_index.log_collision_summary("New");

        self.diff_indexes(&old_index, &new_index)
    }

    /// Compare two prebuilt indexes.
    #[must_use]
    pub fn diff_indexes(&self, old: &ComponentIndex, new: &ComponentIndex) -> ChangeSet {
        let mut result = ChangeSet::new();

        for (name, new_version) in new.iter() {
            match old.get(name) {
                None => {
                    result
                        .added
                        .insert(name.to_string(), new_version.map(str::to_string));
                }
                Some(old_version) if old_version != new_version => {
                    result.updated.insert(
                        name.to_string(),
                        VersionChange::new(old_version, new_version),
                    );
                }
                Some(_) => {}
            }
        }

        for (name, old_version) in old.iter() {
            if !new.contains(name) {
                result
                    .removed
                    .insert(name.to_string(), old_version.map(str::to_string));
            }
        }

        result.duplicates_old = old.duplicate_names().clone();
        result.duplicates_new = new.duplicate_names().clone();

        let summary = result.summary();
        tracing::debug!(
            added = summary.components_added,
            removed = summary.components_removed,
            updated = summary.components_updated,
            "Compared {} old names against {} new names",
            old.len(),
            new.len()
        );

        result
    }
}
