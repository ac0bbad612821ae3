//! Name-keyed index over an SBOM.
//!
//! Comparison treats the component name as a key. When a document lists the
//! same name more than once, the later entry overwrites the earlier one, and
//! the name is recorded so callers can surface the overwrite.

use super::{component_label, Sbom};
use std::collections::{BTreeSet, HashMap};

/// Precomputed name → version map for one SBOM.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct ComponentIndex {
    /// Version by component name (last entry wins)
    versions: HashMap<String, Option<String>>,
    /// Names that appeared more than once
    duplicates: BTreeSet<String>,
}

impl ComponentIndex {
    /// Build the index from an SBOM in document order.
    pub fn build(sbom: &Sbom) -> Self {
        let mut index = Self {
            versions: HashMap::with_capacity(sbom.component_count()),
            duplicates: BTreeSet::new(),
        };

        for comp in &sbom.components {
            if let Some(previous) = index
                .versions
                .insert(comp.name.clone(), comp.version.clone())
            {
                tracing::debug!(
                    "Duplicate component name: {} overwrites {}",
                    component_label(&comp.name, comp.version.as_deref()),
                    component_label(&comp.name, previous.as_deref())
                );
                index.duplicates.insert(comp.name.clone());
            }
        }

        index
    }

    /// Whether a component with this name exists
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.versions.contains_key(name)
    }

    /// Version for a name: `None` if absent, `Some(None)` if unversioned
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Option<&str>> {
        self.versions.get(name).map(Option::as_deref)
    }

    /// Version for a name, flattening "absent" and "unversioned"
    #[must_use]
    pub fn version_of(&self, name: &str) -> Option<&str> {
        self.get(name).flatten()
    }

    /// Iterate over `(name, version)` pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.versions
            .iter()
            .map(|(name, version)| (name.as_str(), version.as_deref()))
    }

    /// Number of distinct names
    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Whether the index is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Names that were listed more than once, sorted
    #[must_use]
    pub const fn duplicate_names(&self) -> &BTreeSet<String> {
        &self.duplicates
    }

    /// Log a single warning line if any names were overwritten.
    pub fn log_collision_summary(&self, label: &str) {
        if !self.duplicates.is_empty() {
            tracing::warn!(
                duplicate_count = self.duplicates.len(),
                "{label} SBOM lists {} component name(s) more than once; the last entry wins: {}",
                self.duplicates.len(),
                self.duplicates
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
}
