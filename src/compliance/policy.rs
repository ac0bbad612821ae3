//! License policy: three sets of license identifiers.

use super::{LicenseCategory, CLASSIFICATION_ORDER};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Permissive licenses accepted without review.
const DEFAULT_ALLOWED: &[&str] = &[
    "MIT",
    "MIT License",
    "Apache Software License",
    "Apache 2.0",
    "Apache-2.0",
    "BSD License",
    "BSD",
    "3-Clause BSD",
    "ISC License",
    "ISC",
    "Python Software Foundation License",
    "Mozilla Public License 2.0 (MPL 2.0)",
];

/// Strong copyleft licenses.
const DEFAULT_FORBIDDEN: &[&str] = &[
    "GNU General Public License v2 (GPLv2)",
    "GNU General Public License v3 (GPLv3)",
    "GNU Affero General Public License v3 (AGPLv3)",
    "GPL",
    "GPLv2",
    "GPLv3",
    "AGPL",
];

/// Weak copyleft and attribution licenses that need legal sign-off.
const DEFAULT_REVIEW_REQUIRED: &[&str] = &[
    "GNU Lesser General Public License v2 (LGPLv2)",
    "GNU Lesser General Public License v3 (LGPLv3)",
    "LGPL",
    "LGPLv2",
    "LGPLv3",
    "Creative Commons",
];

/// Organizational license policy.
///
/// Constructed once per run and passed by reference to the classifier and
/// evaluator. Sets that are missing from a config or policy file keep
/// their built-in defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LicensePolicy {
    /// Licenses accepted without review
    pub allowed: BTreeSet<String>,
    /// Licenses that fail the compliance check
    pub forbidden: BTreeSet<String>,
    /// Licenses that pass but must be reviewed
    pub review_required: BTreeSet<String>,
}

impl Default for LicensePolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_ALLOWED.iter().copied(),
            DEFAULT_FORBIDDEN.iter().copied(),
            DEFAULT_REVIEW_REQUIRED.iter().copied(),
        )
    }
}

/// An identifier listed in more than one policy set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyConflict {
    pub identifier: String,
    /// Sets containing the identifier, strictest first
    pub categories: Vec<LicenseCategory>,
}

impl PolicyConflict {
    /// The category the identifier actually resolves to
    #[must_use]
    pub fn resolved_as(&self) -> LicenseCategory {
        self.categories
            .first()
            .copied()
            .unwrap_or(LicenseCategory::Unknown)
    }
}

impl std::fmt::Display for PolicyConflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sets: Vec<_> = self.categories.iter().map(LicenseCategory::name).collect();
        write!(
            f,
            "'{}' is listed in {} and resolves as {}",
            self.identifier,
            sets.join(", "),
            self.resolved_as().name()
        )
    }
}

impl LicensePolicy {
    /// Build a policy from three identifier lists.
    pub fn new<A, F, R>(allowed: A, forbidden: F, review_required: R) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        F: IntoIterator,
        F::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Self {
            allowed: allowed.into_iter().map(Into::into).collect(),
            forbidden: forbidden.into_iter().map(Into::into).collect(),
            review_required: review_required.into_iter().map(Into::into).collect(),
        }
    }

    /// A policy with all three sets empty: everything classifies as unknown.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            allowed: BTreeSet::new(),
            forbidden: BTreeSet::new(),
            review_required: BTreeSet::new(),
        }
    }

    /// Parse a policy from YAML (JSON is accepted as a YAML subset).
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// The set backing a category; `Unknown` has none.
    #[must_use]
    pub const fn set_for(&self, category: LicenseCategory) -> Option<&BTreeSet<String>> {
        match category {
            LicenseCategory::Allowed => Some(&self.allowed),
            LicenseCategory::Forbidden => Some(&self.forbidden),
            LicenseCategory::ReviewRequired => Some(&self.review_required),
            LicenseCategory::Unknown => None,
        }
    }

    /// Whether `identifier` is listed under `category`
    #[must_use]
    pub fn contains(&self, category: LicenseCategory, identifier: &str) -> bool {
        self.set_for(category)
            .is_some_and(|set| set.contains(identifier))
    }

    /// Total number of identifiers across all sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.allowed.len() + self.forbidden.len() + self.review_required.len()
    }

    /// Whether all sets are empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Identifiers that appear in more than one set, sorted.
    ///
    /// Such a policy is still usable: the classifier resolves toward the
    /// stricter category.
    #[must_use]
    pub fn conflicts(&self) -> Vec<PolicyConflict> {
        let all: BTreeSet<&String> = self
            .allowed
            .iter()
            .chain(&self.forbidden)
            .chain(&self.review_required)
            .collect();

        all.into_iter()
            .filter_map(|identifier| {
                let categories: Vec<_> = CLASSIFICATION_ORDER
                    .into_iter()
                    .filter(|&cat| self.contains(cat, identifier))
                    .collect();
                (categories.len() > 1).then(|| PolicyConflict {
                    identifier: identifier.clone(),
                    categories,
                })
            })
            .collect()
    }

    /// Emit one warning per conflicting identifier.
    pub fn log_conflicts(&self) {
        for conflict in self.conflicts() {
            tracing::warn!("License policy misconfiguration: {conflict}");
        }
    }
}
