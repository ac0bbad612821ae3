//! License identifier classification.

use super::LicensePolicy;
use crate::model::Component;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Policy category assigned to a license identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LicenseCategory {
    Forbidden,
    ReviewRequired,
    Allowed,
    Unknown,
}

impl LicenseCategory {
    /// All categories, strictest first
    pub const ALL: [Self; 4] = [
        Self::Forbidden,
        Self::ReviewRequired,
        Self::Allowed,
        Self::Unknown,
    ];

    /// Machine-readable name
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Forbidden => "forbidden",
            Self::ReviewRequired => "review_required",
            Self::Allowed => "allowed",
            Self::Unknown => "unknown",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Forbidden => "Forbidden",
            Self::ReviewRequired => "Review required",
            Self::Allowed => "Allowed",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for LicenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Policy sets consulted in order; the first set containing the raw or
/// normalized identifier decides the category.
pub const CLASSIFICATION_ORDER: [LicenseCategory; 3] = [
    LicenseCategory::Forbidden,
    LicenseCategory::ReviewRequired,
    LicenseCategory::Allowed,
];

/// Strip a trailing parenthetical: truncate at the first `(` and trim.
///
/// ```
/// use sbom_guard::compliance::normalize_license;
///
/// assert_eq!(
///     normalize_license("GNU General Public License v2 (GPLv2)"),
///     "GNU General Public License v2"
/// );
/// assert_eq!(normalize_license(" MIT "), "MIT");
/// ```
#[must_use]
pub fn normalize_license(identifier: &str) -> &str {
    identifier
        .find('(')
        .map_or(identifier, |idx| &identifier[..idx])
        .trim()
}

/// One component together with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub component: Component,
    pub category: LicenseCategory,
    /// The component's license after [`normalize_license`]
    pub normalized_license: String,
}

/// Classifies license identifiers against a borrowed policy.
#[derive(Debug, Clone, Copy)]
pub struct LicenseClassifier<'p> {
    policy: &'p LicensePolicy,
}

impl<'p> LicenseClassifier<'p> {
    #[must_use]
    pub const fn new(policy: &'p LicensePolicy) -> Self {
        Self { policy }
    }

    /// Classify a raw license identifier.
    ///
    /// Matching is exact string equality on the raw identifier and on its
    /// normalized form; there is no case folding.
    #[must_use]
    pub fn classify(&self, identifier: &str) -> LicenseCategory {
        let normalized = normalize_license(identifier);
        CLASSIFICATION_ORDER
            .into_iter()
            .find(|&category| {
                self.policy.contains(category, identifier)
                    || self.policy.contains(category, normalized)
            })
            .unwrap_or(LicenseCategory::Unknown)
    }

    /// Classify a component by its extracted license identifier.
    #[must_use]
    pub fn classify_component(&self, component: &Component) -> ClassificationResult {
        ClassificationResult {
            category: self.classify(&component.license),
            normalized_license: normalize_license(&component.license).to_string(),
            component: component.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UNKNOWN_LICENSE;

    fn policy() -> LicensePolicy {
        LicensePolicy::new(
            ["MIT", "Apache-2.0"],
            ["GPL", "GNU General Public License v2 (GPLv2)"],
            ["LGPL", "Creative Commons"],
        )
    }

    #[test]
    fn test_normalize_license() {
        assert_eq!(normalize_license("MIT"), "MIT");
        assert_eq!(normalize_license("GPL (v3)"), "GPL");
        assert_eq!(normalize_license("a (b) (c)"), "a");
        assert_eq!(normalize_license("(GPL)"), "");
        assert_eq!(normalize_license("  BSD  "), "BSD");
    }

    #[test]
    fn test_classify_by_raw_identifier() {
        let policy = policy();
        let classifier = LicenseClassifier::new(&policy);

        assert_eq!(classifier.classify("MIT"), LicenseCategory::Allowed);
        assert_eq!(
            classifier.classify("GNU General Public License v2 (GPLv2)"),
            LicenseCategory::Forbidden
        );
        assert_eq!(classifier.classify("LGPL"), LicenseCategory::ReviewRequired);
        assert_eq!(classifier.classify("WTFPL"), LicenseCategory::Unknown);
    }

    #[test]
    fn test_classify_by_normalized_identifier() {
        let policy = policy();
        let classifier = LicenseClassifier::new(&policy);

        assert_eq!(classifier.classify("MIT (Expat)"), LicenseCategory::Allowed);
        assert_eq!(
            classifier.classify("Creative Commons (CC-BY-4.0)"),
            LicenseCategory::ReviewRequired
        );
        assert_eq!(classifier.classify("GPL (any version)"), LicenseCategory::Forbidden);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let policy = policy();
        let classifier = LicenseClassifier::new(&policy);
        assert_eq!(classifier.classify("mit"), LicenseCategory::Unknown);
        assert_eq!(classifier.classify("MIT License"), LicenseCategory::Unknown);
    }

    #[test]
    fn test_stricter_category_wins_on_overlap() {
        let policy = LicensePolicy::new(["Dual"], ["Dual"], ["Dual"]);
        let classifier = LicenseClassifier::new(&policy);
        assert_eq!(classifier.classify("Dual"), LicenseCategory::Forbidden);

        let policy = LicensePolicy::new(["Dual"], Vec::<String>::new(), ["Dual"]);
        let classifier = LicenseClassifier::new(&policy);
        assert_eq!(classifier.classify("Dual"), LicenseCategory::ReviewRequired);
    }

    #[test]
    fn test_raw_forbidden_beats_normalized_allowed() {
        let policy = LicensePolicy::new(["Foo"], ["Foo (strict)"], Vec::<String>::new());
        let classifier = LicenseClassifier::new(&policy);
        assert_eq!(classifier.classify("Foo (strict)"), LicenseCategory::Forbidden);
        assert_eq!(classifier.classify("Foo (lax)"), LicenseCategory::Allowed);
    }

    #[test]
    fn test_unknown_identifier_is_unknown_category() {
        let policy = LicensePolicy::default();
        let classifier = LicenseClassifier::new(&policy);
        assert_eq!(classifier.classify(UNKNOWN_LICENSE), LicenseCategory::Unknown);
    }

    #[test]
    fn test_classify_component_keeps_raw_license() {
        let policy = policy();
        let classifier = LicenseClassifier::new(&policy);
        let comp = Component::new("libgpl")
            .with_version("2.0")
            .with_license("GNU General Public License v2 (GPLv2)");

        let result = classifier.classify_component(&comp);
        assert_eq!(result.category, LicenseCategory::Forbidden);
        assert_eq!(result.component.license, "GNU General Public License v2 (GPLv2)");
        assert_eq!(result.normalized_license, "GNU General Public License v2");
    }
}
