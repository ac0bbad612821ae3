//! Compliance evaluation over a whole SBOM.

use super::{ClassificationResult, LicenseCategory, LicenseClassifier, LicensePolicy};
use crate::model::Sbom;
use serde::{Deserialize, Serialize};

/// Overall outcome of a compliance run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Every license is allowed
    Passed,
    /// No forbidden licenses, but some need review or are unknown
    PassedWithWarnings,
    /// At least one forbidden license
    Failed,
}

impl Verdict {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Passed => "passed",
            Self::PassedWithWarnings => "passed_with_warnings",
            Self::Failed => "failed",
        }
    }

    /// One-line message for report footers
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Passed => "PASS: all licenses comply with the policy",
            Self::PassedWithWarnings => {
                "WARNING: no forbidden licenses, but some need legal review or are unknown"
            }
            Self::Failed => "FAIL: forbidden licenses detected",
        }
    }
}

/// Per-category component counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCounts {
    pub allowed: usize,
    pub review_required: usize,
    pub forbidden: usize,
    pub unknown: usize,
}

impl CategoryCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.allowed + self.review_required + self.forbidden + self.unknown
    }
}

/// Classification results partitioned by category.
///
/// Every evaluated component lands in exactly one bucket; within a bucket
/// components keep document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub allowed: Vec<ClassificationResult>,
    pub review_required: Vec<ClassificationResult>,
    pub forbidden: Vec<ClassificationResult>,
    pub unknown: Vec<ClassificationResult>,
}

impl ComplianceReport {
    /// `true` unless a forbidden license was found
    #[must_use]
    pub fn passed(&self) -> bool {
        self.forbidden.is_empty()
    }

    #[must_use]
    pub fn verdict(&self) -> Verdict {
        if !self.passed() {
            Verdict::Failed
        } else if self.review_required.is_empty() && self.unknown.is_empty() {
            Verdict::Passed
        } else {
            Verdict::PassedWithWarnings
        }
    }

    /// Results for one category
    #[must_use]
    pub fn bucket(&self, category: LicenseCategory) -> &[ClassificationResult] {
        match category {
            LicenseCategory::Allowed => &self.allowed,
            LicenseCategory::ReviewRequired => &self.review_required,
            LicenseCategory::Forbidden => &self.forbidden,
            LicenseCategory::Unknown => &self.unknown,
        }
    }

    #[must_use]
    pub fn counts(&self) -> CategoryCounts {
        CategoryCounts {
            allowed: self.allowed.len(),
            review_required: self.review_required.len(),
            forbidden: self.forbidden.len(),
            unknown: self.unknown.len(),
        }
    }

    /// Number of classified components across all buckets
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts().total()
    }

    fn push(&mut self, result: ClassificationResult) {
        let bucket = match result.category {
            LicenseCategory::Allowed => &mut self.allowed,
            LicenseCategory::ReviewRequired => &mut self.review_required,
            LicenseCategory::Forbidden => &mut self.forbidden,
            LicenseCategory::Unknown => &mut self.unknown,
        };
        bucket.push(result);
    }
}

/// Runs the classifier over every component of an SBOM.
#[derive(Debug, Clone, Copy)]
pub struct ComplianceEvaluator<'p> {
    classifier: LicenseClassifier<'p>,
}

impl<'p> ComplianceEvaluator<'p> {
    #[must_use]
    pub const fn new(policy: &'p LicensePolicy) -> Self {
        Self {
            classifier: LicenseClassifier::new(policy),
        }
    }

    /// Classify every component and bucket the results.
    #[must_use]
    pub fn evaluate(&self, sbom: &Sbom) -> ComplianceReport {
        let mut report = ComplianceReport::default();

        for component in &sbom.components {
            let result = self.classifier.classify_component(component);
            if result.category == LicenseCategory::Forbidden {
                tracing::debug!(
                    "Forbidden license on {}@{}: {}",
                    component.name,
                    component.display_version(),
                    component.license
                );
            }
            report.push(result);
        }

        let counts = report.counts();
        tracing::debug!(
            allowed = counts.allowed,
            review_required = counts.review_required,
            forbidden = counts.forbidden,
            unknown = counts.unknown,
            "Classified {} components",
            counts.total()
        );

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Component;

    fn sample_sbom() -> Sbom {
        Sbom::from_components([
            Component::new("libfoo").with_version("1.0").with_license("MIT"),
            Component::new("libgpl")
                .with_version("2.0")
                .with_license("GNU General Public License v2 (GPLv2)"),
            Component::new("liblgpl").with_license("LGPL"),
            Component::new("mystery"),
            Component::new("libbar").with_license("Apache-2.0"),
        ])
    }

    #[test]
    fn test_evaluate_buckets() {
        let policy = LicensePolicy::default();
        let report = ComplianceEvaluator::new(&policy).evaluate(&sample_sbom());

        let names = |category| {
            report
                .bucket(category)
                .iter()
                .map(|r| r.component.name.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(LicenseCategory::Allowed), ["libfoo", "libbar"]);
        assert_eq!(names(LicenseCategory::Forbidden), ["libgpl"]);
        assert_eq!(names(LicenseCategory::ReviewRequired), ["liblgpl"]);
        assert_eq!(names(LicenseCategory::Unknown), ["mystery"]);

        assert_eq!(report.total(), 5);
        assert!(!report.passed());
        assert_eq!(report.verdict(), Verdict::Failed);
    }

    #[test]
    fn test_review_and_unknown_do_not_fail() {
        let policy = LicensePolicy::default();
        let sbom = Sbom::from_components([
            Component::new("liblgpl").with_license("LGPL"),
            Component::new("mystery"),
        ]);
        let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);

        assert!(report.passed());
        assert_eq!(report.verdict(), Verdict::PassedWithWarnings);
    }

    #[test]
    fn test_all_allowed_passes_cleanly() {
        let policy = LicensePolicy::default();
        let sbom = Sbom::from_components([Component::new("a").with_license("ISC")]);
        let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
        assert_eq!(report.verdict(), Verdict::Passed);
    }

    #[test]
    fn test_empty_sbom_passes() {
        let policy = LicensePolicy::default();
        let report = ComplianceEvaluator::new(&policy).evaluate(&Sbom::default());

        assert_eq!(report.counts(), CategoryCounts::default());
        assert!(report.passed());
        assert_eq!(report.verdict(), Verdict::Passed);
    }

    #[test]
    fn test_duplicates_are_each_classified() {
        let policy = LicensePolicy::default();
        let sbom = Sbom::from_components([
            Component::new("a").with_version("1").with_license("MIT"),
            Component::new("a").with_version("2").with_license("GPL"),
        ]);
        let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
        assert_eq!(report.total(), 2);
        assert_eq!(report.forbidden.len(), 1);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let policy = LicensePolicy::default();
        let evaluator = ComplianceEvaluator::new(&policy);
        let sbom = sample_sbom();
        assert_eq!(evaluator.evaluate(&sbom), evaluator.evaluate(&sbom));
    }
}
