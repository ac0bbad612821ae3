//! License policy compliance.
//!
//! Every component's license identifier is classified against a
//! [`LicensePolicy`] and the results are bucketed into a
//! [`ComplianceReport`]. Only forbidden licenses fail a run; review-required
//! and unknown licenses are surfaced as warnings.
//!
//! ```
//! use sbom_guard::compliance::{ComplianceEvaluator, LicenseCategory, LicensePolicy};
//! use sbom_guard::model::{Component, Sbom};
//!
//! let sbom = Sbom::from_components([
//!     Component::new("libfoo").with_version("1.0").with_license("MIT"),
//!     Component::new("libgpl").with_license("GNU General Public License v2 (GPLv2)"),
//! ]);
//!
//! let policy = LicensePolicy::default();
//! let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
//!
//! assert!(!report.passed());
//! assert_eq!(report.bucket(LicenseCategory::Forbidden).len(), 1);
//! ```

mod classifier;
mod evaluator;
mod policy;

pub use classifier::{
    normalize_license, ClassificationResult, LicenseCategory, LicenseClassifier,
    CLASSIFICATION_ORDER,
};
pub use evaluator::{CategoryCounts, ComplianceEvaluator, ComplianceReport, Verdict};
pub use policy::{LicensePolicy, PolicyConflict};
