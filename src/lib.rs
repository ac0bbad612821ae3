//! **License policy auditing and snapshot comparison for SBOMs.**
//!
//! `sbom-guard` reads the component list of a `CycloneDX` JSON SBOM and answers
//! two questions: do any of the declared licenses violate a policy, and what
//! changed between two snapshots of the same project?
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Sbom`] and [`Component`] types. A component is a name,
//!   an optional version and one license identifier.
//! - **[`parsers`]**: [`parse_sbom`] and [`parse_sbom_str`] turn a document
//!   into an [`Sbom`] or a tagged [`GuardError`].
//! - **[`compliance`]**: The [`LicensePolicy`] value and the
//!   [`ComplianceEvaluator`] that buckets every component into forbidden,
//!   review-required, allowed or unknown.
//! - **[`diff`]**: The [`DiffEngine`], which compares two SBOMs by component
//!   name and reports added, removed and updated entries as a [`ChangeSet`].
//! - **[`reports`]**: Summary, JSON, Markdown and CSV renderers.
//! - **[`config`]**: YAML config file discovery, validation and merging.
//! - **[`pipeline`]** and **[`cli`]**: The load → evaluate → report stages
//!   behind the `sbom-guard` binary.
//!
//! ## Auditing Licenses
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_guard::{parse_sbom, ComplianceEvaluator, LicensePolicy};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sbom = parse_sbom(Path::new("path/to/sbom.json"))?;
//!     let policy = LicensePolicy::default();
//!     let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
//!
//!     println!("{}", report.verdict().message());
//!     Ok(())
//! }
//! ```
//!
//! ## Comparing Snapshots
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_guard::{parse_sbom, DiffEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let old_sbom = parse_sbom(Path::new("path/to/old-sbom.json"))?;
//!     let new_sbom = parse_sbom(Path::new("path/to/new-sbom.json"))?;
//!
//!     let changes = DiffEngine::new().diff(&old_sbom, &new_sbom);
//!     for (name, version) in changes.added_sorted() {
//!         println!("+ {name} @ {}", version.unwrap_or("unknown"));
//!     }
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::struct_excessive_bools,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod compliance;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use compliance::{
    ComplianceEvaluator, ComplianceReport, LicenseCategory, LicenseClassifier, LicensePolicy,
    Verdict,
};
pub use config::{AppConfig, AppConfigBuilder, BehaviorConfig, OutputConfig, PolicyConfig};
pub use config::{ConfigError, Validatable};
pub use diff::{ChangeSet, DiffEngine, DiffSummary, VersionChange};
pub use error::{ErrorContext, ErrorKind, GuardError, Result};
pub use model::{Component, ComponentIndex, Sbom};
pub use parsers::{parse_sbom, parse_sbom_str};
pub use reports::{ReportFormat, ReportGenerator};
