//! Report generation for compliance and comparison results.
//!
//! Four output formats are available:
//! - Summary: sectioned terminal text, optionally colored
//! - JSON: structured data for programmatic integration
//! - Markdown: tables for pull request and CI comments
//! - CSV: one row per component or change for spreadsheets
//!
//! Reporters are stateless apart from presentation flags. Listings are sorted
//! by name (comparison) or kept in document order (compliance), so identical
//! input always yields identical output unless a timestamp is requested.
//!
//! # Security
//!
//! Component names and licenses come straight from the SBOM. The `escape`
//! module must be used before embedding them in Markdown or CSV.

mod csv;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use csv::CsvReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportConfig, ReportFormat, ReportMetadata};

use crate::compliance::ComplianceReport;
use crate::diff::{ChangeSet, VersionChange};
use crate::error::{GuardError, ReportErrorKind};
use crate::model::Sbom;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<ReportError> for GuardError {
    fn from(err: ReportError) -> Self {
        let kind = match err {
            ReportError::SerializationError(msg) => ReportErrorKind::JsonSerializationError(msg),
            ReportError::FormatError(e) => ReportErrorKind::RenderFailed(e.to_string()),
        };
        Self::report("generating report", kind)
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a license compliance run
    fn generate_analyze_report(
        &self,
        sbom: &Sbom,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Generate a report for a snapshot comparison
    fn generate_compare_report(
        &self,
        changes: &ChangeSet,
        old_sbom: &Sbom,
        new_sbom: &Sbom,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Csv => Box::new(CsvReporter::new()),
    }
}

/// Display version for a component, using the "not specified" label for `None`
pub(crate) fn version_label(version: Option<&str>) -> &str {
    version.unwrap_or(crate::model::VERSION_NOT_SPECIFIED)
}

/// Label for a missing version on an update row whose other side is the
/// literal string `"unknown"`.
pub const VERSION_UNSPECIFIED_LABEL: &str = "(unspecified)";

/// Old and new labels for an update row.
///
/// A missing version and a literal `"unknown"` must not render identically,
/// so the missing side falls back to [`VERSION_UNSPECIFIED_LABEL`].
pub(crate) fn version_change_labels(change: &VersionChange) -> (&str, &str) {
    let old = version_label(change.old.as_deref());
    let new = version_label(change.new.as_deref());
    if old != new {
        return (old, new);
    }
    match (change.old.is_none(), change.new.is_none()) {
        (true, false) => (VERSION_UNSPECIFIED_LABEL, new),
        (false, true) => (old, VERSION_UNSPECIFIED_LABEL),
        _ => (old, new),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [
            ReportFormat::Summary,
            ReportFormat::Json,
            ReportFormat::Markdown,
            ReportFormat::Csv,
        ] {
            assert_eq!(create_reporter(format).format(), format);
        }
    }

    #[test]
    fn test_version_change_labels() {
        let bumped = VersionChange::new(Some("1.0"), Some("1.1"));
        assert_eq!(version_change_labels(&bumped), ("1.0", "1.1"));

        let dropped = VersionChange::new(Some("1.0"), None);
        assert_eq!(version_change_labels(&dropped), ("1.0", "unknown"));

        let to_literal = VersionChange::new(None, Some("unknown"));
        assert_eq!(
            version_change_labels(&to_literal),
            (VERSION_UNSPECIFIED_LABEL, "unknown")
        );

        let from_literal = VersionChange::new(Some("unknown"), None);
        assert_eq!(
            version_change_labels(&from_literal),
            ("unknown", VERSION_UNSPECIFIED_LABEL)
        );
    }

    #[test]
    fn test_report_error_maps_to_guard_error() {
        let err: GuardError = ReportError::SerializationError("bad float".into()).into();
        assert_eq!(err.kind(), crate::error::ErrorKind::Report);
        assert!(!err.is_load_failure());
    }
}
