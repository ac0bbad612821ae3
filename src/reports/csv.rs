//! CSV report generator.
//!
//! Generates comma-separated reports for analyze and compare runs,
//! suitable for spreadsheet import and data analysis pipelines.

use super::escape::quote_csv;
use super::{
    version_change_labels, version_label, ReportConfig, ReportError, ReportFormat, ReportGenerator,
};
use crate::compliance::{ComplianceReport, LicenseCategory};
use crate::diff::ChangeSet;
use crate::model::Sbom;
use std::fmt::Write as _;

/// CSV report generator.
pub struct CsvReporter;

impl CsvReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for CsvReporter {
    fn generate_analyze_report(
        &self,
        _sbom: &Sbom,
        report: &ComplianceReport,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str("Category,Name,Version,License,Normalized License\n");

        for category in LicenseCategory::ALL {
            for result in report.bucket(category) {
                writeln!(
                    content,
                    "{},{},{},{},{}",
                    category.name(),
                    quote_csv(&result.component.name),
                    quote_csv(result.component.display_version()),
                    quote_csv(&result.component.license),
                    quote_csv(&result.normalized_license)
                )?;
            }
        }

        Ok(content)
    }

    fn generate_compare_report(
        &self,
        changes: &ChangeSet,
        _old_sbom: &Sbom,
        _new_sbom: &Sbom,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut content = String::new();
        content.push_str("Change,Name,Old Version,New Version\n");

        for (name, version) in changes.added_sorted() {
            write_change_line(&mut content, "Added", name, "-", version_label(version))?;
        }

        for (name, version) in changes.removed_sorted() {
            write_change_line(&mut content, "Removed", name, version_label(version), "-")?;
        }

        for (name, change) in changes.updated_sorted() {
            let (old, new) = version_change_labels(change);
            write_change_line(&mut content, "Updated", name, old, new)?;
        }

        Ok(content)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Csv
    }
}

fn write_change_line(
    content: &mut String,
    change: &str,
    name: &str,
    old_version: &str,
    new_version: &str,
) -> std::fmt::Result {
    writeln!(
        content,
        "{},{},{},{}",
        change,
        quote_csv(name),
        quote_csv(old_version),
        quote_csv(new_version)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance::{ComplianceEvaluator, LicensePolicy};
    use crate::diff::DiffEngine;
    use crate::model::Component;

    #[test]
    fn test_analyze_rows() {
        let sbom = Sbom::from_components([
            Component::new("foo")
                .with_version("1.0")
                .with_license("GNU General Public License v2 (GPLv2)"),
            Component::new("bar, inc").with_license("MIT"),
        ]);
        let policy = LicensePolicy::default();
        let report = ComplianceEvaluator::new(&policy).evaluate(&sbom);
        let csv = CsvReporter::new()
            .generate_analyze_report(&sbom, &report, &ReportConfig::default())
            .unwrap();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[1],
            "forbidden,\"foo\",\"1.0\",\"GNU General Public License v2 (GPLv2)\",\"GNU General Public License v2\""
        );
        assert_eq!(lines[2], "allowed,\"bar, inc\",\"unknown\",\"MIT\",\"MIT\"");
    }

    #[test]
    fn test_compare_rows() {
        let old = Sbom::from_components([
            Component::new("A").with_version("1.0"),
            Component::new("B").with_version("2.0"),
        ]);
        let new = Sbom::from_components([
            Component::new("A").with_version("1.1"),
            Component::new("C").with_version("3.0"),
        ]);
        let changes = DiffEngine::new().diff(&old, &new);
        let csv = CsvReporter::new()
            .generate_compare_report(&changes, &old, &new, &ReportConfig::default())
            .unwrap();

        assert_eq!(
            csv,
            "Change,Name,Old Version,New Version\n\
             Added,\"C\",\"-\",\"3.0\"\n\
             Removed,\"B\",\"2.0\",\"-\"\n\
             Updated,\"A\",\"1.0\",\"1.1\"\n"
        );
    }

    #[test]
    fn test_compare_missing_version_against_literal_unknown() {
        let old = Sbom::from_components([Component::new("zlib")]);
        let new = Sbom::from_components([Component::new("zlib").with_version("unknown")]);
        let changes = DiffEngine::new().diff(&old, &new);
        let csv = CsvReporter::new()
            .generate_compare_report(&changes, &old, &new, &ReportConfig::default())
            .unwrap();

        assert_eq!(
            csv.lines().nth(1),
            Some("Updated,\"zlib\",\"(unspecified)\",\"unknown\"")
        );
    }
}
