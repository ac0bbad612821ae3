//! Summary report generator for shell output.
//!
//! Provides a sectioned, human-readable report for terminal usage.

use super::{
    version_change_labels, version_label, ReportConfig, ReportError, ReportFormat, ReportGenerator,
};
use crate::compliance::{ComplianceReport, LicenseCategory, Verdict};
use crate::diff::ChangeSet;
use crate::model::Sbom;
use std::collections::BTreeSet;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const RULE_WIDTH: usize = 60;

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn header(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(self.color(title, "bold"));
        lines.push(self.color("─".repeat(RULE_WIDTH).as_str(), "dim"));
    }

    fn section(&self, lines: &mut Vec<String>, title: &str, color: &str) {
        lines.push(self.color(title, color));
        lines.push(self.color("─".repeat(RULE_WIDTH).as_str(), "dim"));
    }

    fn duplicate_warning(&self, lines: &mut Vec<String>, side: &str, names: &BTreeSet<String>) {
        if names.is_empty() {
            return;
        }
        let joined: Vec<&str> = names.iter().map(String::as_str).collect();
        lines.push(self.color(
            &format!(
                "Note: {side} SBOM lists these names more than once, last entry kept: {}",
                joined.join(", ")
            ),
            "yellow",
        ));
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn category_color(category: LicenseCategory) -> &'static str {
    match category {
        LicenseCategory::Forbidden => "red",
        LicenseCategory::ReviewRequired | LicenseCategory::Unknown => "yellow",
        LicenseCategory::Allowed => "green",
    }
}

const fn category_heading(category: LicenseCategory) -> &'static str {
    match category {
        LicenseCategory::Forbidden => "Forbidden licenses",
        LicenseCategory::ReviewRequired => "Licenses requiring review",
        LicenseCategory::Unknown => "Unknown licenses",
        LicenseCategory::Allowed => "Allowed licenses",
    }
}

const fn verdict_color(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "green",
        Verdict::PassedWithWarnings => "yellow",
        Verdict::Failed => "red",
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_analyze_report(
        &self,
        sbom: &Sbom,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        self.header(
            &mut lines,
            config.title.as_deref().unwrap_or("License Compliance Report"),
        );

        let source = config
            .metadata
            .sbom_path
            .as_deref()
            .or(sbom.document.name.as_deref())
            .unwrap_or("sbom");
        lines.push(format!("{}  {}", self.color("SBOM:", "cyan"), source));
        lines.push(format!(
            "{}  {}",
            self.color("Format:", "cyan"),
            sbom.document.format_label()
        ));
        lines.push(format!(
            "{}  {}",
            self.color("Components analyzed:", "cyan"),
            report.total()
        ));
        lines.push(String::new());

        // Allowed components are only counted, not listed
        for category in [
            LicenseCategory::Forbidden,
            LicenseCategory::ReviewRequired,
            LicenseCategory::Unknown,
        ] {
            let bucket = report.bucket(category);
            if bucket.is_empty() {
                continue;
            }
            self.section(
                &mut lines,
                &format!("{} ({}):", category_heading(category), bucket.len()),
                category_color(category),
            );
            for result in bucket {
                lines.push(format!(
                    "  - {} {}: {}",
                    result.component.name,
                    result.component.display_version(),
                    result.component.license
                ));
            }
            lines.push(String::new());
        }

        let counts = report.counts();
        self.section(&mut lines, "Summary:", "bold");
        lines.push(format!("  Allowed:          {}", counts.allowed));
        lines.push(format!("  Review required:  {}", counts.review_required));
        lines.push(format!("  Unknown:          {}", counts.unknown));
        lines.push(format!("  Forbidden:        {}", counts.forbidden));
        lines.push(String::new());

        let verdict = report.verdict();
        lines.push(self.color(verdict.message(), verdict_color(verdict)));

        if let Some(ts) = config.generated_at() {
            lines.push(self.color(&format!("Generated at: {ts}"), "dim"));
        }

        Ok(lines.join("\n"))
    }

    fn generate_compare_report(
        &self,
        changes: &ChangeSet,
        old_sbom: &Sbom,
        new_sbom: &Sbom,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut lines = Vec::new();

        self.header(
            &mut lines,
            config.title.as_deref().unwrap_or("SBOM Comparison Report"),
        );

        let old_name = config
            .metadata
            .old_sbom_path
            .as_deref()
            .or(old_sbom.document.name.as_deref())
            .unwrap_or("old");
        let new_name = config
            .metadata
            .new_sbom_path
            .as_deref()
            .or(new_sbom.document.name.as_deref())
            .unwrap_or("new");
        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            old_name,
            new_name
        ));
        lines.push(format!(
            "{}  {} → {} components",
            self.color("Size:", "cyan"),
            old_sbom.component_count(),
            new_sbom.component_count()
        ));
        lines.push(String::new());

        let added = changes.added_sorted();
        if !added.is_empty() {
            self.section(&mut lines, &format!("Added ({}):", added.len()), "green");
            for (name, version) in &added {
                lines.push(format!(
                    "  {} {name} @ {}",
                    self.color("+", "green"),
                    version_label(*version)
                ));
            }
            lines.push(String::new());
        }

        let removed = changes.removed_sorted();
        if !removed.is_empty() {
            self.section(&mut lines, &format!("Removed ({}):", removed.len()), "red");
            for (name, version) in &removed {
                lines.push(format!(
                    "  {} {name} @ {}",
                    self.color("-", "red"),
                    version_label(*version)
                ));
            }
            lines.push(String::new());
        }

        let updated = changes.updated_sorted();
        if !updated.is_empty() {
            self.section(
                &mut lines,
                &format!("Updated ({}):", updated.len()),
                "yellow",
            );
            for (name, change) in &updated {
                let (old, new) = version_change_labels(change);
                lines.push(format!(
                    "  {} {name}: {old} → {new}",
                    self.color("~", "yellow"),
                ));
            }
            lines.push(String::new());
        }

        if changes.is_empty() {
            lines.push(self.color("No changes detected between the SBOMs", "green"));
            lines.push(String::new());
        }

        self.duplicate_warning(&mut lines, "Old", &changes.duplicates_old);
        self.duplicate_warning(&mut lines, "New", &changes.duplicates_new);

        if let Some(ts) = config.generated_at() {
            lines.push(self.color(&format!("Compared at: {ts}"), "dim"));
        }

        while lines.last().is_some_and(String::is_empty) {
            lines.pop();
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
