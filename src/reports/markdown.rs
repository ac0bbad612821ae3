//! Markdown report generator.
//!
//! Produces tables suited to pull request comments and CI job summaries.

use super::escape::{escape_markdown_inline, escape_markdown_table, escape_md_opt};
use super::{
    version_change_labels, version_label, ReportConfig, ReportError, ReportFormat, ReportGenerator,
};
use crate::compliance::{ComplianceReport, LicenseCategory, Verdict};
use crate::diff::ChangeSet;
use crate::model::Sbom;
use std::fmt::Write as _;

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

const fn verdict_icon(verdict: Verdict) -> &'static str {
    match verdict {
        Verdict::Passed => "\u{2705}",                  // ✅
        Verdict::PassedWithWarnings => "\u{26A0}\u{FE0F}", // ⚠️
        Verdict::Failed => "\u{274C}",                  // ❌
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate_analyze_report(
        &self,
        sbom: &Sbom,
        report: &ComplianceReport,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        let title = config.title.as_deref().unwrap_or("License Compliance Report");
        writeln!(md, "# {}\n", escape_markdown_inline(title))?;

        if let Some(path) = &config.metadata.sbom_path {
            writeln!(md, "**SBOM:** `{}`  ", escape_markdown_table(path))?;
        }
        writeln!(
            md,
            "**Format:** {}  ",
            escape_markdown_inline(&sbom.document.format_label())
        )?;
        writeln!(md, "**Components analyzed:** {}\n", report.total())?;

        let counts = report.counts();
        writeln!(md, "| Category | Count |")?;
        writeln!(md, "|----------|------:|")?;
        writeln!(md, "| Allowed | {} |", counts.allowed)?;
        writeln!(md, "| Review required | {} |", counts.review_required)?;
        writeln!(md, "| Unknown | {} |", counts.unknown)?;
        writeln!(md, "| Forbidden | {} |", counts.forbidden)?;
        writeln!(md)?;

        for category in [
            LicenseCategory::Forbidden,
            LicenseCategory::ReviewRequired,
            LicenseCategory::Unknown,
        ] {
            let bucket = report.bucket(category);
            if bucket.is_empty() {
                continue;
            }
            writeln!(md, "## {} ({})\n", category.label(), bucket.len())?;
            writeln!(md, "| Component | Version | License |")?;
            writeln!(md, "|-----------|---------|---------|")?;
            for result in bucket {
                writeln!(
                    md,
                    "| {} | {} | {} |",
                    escape_markdown_table(&result.component.name),
                    escape_markdown_table(result.component.display_version()),
                    escape_markdown_table(&result.component.license)
                )?;
            }
            writeln!(md)?;
        }

        let verdict = report.verdict();
        writeln!(md, "{} **{}**", verdict_icon(verdict), verdict.message())?;

        if let Some(ts) = config.generated_at() {
            writeln!(md, "\n_Generated at {ts}_")?;
        }

        Ok(md)
    }

    fn generate_compare_report(
        &self,
        changes: &ChangeSet,
        old_sbom: &Sbom,
        new_sbom: &Sbom,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let mut md = String::new();

        let title = config.title.as_deref().unwrap_or("SBOM Comparison Report");
        writeln!(md, "# {}\n", escape_markdown_inline(title))?;

        writeln!(md, "| | Old | New |")?;
        writeln!(md, "|---|---|---|")?;
        writeln!(
            md,
            "| File | {} | {} |",
            escape_md_opt(config.metadata.old_sbom_path.as_deref()),
            escape_md_opt(config.metadata.new_sbom_path.as_deref())
        )?;
        writeln!(
            md,
            "| Components | {} | {} |",
            old_sbom.component_count(),
            new_sbom.component_count()
        )?;
        writeln!(md)?;

        if changes.is_empty() {
            writeln!(md, "\u{2705} No changes detected between the SBOMs.")?;
        } else {
            let summary = changes.summary();
            writeln!(
                md,
                "**{} added, {} removed, {} updated**\n",
                summary.components_added, summary.components_removed, summary.components_updated
            )?;

            let added = changes.added_sorted();
            if !added.is_empty() {
                writeln!(md, "## Added ({})\n", added.len())?;
                writeln!(md, "| Component | Version |")?;
                writeln!(md, "|-----------|---------|")?;
                for (name, version) in added {
                    writeln!(
                        md,
                        "| {} | {} |",
                        escape_markdown_table(name),
                        escape_markdown_table(version_label(version))
                    )?;
                }
                writeln!(md)?;
            }

            let removed = changes.removed_sorted();
            if !removed.is_empty() {
                writeln!(md, "## Removed ({})\n", removed.len())?;
                writeln!(md, "| Component | Version |")?;
                writeln!(md, "|-----------|---------|")?;
                for (name, version) in removed {
                    writeln!(
                        md,
                        "| {} | {} |",
                        escape_markdown_table(name),
                        escape_markdown_table(version_label(version))
                    )?;
                }
                writeln!(md)?;
            }

            let updated = changes.updated_sorted();
            if !updated.is_empty() {
                writeln!(md, "## Updated ({})\n", updated.len())?;
                writeln!(md, "| Component | Old Version | New Version |")?;
                writeln!(md, "|-----------|-------------|-------------|")?;
                for (name, change) in updated {
                    let (old, new) = version_change_labels(change);
                    writeln!(
                        md,
                        "| {} | {} | {} |",
                        escape_markdown_table(name),
                        escape_markdown_table(old),
                        escape_markdown_table(new)
                    )?;
                }
                writeln!(md)?;
            }
        }

        for (side, names) in [
            ("old", &changes.duplicates_old),
            ("new", &changes.duplicates_new),
        ] {
            if names.is_empty() {
                continue;
            }
            let escaped: Vec<String> = names.iter().map(|n| escape_markdown_inline(n)).collect();
            writeln!(
                md,
                "\n> **Note:** the {side} SBOM lists these names more than once; the last entry was kept: {}",
                escaped.join(", ")
            )?;
        }

        if let Some(ts) = config.generated_at() {
            writeln!(md, "\n_Compared at {ts}_")?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}
