//! Report output stage.
//!
//! Handles generating and writing analyze and compare reports.

use crate::compliance::ComplianceReport;
use crate::config::{AnalyzeConfig, CompareConfig, OutputConfig};
use crate::diff::ChangeSet;
use crate::error::GuardError;
use crate::model::Sbom;
use crate::reports::{create_reporter_with_options, ReportConfig};
use anyhow::Result;

use super::{should_use_color, write_output, OutputTarget};

/// Apply output settings shared by both commands to a report config.
#[must_use]
pub fn build_report_config(base: ReportConfig, output: &OutputConfig) -> ReportConfig {
    if output.timestamp {
        base.with_timestamp(chrono::Utc::now())
    } else {
        base
    }
}

/// Output a compliance report to the configured destination.
pub fn output_analyze_report(
    config: &AnalyzeConfig,
    sbom: &Sbom,
    report: &ComplianceReport,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let report_config = build_report_config(
        ReportConfig::for_analyze(config.sbom_path.to_string_lossy()),
        &config.output,
    );

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let content = reporter
        .generate_analyze_report(sbom, report, &report_config)
        .map_err(GuardError::from)?;

    write_output(&content, &output_target, config.behavior.quiet)
}

/// Output a comparison report to the configured destination.
pub fn output_compare_report(
    config: &CompareConfig,
    changes: &ChangeSet,
    old_sbom: &Sbom,
    new_sbom: &Sbom,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let report_config = build_report_config(
        ReportConfig::for_compare(
            config.paths.old.to_string_lossy(),
            config.paths.new.to_string_lossy(),
        ),
        &config.output,
    );

    let use_color = should_use_color(config.output.no_color, &output_target);
    let reporter = create_reporter_with_options(config.output.format, use_color);
    let content = reporter
        .generate_compare_report(changes, old_sbom, new_sbom, &report_config)
        .map_err(GuardError::from)?;

    write_output(&content, &output_target, config.behavior.quiet)
}
