//! Compare command handler.
//!
//! Implements the `compare` subcommand for diffing two SBOM snapshots.

use crate::config::CompareConfig;
use crate::diff::DiffEngine;
use crate::pipeline::{exit_codes, output_compare_report, parse_sbom_with_context};
use anyhow::Result;

/// Run the compare command, returning the desired exit code.
///
/// Drift is informational: any completed comparison exits with
/// [`exit_codes::SUCCESS`]. Load failures are returned as errors.
#[allow(clippy::needless_pass_by_value)]
pub fn run_compare(config: CompareConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let old_sbom = parse_sbom_with_context(&config.paths.old, quiet)?;
    let new_sbom = parse_sbom_with_context(&config.paths.new, quiet)?;

    if !quiet {
        tracing::info!(
            "Parsed {} components from old SBOM, {} from new SBOM",
            old_sbom.component_count(),
            new_sbom.component_count()
        );
    }

    let changes = DiffEngine::new().diff(&old_sbom, &new_sbom);

    if !quiet {
        let summary = changes.summary();
        tracing::info!(
            "{} added, {} removed, {} updated",
            summary.components_added,
            summary.components_removed,
            summary.components_updated
        );
    }

    output_compare_report(&config, &changes, &old_sbom, &new_sbom)?;

    Ok(exit_codes::SUCCESS)
}
