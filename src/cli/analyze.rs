//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: license compliance for one SBOM.

use crate::compliance::{ComplianceEvaluator, Verdict};
use crate::config::{AnalyzeConfig, Validatable};
use crate::pipeline::{exit_codes, output_analyze_report, parse_sbom_with_context};
use anyhow::{bail, Result};

/// Run the analyze command, returning the desired exit code.
///
/// Returns [`exit_codes::FAILURE`] when a forbidden license is present.
/// Components needing review or with unknown licenses are reported but
/// never fail the run. Load failures are returned as errors.
#[allow(clippy::needless_pass_by_value)]
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let (issues, advisories): (Vec<_>, Vec<_>) = config
        .policy
        .validate()
        .into_iter()
        .partition(|issue| !issue.advisory);
    if !issues.is_empty() {
        let joined: Vec<String> = issues.iter().map(ToString::to_string).collect();
        bail!("Invalid license policy: {}", joined.join("; "));
    }
    if !advisories.is_empty() {
        config.policy.log_conflicts();
    }

    let sbom = parse_sbom_with_context(&config.sbom_path, quiet)?;

    let report = ComplianceEvaluator::new(&config.policy).evaluate(&sbom);
    let verdict = report.verdict();

    if !quiet {
        let counts = report.counts();
        tracing::info!(
            "Classified {} components: {} allowed, {} review required, {} unknown, {} forbidden",
            report.total(),
            counts.allowed,
            counts.review_required,
            counts.unknown,
            counts.forbidden
        );
    }

    output_analyze_report(&config, &sbom, &report)?;

    Ok(exit_code_for(verdict))
}

const fn exit_code_for(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Failed => exit_codes::FAILURE,
        Verdict::Passed | Verdict::PassedWithWarnings => exit_codes::SUCCESS,
    }
}
