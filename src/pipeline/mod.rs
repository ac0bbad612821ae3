//! Pipeline orchestration for SBOM operations.
//!
//! This module provides the shared load → report → write steps used by the
//! CLI command handlers.

mod output;
mod parse;
mod report_stage;

pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::parse_sbom_with_context;
pub use report_stage::{build_report_config, output_analyze_report, output_compare_report};

use crate::error::{ErrorKind, GuardError};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    use crate::error::ErrorKind;

    /// Success: no forbidden licenses, or the comparison completed
    pub const SUCCESS: i32 = 0;
    /// Forbidden licenses were found, or an input could not be loaded
    pub const FAILURE: i32 = 1;

    /// Exit code for a tagged error.
    #[must_use]
    pub const fn for_error_kind(kind: ErrorKind) -> i32 {
        match kind {
            ErrorKind::InputNotFound
            | ErrorKind::MalformedDocument
            | ErrorKind::SchemaViolation
            | ErrorKind::Config
            | ErrorKind::Report => FAILURE,
        }
    }
}

/// The tag of the [`GuardError`] behind a handler error, if there is one.
///
/// Context added with `anyhow` does not hide the tag.
#[must_use]
pub fn error_kind(err: &anyhow::Error) -> Option<ErrorKind> {
    err.downcast_ref::<GuardError>().map(GuardError::kind)
}

/// Exit code for a failed run. Untagged errors exit with [`exit_codes::FAILURE`].
#[must_use]
pub fn exit_code_for_error(err: &anyhow::Error) -> i32 {
    match error_kind(err) {
        Some(kind) => {
            tracing::debug!("Run failed: {kind:?}");
            exit_codes::for_error_kind(kind)
        }
        None => exit_codes::FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::FAILURE, 1);
    }

    #[test]
    fn test_load_failure_keeps_kind_through_context() {
        let err = parse_sbom_with_context(std::path::Path::new("/no/such/bom.json"), true)
            .unwrap_err();
        assert_eq!(error_kind(&err), Some(ErrorKind::InputNotFound));
        assert_eq!(exit_code_for_error(&err), exit_codes::FAILURE);
    }

    #[test]
    fn test_report_and_untagged_errors_exit_with_failure() {
        let report_err: GuardError =
            crate::reports::ReportError::SerializationError("NaN".into()).into();
        let err = anyhow::Error::new(report_err).context("writing report");
        assert_eq!(error_kind(&err), Some(ErrorKind::Report));
        assert_eq!(exit_code_for_error(&err), exit_codes::FAILURE);

        let untagged = anyhow::anyhow!("Config file already exists");
        assert_eq!(error_kind(&untagged), None);
        assert_eq!(exit_code_for_error(&untagged), exit_codes::FAILURE);
    }
}
