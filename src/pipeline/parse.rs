//! SBOM loading stage.

use crate::model::Sbom;
use anyhow::{Context, Result};
use std::path::Path;

/// Parse an SBOM with context for error messages.
///
/// The underlying [`GuardError`](crate::error::GuardError) stays reachable
/// through `downcast_ref`, so callers can still inspect its kind.
pub fn parse_sbom_with_context(path: &Path, quiet: bool) -> Result<Sbom> {
    if !quiet {
        tracing::info!("Parsing SBOM: {}", path.display());
    }

    let sbom = crate::parsers::parse_sbom(path).context("Failed to load SBOM")?;

    if !quiet {
        tracing::info!(
            "Parsed {} components ({})",
            sbom.component_count(),
            sbom.document.format_label()
        );
    }

    Ok(sbom)
}
