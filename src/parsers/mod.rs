//! SBOM document loading.
//!
//! Only the CycloneDX JSON `components` array shape is consumed. Loading
//! either succeeds with a complete [`Sbom`] or fails with a tagged
//! [`GuardError`](crate::error::GuardError); there are no partial results.
//!
//! ```no_run
//! use sbom_guard::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let sbom = parse_sbom(Path::new("sbom.json")).unwrap();
//! println!("{} components", sbom.component_count());
//! ```

mod cyclonedx;

pub use cyclonedx::CycloneDxParser;

use crate::error::{ErrorContext, GuardError, Result};
use crate::model::Sbom;
use std::path::Path;

/// Read and parse an SBOM file.
///
/// The file is read fully before parsing, so the handle is released before
/// any parse error is reported.
pub fn parse_sbom(path: &Path) -> Result<Sbom> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::InvalidData {
            GuardError::malformed(format!("{} is not valid UTF-8", path.display()))
        } else {
            GuardError::input_not_found(path, e)
        }
    })?;
    parse_sbom_str(&content).with_context(|| path.display().to_string())
}

/// Parse an SBOM from document content.
pub fn parse_sbom_str(content: &str) -> Result<Sbom> {
    CycloneDxParser::new().parse_str(content)
}
