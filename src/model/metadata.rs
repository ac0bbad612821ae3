//! Document-level metadata.

use serde::{Deserialize, Serialize};

/// Informational fields read from the document header.
///
/// Nothing here takes part in classification or diffing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Declared `bomFormat` (normally "CycloneDX")
    pub bom_format: Option<String>,
    /// Declared `specVersion`
    pub spec_version: Option<String>,
    /// Declared `serialNumber`
    pub serial_number: Option<String>,
    /// Name of `metadata.component`, i.e. the product the SBOM describes
    pub name: Option<String>,
}

impl DocumentMetadata {
    /// Whether the document declares itself as CycloneDX.
    #[must_use]
    pub fn is_cyclonedx(&self) -> bool {
        self.bom_format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case("cyclonedx"))
    }

    /// Short human label, e.g. `"CycloneDX 1.5"`.
    #[must_use]
    pub fn format_label(&self) -> String {
        match (&self.bom_format, &self.spec_version) {
            (Some(format), Some(version)) => format!("{format} {version}"),
            (Some(format), None) => format.clone(),
            (None, Some(version)) => format!("specVersion {version}"),
            (None, None) => "undeclared format".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_label() {
        let meta = DocumentMetadata {
            bom_format: Some("CycloneDX".to_string()),
            spec_version: Some("1.5".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.format_label(), "CycloneDX 1.5");
        assert!(meta.is_cyclonedx());

        assert_eq!(DocumentMetadata::default().format_label(), "undeclared format");
        assert!(!DocumentMetadata::default().is_cyclonedx());
    }
}
