//! CycloneDX JSON loader.
//!
//! Consumes the subset of the CycloneDX schema that matters here: the
//! top-level `components` array and, per component, `name`, `version` and
//! `licenses`. Everything else in the document is ignored.

use crate::error::{GuardError, Result};
use crate::model::{extract_license_identifier, Component, DocumentMetadata, LicenseChoice, Sbom};
use serde::{Deserialize, Deserializer};

/// Parser for CycloneDX JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Create a new CycloneDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse document content into an SBOM.
    ///
    /// Content that is not a JSON object of the expected shape is a
    /// malformed-document error; a component without a `name` is a
    /// missing-field error naming the offending entry.
    pub fn parse_str(&self, content: &str) -> Result<Sbom> {
        let cdx: CycloneDxBom = serde_json::from_str(content)?;
        self.convert(cdx)
    }

    fn convert(&self, cdx: CycloneDxBom) -> Result<Sbom> {
        let document = DocumentMetadata {
            bom_format: cdx.bom_format,
            spec_version: cdx.spec_version,
            serial_number: cdx.serial_number,
            name: cdx
                .metadata
                .as_ref()
                .and_then(|m| m.pointer("/component/name"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string),
        };

        if !document.is_cyclonedx() {
            tracing::debug!(
                "Document does not declare bomFormat \"CycloneDX\" ({}), reading components anyway",
                document.format_label()
            );
        }

        let mut sbom = Sbom::new(document);
        let Some(components) = cdx.components else {
            tracing::debug!("Document has no components array");
            return Ok(sbom);
        };

        for (idx, cdx_comp) in components.into_iter().enumerate() {
            sbom.add_component(self.convert_component(idx, cdx_comp)?);
        }

        Ok(sbom)
    }

    fn convert_component(&self, idx: usize, cdx: CdxComponent) -> Result<Component> {
        let name = match cdx.name {
            Some(name) if !name.is_empty() => name,
            Some(_) => {
                return Err(GuardError::missing_field(
                    "name",
                    format!("components[{idx}] (empty value)"),
                ))
            }
            None => {
                return Err(GuardError::missing_field(
                    "name",
                    format!("components[{idx}]"),
                ))
            }
        };

        let choices: Vec<LicenseChoice> = cdx
            .licenses
            .unwrap_or_default()
            .into_iter()
            .map(CdxLicenseChoice::into_choice)
            .collect();

        Ok(Component {
            name,
            version: cdx.version,
            license: extract_license_identifier(&choices),
        })
    }
}

// ============================================================================
// CycloneDX serde structures
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CycloneDxBom {
    #[serde(default, deserialize_with = "lenient_string")]
    bom_format: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    spec_version: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    serial_number: Option<String>,
    metadata: Option<serde_json::Value>,
    components: Option<Vec<CdxComponent>>,
}

#[derive(Debug, Deserialize)]
struct CdxComponent {
    name: Option<String>,
    version: Option<String>,
    licenses: Option<Vec<CdxLicenseChoice>>,
}

#[derive(Debug, Deserialize)]
struct CdxLicenseChoice {
    license: Option<CdxLicense>,
    expression: Option<String>,
}

impl CdxLicenseChoice {
    fn into_choice(self) -> LicenseChoice {
        LicenseChoice {
            name: self.license.and_then(|l| l.name),
            expression: self.expression,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CdxLicense {
    name: Option<String>,
}

/// Header fields are informational; a non-string value is dropped rather
/// than failing the whole document.
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_str().map(str::to_string)))
}
