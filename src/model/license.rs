//! License identifier extraction.
//!
//! A component may declare several license entries. Only the first entry is
//! consulted, and a fixed, ordered chain of extractors pulls a
//! human-readable identifier out of it.

use serde::{Deserialize, Serialize};

/// Identifier used when no license can be extracted.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// One entry of a component's `licenses` array.
///
/// CycloneDX allows either `{"license": {"name": ...}}` or
/// `{"expression": ...}`; both shapes flatten into this struct.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseChoice {
    /// `license.name`
    pub name: Option<String>,
    /// `expression`
    pub expression: Option<String>,
}

impl LicenseChoice {
    /// Entry carrying a structured `license.name`
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            expression: None,
        }
    }

    /// Entry carrying a free-form `expression`
    pub fn expression(expression: impl Into<String>) -> Self {
        Self {
            name: None,
            expression: Some(expression.into()),
        }
    }
}

/// Pulls a candidate identifier out of a license entry.
pub type LicenseExtractor = fn(&LicenseChoice) -> Option<&str>;

/// Extractors in priority order; the first non-empty result wins.
pub const LICENSE_EXTRACTORS: [(&str, LicenseExtractor); 2] = [
    ("license.name", extract_name),
    ("expression", extract_expression),
];

fn extract_name(choice: &LicenseChoice) -> Option<&str> {
    choice.name.as_deref()
}

fn extract_expression(choice: &LicenseChoice) -> Option<&str> {
    choice.expression.as_deref()
}

/// Extract the license identifier for a component's license entries.
///
/// Returns [`UNKNOWN_LICENSE`] when there are no entries or when no
/// extractor yields a non-empty value for the first one.
#[must_use]
pub fn extract_license_identifier(choices: &[LicenseChoice]) -> String {
    choices
        .first()
        .and_then(|choice| {
            LICENSE_EXTRACTORS
                .iter()
                .find_map(|(_, extract)| extract(choice).filter(|s| !s.is_empty()))
        })
        .map_or_else(|| UNKNOWN_LICENSE.to_string(), str::to_string)
}
