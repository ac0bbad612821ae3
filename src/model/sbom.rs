//! Core SBOM and Component data structures.

use super::{ComponentIndex, DocumentMetadata, UNKNOWN_LICENSE};
use serde::{Deserialize, Serialize};

/// Label shown for a component whose document entry has no `version`.
///
/// Only used for display; the model stores the absence as `None`, so a
/// component that really declares version `"unknown"` stays distinct.
pub const VERSION_NOT_SPECIFIED: &str = "unknown";

/// A single SBOM component.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Component {
    /// Component name, never empty
    pub name: String,
    /// Version string, `None` when the document does not declare one
    pub version: Option<String>,
    /// License identifier extracted from the first license entry
    pub license: String,
}

impl Component {
    /// Create a component with no version and an unknown license
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
            license: UNKNOWN_LICENSE.to_string(),
        }
    }

    /// Set the version
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the license identifier
    #[must_use]
    pub fn with_license(mut self, license: impl Into<String>) -> Self {
        self.license = license.into();
        self
    }

    /// Version for display, falling back to [`VERSION_NOT_SPECIFIED`]
    #[must_use]
    pub fn display_version(&self) -> &str {
        self.version.as_deref().unwrap_or(VERSION_NOT_SPECIFIED)
    }
}

/// A loaded SBOM: components in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sbom {
    /// Document-level metadata
    pub document: DocumentMetadata,
    /// Components in the order the document lists them
    pub components: Vec<Component>,
}

impl Sbom {
    /// Create a new empty SBOM
    #[must_use]
    pub const fn new(document: DocumentMetadata) -> Self {
        Self {
            document,
            components: Vec::new(),
        }
    }

    /// Build an SBOM from components, with empty metadata
    #[must_use]
    pub fn from_components(components: impl IntoIterator<Item = Component>) -> Self {
        Self {
            document: DocumentMetadata::default(),
            components: components.into_iter().collect(),
        }
    }

    /// Append a component
    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Number of components, duplicates included
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Whether the SBOM has no components
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Build the name → version index used for comparisons
    pub fn name_index(&self) -> ComponentIndex {
        ComponentIndex::build(self)
    }
}

/// Format `name@version` for log and report lines
pub(crate) fn component_label(name: &str, version: Option<&str>) -> String {
    format!("{name}@{}", version.unwrap_or(VERSION_NOT_SPECIFIED))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_defaults() {
        let comp = Component::new("libfoo");
        assert_eq!(comp.version, None);
        assert_eq!(comp.license, UNKNOWN_LICENSE);
        assert_eq!(comp.display_version(), VERSION_NOT_SPECIFIED);
    }

    #[test]
    fn test_unspecified_version_differs_from_literal_unknown() {
        let unspecified = Component::new("a");
        let literal = Component::new("a").with_version("unknown");
        assert_ne!(unspecified.version, literal.version);
        assert_eq!(unspecified.display_version(), literal.display_version());
    }

    #[test]
    fn test_sbom_keeps_document_order() {
        let sbom = Sbom::from_components([
            Component::new("zeta"),
            Component::new("alpha"),
            Component::new("zeta"),
        ]);
        let names: Vec<_> = sbom.components.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["zeta", "alpha", "zeta"]);
        assert_eq!(sbom.component_count(), 3);
    }

    #[test]
    fn test_component_label() {
        assert_eq!(component_label("a", Some("1.0")), "a@1.0");
        assert_eq!(component_label("a", None), "a@unknown");
    }
}
