//! Snapshot comparison for SBOMs.
//!
//! Two SBOMs are reduced to name → version indexes and compared as maps:
//! names only in the new snapshot are added, names only in the old one are
//! removed, and names in both whose version strings differ are updated.
//! Versions are opaque strings; `"1.0"` and `"1.0.0"` are different.
//!
//! # Example
//!
//! ```
//! use sbom_guard::diff::DiffEngine;
//! use sbom_guard::model::{Component, Sbom};
//!
//! let old = Sbom::from_components([
//!     Component::new("A").with_version("1.0"),
//!     Component::new("B").with_version("2.0"),
//! ]);
//! let new = Sbom::from_components([
//!     Component::new("A").with_version("1.1"),
//!     Component::new("C").with_version("3.0"),
//! ]);
//!
//! let changes = DiffEngine::new().diff(&old, &new);
//! assert_eq!(changes.added_sorted(), [("C", Some("3.0"))]);
//! assert_eq!(changes.removed_sorted(), [("B", Some("2.0"))]);
//! assert_eq!(changes.updated.len(), 1);
//! ```

mod engine;
mod result;

pub use engine::DiffEngine;
pub use result::{ChangeSet, DiffSummary, VersionChange};
