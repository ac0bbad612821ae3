//! In-memory representation of a loaded SBOM.
//!
//! A document is reduced to an ordered list of [`Component`]s, each carrying
//! its name, optional version and a single extracted license identifier.
//! Name-keyed lookups for comparison go through [`ComponentIndex`]:
//!
//! ```ignore
//! let sbom = parse_sbom(&path)?;
//! let index = ComponentIndex::build(&sbom);
//!
//! if index.contains("openssl") {
//!     println!("openssl @ {}", index.version_of("openssl").unwrap_or("unknown"));
//! }
//! ```

mod index;
mod license;
mod metadata;
mod sbom;

pub use index::*;
pub use license::*;
pub use metadata::*;
pub use sbom::*;
