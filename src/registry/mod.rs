//! Registry manifest model, validation, and tier-gated access.
//!
//! A registry manifest (`registry.json`) lists the components, hooks,
//! libraries and themes a UI kit distributes. [`validate_path`] loads a
//! manifest and checks every item against the files under a project root,
//! collecting all problems into a [`ValidationReport`]:
//!
//! ```rust,no_run
//! use kitbash::registry::validate_path;
//!
//! let report = validate_path("registry.json", ".")?;
//! for issue in &report.issues {
//!     eprintln!("{issue}");
//! }
//! # Ok::<(), kitbash::registry::LoadError>(())
//! ```
//!
//! Only loading can fail outright; see [`LoadError`].

mod access;
mod issue;
mod load;
mod manifest;
mod probe;
mod validate;

use std::path::Path;

pub use access::{check_access, dependency_closure, distributable, AccessError};
pub use issue::{IssueKind, ValidationIssue};
pub use load::{load_manifest, LoadError, RawManifest, DEFAULT_MANIFEST};
pub use manifest::{FileRef, ItemMeta, ItemType, RegistryItem, RegistryManifest, Tier};
pub use probe::{FileProbe, RootedFs};
pub use validate::{validate_manifest, TierSummary, ValidationReport, REQUIRED_FIELDS};

/// Loads the manifest at `manifest` and validates it against files under `root`.
///
/// A relative `manifest` path is resolved against `root`.
pub fn validate_path(
    manifest: impl AsRef<Path>,
    root: impl AsRef<Path>,
) -> Result<ValidationReport, LoadError> {
    let root = root.as_ref();
    let manifest = root.join(manifest.as_ref());
    let raw = load_manifest(&manifest)?;
    Ok(validate_manifest(&raw, &RootedFs::new(root)))
}
