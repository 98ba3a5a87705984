//! File-existence checks against a project root.

use std::collections::{BTreeSet, HashSet};
use std::path::{Component, Path, PathBuf};

/// Returns `true` if `path` stays inside whatever root it is joined to.
///
/// Absolute paths, drive prefixes and `..` segments are rejected; `./` is
/// allowed.
pub fn is_within_root(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Answers whether a manifest file path exists.
///
/// The validator only ever asks this one question of the filesystem, so
/// tests can substitute an in-memory set of paths.
pub trait FileProbe {
    /// `path` is exactly as written in the manifest.
    fn exists(&self, path: &str) -> bool;
}

/// Resolves manifest paths against a project root on disk.
#[derive(Debug, Clone)]
pub struct RootedFs {
    root: PathBuf,
}

impl RootedFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FileProbe for RootedFs {
    /// Paths that would leave the root never exist.
    fn exists(&self, path: &str) -> bool {
        is_within_root(path) && self.root.join(path).exists()
    }
}

impl FileProbe for HashSet<String> {
    fn exists(&self, path: &str) -> bool {
        self.contains(path)
    }
}

impl FileProbe for BTreeSet<&str> {
    fn exists(&self, path: &str) -> bool {
        self.contains(path)
    }
}
