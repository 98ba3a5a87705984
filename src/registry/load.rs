//! Manifest loading.
//!
//! Loading is the only stage that can fail outright. Once a manifest has an
//! `items` array, every further problem is collected by the validator rather
//! than returned as an error.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use super::manifest::RegistryManifest;

/// Default manifest file name, resolved against the invocation root.
pub const DEFAULT_MANIFEST: &str = "registry.json";

/// Fatal errors that stop a validation run before any item is checked.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("registry manifest not found: {}", path.display())]
    Missing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("registry manifest {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("registry manifest {} has no `items` array", path.display())]
    ItemsNotArray { path: PathBuf },
}

/// A manifest whose top level has been checked but whose items have not.
#[derive(Debug, Clone, PartialEq)]
pub struct RawManifest {
    path: PathBuf,
    value: Value,
}

impl RawManifest {
    /// Wraps an already-parsed document, checking for an `items` array.
    pub fn from_value(path: impl Into<PathBuf>, value: Value) -> Result<Self, LoadError> {
        let path = path.into();
        if !value.get("items").is_some_and(Value::is_array) {
            return Err(LoadError::ItemsNotArray { path });
        }
        Ok(Self { path, value })
    }

    /// Parses manifest text.
    pub fn parse(path: impl Into<PathBuf>, source: &str) -> Result<Self, LoadError> {
        let path = path.into();
        match serde_json::from_str(source) {
            Ok(value) => Self::from_value(path, value),
            Err(source) => Err(LoadError::Parse { path, source }),
        }
    }

    /// Where the manifest was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The manifest's top-level `name`, if it is a string.
    pub fn name(&self) -> Option<&str> {
        self.value.get("name").and_then(Value::as_str)
    }

    /// The raw item entries, in manifest order.
    pub fn items(&self) -> &[Value] {
        self.value
            .get("items")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Deserializes the typed view. Fails if any item is malformed.
    pub fn typed(&self) -> Result<RegistryManifest, serde_json::Error> {
        RegistryManifest::deserialize(&self.value)
    }
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<RawManifest, LoadError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| LoadError::Missing {
        path: path.to_path_buf(),
        source,
    })?;
    let manifest = RawManifest::parse(path, &source)?;
    tracing::info!(
        path = %path.display(),
        items = manifest.items().len(),
        "loaded registry manifest"
    );
    Ok(manifest)
}
