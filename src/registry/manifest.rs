//! Typed view of a registry manifest.
//!
//! Field names follow the on-disk JSON exactly (`registryDependencies`,
//! `meta.tier`). Validation does not go through these types; it inspects the
//! raw JSON so that malformed entries can be reported one by one. The typed
//! view is for consumers of a manifest that has already passed validation.

use serde::{Deserialize, Serialize};

/// The kind of a registry item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Ui,
    Lib,
    Hook,
    Theme,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [ItemType::Ui, ItemType::Lib, ItemType::Hook, ItemType::Theme];

    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Ui => "ui",
            ItemType::Lib => "lib",
            ItemType::Hook => "hook",
            ItemType::Theme => "theme",
        }
    }

    /// Parses a kind, accepting both `ui` and the prefixed `registry:ui`.
    pub fn parse(raw: &str) -> Option<Self> {
        let name = raw.strip_prefix("registry:").unwrap_or(raw);
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access tier gating distribution of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

impl Tier {
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Free => "free",
            Tier::Premium => "premium",
        }
    }

    /// Parses a tier. Only the exact strings `free` and `premium` match.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "free" => Some(Tier::Free),
            "premium" => Some(Tier::Premium),
            _ => None,
        }
    }

    /// Returns `true` if a holder of `self` may receive an item of `required`.
    pub fn grants(self, required: Tier) -> bool {
        self >= required
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file shipped with an item: a bare path or an object with a `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileRef {
    Path(String),
    Entry {
        path: String,
        #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
        kind: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<String>,
    },
}

impl FileRef {
    pub fn path(&self) -> &str {
        match self {
            FileRef::Path(path) => path,
            FileRef::Entry { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<String>,
}

/// One distributable component, hook, library or theme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub name: String,
    /// Raw kind as written in the manifest; see [`RegistryItem::item_type`].
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<FileRef>,
    #[serde(
        rename = "registryDependencies",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub registry_dependencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ItemMeta>,
}

impl RegistryItem {
    pub fn item_type(&self) -> Option<ItemType> {
        ItemType::parse(&self.kind)
    }

    /// The item's tier, if present and valid.
    pub fn tier(&self) -> Option<Tier> {
        self.meta
            .as_ref()
            .and_then(|meta| meta.tier.as_deref())
            .and_then(Tier::parse)
    }
}

/// A registry manifest: an optional name and an ordered list of items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryManifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub items: Vec<RegistryItem>,
}

impl RegistryManifest {
    pub fn get(&self, name: &str) -> Option<&RegistryItem> {
        self.items.iter().find(|item| item.name == name)
    }
}
