//! Tier-gated distribution.
//!
//! A consumer holding an access tier may receive an item only if the item's
//! tier is at or below theirs. Items without a valid tier are never
//! distributed. Dependencies are gated the same way as the item that pulls
//! them in.

use std::collections::HashSet;

use super::manifest::{RegistryItem, RegistryManifest, Tier};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("unknown registry item `{0}`")]
    UnknownItem(String),

    #[error("item `{item}` requires {required} access")]
    Denied { item: String, required: Tier },

    #[error("item `{0}` has no valid tier and cannot be distributed")]
    Untiered(String),
}

/// Checks a single item against `access`.
pub fn check_access(item: &RegistryItem, access: Tier) -> Result<(), AccessError> {
    match item.tier() {
        Some(required) if access.grants(required) => Ok(()),
        Some(required) => Err(AccessError::Denied {
            item: item.name.clone(),
            required,
        }),
        None => Err(AccessError::Untiered(item.name.clone())),
    }
}

/// Items a holder of `access` may receive, in manifest order.
pub fn distributable(manifest: &RegistryManifest, access: Tier) -> Vec<&RegistryItem> {
    manifest
        .items
        .iter()
        .filter(|item| check_access(item, access).is_ok())
        .collect()
}

/// Resolves `name` and everything it transitively depends on.
///
/// The requested item comes first, followed by its dependencies in
/// depth-first pre-order. Each item appears once even if the dependency
/// graph has cycles. Fails on the first item that is unknown or that
/// `access` does not cover.
pub fn dependency_closure<'a>(
    manifest: &'a RegistryManifest,
    name: &str,
    access: Tier,
) -> Result<Vec<&'a RegistryItem>, AccessError> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    visit(manifest, name, access, &mut seen, &mut out)?;
    tracing::debug!(item = name, count = out.len(), "resolved dependency closure");
    Ok(out)
}

fn visit<'a>(
    manifest: &'a RegistryManifest,
    name: &str,
    access: Tier,
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a RegistryItem>,
) -> Result<(), AccessError> {
    let item = manifest
        .get(name)
        .ok_or_else(|| AccessError::UnknownItem(name.to_string()))?;
    if !seen.insert(item.name.as_str()) {
        return Ok(());
    }
    check_access(item, access)?;
    out.push(item);
    for dep in &item.registry_dependencies {
        visit(manifest, dep, access, seen, out)?;
    }
    Ok(())
}
