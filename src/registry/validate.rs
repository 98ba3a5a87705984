//! Per-item manifest checks.
//!
//! Validation is a single pass over the raw item list followed by a
//! duplicate-name pass. Nothing short-circuits: every item is checked and
//! every problem is recorded, so one run reports everything that is wrong.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use serde_json::Value;

use super::issue::{IssueKind, ValidationIssue};
use super::load::RawManifest;
use super::manifest::{ItemType, Tier};
use super::probe::{is_within_root, FileProbe};

/// Fields every item must carry.
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "type", "description", "files"];

/// Item counts by tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub total: usize,
    pub free: usize,
    pub premium: usize,
    /// Items whose `meta.tier` is missing or invalid.
    pub untiered: usize,
}

impl TierSummary {
    fn count(items: &[Value]) -> Self {
        let mut summary = TierSummary {
            total: items.len(),
            ..Default::default()
        };
        for item in items {
            match item_tier(item).and_then(Tier::parse) {
                Some(Tier::Free) => summary.free += 1,
                Some(Tier::Premium) => summary.premium += 1,
                None => summary.untiered += 1,
            }
        }
        summary
    }
}

/// The outcome of a validation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// The manifest's top-level name, if any.
    pub manifest: Option<String>,
    pub summary: TierSummary,
    pub issues: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// `true` when no issue was found. Any issue fails the whole run.
    pub fn is_ok(&self) -> bool {
        self.issues.is_empty()
    }

    /// Issues recorded against the item labelled `item`.
    pub fn issues_for<'a>(&'a self, item: &'a str) -> impl Iterator<Item = &'a ValidationIssue> {
        self.issues.iter().filter(move |issue| issue.item == item)
    }
}

/// Checks every item in `manifest`, resolving file paths through `files`.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeSet;
/// use kitbash::registry::{validate_manifest, RawManifest};
///
/// let manifest = RawManifest::parse("registry.json", r#"{
///     "items": [{
///         "name": "box",
///         "type": "ui",
///         "description": "Layout box",
///         "files": ["components/ui/box.tsx"],
///         "meta": {"tier": "free"}
///     }]
/// }"#).unwrap();
///
/// let files: BTreeSet<&str> = ["components/ui/box.tsx"].into_iter().collect();
/// let report = validate_manifest(&manifest, &files);
/// assert!(report.is_ok());
/// assert_eq!(report.summary.free, 1);
/// ```
pub fn validate_manifest<P: FileProbe + ?Sized>(manifest: &RawManifest, files: &P) -> ValidationReport {
    let items = manifest.items();
    let known: HashSet<&str> = items.iter().filter_map(item_name).collect();

    let mut issues = Vec::new();
    for (index, item) in items.iter().enumerate() {
        let label = item_label(item, index);
        tracing::debug!(item = %label, "checking registry item");
        let before = issues.len();

        check_required_fields(item, &label, &mut issues);
        check_type(item, &label, &mut issues);
        check_files(item, &label, files, &mut issues);
        check_dependencies(item, &label, &known, &mut issues);
        check_tier(item, &label, &mut issues);

        for issue in &issues[before..] {
            tracing::debug!(item = %issue.item, issue = %issue.kind, "validation issue");
        }
    }
    check_duplicate_names(items, &mut issues);

    let report = ValidationReport {
        manifest: manifest.name().map(str::to_string),
        summary: TierSummary::count(items),
        issues,
    };
    tracing::info!(
        items = report.summary.total,
        issues = report.issues.len(),
        "registry validation finished"
    );
    report
}

fn item_name(item: &Value) -> Option<&str> {
    item.get("name")
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
}

fn item_label(item: &Value, index: usize) -> String {
    item_name(item)
        .map(str::to_string)
        .unwrap_or_else(|| format!("item[{index}]"))
}

fn item_tier(item: &Value) -> Option<&str> {
    item.get("meta")
        .and_then(|meta| meta.get("tier"))
        .and_then(Value::as_str)
}

/// Absent, `null`, and `""` all count as missing.
fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

fn check_required_fields(item: &Value, label: &str, issues: &mut Vec<ValidationIssue>) {
    for field in REQUIRED_FIELDS {
        if is_blank(item.get(field)) {
            issues.push(ValidationIssue::new(
                label,
                IssueKind::MissingField {
                    field: field.to_string(),
                },
            ));
        }
    }
}

fn check_type(item: &Value, label: &str, issues: &mut Vec<ValidationIssue>) {
    let Some(raw) = item.get("type").filter(|v| !is_blank(Some(*v))) else {
        return;
    };
    if raw.as_str().and_then(ItemType::parse).is_none() {
        issues.push(ValidationIssue::new(
            label,
            IssueKind::InvalidType {
                value: raw.to_string(),
            },
        ));
    }
}

fn check_files<P: FileProbe + ?Sized>(
    item: &Value,
    label: &str,
    files: &P,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(raw) = item.get("files").filter(|v| !v.is_null()) else {
        return;
    };
    let Some(entries) = raw.as_array() else {
        issues.push(ValidationIssue::new(label, IssueKind::FilesNotArray));
        return;
    };
    for (index, entry) in entries.iter().enumerate() {
        let path = match entry {
            Value::String(path) => Some(path.as_str()),
            Value::Object(obj) => obj.get("path").and_then(Value::as_str),
            _ => None,
        };
        match path {
            Some(path) if !path.is_empty() => {
                if !is_within_root(path) {
                    issues.push(ValidationIssue::new(
                        label,
                        IssueKind::FileOutsideRoot {
                            path: path.to_string(),
                        },
                    ));
                } else if !files.exists(path) {
                    issues.push(ValidationIssue::new(
                        label,
                        IssueKind::MissingFile {
                            path: path.to_string(),
                        },
                    ));
                }
            }
            _ => issues.push(ValidationIssue::new(
                label,
                IssueKind::InvalidFileEntry { index },
            )),
        }
    }
}

fn check_dependencies(
    item: &Value,
    label: &str,
    known: &HashSet<&str>,
    issues: &mut Vec<ValidationIssue>,
) {
    let Some(raw) = item.get("registryDependencies").filter(|v| !v.is_null()) else {
        return;
    };
    let Some(deps) = raw.as_array() else {
        issues.push(ValidationIssue::new(label, IssueKind::DependenciesNotArray));
        return;
    };
    for dep in deps {
        let resolved = dep.as_str().is_some_and(|name| known.contains(name));
        if !resolved {
            let name = dep
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| dep.to_string());
            issues.push(ValidationIssue::new(
                label,
                IssueKind::UnknownDependency { name },
            ));
        }
    }
}

fn check_tier(item: &Value, label: &str, issues: &mut Vec<ValidationIssue>) {
    let raw = item.get("meta").and_then(|meta| meta.get("tier"));
    let valid = raw.and_then(Value::as_str).and_then(Tier::parse).is_some();
    if !valid {
        issues.push(ValidationIssue::new(
            label,
            IssueKind::InvalidTier {
                value: raw.filter(|v| !v.is_null()).map(Value::to_string),
            },
        ));
    }
}

/// Records one issue for every occurrence of a name after its first.
fn check_duplicate_names(items: &[Value], issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for item in items {
        let Some(name) = item_name(item) else {
            continue;
        };
        let count = seen.entry(name).or_insert(0);
        *count += 1;
        if *count > 1 {
            issues.push(ValidationIssue::new(
                name,
                IssueKind::DuplicateName {
                    name: name.to_string(),
                },
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    const BOX: &str = "components/ui/box.tsx";
    const FLEX: &str = "components/ui/flex.tsx";
    const UTILS: &str = "lib/utils.ts";

    fn disk() -> BTreeSet<&'static str> {
        [BOX, FLEX, UTILS].into_iter().collect()
    }

    fn item(name: &str, file: &str, tier: &str) -> Value {
        json!({
            "name": name,
            "type": "registry:ui",
            "description": format!("The {name} primitive"),
            "files": [file],
            "meta": {"tier": tier}
        })
    }

    fn manifest(items: Vec<Value>) -> RawManifest {
        RawManifest::from_value("registry.json", json!({"name": "kit", "items": items})).unwrap()
    }

    #[test]
    fn test_valid_manifest_has_no_issues() {
        let mut flex = item("flex", FLEX, "premium");
        flex["registryDependencies"] = json!(["box", "utils"]);
        let utils = json!({
            "name": "utils",
            "type": "lib",
            "description": "cn helper",
            "files": [{"path": UTILS, "type": "registry:lib"}],
            "meta": {"tier": "free"}
        });

        let report = validate_manifest(&manifest(vec![item("box", BOX, "free"), flex, utils]), &disk());

        assert!(report.is_ok(), "unexpected issues: {:?}", report.issues);
        assert_eq!(report.manifest.as_deref(), Some("kit"));
        assert_eq!(
            report.summary,
            TierSummary {
                total: 3,
                free: 2,
                premium: 1,
                untiered: 0
            }
        );
    }

    #[test]
    fn test_missing_description_is_one_issue() {
        let mut card = item("card", BOX, "free");
        card.as_object_mut().unwrap().remove("description");

        let report = validate_manifest(&manifest(vec![card]), &disk());

        assert!(!report.is_ok());
        assert_eq!(
            report.issues,
            vec![ValidationIssue::new(
                "card",
                IssueKind::MissingField {
                    field: "description".into()
                }
            )]
        );
    }

    #[test]
    fn test_empty_and_null_fields_count_as_missing() {
        let mut card = item("card", BOX, "free");
        card["description"] = json!("");
        card["type"] = Value::Null;

        let report = validate_manifest(&manifest(vec![card]), &disk());
        let fields: Vec<_> = report
            .issues
            .iter()
            .filter_map(|i| match &i.kind {
                IssueKind::MissingField { field } => Some(field.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(fields, vec!["type", "description"]);
        assert_eq!(report.issues.len(), 2);
    }

    #[test]
    fn test_non_object_item_reports_every_field() {
        let report = validate_manifest(&manifest(vec![json!("box")]), &disk());
        let missing = report
            .issues_for("item[0]")
            .filter(|i| matches!(i.kind, IssueKind::MissingField { .. }))
            .count();
        assert_eq!(missing, 4);
        assert!(report
            .issues_for("item[0]")
            .any(|i| i.kind == IssueKind::InvalidTier { value: None }));
    }

    #[test]
    fn test_invalid_type_names_value() {
        let mut widget = item("widget", BOX, "free");
        widget["type"] = json!("registry:widget");

        let report = validate_manifest(&manifest(vec![widget]), &disk());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(
            report.issues[0].kind,
            IssueKind::InvalidType {
                value: "\"registry:widget\"".into()
            }
        );
        assert!(report.issues[0].to_string().contains("registry:widget"));
    }

    #[test]
    fn test_each_missing_file_is_distinct() {
        let mut card = item("card", BOX, "free");
        card["files"] = json!(["components/ui/card.tsx", BOX, {"path": "components/ui/card-header.tsx"}]);

        let report = validate_manifest(&manifest(vec![card]), &disk());
        let missing: Vec<_> = report
            .issues
            .iter()
            .filter_map(|i| match &i.kind {
                IssueKind::MissingFile { path } => Some(path.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(missing, vec!["components/ui/card.tsx", "components/ui/card-header.tsx"]);
    }

    #[test]
    fn test_paths_leaving_root_are_rejected() {
        let mut card = item("card", BOX, "free");
        card["files"] = json!(["/etc/hostname", "../../../etc/hostname", {"path": "lib/../../x.ts"}]);
        // Even a probe that claims every path exists must not be consulted.
        let everything: BTreeSet<&str> = ["/etc/hostname", "../../../etc/hostname", "lib/../../x.ts"]
            .into_iter()
            .collect();

        let report = validate_manifest(&manifest(vec![card]), &everything);
        let outside: Vec<_> = report
            .issues
            .iter()
            .filter_map(|i| match &i.kind {
                IssueKind::FileOutsideRoot { path } => Some(path.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(outside, vec!["/etc/hostname", "../../../etc/hostname", "lib/../../x.ts"]);
        assert_eq!(report.issues.len(), 3);
    }

    #[test]
    fn test_malformed_file_entries() {
        let mut card = item("card", BOX, "free");
        card["files"] = json!([42, {"target": "x"}, ""]);
        let report = validate_manifest(&manifest(vec![card.clone()]), &disk());
        let indices: Vec<_> = report
            .issues
            .iter()
            .filter_map(|i| match i.kind {
                IssueKind::InvalidFileEntry { index } => Some(index),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1, 2]);

        card["files"] = json!("components/ui/box.tsx");
        let report = validate_manifest(&manifest(vec![card]), &disk());
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::FilesNotArray);
    }

    #[test]
    fn test_dangling_dependency_is_one_issue() {
        let mut flex = item("flex", FLEX, "free");
        flex["registryDependencies"] = json!(["box", "ghost"]);

        let report = validate_manifest(&manifest(vec![item("box", BOX, "free"), flex]), &disk());
        assert_eq!(
            report.issues,
            vec![ValidationIssue::new(
                "flex",
                IssueKind::UnknownDependency {
                    name: "ghost".into()
                }
            )]
        );
    }

    #[test]
    fn test_dependency_order_in_manifest_does_not_matter() {
        let mut flex = item("flex", FLEX, "free");
        flex["registryDependencies"] = json!(["box"]);
        let report = validate_manifest(&manifest(vec![flex, item("box", BOX, "free")]), &disk());
        assert!(report.is_ok());
    }

    #[test]
    fn test_non_array_dependencies() {
        let mut flex = item("flex", FLEX, "free");
        flex["registryDependencies"] = json!("box");
        let report = validate_manifest(&manifest(vec![flex]), &disk());
        assert_eq!(report.issues[0].kind, IssueKind::DependenciesNotArray);
    }

    #[test]
    fn test_tier_checks() {
        let mut gold = item("gold", BOX, "gold");
        let mut bare = item("bare", BOX, "free");
        bare.as_object_mut().unwrap().remove("meta");
        let mut upper = item("upper", BOX, "Free");
        upper["meta"]["extra"] = json!(true);
        gold["meta"]["tier"] = json!("gold");

        let report = validate_manifest(&manifest(vec![gold, bare, upper]), &disk());
        assert_eq!(report.issues.len(), 3);
        assert!(report.issues.iter().all(|i| matches!(i.kind, IssueKind::InvalidTier { .. })));
        assert_eq!(report.summary.untiered, 3);
    }

    #[test]
    fn test_duplicate_names_add_to_other_issues() {
        let first = item("box", BOX, "free");
        let mut second = item("box", "components/ui/box2.tsx", "free");
        second.as_object_mut().unwrap().remove("description");

        let report = validate_manifest(&manifest(vec![first, second]), &disk());
        let kinds: Vec<_> = report.issues.iter().map(|i| &i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                &IssueKind::MissingField {
                    field: "description".into()
                },
                &IssueKind::MissingFile {
                    path: "components/ui/box2.tsx".into()
                },
                &IssueKind::DuplicateName { name: "box".into() },
            ]
        );
    }

    #[test]
    fn test_duplicate_issue_per_extra_occurrence() {
        let items = vec![
            item("box", BOX, "free"),
            item("box", BOX, "free"),
            item("box", BOX, "free"),
        ];
        let report = validate_manifest(&manifest(items), &disk());
        assert_eq!(report.issues.len(), 2);
        assert!(report
            .issues
            .iter()
            .all(|i| i.kind == IssueKind::DuplicateName { name: "box".into() }));
    }

    #[test]
    fn test_empty_manifest_is_valid() {
        let report = validate_manifest(&manifest(vec![]), &disk());
        assert!(report.is_ok());
        assert_eq!(report.summary, TierSummary::default());
    }
}
