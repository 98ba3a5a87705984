use std::fs;

use kitbash::registry::{validate_path, IssueKind, LoadError};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::TempDir;

/// A project directory with a manifest and the listed files on disk.
fn project(manifest: Value, files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        let path = dir.path().join(file);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "export {}\n").unwrap();
    }
    fs::write(
        dir.path().join("registry.json"),
        serde_json::to_string_pretty(&manifest).unwrap(),
    )
    .unwrap();
    dir
}

fn item(name: &str, tier: &str) -> Value {
    json!({
        "name": name,
        "type": "registry:ui",
        "description": format!("{name} primitive"),
        "files": [format!("components/ui/{name}.tsx")],
        "meta": {"tier": tier}
    })
}

fn valid_project() -> TempDir {
    let mut flex = item("flex", "premium");
    flex["registryDependencies"] = json!(["box"]);
    project(
        json!({"name": "acme-ui", "items": [item("box", "free"), flex]}),
        &["components/ui/box.tsx", "components/ui/flex.tsx"],
    )
}

fn bin() -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::cargo_bin("validate-registry").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_missing_description_is_reported_once() {
    let mut card = item("card", "free");
    card.as_object_mut().unwrap().remove("description");
    let dir = project(json!({"items": [card]}), &["components/ui/card.tsx"]);

    let report = validate_path("registry.json", dir.path()).unwrap();

    assert!(!report.is_ok());
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].item, "card");
    assert_eq!(
        report.issues[0].kind,
        IssueKind::MissingField {
            field: "description".into()
        }
    );
}

#[test]
fn test_duplicate_name_is_in_addition_to_field_issues() {
    let first = item("box", "free");
    let mut second = item("box", "gold");
    second.as_object_mut().unwrap().remove("files");
    let dir = project(json!({"items": [first, second]}), &["components/ui/box.tsx"]);

    let report = validate_path("registry.json", dir.path()).unwrap();
    let kinds: Vec<_> = report.issues.iter().map(|i| &i.kind).collect();

    assert!(kinds.contains(&&IssueKind::MissingField {
        field: "files".into()
    }));
    assert!(kinds.contains(&&IssueKind::InvalidTier {
        value: Some("\"gold\"".into())
    }));
    assert!(kinds.contains(&&IssueKind::DuplicateName { name: "box".into() }));
    assert_eq!(report.issues.len(), 3);
}

#[test]
fn test_dangling_dependency_is_one_issue() {
    let mut flex = item("flex", "free");
    flex["registryDependencies"] = json!(["box", "stack"]);
    let dir = project(
        json!({"items": [item("box", "free"), flex]}),
        &["components/ui/box.tsx", "components/ui/flex.tsx"],
    );

    let report = validate_path("registry.json", dir.path()).unwrap();

    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.issues[0].item, "flex");
    assert_eq!(
        report.issues[0].kind,
        IssueKind::UnknownDependency {
            name: "stack".into()
        }
    );
}

#[test]
fn test_valid_manifest_has_zero_issues() {
    let dir = valid_project();
    let report = validate_path("registry.json", dir.path()).unwrap();

    assert!(report.is_ok(), "unexpected issues: {:?}", report.issues);
    assert_eq!(report.manifest.as_deref(), Some("acme-ui"));
    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.free, 1);
    assert_eq!(report.summary.premium, 1);
}

#[test]
fn test_missing_manifest_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let err = validate_path("registry.json", dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Missing { .. }));
}

#[test]
fn test_items_not_array_is_fatal() {
    let dir = project(json!({"items": "box"}), &[]);
    let err = validate_path("registry.json", dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::ItemsNotArray { .. }));
}

#[test]
fn test_cli_succeeds_on_valid_manifest() {
    let dir = valid_project();

    bin()
        .current_dir(dir.path())
        .args(["--output", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("registry acme-ui\n"))
        .stdout(predicate::str::contains("all 2 items valid"));
}

#[test]
fn test_cli_fails_and_lists_every_issue() {
    let mut card = item("card", "free");
    card.as_object_mut().unwrap().remove("description");
    let mut flex = item("flex", "free");
    flex["registryDependencies"] = json!(["ghost"]);
    let dir = project(
        json!({"items": [card, flex]}),
        &["components/ui/card.tsx", "components/ui/flex.tsx"],
    );

    bin()
        .current_dir(dir.path())
        .args(["--output", "text"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("missing required field `description`"))
        .stdout(predicate::str::contains("unknown item `ghost`"))
        .stdout(predicate::str::contains("2 issues in 2 items"));
}

#[test]
fn test_cli_missing_manifest_exits_one_with_stderr() {
    let dir = tempfile::tempdir().unwrap();

    bin()
        .current_dir(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("registry manifest not found"));
}

#[test]
fn test_cli_json_output_and_root_flag() {
    let dir = valid_project();
    let elsewhere = tempfile::tempdir().unwrap();

    let output = bin()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(dir.path())
        .args(["--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], true);
    assert_eq!(json["summary"]["total"], 2);
    assert_eq!(json["issues"], json!([]));
}

#[test]
fn test_files_outside_root_are_issues_not_hits() {
    let outer = tempfile::tempdir().unwrap();
    fs::write(outer.path().join("secret.tsx"), "export {}\n").unwrap();
    let mut card = item("card", "free");
    card["files"] = json!(["../secret.tsx", "/etc/hostname"]);
    let root = outer.path().join("project");
    fs::create_dir_all(&root).unwrap();
    fs::write(
        root.join("registry.json"),
        json!({"items": [card]}).to_string(),
    )
    .unwrap();

    let report = validate_path("registry.json", &root).unwrap();
    let kinds: Vec<_> = report.issues.iter().map(|i| &i.kind).collect();

    assert_eq!(
        kinds,
        vec![
            &IssueKind::FileOutsideRoot {
                path: "../secret.tsx".into()
            },
            &IssueKind::FileOutsideRoot {
                path: "/etc/hostname".into()
            },
        ]
    );
}
