//! End-to-end tests for `featconf configure`.

use predicates::prelude::*;

use crate::common::{featconf, write_config, write_manifest};

#[test]
fn test_generates_override_file_with_full_catalog() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .arg("configure")
        .assert()
        .success()
        .stdout(predicate::str::contains("generated"));

    let content = std::fs::read_to_string(dir.path().join("custom.toml")).unwrap();
    assert!(content.contains("components_enabled_by_default = true"));
    assert!(content.contains("editor = true"));
    assert!(content.contains("GoostEngine = true"));
    assert!(content.contains("GridRect = true"));
}

#[test]
fn test_update_preserves_overrides_and_reports_new_names() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(dir.path(), "[components]\neditor = false\n");

    featconf(dir.path())
        .arg("configure")
        .assert()
        .success()
        .stdout(predicate::str::contains("updated"))
        // "editor" already had an entry; "core" is newly added.
        .stdout(predicate::str::contains("adding core"));

    let content = std::fs::read_to_string(dir.path().join("custom.toml")).unwrap();
    assert!(content.contains("editor = false"));
    assert!(content.contains("core = true"));
}

#[test]
fn test_configure_then_resolve_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path()).arg("configure").assert().success();
    // The generated file is all-defaults, so resolution enables everything.
    featconf(dir.path())
        .args(["resolve", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"disabled\": []"));
}

#[test]
fn test_configure_without_manifest_fails() {
    let dir = tempfile::tempdir().unwrap();

    featconf(dir.path()).arg("configure").assert().failure().code(1);
}
