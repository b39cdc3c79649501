//! End-to-end tests for `featconf resolve`.

use std::collections::BTreeSet;

use predicates::prelude::*;
use serde_json::Value;

use crate::common::{featconf, write_config, write_manifest};

fn json_set(value: &Value) -> BTreeSet<String> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

fn resolve_json(dir: &std::path::Path) -> Value {
    let output = featconf(dir).args(["resolve", "--format", "json"]).output().unwrap();
    assert!(output.status.success(), "resolve failed: {output:?}");
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_default_resolution_enables_everything() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let json = resolve_json(dir.path());
    assert!(json_set(&json["components"]["disabled"]).is_empty());
    assert!(json_set(&json["classes"]["disabled"]).is_empty());
    assert_eq!(json_set(&json["components"]["enabled"]).len(), 8);
    assert_eq!(json_set(&json["classes"]["enabled"]).len(), 22);
}

#[test]
fn test_partition_covers_catalog_exactly() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(
        dir.path(),
        "[components]\neditor = false\n\n[classes]\nGridRect = false\n",
    );

    let json = resolve_json(dir.path());
    let enabled = json_set(&json["classes"]["enabled"]);
    let disabled = json_set(&json["classes"]["disabled"]);
    assert!(enabled.is_disjoint(&disabled));
    assert_eq!(enabled.len() + disabled.len(), 22);
    assert!(disabled.contains("GridRect"));
    assert!(json_set(&json["components"]["disabled"]).contains("editor"));
}

#[test]
fn test_closure_propagation_reenables_prerequisites() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    // Everything off except one class at the top of a dependency diamond.
    write_config(
        dir.path(),
        concat!(
            "components_enabled_by_default = true\n",
            "classes_enabled_by_default = false\n",
            "\n",
            "[classes]\n",
            "PolyCollisionShape2D = true\n",
        ),
    );

    let json = resolve_json(dir.path());
    let enabled = json_set(&json["classes"]["enabled"]);
    for class in ["PolyCollisionShape2D", "PolyShape2D", "PolyNode2D"] {
        assert!(enabled.contains(class), "{class} should be enabled");
    }
    assert!(!enabled.contains("Random"));
}

#[test]
fn test_deep_closure_through_chained_dependencies() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(
        dir.path(),
        concat!(
            "classes_enabled_by_default = false\n",
            "\n",
            "[classes]\n",
            "Random2D = true\n",
        ),
    );

    let json = resolve_json(dir.path());
    let enabled = json_set(&json["classes"]["enabled"]);
    // Random2D -> GoostGeometry2D -> PolyBoolean2D -> PolyNode2D, plus Random.
    for class in [
        "Random2D",
        "Random",
        "GoostGeometry2D",
        "PolyBoolean2D",
        "PolyBooleanParameters2D",
        "PolyNode2D",
        "PolyDecomp2D",
        "PolyDecompParameters2D",
        "PolyOffset2D",
        "PolyOffsetParameters2D",
    ] {
        assert!(enabled.contains(class), "{class} should be enabled");
    }
    assert!(!enabled.contains("GoostImage"));
}

#[test]
fn test_disabling_a_needed_prerequisite_is_overruled() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(dir.path(), "[classes]\nPolyNode2D = false\n");

    let json = resolve_json(dir.path());
    assert!(json_set(&json["classes"]["enabled"]).contains("PolyNode2D"));
    assert!(json_set(&json["classes"]["disabled"]).is_empty());
}

#[test]
fn test_unknown_class_override_exits_255() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(dir.path(), "[classes]\nNotAClass = false\n");

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("NotAClass"));
}

#[test]
fn test_unknown_component_override_exits_255() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());
    write_config(dir.path(), "[components]\ngui3d = false\n");

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("gui3d"));
}

#[test]
fn test_cyclic_dependency_table_exits_255() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("featconf.toml"),
        concat!(
            "components = [\"core\"]\n",
            "\n",
            "[classes]\n",
            "A = \"core\"\n",
            "B = \"core\"\n",
            "\n",
            "[dependencies]\n",
            "A = \"B\"\n",
            "B = \"A\"\n",
        ),
    )
    .unwrap();

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("circular"));
}

#[test]
fn test_broken_catalog_exits_255_before_resolution() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("featconf.toml"),
        "components = [\"core\"]\n\n[classes]\nGridRect = \"gui\"\n",
    )
    .unwrap();

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("gui"));
}

#[test]
fn test_missing_manifest_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_text_output_mentions_both_catalogs() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .arg("resolve")
        .assert()
        .success()
        .stdout(predicate::str::contains("Components"))
        .stdout(predicate::str::contains("Classes"));
}
