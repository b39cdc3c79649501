//! End-to-end tests for `featconf list`.

use predicates::prelude::*;

use crate::common::{featconf, write_manifest};

#[test]
fn test_children_are_nearest_first() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--children-of", "core"])
        .assert()
        .success()
        .stdout("image\nmath\ngeometry\n");
}

#[test]
fn test_parents_are_root_first() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--parents-of", "geometry"])
        .assert()
        .success()
        .stdout("core\nmath\n");
}

#[test]
fn test_component_chain_of_class() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--chain-of", "PolyNode2D"])
        .assert()
        .success()
        .stdout("core/math/geometry\n");
}

#[test]
fn test_classes_of_component_is_not_transitive() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    let output =
        featconf(dir.path()).args(["list", "--classes-of", "core"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let classes: Vec<&str> = stdout.lines().collect();
    assert_eq!(classes, ["GoostEngine", "InvokeState", "LinkedList", "ListNode"]);
    // "Random" is owned by the child component "math", not "core".
    assert!(!classes.contains(&"Random"));
}

#[test]
fn test_closure_of_class() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--closure-of", "LightTexture"])
        .assert()
        .success()
        .stdout("GradientTexture2D\nLightTexture\n");
}

#[test]
fn test_unknown_component_exits_255() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--children-of", "gui3d"])
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("gui3d"));
}

#[test]
fn test_unknown_class_closure_exits_255() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .args(["list", "--closure-of", "NotAClass"])
        .assert()
        .failure()
        .code(255)
        .stderr(predicate::str::contains("NotAClass"));
}

#[test]
fn test_default_listing_shows_tree() {
    let dir = tempfile::tempdir().unwrap();
    write_manifest(dir.path());

    featconf(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("core"))
        .stdout(predicate::str::contains("└── "))
        .stdout(predicate::str::contains("geometry"));
}
