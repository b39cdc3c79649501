//! Shared fixtures for CLI integration tests.

use std::path::Path;

use assert_cmd::Command;

/// A realistic extension catalog: five component paths, a class per corner
/// of the tree, and a dependency table with chains and diamonds.
pub const MANIFEST: &str = r#"
name = "goost"

components = [
    "core/image",
    "core/math/geometry",
    "scene/physics",
    "scene/gui",
    "editor",
]

[classes]
GoostEngine = "core"
InvokeState = "core"
LinkedList = "core"
ListNode = "core"
Random = "math"
GoostGeometry2D = "geometry"
PolyBoolean2D = "geometry"
PolyBooleanParameters2D = "geometry"
PolyDecomp2D = "geometry"
PolyDecompParameters2D = "geometry"
PolyOffset2D = "geometry"
PolyOffsetParameters2D = "geometry"
PolyNode2D = "geometry"
Random2D = "geometry"
GoostImage = "image"
ImageIndexed = "image"
GradientTexture2D = "scene"
LightTexture = "scene"
PolyShape2D = "scene"
PolyCollisionShape2D = "physics"
ShapeCast2D = "physics"
GridRect = "gui"

[dependencies]
GoostEngine = "InvokeState"
GoostGeometry2D = ["PolyBoolean2D", "PolyDecomp2D", "PolyOffset2D"]
LightTexture = "GradientTexture2D"
LinkedList = "ListNode"
PolyBoolean2D = ["PolyBooleanParameters2D", "PolyNode2D"]
PolyDecomp2D = "PolyDecompParameters2D"
PolyOffset2D = "PolyOffsetParameters2D"
PolyShape2D = "PolyNode2D"
PolyCollisionShape2D = ["PolyShape2D", "PolyNode2D"]
Random2D = ["Random", "GoostGeometry2D"]
"#;

/// Write the standard manifest into `dir`.
pub fn write_manifest(dir: &Path) {
    std::fs::write(dir.join("featconf.toml"), MANIFEST).unwrap();
}

/// Write an override file into `dir`.
pub fn write_config(dir: &Path, content: &str) {
    std::fs::write(dir.join("custom.toml"), content).unwrap();
}

/// A `featconf` command running in `dir`.
pub fn featconf(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("featconf").unwrap();
    cmd.current_dir(dir);
    cmd
}
