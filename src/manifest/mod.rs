//! Declarative catalog manifest (`featconf.toml`).
//!
//! The manifest is the static description of everything the resolver can
//! reason about: the component paths, the class → owning-component table, and
//! the class → prerequisite table. It is the raw declarative stage of a
//! two-stage pipeline — plain serde records here, parsed once by
//! [`Manifest::resolve`] into the immutable resolved stage
//! ([`ResolvedCatalog`]) with typed nodes and validated edges. The raw stage
//! is never mutated in place.
//!
//! # Format
//!
//! ```toml
//! name = "goost"
//!
//! components = [
//!     "core/image",
//!     "core/math/geometry",
//!     "scene/physics",
//!     "scene/gui",
//!     "editor",
//! ]
//!
//! [classes]
//! GoostEngine = "core"
//! GoostGeometry2D = "geometry"
//! PolyNode2D = "geometry"
//!
//! [dependencies]
//! GoostEngine = "InvokeState"                  # single-string shorthand
//! GoostGeometry2D = ["PolyBoolean2D", "PolyDecomp2D", "PolyOffset2D"]
//! ```
//!
//! Components are derived from the path segments, never declared directly.
//! A dependency value may be a single string (one prerequisite) or a list;
//! the shorthand is normalized at parse time.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{ClassCatalog, ClassDecl};
use crate::core::{FeatconfError, Result};
use crate::hierarchy::ComponentHierarchy;
use crate::resolver::DependencyGraph;

/// Default manifest filename, looked up in the working directory.
pub const DEFAULT_MANIFEST: &str = "featconf.toml";

/// One or more prerequisite classes. Accepts the single-string shorthand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DependencyList {
    /// Shorthand for exactly one prerequisite.
    Single(String),
    /// Explicit list of prerequisites.
    Multiple(Vec<String>),
}

impl DependencyList {
    /// Normalize to a plain list.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(dep) => vec![dep.clone()],
            Self::Multiple(deps) => deps.clone(),
        }
    }
}

/// Raw manifest, exactly as written in `featconf.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Optional library name, used in output headers only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Slash-delimited component path declarations.
    #[serde(default)]
    pub components: Vec<String>,

    /// Class name → owning component name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub classes: BTreeMap<String, String>,

    /// Class name → prerequisite class(es).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub dependencies: BTreeMap<String, DependencyList>,
}

impl Manifest {
    /// Load and validate a manifest from `path`.
    ///
    /// # Errors
    ///
    /// - [`FeatconfError::ManifestNotFound`] if the file does not exist.
    /// - [`FeatconfError::ManifestParseError`] for TOML syntax errors or
    ///   structural validation failures.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                FeatconfError::ManifestNotFound {
                    path: path.display().to_string(),
                }
            } else {
                FeatconfError::IoError(err)
            }
        })?;
        let manifest = Self::from_str_validated(&content).map_err(|reason| {
            FeatconfError::ManifestParseError {
                file: path.display().to_string(),
                reason,
            }
        })?;
        tracing::info!(
            path = %path.display(),
            components = manifest.components.len(),
            classes = manifest.classes.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse and validate manifest content.
    fn from_str_validated(content: &str) -> std::result::Result<Self, String> {
        let manifest: Self = toml::from_str(content).map_err(|err| err.to_string())?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Structural checks that don't need the resolved hierarchy.
    fn validate(&self) -> std::result::Result<(), String> {
        for path in &self.components {
            if path.split('/').all(str::is_empty) {
                return Err(format!("component path `{path}` has no segments"));
            }
        }
        for (class, component) in &self.classes {
            if class.is_empty() {
                return Err("empty class name in [classes]".to_string());
            }
            if component.is_empty() {
                return Err(format!("class `{class}` has an empty owning component"));
            }
        }
        Ok(())
    }

    /// Merge the class table and dependency table into declarative records.
    ///
    /// # Errors
    ///
    /// [`FeatconfError::DependencyForUndefinedClass`] if a `[dependencies]`
    /// key is not a declared class.
    pub fn class_decls(&self) -> Result<Vec<ClassDecl>> {
        for name in self.dependencies.keys() {
            if !self.classes.contains_key(name) {
                return Err(FeatconfError::DependencyForUndefinedClass {
                    name: name.clone(),
                });
            }
        }
        Ok(self
            .classes
            .iter()
            .map(|(name, component)| ClassDecl {
                name: name.clone(),
                component: component.clone(),
                deps: self.dependencies.get(name).map(DependencyList::to_vec).unwrap_or_default(),
            })
            .collect())
    }

    /// Parse the declarative stage into the resolved stage: hierarchy, class
    /// catalog, and dependency graph, fully validated.
    ///
    /// # Errors
    ///
    /// Any catalog-integrity error from [`ClassCatalog::from_decls`] or
    /// [`Manifest::class_decls`], plus [`FeatconfError::CircularDependency`]
    /// if the prerequisite table is cyclic — a broken graph is caught here at
    /// startup, not mid-resolution.
    pub fn resolve(&self) -> Result<ResolvedCatalog> {
        let hierarchy = ComponentHierarchy::parse(&self.components);
        let classes = ClassCatalog::from_decls(self.class_decls()?, &hierarchy)?;
        let graph = DependencyGraph::from_catalog(&classes);
        graph.detect_cycles()?;
        Ok(ResolvedCatalog {
            hierarchy,
            classes,
            graph,
        })
    }
}

/// The resolved, immutable stage of the catalog pipeline.
///
/// Constructed once at startup; read-only for the process lifetime.
pub struct ResolvedCatalog {
    /// Component hierarchy derived from the declared paths.
    pub hierarchy: ComponentHierarchy,
    /// Validated class catalog.
    pub classes: ClassCatalog,
    /// Class prerequisite graph, verified acyclic.
    pub graph: DependencyGraph,
}
