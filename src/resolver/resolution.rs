//! Override resolution: turning user enable/disable decisions into a
//! complete enabled/disabled partition of a catalog.
//!
//! Resolution is a pure function of its inputs. The default state is an
//! explicit parameter threaded through every call, never ambient
//! configuration, and the result is a partition: every catalog name lands in
//! exactly one of the two sets.
//!
//! Components and classes resolve through the same pipeline; the only
//! difference is that class resolution runs a dependency-propagation pass
//! afterwards, pulling every enabled class's transitive prerequisites out of
//! the disabled set. A single pass suffices because
//! [`DependencyGraph::closure_of`] returns the transitively-complete set in
//! one call.
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use featconf::hierarchy::ComponentHierarchy;
//! use featconf::resolver::resolve_components;
//!
//! let hierarchy = ComponentHierarchy::parse(&["core/image", "editor"]);
//! let overrides = BTreeMap::from([("editor".to_string(), false)]);
//!
//! let resolution = resolve_components(&hierarchy, &overrides, true).unwrap();
//! assert!(resolution.is_enabled("image"));
//! assert!(!resolution.is_enabled("editor"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::ClassCatalog;
use crate::core::{FeatconfError, Result};
use crate::hierarchy::ComponentHierarchy;
use crate::resolver::dependency_graph::DependencyGraph;

/// Which catalog a resolution ran against. Selects the unknown-name error
/// variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogKind {
    Components,
    Classes,
}

/// Final enabled/disabled partition of a catalog.
///
/// Invariant: `enabled` and `disabled` are disjoint and their union is
/// exactly the catalog the resolution ran against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Names active in this build.
    pub enabled: BTreeSet<String>,
    /// Names excluded from this build.
    pub disabled: BTreeSet<String>,
}

impl Resolution {
    /// Whether `name` ended up enabled.
    #[must_use]
    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Re-express this partition as an override map (every name explicit).
    ///
    /// Feeding the result back into a resolve call is a fixpoint.
    #[must_use]
    pub fn to_overrides(&self) -> BTreeMap<String, bool> {
        let mut overrides = BTreeMap::new();
        for name in &self.enabled {
            overrides.insert(name.clone(), true);
        }
        for name in &self.disabled {
            overrides.insert(name.clone(), false);
        }
        overrides
    }
}

/// Resolve component overrides against the derived component set.
///
/// Components carry no dependency edges, so this is pure partition logic:
/// defaults, explicit moves, done.
///
/// # Errors
///
/// [`FeatconfError::UnknownComponent`] for the first override key not present
/// in the component set. No partial result is returned.
pub fn resolve_components(
    hierarchy: &ComponentHierarchy,
    overrides: &BTreeMap<String, bool>,
    enabled_by_default: bool,
) -> Result<Resolution> {
    let resolution = resolve_catalog(
        hierarchy.components(),
        overrides,
        enabled_by_default,
        CatalogKind::Components,
    )?;
    tracing::debug!(
        enabled = resolution.enabled.len(),
        disabled = resolution.disabled.len(),
        "resolved components"
    );
    Ok(resolution)
}

/// Resolve class overrides against the catalog, then propagate dependency
/// closures so no prerequisite of an enabled class is left disabled.
///
/// # Errors
///
/// - [`FeatconfError::UnknownClass`] for the first override key not present
///   in the catalog.
/// - [`FeatconfError::CircularDependency`] if the prerequisite table is
///   cyclic.
pub fn resolve_classes(
    catalog: &ClassCatalog,
    graph: &DependencyGraph,
    overrides: &BTreeMap<String, bool>,
    enabled_by_default: bool,
) -> Result<Resolution> {
    let mut resolution =
        resolve_catalog(catalog.names(), overrides, enabled_by_default, CatalogKind::Classes)?;

    // Dependency propagation. Closures are transitively complete, so one
    // pass over the initially-enabled set reaches the fixpoint.
    for class in resolution.enabled.clone() {
        for required in graph.closure_of(&class)? {
            if resolution.disabled.remove(&required) {
                tracing::debug!(class = %class, requires = %required, "implicitly enabled prerequisite");
                resolution.enabled.insert(required);
            }
        }
    }

    tracing::debug!(
        enabled = resolution.enabled.len(),
        disabled = resolution.disabled.len(),
        "resolved classes"
    );
    Ok(resolution)
}

/// Shared partition logic for both catalogs.
fn resolve_catalog(
    names: Vec<String>,
    overrides: &BTreeMap<String, bool>,
    enabled_by_default: bool,
    kind: CatalogKind,
) -> Result<Resolution> {
    // Every override must name something in the catalog; the first unknown
    // name aborts the whole resolution.
    for name in overrides.keys() {
        if !names.contains(name) {
            return Err(match kind {
                CatalogKind::Components => FeatconfError::UnknownComponent {
                    name: name.clone(),
                },
                CatalogKind::Classes => FeatconfError::UnknownClass {
                    name: name.clone(),
                },
            });
        }
    }

    let mut enabled = BTreeSet::new();
    let mut disabled = BTreeSet::new();
    for name in names {
        let state = overrides.get(&name).copied().unwrap_or(enabled_by_default);
        if state {
            enabled.insert(name);
        } else {
            disabled.insert(name);
        }
    }

    Ok(Resolution {
        enabled,
        disabled,
    })
}
