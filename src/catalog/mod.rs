//! Class catalog: feature classes and the components that own them.
//!
//! Classes arrive as declarative records ([`ClassDecl`]) straight out of the
//! manifest and are resolved once into an immutable [`ClassCatalog`]. The
//! declarative stage is plain data; the resolved stage has validated every
//! owning component against the derived component set and every prerequisite
//! against the declared class names. The declarative records are never
//! mutated in place — resolution is a separate construction step.
//!
//! Catalog-integrity violations (a class owned by a component that does not
//! exist, a prerequisite that is not a declared class) are fatal at
//! construction. They indicate a broken static catalog, not bad user input,
//! so startup aborts before any resolution is attempted.

use std::collections::HashMap;

use crate::core::{FeatconfError, Result};
use crate::hierarchy::ComponentHierarchy;

/// Declarative class record, as parsed from the manifest.
///
/// `deps` is already normalized: the manifest accepts a single-string
/// shorthand for one prerequisite and expands it to a one-element list before
/// building these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Class name, unique across the catalog.
    pub name: String,
    /// Owning component. Exactly one; must exist in the component set.
    pub component: String,
    /// Direct prerequisite classes.
    pub deps: Vec<String>,
}

/// A resolved class entry.
#[derive(Debug, Clone)]
struct ClassEntry {
    name: String,
    component: String,
    deps: Vec<String>,
}

/// Resolved, immutable class catalog.
///
/// Built once at startup via [`ClassCatalog::from_decls`]; every query after
/// that is read-only.
#[derive(Debug, Clone)]
pub struct ClassCatalog {
    /// Entries in declaration order.
    entries: Vec<ClassEntry>,
    /// Name → index into `entries`.
    index: HashMap<String, usize>,
}

impl ClassCatalog {
    /// Resolve declarative records against the component hierarchy.
    ///
    /// # Errors
    ///
    /// - [`FeatconfError::UndefinedOwningComponent`] if a class names an
    ///   owning component absent from the derived component set.
    /// - [`FeatconfError::UndefinedDependency`] if a prerequisite is not a
    ///   declared class.
    ///
    /// Both are catalog-integrity errors: the caller is expected to abort
    /// process startup, not recover.
    pub fn from_decls(decls: Vec<ClassDecl>, hierarchy: &ComponentHierarchy) -> Result<Self> {
        let mut index = HashMap::with_capacity(decls.len());
        for (pos, decl) in decls.iter().enumerate() {
            if !hierarchy.contains(&decl.component) {
                return Err(FeatconfError::UndefinedOwningComponent {
                    class: decl.name.clone(),
                    component: decl.component.clone(),
                });
            }
            index.insert(decl.name.clone(), pos);
        }

        // Edge targets can only be checked once all names are collected.
        for decl in &decls {
            for dep in &decl.deps {
                if !index.contains_key(dep) {
                    return Err(FeatconfError::UndefinedDependency {
                        class: decl.name.clone(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        let entries = decls
            .into_iter()
            .map(|decl| ClassEntry {
                name: decl.name,
                component: decl.component,
                deps: decl.deps,
            })
            .collect();
        Ok(Self {
            entries,
            index,
        })
    }

    /// Whether `name` is a declared class.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All class names, in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    /// Number of declared classes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The owning component of `class`, if declared.
    #[must_use]
    pub fn component_of(&self, class: &str) -> Option<&str> {
        self.entry(class).map(|entry| entry.component.as_str())
    }

    /// Direct prerequisites of `class`, as declared.
    #[must_use]
    pub fn deps_of(&self, class: &str) -> &[String] {
        self.entry(class).map_or(&[], |entry| entry.deps.as_slice())
    }

    /// Iterate `(class, direct prerequisites)` pairs in declaration order.
    pub fn dependency_edges(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|entry| (entry.name.as_str(), entry.deps.as_slice()))
    }

    /// The full component chain touched by enabling `class`: the owning
    /// component's ancestors root-first, then the owning component itself.
    ///
    /// # Errors
    ///
    /// [`FeatconfError::UnknownClass`] if `class` is not declared.
    pub fn component_chain_of(
        &self,
        class: &str,
        hierarchy: &ComponentHierarchy,
    ) -> Result<Vec<String>> {
        let entry = self.entry(class).ok_or_else(|| FeatconfError::UnknownClass {
            name: class.to_string(),
        })?;
        let mut chain = hierarchy.parents_of(&entry.component);
        chain.push(entry.component.clone());
        Ok(chain)
    }

    /// All classes owned directly by `component`, in declaration order.
    ///
    /// Not transitive: classes owned by child components are not included.
    #[must_use]
    pub fn classes_of(&self, component: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.component == component)
            .map(|entry| entry.name.clone())
            .collect()
    }

    fn entry(&self, name: &str) -> Option<&ClassEntry> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }
}
