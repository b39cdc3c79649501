//! Component hierarchy derived from slash-delimited path declarations.
//!
//! Components are never declared directly. The manifest carries a flat list
//! of paths such as `"core/math/geometry"` or `"scene/physics"`, and every
//! segment appearing in any path is itself a component. For a path `a/b/c`,
//! `b` is a child of `a` and the parent of `c`; `a` and `c` are transitive
//! ancestor/descendant of each other through `b`.
//!
//! The paths are parsed exactly once at construction into an interned-name
//! arena plus per-path segment indices and a typed parent/child adjacency.
//! Queries are index lookups and slice walks — no string re-splitting on the
//! hot path, and a component appearing under several roots holds multiple
//! parents as an explicit relation rather than an emergent string-matching
//! side effect.
//!
//! # Ordering contract
//!
//! [`ComponentHierarchy::children_of`] and [`ComponentHierarchy::parents_of`]
//! surface one chain *per declared path*, in forward path order (nearest
//! relative first for children, root first for parents), concatenated in
//! declaration order and **not** deduplicated across paths. Callers that need
//! a set must dedupe themselves; the per-path chains are the point — they
//! describe ancestry as declared, path by path.
//!
//! # Examples
//!
//! ```
//! use featconf::hierarchy::ComponentHierarchy;
//!
//! let hierarchy = ComponentHierarchy::parse(&["core/math/geometry", "scene/physics"]);
//!
//! assert_eq!(
//!     hierarchy.components(),
//!     vec!["core", "geometry", "math", "physics", "scene"]
//! );
//! assert_eq!(hierarchy.children_of("core"), vec!["math", "geometry"]);
//! assert_eq!(hierarchy.parents_of("geometry"), vec!["core", "math"]);
//! ```

use std::collections::HashMap;

/// Parsed component hierarchy.
///
/// Immutable once constructed; all queries are read-only. Constructed once at
/// startup from the manifest's declared paths.
#[derive(Debug, Clone)]
pub struct ComponentHierarchy {
    /// Interned component names, in first-appearance order.
    names: Vec<String>,
    /// Name → index into `names`.
    index: HashMap<String, usize>,
    /// Declared paths as segment-index sequences, in declaration order.
    paths: Vec<Vec<usize>>,
    /// Direct parents per component, deduplicated, in first-appearance order.
    parents: Vec<Vec<usize>>,
    /// Direct children per component, deduplicated, in first-appearance order.
    children: Vec<Vec<usize>>,
}

impl ComponentHierarchy {
    /// Parse a list of slash-delimited paths into a hierarchy.
    ///
    /// Empty segments (from leading/trailing/doubled slashes) are skipped;
    /// the manifest layer rejects such paths before they get here, this is
    /// just the engine refusing to invent a component named `""`.
    pub fn parse<S: AsRef<str>>(declared: &[S]) -> Self {
        let mut hierarchy = Self {
            names: Vec::new(),
            index: HashMap::new(),
            paths: Vec::new(),
            parents: Vec::new(),
            children: Vec::new(),
        };

        for path in declared {
            let segments: Vec<usize> = path
                .as_ref()
                .split('/')
                .filter(|s| !s.is_empty())
                .map(|s| hierarchy.intern(s))
                .collect();
            if segments.is_empty() {
                continue;
            }
            for pair in segments.windows(2) {
                let (parent, child) = (pair[0], pair[1]);
                if !hierarchy.children[parent].contains(&child) {
                    hierarchy.children[parent].push(child);
                }
                if !hierarchy.parents[child].contains(&parent) {
                    hierarchy.parents[child].push(parent);
                }
            }
            hierarchy.paths.push(segments);
        }

        tracing::debug!(
            components = hierarchy.names.len(),
            paths = hierarchy.paths.len(),
            "parsed component hierarchy"
        );
        hierarchy
    }

    fn intern(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            idx
        } else {
            let idx = self.names.len();
            self.names.push(name.to_string());
            self.index.insert(name.to_string(), idx);
            self.parents.push(Vec::new());
            self.children.push(Vec::new());
            idx
        }
    }

    /// All distinct component names across every declared path, sorted.
    ///
    /// Deterministic regardless of declaration order.
    #[must_use]
    pub fn components(&self) -> Vec<String> {
        let mut list = self.names.clone();
        list.sort();
        list
    }

    /// Whether `name` is a component in this hierarchy.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of distinct components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the hierarchy has no components at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// All descendants of `parent`, chain per declared path, nearest
    /// descendant first within each chain.
    ///
    /// For each path containing `parent`, the segments strictly after its
    /// last occurrence are collected in path order. Chains from different
    /// paths are concatenated without deduplication. Unknown names yield an
    /// empty list — absence is not an error for hierarchy queries.
    #[must_use]
    pub fn children_of(&self, parent: &str) -> Vec<String> {
        let Some(&target) = self.index.get(parent) else {
            return Vec::new();
        };
        let mut chain = Vec::new();
        for path in &self.paths {
            let Some(pos) = path.iter().rposition(|&seg| seg == target) else {
                continue;
            };
            chain.extend(path[pos + 1..].iter().map(|&seg| self.names[seg].clone()));
        }
        chain
    }

    /// All ancestors of `child`, chain per declared path, root first within
    /// each chain.
    ///
    /// Symmetric to [`children_of`](Self::children_of): for each path
    /// containing `child`, the segments strictly before its first occurrence
    /// are collected in path order, concatenated across paths without
    /// deduplication.
    #[must_use]
    pub fn parents_of(&self, child: &str) -> Vec<String> {
        let Some(&target) = self.index.get(child) else {
            return Vec::new();
        };
        let mut chain = Vec::new();
        for path in &self.paths {
            let Some(pos) = path.iter().position(|&seg| seg == target) else {
                continue;
            };
            chain.extend(path[..pos].iter().map(|&seg| self.names[seg].clone()));
        }
        chain
    }

    /// Direct parents of `child` as a deduplicated relation, in
    /// first-appearance order. A component declared under several roots has
    /// several parents.
    #[must_use]
    pub fn direct_parents_of(&self, child: &str) -> Vec<String> {
        self.adjacent(child, &self.parents)
    }

    /// Direct children of `parent` as a deduplicated relation, in
    /// first-appearance order.
    #[must_use]
    pub fn direct_children_of(&self, parent: &str) -> Vec<String> {
        self.adjacent(parent, &self.children)
    }

    /// Components with no parent in any declared path, in first-appearance
    /// order. Used for tree rendering.
    #[must_use]
    pub fn roots(&self) -> Vec<String> {
        (0..self.names.len())
            .filter(|&idx| self.parents[idx].is_empty())
            .map(|idx| self.names[idx].clone())
            .collect()
    }

    fn adjacent(&self, name: &str, relation: &[Vec<usize>]) -> Vec<String> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        relation[idx].iter().map(|&other| self.names[other].clone()).collect()
    }
}
