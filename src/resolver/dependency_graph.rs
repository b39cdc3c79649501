//! Dependency graph over class names.
//!
//! Built once from the resolved catalog's prerequisite edges, then queried
//! for transitive closures during resolution. The graph is directed: an edge
//! `A -> B` means `A` requires `B`, so enabling `A` must pull `B` in.
//!
//! Cycle handling is an explicit contract: the closure traversal marks nodes
//! as in-progress and revisiting one raises
//! [`FeatconfError::CircularDependency`] with the offending chain, instead of
//! recursing until the stack is exhausted. A cyclic prerequisite table is a
//! broken catalog and fails fast like any other integrity error.

use std::collections::{BTreeSet, HashMap};

use petgraph::graph::{DiGraph, NodeIndex};

use crate::catalog::ClassCatalog;
use crate::core::{FeatconfError, Result};

/// Color states for cycle-aware DFS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// Node has not been visited.
    White,
    /// Node is currently being visited (in the DFS stack).
    Gray,
    /// Node has been fully visited.
    Black,
}

/// Directed graph of class prerequisites.
///
/// Every declared class is a node even if it has no edges, so closure queries
/// over the whole catalog never miss isolated classes.
pub struct DependencyGraph {
    /// The underlying directed graph; node weights are class names.
    graph: DiGraph<String, ()>,
    /// Map from class name to its graph index.
    node_map: HashMap<String, NodeIndex>,
}

impl DependencyGraph {
    /// Create a new empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: DiGraph::new(),
            node_map: HashMap::new(),
        }
    }

    /// Build the graph from a resolved catalog: one node per class, one edge
    /// per declared prerequisite.
    ///
    /// The catalog has already validated that every edge target is a declared
    /// class, so this cannot fail; cycles are only detectable by traversal
    /// and surface from [`closure_of`](Self::closure_of) or
    /// [`detect_cycles`](Self::detect_cycles).
    #[must_use]
    pub fn from_catalog(catalog: &ClassCatalog) -> Self {
        let mut graph = Self::new();
        for (class, deps) in catalog.dependency_edges() {
            graph.ensure_node(class);
            for dep in deps {
                graph.add_dependency(class, dep);
            }
        }
        tracing::debug!(
            classes = graph.node_count(),
            edges = graph.edge_count(),
            "built class dependency graph"
        );
        graph
    }

    /// Add a class node if it doesn't already exist, returning its index.
    fn ensure_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&index) = self.node_map.get(name) {
            index
        } else {
            let index = self.graph.add_node(name.to_string());
            self.node_map.insert(name.to_string(), index);
            index
        }
    }

    /// Record that `class` requires `prerequisite`.
    pub fn add_dependency(&mut self, class: &str, prerequisite: &str) {
        let from = self.ensure_node(class);
        let to = self.ensure_node(prerequisite);
        // Duplicate declarations collapse to one edge.
        if !self.graph.contains_edge(from, to) {
            self.graph.add_edge(from, to, ());
        }
    }

    /// The full transitive set of prerequisites reachable from `class`,
    /// including `class` itself.
    ///
    /// Each node is added to the accumulator only after all of its own
    /// prerequisites have been added, and membership is by name, so
    /// diamond-shaped graphs resolve each shared prerequisite once and the
    /// traversal terminates.
    ///
    /// # Errors
    ///
    /// - [`FeatconfError::UnknownClass`] if `class` is not a node.
    /// - [`FeatconfError::CircularDependency`] if the traversal re-enters a
    ///   node still in progress, with the chain that closed the cycle.
    pub fn closure_of(&self, class: &str) -> Result<BTreeSet<String>> {
        let &start = self.node_map.get(class).ok_or_else(|| FeatconfError::UnknownClass {
            name: class.to_string(),
        })?;

        let mut colors: HashMap<NodeIndex, Color> = HashMap::new();
        let mut path: Vec<NodeIndex> = Vec::new();
        let mut closure = BTreeSet::new();
        self.visit(start, &mut colors, &mut path, &mut closure)?;
        Ok(closure)
    }

    /// Post-order DFS: prerequisites first, then the node itself.
    fn visit(
        &self,
        node: NodeIndex,
        colors: &mut HashMap<NodeIndex, Color>,
        path: &mut Vec<NodeIndex>,
        closure: &mut BTreeSet<String>,
    ) -> Result<()> {
        colors.insert(node, Color::Gray);
        path.push(node);

        for neighbor in self.graph.neighbors(node) {
            match colors.get(&neighbor) {
                Some(Color::Gray) => {
                    return Err(FeatconfError::CircularDependency {
                        chain: self.cycle_chain(path, neighbor),
                    });
                }
                Some(Color::Black) => {}
                _ => self.visit(neighbor, colors, path, closure)?,
            }
        }

        path.pop();
        colors.insert(node, Color::Black);
        closure.insert(self.graph[node].clone());
        Ok(())
    }

    /// Format the cycle closed by stepping from the end of `path` back to
    /// `target`, e.g. `A -> B -> C -> A`.
    fn cycle_chain(&self, path: &[NodeIndex], target: NodeIndex) -> String {
        let start = path.iter().position(|&n| n == target).unwrap_or(0);
        let mut names: Vec<&str> =
            path[start..].iter().map(|&n| self.graph[n].as_str()).collect();
        names.push(self.graph[target].as_str());
        names.join(" -> ")
    }

    /// Verify the whole graph is acyclic.
    ///
    /// # Errors
    ///
    /// [`FeatconfError::CircularDependency`] naming the first cycle found.
    pub fn detect_cycles(&self) -> Result<()> {
        let mut colors: HashMap<NodeIndex, Color> = HashMap::new();
        let mut path: Vec<NodeIndex> = Vec::new();
        for node in self.graph.node_indices() {
            if !matches!(colors.get(&node), Some(Color::Black)) {
                // Reuse the closure visitor; the accumulated set is discarded.
                let mut scratch = BTreeSet::new();
                self.visit(node, &mut colors, &mut path, &mut scratch)?;
            }
        }
        Ok(())
    }

    /// Direct prerequisites of `class`. Empty for unknown names.
    #[must_use]
    pub fn direct_deps_of(&self, class: &str) -> Vec<String> {
        self.node_map.get(class).map_or_else(Vec::new, |&idx| {
            self.graph.neighbors(idx).map(|n| self.graph[n].clone()).collect()
        })
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Total number of class nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Total number of prerequisite edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
