//! Dependency resolution: the class prerequisite graph and the override
//! resolution pipeline.
//!
//! - [`DependencyGraph`] — directed graph over class names with transitive
//!   closure queries and explicit cycle detection.
//! - [`resolve_components`] / [`resolve_classes`] — turn an override map plus
//!   a default state into a complete enabled/disabled partition, with
//!   prerequisite propagation for classes.

pub mod dependency_graph;
pub mod resolution;

pub use dependency_graph::DependencyGraph;
pub use resolution::{Resolution, resolve_classes, resolve_components};
