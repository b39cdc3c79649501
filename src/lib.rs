//! featconf - build-time feature configuration resolver
//!
//! A tool for selectively enabling or disabling a modular library's optional
//! feature units (components and classes) before a build, while automatically
//! keeping every enabled feature's prerequisites enabled even when the user
//! tried to disable them.
//!
//! # Architecture Overview
//!
//! featconf follows a manifest/override model:
//! - `featconf.toml` declares the catalog: component paths, class ownership,
//!   and class prerequisites
//! - `custom.toml` carries the user's enable/disable overrides and defaults
//! - `featconf resolve` computes the final enabled/disabled partitions that
//!   downstream build tooling treats as the sole authority
//!
//! The resolution engine is composed bottom-up from four pieces:
//!
//! 1. [`hierarchy::ComponentHierarchy`] - parses slash-delimited path
//!    declarations into component names and parent/child relations. Leaf
//!    dependency of everything else.
//! 2. [`catalog::ClassCatalog`] - maps each class to exactly one owning
//!    component, validated against the hierarchy at construction.
//! 3. [`resolver::DependencyGraph`] - directed graph of class prerequisites
//!    with transitive-closure queries and explicit cycle detection.
//! 4. [`resolver::resolve_components`] / [`resolver::resolve_classes`] -
//!    validate an override map and compute the enabled/disabled partition,
//!    propagating dependency closures for classes.
//!
//! Catalog data is immutable once constructed; override maps and resolution
//! results are values local to one resolution call. Everything is
//! synchronous and in-memory — the engine does no I/O beyond loading the two
//! TOML files at startup.
//!
//! # Core Modules
//!
//! - [`cli`] - command-line interface (`configure`, `resolve`, `list`)
//! - [`config`] - user override file loading and generation
//! - [`core`] - error types and exit-code policy
//! - [`hierarchy`] - component hierarchy derivation and queries
//! - [`catalog`] - class catalog resolution
//! - [`manifest`] - declarative catalog manifest parsing
//! - [`resolver`] - dependency graph and override resolution
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use featconf::manifest::Manifest;
//! use featconf::resolver::{resolve_classes, resolve_components};
//!
//! let manifest: Manifest = toml::from_str(r#"
//!     components = ["core/math/geometry", "scene/physics"]
//!
//!     [classes]
//!     PolyNode2D = "geometry"
//!     PolyShape2D = "scene"
//!     PolyCollisionShape2D = "physics"
//!
//!     [dependencies]
//!     PolyShape2D = "PolyNode2D"
//!     PolyCollisionShape2D = ["PolyShape2D", "PolyNode2D"]
//! "#).unwrap();
//! let catalog = manifest.resolve().unwrap();
//!
//! // Enable one class against an otherwise-disabled catalog; its whole
//! // prerequisite closure comes with it.
//! let overrides = BTreeMap::from([("PolyCollisionShape2D".to_string(), true)]);
//! let classes = resolve_classes(&catalog.classes, &catalog.graph, &overrides, false).unwrap();
//! assert!(classes.is_enabled("PolyNode2D"));
//!
//! let components =
//!     resolve_components(&catalog.hierarchy, &BTreeMap::new(), true).unwrap();
//! assert_eq!(components.disabled.len(), 0);
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod hierarchy;
pub mod manifest;
pub mod resolver;
