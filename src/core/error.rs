//! Error handling for featconf
//!
//! This module provides the error types used throughout the configuration
//! resolver. The error system is designed around two principles:
//! 1. **Strongly-typed errors** for precise handling in code
//! 2. **Fail-fast validation** — configuration resolution is a one-shot
//!    build-time operation where silent partial success would produce a
//!    miscompiled artifact, so validation errors surface immediately and are
//!    never wrapped, retried, or recovered from.
//!
//! # Error Categories
//!
//! - **Catalog integrity** (construction-time): [`FeatconfError::UndefinedOwningComponent`],
//!   [`FeatconfError::UndefinedDependency`], [`FeatconfError::DependencyForUndefinedClass`] —
//!   the static catalog itself is broken. Not user-recoverable; aborts before
//!   any resolution occurs.
//! - **Override validation** (request-time): [`FeatconfError::UnknownComponent`],
//!   [`FeatconfError::UnknownClass`] — the user's override file references a
//!   name absent from the catalog being resolved.
//! - **Dependency graph**: [`FeatconfError::CircularDependency`] — the class
//!   prerequisite table contains a cycle, reported with the offending chain
//!   instead of exhausting the call stack.
//! - **Manifest and config files**: [`FeatconfError::ManifestNotFound`],
//!   [`FeatconfError::ManifestParseError`], [`FeatconfError::ConfigParseError`].
//! - **Conversions**: [`std::io::Error`] → [`FeatconfError::IoError`],
//!   [`toml::de::Error`] → [`FeatconfError::TomlError`].
//!
//! # Exit Codes
//!
//! Fatal configuration errors carry a distinct exit code ([`EXIT_CONFIG_ERROR`],
//! 255) so that external build tooling can tell "the feature selection is
//! wrong, stop the build" apart from ordinary failures. See
//! [`FeatconfError::exit_code`].

use thiserror::Error;

/// Exit code for fatal configuration errors (unknown names, broken catalog,
/// dependency cycles). External tooling must stop the build rather than guess
/// intent when it sees this code.
pub const EXIT_CONFIG_ERROR: i32 = 255;

/// The main error type for featconf operations.
///
/// Each variant represents a specific failure mode and carries the context
/// needed to report it: the offending name, the class that declared it, or
/// the dependency chain that closed a cycle.
#[derive(Error, Debug)]
pub enum FeatconfError {
    /// An override map references a component that does not exist in the
    /// derived component set.
    #[error("requested to configure non-existing component `{name}`")]
    UnknownComponent {
        /// The unrecognized component name from the override file.
        name: String,
    },

    /// An override map references a class that does not exist in the catalog.
    #[error("requested to configure non-existing class `{name}`")]
    UnknownClass {
        /// The unrecognized class name from the override file.
        name: String,
    },

    /// A class declares an owning component that is not present in the
    /// component set derived from the declared paths.
    #[error("class `{class}` belongs to component `{component}`, which is not defined")]
    UndefinedOwningComponent {
        /// The class whose declaration is broken.
        class: String,
        /// The owning component name that could not be found.
        component: String,
    },

    /// A class lists a prerequisite that is not itself a declared class.
    #[error("class `{class}` depends on `{dependency}`, which is not a declared class")]
    UndefinedDependency {
        /// The dependent class.
        class: String,
        /// The missing prerequisite name.
        dependency: String,
    },

    /// The dependency table has an entry keyed by a class that was never
    /// declared in the catalog.
    #[error("dependency entry for `{name}`, which is not a declared class")]
    DependencyForUndefinedClass {
        /// The undeclared class name used as a dependency-table key.
        name: String,
    },

    /// The class prerequisite table contains a cycle.
    #[error("circular class dependency detected: {chain}")]
    CircularDependency {
        /// Human-readable chain, e.g. `A -> B -> A`.
        chain: String,
    },

    /// No manifest file was found at the expected location.
    #[error("manifest file not found: {path}")]
    ManifestNotFound {
        /// The path that was checked.
        path: String,
    },

    /// The manifest file exists but could not be parsed or failed validation.
    #[error("invalid manifest file {file}: {reason}")]
    ManifestParseError {
        /// Path of the offending manifest.
        file: String,
        /// What went wrong.
        reason: String,
    },

    /// The override configuration file exists but could not be parsed.
    #[error("invalid override file {file}: {reason}")]
    ConfigParseError {
        /// Path of the offending override file.
        file: String,
        /// What went wrong.
        reason: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error wrapper.
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error wrapper.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

impl FeatconfError {
    /// The process exit code this error should terminate the build
    /// configuration with.
    ///
    /// Naming and catalog-integrity errors use the distinct
    /// [`EXIT_CONFIG_ERROR`] signal; everything else (IO, syntax) uses the
    /// conventional 1.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownComponent { .. }
            | Self::UnknownClass { .. }
            | Self::UndefinedOwningComponent { .. }
            | Self::UndefinedDependency { .. }
            | Self::DependencyForUndefinedClass { .. }
            | Self::CircularDependency { .. } => EXIT_CONFIG_ERROR,
            _ => 1,
        }
    }
}

/// Result type alias for featconf operations.
pub type Result<T> = std::result::Result<T, FeatconfError>;
