//! Command-line interface for featconf.
//!
//! Each command is implemented as a separate module with its own argument
//! struct and execution logic:
//!
//! - `configure` - Generate or update the `custom.toml` override file
//! - `resolve` - Compute and print the enabled/disabled partitions
//! - `list` - Hierarchy and catalog queries
//!
//! # Usage Patterns
//!
//! ```bash
//! # 1. Generate an override file listing every component and class
//! featconf configure
//!
//! # 2. Edit custom.toml, flipping entries to false
//!
//! # 3. Resolve the final feature set for the build
//! featconf resolve
//! featconf resolve --format json
//!
//! # Inspect the catalog
//! featconf list
//! featconf list --closure-of PolyCollisionShape2D
//! featconf list --chain-of GoostGeometry2D
//! ```
//!
//! The manifest (`featconf.toml`) and override file (`custom.toml`) paths can
//! be overridden globally with `--manifest` and `--config`.

mod configure;
mod list;
mod resolve;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config;
use crate::manifest::{self, Manifest};

pub use configure::ConfigureCommand;
pub use list::ListCommand;
pub use resolve::ResolveCommand;

/// Top-level CLI parser.
#[derive(Parser)]
#[command(
    name = "featconf",
    version,
    about = "Build-time feature configuration resolver for modular libraries"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog manifest
    #[arg(long, global = true, default_value = manifest::DEFAULT_MANIFEST)]
    manifest: PathBuf,

    /// Path to the user override file
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG)]
    config: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate or update the override file from the catalog
    Configure(ConfigureCommand),
    /// Compute the enabled/disabled partitions for components and classes
    Resolve(ResolveCommand),
    /// Query the component hierarchy and class catalog
    List(ListCommand),
}

impl Cli {
    /// Default log filter directive derived from the verbosity flags.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "featconf=debug"
        } else {
            "featconf=warn"
        }
    }

    /// Load the manifest, resolve the catalog, and run the selected command.
    pub fn execute(self) -> Result<()> {
        let catalog = Manifest::load(&self.manifest)?.resolve()?;
        match self.command {
            Commands::Configure(cmd) => cmd.execute(&catalog, &self.config)?,
            Commands::Resolve(cmd) => cmd.execute(&catalog, &self.config)?,
            Commands::List(cmd) => cmd.execute(&catalog)?,
        }
        Ok(())
    }
}
