//! Generate or update the `custom.toml` override file.
//!
//! Run once to get a file listing every component and class mapped to its
//! default state; run again after the catalog grows to pick up new names
//! while preserving everything already overridden.

use std::path::Path;

use clap::Args;
use colored::Colorize;

use crate::config::OverrideConfig;
use crate::core::Result;
use crate::manifest::ResolvedCatalog;

/// Command to generate or update the override file from the catalog.
#[derive(Args)]
pub struct ConfigureCommand {}

impl ConfigureCommand {
    /// Write (or update in place) the override file at `config_path`.
    ///
    /// Existing overrides keep their values; names the file doesn't mention
    /// yet are added with the current default state and announced. The file
    /// always ends up mentioning the full catalog, so a later catalog change
    /// is visible as a diff.
    pub fn execute(&self, catalog: &ResolvedCatalog, config_path: &Path) -> Result<()> {
        let existed = config_path.exists();
        let mut config = OverrideConfig::load_or_default(config_path)?;

        let components = catalog.hierarchy.components();
        let classes = catalog.classes.names();
        let added = config.sync_with_catalog(&components, &classes);
        for name in &added {
            println!("  {} {name}", "adding".green());
        }

        config.save(config_path)?;

        if existed {
            println!(
                "{} updated {} ({} new entries)",
                "✓".green(),
                config_path.display(),
                added.len()
            );
        } else {
            println!("{} generated {}", "✓".green(), config_path.display());
            println!(
                "  Edit it to disable components or classes, then run `featconf resolve`."
            );
        }
        Ok(())
    }
}
