//! Compute and print the final enabled/disabled partitions.
//!
//! This is the command a build wrapper invokes before handing the feature
//! set to the actual build tool: components are resolved first, then classes
//! (with dependency propagation), and the two partitions are the sole
//! authority for what is active in the build.

use std::path::Path;

use clap::{Args, ValueEnum};
use colored::Colorize;
use serde::Serialize;

use crate::config::OverrideConfig;
use crate::core::Result;
use crate::manifest::ResolvedCatalog;
use crate::resolver::{Resolution, resolve_classes, resolve_components};

/// Output format for resolution results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored text.
    Text,
    /// Machine-readable JSON for build tooling.
    Json,
}

/// Serialized shape of a full resolution run.
#[derive(Serialize)]
struct ResolveOutput {
    components: Resolution,
    classes: Resolution,
}

/// Command to resolve overrides into enabled/disabled partitions.
#[derive(Args)]
pub struct ResolveCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

impl ResolveCommand {
    /// Resolve both catalogs against the override file and print the result.
    ///
    /// # Errors
    ///
    /// Unknown override names and cyclic prerequisites abort with no partial
    /// output; the caller maps them to the fatal configuration exit code.
    pub fn execute(&self, catalog: &ResolvedCatalog, config_path: &Path) -> Result<()> {
        let config = OverrideConfig::load_or_default(config_path)?;

        let components = resolve_components(
            &catalog.hierarchy,
            &config.components,
            config.components_enabled_by_default,
        )?;
        let classes = resolve_classes(
            &catalog.classes,
            &catalog.graph,
            &config.classes,
            config.classes_enabled_by_default,
        )?;

        match self.format {
            OutputFormat::Text => {
                print_partition("Components", &components);
                print_partition("Classes", &classes);
            }
            OutputFormat::Json => {
                let output = ResolveOutput {
                    components,
                    classes,
                };
                println!("{}", serde_json::to_string_pretty(&output).expect("serializable"));
            }
        }
        Ok(())
    }
}

fn print_partition(label: &str, resolution: &Resolution) {
    let enabled: Vec<&str> = resolution.enabled.iter().map(String::as_str).collect();
    let disabled: Vec<&str> = resolution.disabled.iter().map(String::as_str).collect();
    println!(
        "{} {} ({}): {}",
        label.bold(),
        "enabled".green(),
        enabled.len(),
        enabled.join(", ")
    );
    println!(
        "{} {} ({}): {}",
        label.bold(),
        "disabled".red(),
        disabled.len(),
        disabled.join(", ")
    );
}
