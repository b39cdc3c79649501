//! featconf CLI entry point
//!
//! Parses command-line arguments, initializes logging, and runs the selected
//! command. Fatal configuration errors (unknown names, broken catalog,
//! dependency cycles) terminate with the distinct exit code 255 so build
//! wrappers can stop instead of guessing intent; everything else exits 1.

use clap::Parser;
use colored::Colorize;
use featconf::cli::Cli;
use featconf::core::FeatconfError;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_directive())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = cli.execute() {
        eprintln!("{} {err:#}", "error:".red().bold());
        let code = err.downcast_ref::<FeatconfError>().map_or(1, FeatconfError::exit_code);
        std::process::exit(code);
    }
}
