//! Vane CLI - documentation navigation config toolkit.
//!
//! Provides commands for:
//! - `check`: Validate a site configuration file
//! - `show`: Print the normalized configuration as JSON
//! - `nav`: Resolve sidebar groups and the active nav item for a route

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs, ShowArgs};
use output::Output;

/// Vane - documentation navigation config toolkit.
#[derive(Parser)]
#[command(name = "vane", version, about)]
struct Cli {
    /// Enable verbose output (show load warnings such as unknown keys).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a site configuration file.
    Check(CheckArgs),
    /// Print the normalized configuration as JSON.
    Show(ShowArgs),
    /// Resolve navigation for a route.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Show(args) => args.execute(),
        Commands::Nav(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
