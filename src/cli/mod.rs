//! CLI adapter for shirt search
//!
//! Turns command-line flags into search options and prints results.
//! This module depends on `core/`; `core/` knows nothing about it.
//!
//! # Architecture
//!
//! ```text
//!   +------------------+
//!   |     core/        |
//!   |  (domain logic)  |
//!   +--------+---------+
//!            |
//!            v
//!   +------------------+
//!   |      cli/        |
//!   | (clap adapter)   |
//!   +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Shirt Search - faceted color/size search
///
/// Filter a shirt catalog by color and size and see how many matching
/// shirts carry each color and each size.
#[derive(Parser, Debug)]
#[command(name = "shirt-search")]
#[command(version)]
#[command(about = "Faceted color/size search over a shirt catalog", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Catalog file to search (overrides configuration)
    #[arg(long, global = true, env = "SHIRT_SEARCH_CATALOG")]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the catalog by color and size
    Search(commands::SearchArgs),

    /// List every known color and size
    #[command(name = "list-variants")]
    ListVariants(commands::VariantsArgs),

    /// Write a random sample catalog as JSON
    #[command(name = "generate-catalog")]
    GenerateCatalog(commands::GenerateArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  shirt-search completions bash > ~/.local/share/bash-completion/completions/shirt-search
    ///   zsh:   shirt-search completions zsh > ~/.zfunc/_shirt-search
    ///   fish:  shirt-search completions fish > ~/.config/fish/completions/shirt-search.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Commands that don't need configuration or a catalog
    match cli.command {
        Commands::Completions(args) => return commands::completions::execute(args),
        Commands::ListVariants(args) => return commands::variants::execute(args, cli.format),
        _ => {}
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let mut config = Config::load_with_xdg(&xdg)?;
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    config.log_config();

    match cli.command {
        Commands::Search(args) => {
            let services = Arc::new(Services::new(config)?);
            commands::search::execute(args, &services, cli.format)
        }
        Commands::GenerateCatalog(args) => commands::generate::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) | Commands::ListVariants(_) => unreachable!(), // Handled above
    }
}
