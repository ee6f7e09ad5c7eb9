//! Generate-catalog command - write a random sample catalog

use crate::cli::output::{self, colors, format_count};
use crate::cli::OutputFormat;
use crate::core::catalog::{save_catalog, SampleCatalogBuilder};
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments for the generate-catalog command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Number of shirts (defaults to the configured sample size)
    #[arg(long, short = 'n')]
    pub count: Option<usize>,

    /// RNG seed (defaults to the configured seed)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file (defaults to the XDG data directory)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Generate-catalog command output
#[derive(Debug, Serialize)]
pub struct GenerateOutput {
    pub path: String,
    pub shirts: usize,
    pub seed: u64,
}

/// Execute the generate-catalog command
pub fn execute(
    args: GenerateArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let count = args.count.unwrap_or(config.catalog.sample_size);
    let seed = args.seed.unwrap_or(config.catalog.seed);
    let path = match args.output {
        Some(path) => path,
        None => XdgDirs::new().catalog_file(),
    };

    let shirts = SampleCatalogBuilder::new(count, seed).build();
    save_catalog(&path, &shirts)?;

    let result = GenerateOutput {
        path: path.display().to_string(),
        shirts: shirts.len(),
        seed,
    };

    match format {
        OutputFormat::Human => {
            output::print_success(&format!(
                "Wrote {} shirts (seed {}) to {}",
                format_count(result.shirts),
                result.seed,
                colors::file_path(&result.path)
            ));
        }
        OutputFormat::Json => output::print_json(&result)?,
    }

    Ok(())
}
