//! Config command - show current configuration

use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// Also show resolved XDG paths
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub catalog: CatalogSection,
    pub search: SearchSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<PathsSection>,
}

#[derive(Debug, Serialize)]
pub struct CatalogSection {
    /// Catalog file, or None when the sample catalog is used
    pub path: Option<String>,
    pub sample_size: usize,
    pub seed: u64,
}

#[derive(Debug, Serialize)]
pub struct SearchSection {
    pub max_display: usize,
}

#[derive(Debug, Serialize)]
pub struct PathsSection {
    pub config_file: String,
    pub catalog_file: String,
}

/// Collect the effective configuration
pub fn build_response(args: &ConfigArgs, config: &Config) -> ConfigResponse {
    let paths = args.all.then(|| {
        let xdg = XdgDirs::new();
        PathsSection {
            config_file: xdg.config_file().display().to_string(),
            catalog_file: xdg.catalog_file().display().to_string(),
        }
    });

    ConfigResponse {
        catalog: CatalogSection {
            path: config
                .catalog
                .path
                .as_ref()
                .map(|p| p.display().to_string()),
            sample_size: config.catalog.sample_size,
            seed: config.catalog.seed,
        },
        search: SearchSection {
            max_display: config.search.max_display,
        },
        paths,
    }
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = build_response(&args, config);

    match format {
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  catalog:");
            match &response.catalog.path {
                Some(path) => println!("    path: {path}"),
                None => println!("    path: (sample)"),
            }
            println!("    sample_size: {}", response.catalog.sample_size);
            println!("    seed: {}", response.catalog.seed);
            println!("  search:");
            println!("    max_display: {}", response.search.max_display);
            if let Some(paths) = &response.paths {
                println!("  paths:");
                println!("    config_file: {}", paths.config_file);
                println!("    catalog_file: {}", paths.catalog_file);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
