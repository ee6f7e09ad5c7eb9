//! Configuration management for shirt search.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with sensible defaults for all settings.

use crate::core::error::{Result, ShirtSearchError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// Catalog configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// JSON catalog file; when unset a sample catalog is generated
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Number of shirts in the generated sample catalog
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,

    /// RNG seed for the generated sample catalog
    #[serde(default = "default_seed")]
    pub seed: u64,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Maximum shirts listed in human-readable output
    #[serde(default = "default_max_display")]
    pub max_display: usize,
}

// Default value functions
fn default_sample_size() -> usize {
    50_000
}

fn default_seed() -> u64 {
    42
}

fn default_max_display() -> usize {
    20
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            sample_size: default_sample_size(),
            seed: default_seed(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_display: default_max_display(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ShirtSearchError::ConfigError(format!("Failed to read config file: {e}"))
        })?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. SHIRT_SEARCH_CONFIG env var
    /// 2. XDG config file (~/.config/shirt-search/config.toml)
    /// 3. ./shirt-search.toml
    /// 4. Defaults
    ///
    /// When no catalog path is configured and a catalog exists in the XDG
    /// data directory, that catalog is used.
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("SHIRT_SEARCH_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("shirt-search.toml").exists() {
                Self::from_file("shirt-search.toml")?
            } else {
                Self::default()
            }
        };

        config.merge_env();

        if config.catalog.path.is_none() && xdg.catalog_file().exists() {
            config.catalog.path = Some(xdg.catalog_file());
        }

        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(path) = env::var("SHIRT_SEARCH_CATALOG") {
            if !path.is_empty() {
                self.catalog.path = Some(PathBuf::from(path));
            }
        }
        if let Ok(sample_size) = env::var("SHIRT_SEARCH_SAMPLE_SIZE") {
            if let Ok(size) = sample_size.parse() {
                self.catalog.sample_size = size;
            }
        }
        if let Ok(seed) = env::var("SHIRT_SEARCH_SEED") {
            if let Ok(s) = seed.parse() {
                self.catalog.seed = s;
            }
        }
        if let Ok(max_display) = env::var("SHIRT_SEARCH_MAX_DISPLAY") {
            if let Ok(max) = max_display.parse() {
                self.search.max_display = max;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.max_display == 0 {
            return Err(ShirtSearchError::ConfigError(
                "Max display must be non-zero".to_string(),
            ));
        }

        if let Some(path) = &self.catalog.path {
            if path.as_os_str().is_empty() {
                return Err(ShirtSearchError::ConfigError(
                    "Catalog path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Log configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        match &self.catalog.path {
            Some(path) => tracing::info!("  Catalog: {:?}", path),
            None => tracing::info!(
                "  Catalog: sample ({} shirts, seed {})",
                self.catalog.sample_size,
                self.catalog.seed
            ),
        }
        tracing::info!("  Max display: {}", self.search.max_display);
    }
}
