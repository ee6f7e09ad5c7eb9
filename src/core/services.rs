//! Unified service container for shirt search
//!
//! Provides shared access to the configuration and the search engine.

use crate::core::catalog::{load_catalog, SampleCatalogBuilder};
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::SearchEngine;
use crate::core::types::Shirt;
use std::sync::Arc;

/// Unified services container
#[derive(Clone)]
pub struct Services {
    /// Search engine over the loaded catalog
    pub engine: Arc<SearchEngine>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl Services {
    /// Create services from configuration
    ///
    /// Loads the configured catalog file, or generates the sample catalog
    /// when no file is configured.
    pub fn new(config: Config) -> Result<Self> {
        let shirts = match &config.catalog.path {
            Some(path) => load_catalog(path)?,
            None => {
                tracing::info!(
                    "No catalog configured, generating {} sample shirts (seed {})",
                    config.catalog.sample_size,
                    config.catalog.seed
                );
                SampleCatalogBuilder::new(config.catalog.sample_size, config.catalog.seed).build()
            }
        };

        Ok(Self::with_catalog(config, shirts))
    }

    /// Create services over an explicit catalog
    pub fn with_catalog(config: Config, shirts: Vec<Shirt>) -> Self {
        Self {
            engine: Arc::new(SearchEngine::new(shirts)),
            config: Arc::new(config),
        }
    }
}
