//! XDG Base Directory Support
//!
//! Resolves where shirt-search looks for its config file and keeps its
//! default catalog, following the XDG Base Directory specification.

use std::env;
use std::fs;
use std::path::PathBuf;

const APP_DIR: &str = "shirt-search";

/// XDG directory structure for shirt-search
#[derive(Debug, Clone)]
pub struct XdgDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl XdgDirs {
    /// Create new XDG directory structure with proper resolution order
    ///
    /// Priority order (highest to lowest):
    /// 1. Explicit SHIRT_SEARCH_* env vars
    /// 2. XDG_* environment variables
    /// 3. XDG defaults (~/.config, ~/.local/share)
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve("SHIRT_SEARCH_CONFIG_DIR", "XDG_CONFIG_HOME", &[".config"]),
            data_dir: Self::resolve(
                "SHIRT_SEARCH_DATA_DIR",
                "XDG_DATA_HOME",
                &[".local", "share"],
            ),
        }
    }

    fn resolve(app_var: &str, xdg_var: &str, default: &[&str]) -> PathBuf {
        if let Ok(dir) = env::var(app_var) {
            return PathBuf::from(dir);
        }

        if let Ok(xdg) = env::var(xdg_var) {
            return PathBuf::from(xdg).join(APP_DIR);
        }

        let mut dir = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        for part in default {
            dir.push(part);
        }
        dir.join(APP_DIR)
    }

    /// Get config file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    /// Default location of a generated catalog
    pub fn catalog_file(&self) -> PathBuf {
        self.data_dir.join("catalog.json")
    }

    /// Create the XDG directories if they don't exist
    pub fn ensure_dirs_exist(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.config_dir)?;
        fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    /// Log the resolved XDG paths
    pub fn log_paths(&self) {
        tracing::debug!("XDG directories resolved:");
        tracing::debug!("  Config: {:?}", self.config_dir);
        tracing::debug!("  Data: {:?}", self.data_dir);
        tracing::debug!("  Config file: {:?}", self.config_file());
        tracing::debug!("  Catalog file: {:?}", self.catalog_file());
    }
}

impl Default for XdgDirs {
    fn default() -> Self {
        Self::new()
    }
}
