//! JSON catalog files.
//!
//! A catalog file is a JSON array of shirts:
//!
//! ```json
//! [{"id": "…", "name": "Red - Small", "size": "small", "color": "red"}]
//! ```

use crate::core::error::{Result, ShirtSearchError};
use crate::core::types::Shirt;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Load and validate a catalog from a JSON file
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Shirt>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ShirtSearchError::CatalogNotFound(
            path.display().to_string(),
        ));
    }

    let contents = fs::read_to_string(path)?;
    let shirts = parse_catalog(&contents)?;

    tracing::info!("Loaded {} shirts from {}", shirts.len(), path.display());
    Ok(shirts)
}

/// Parse and validate a catalog from JSON text
pub fn parse_catalog(json: &str) -> Result<Vec<Shirt>> {
    let shirts: Vec<Shirt> = serde_json::from_str(json)?;
    validate_catalog(&shirts)?;
    Ok(shirts)
}

/// Check that every shirt id is unique
pub fn validate_catalog(shirts: &[Shirt]) -> Result<()> {
    let mut seen = HashSet::with_capacity(shirts.len());
    for (index, shirt) in shirts.iter().enumerate() {
        if !seen.insert(shirt.id()) {
            return Err(ShirtSearchError::InvalidCatalog(format!(
                "duplicate shirt id {} at position {index}",
                shirt.id()
            )));
        }
    }
    Ok(())
}

/// Write a catalog as pretty-printed JSON
pub fn save_catalog(path: impl AsRef<Path>, shirts: &[Shirt]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(shirts)?;
    fs::write(path, json)?;

    tracing::info!("Wrote {} shirts to {}", shirts.len(), path.display());
    Ok(())
}
