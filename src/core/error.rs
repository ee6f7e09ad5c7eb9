//! Error types and error handling for shirt search.
//!
//! This module defines the error types used throughout the
//! application. The search itself never fails; errors only arise at
//! the boundaries (parsing caller input, loading catalogs and config).

use thiserror::Error;

/// Result type alias for shirt search operations
pub type Result<T> = std::result::Result<T, ShirtSearchError>;

/// Main error type for shirt search
#[derive(Error, Debug)]
pub enum ShirtSearchError {
    #[error("Unknown {facet} '{value}'")]
    UnknownVariant {
        facet: &'static str,
        value: String,
        valid: Vec<String>,
        suggestion: Option<String>,
    },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl ShirtSearchError {
    /// Get user-friendly error message
    ///
    /// For unknown variants this includes the accepted values and a
    /// "did you mean" hint when one is available.
    pub fn message(&self) -> String {
        match self {
            ShirtSearchError::UnknownVariant {
                valid, suggestion, ..
            } => {
                let mut msg = format!("{self}. Valid values: {}", valid.join(", "));
                if let Some(s) = suggestion {
                    msg.push_str(&format!(". Did you mean '{s}'?"));
                }
                msg
            }
            _ => self.to_string(),
        }
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(self, ShirtSearchError::CatalogNotFound(_))
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            ShirtSearchError::UnknownVariant { .. }
                | ShirtSearchError::InvalidCatalog(_)
                | ShirtSearchError::ConfigError(_)
        )
    }
}
