//! Core domain logic (protocol-agnostic)
//!
//! This module contains all search logic, independent of how options
//! arrive or how results are presented.
//!
//! # Architecture
//!
//! - **config**: Configuration loading (TOML + environment)
//! - **error**: Error types and Result alias
//! - **types**: Color, Size and Shirt
//! - **xdg**: XDG directory handling
//! - **catalog**: Catalog files and sample generation
//! - **search**: Faceted filter-and-count engine
//! - **services**: Unified service container

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod services;
pub mod types;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use error::{Result, ShirtSearchError};
pub use services::Services;
