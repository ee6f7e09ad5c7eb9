//! Shirt Search - faceted filtering over an in-memory shirt catalog
//!
//! Given optional sets of colors and sizes, returns the matching shirts
//! plus, for every color and every size, how many matching shirts carry
//! that value.
//!
//! # Architecture
//!
//! - **core**: Domain logic (protocol-agnostic)
//!   - types (Color, Size, Shirt)
//!   - search (SearchEngine, SearchOptions, SearchResults)
//!   - catalog (JSON files, sample generation)
//!   - config, error, xdg, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use shirt_search::{Color, SearchEngine, SearchOptions, Shirt, Size};
//!
//! let engine = SearchEngine::new(vec![
//!     Shirt::labelled(Size::Small, Color::Red),
//!     Shirt::labelled(Size::Medium, Color::Blue),
//! ]);
//!
//! let results = engine.search(&SearchOptions::new().with_colors([Color::Red]));
//! assert_eq!(results.total(), 1);
//! assert_eq!(results.size_count(Size::Small), 1);
//! assert_eq!(results.color_count(Color::Blue), 0);
//! ```

// Core domain logic (protocol-agnostic)
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use crate::core::config::Config;
pub use crate::core::error::{Result, ShirtSearchError};
pub use crate::core::search::{ColorCount, SearchEngine, SearchOptions, SearchResults, SizeCount};
pub use crate::core::services::Services;
pub use crate::core::types::{Color, Shirt, Size, Variant};
