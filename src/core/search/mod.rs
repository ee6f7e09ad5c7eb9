//! Search module for faceted color/size filtering.
//!
//! This module provides the search engine and the options it accepts.

mod engine;
mod options;

pub use engine::{ColorCount, SearchEngine, SearchResults, SizeCount};
pub use options::SearchOptions;
