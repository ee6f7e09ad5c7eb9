//! Faceted filter-and-count search over an in-memory catalog.
//!
//! The engine holds an immutable list of shirts. A search makes one pass
//! over it, keeping shirts whose color AND size are admitted by the
//! options, and counts colors and sizes over the matching shirts only.

use crate::core::search::options::{effective_set, SearchOptions};
use crate::core::types::{Color, Shirt, Size, Variant};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Number of matching shirts with a given color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCount {
    pub color: Color,
    pub count: usize,
}

/// Number of matching shirts with a given size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeCount {
    pub size: Size,
    pub count: usize,
}

/// Outcome of a search
///
/// `shirts` keeps catalog order. `color_counts` and `size_counts` hold one
/// entry per declared variant, in declaration order, zero included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResults {
    pub shirts: Vec<Shirt>,
    pub color_counts: Vec<ColorCount>,
    pub size_counts: Vec<SizeCount>,
}

impl SearchResults {
    /// Count for one color
    pub fn color_count(&self, color: Color) -> usize {
        self.color_counts
            .iter()
            .find(|c| c.color == color)
            .map_or(0, |c| c.count)
    }

    /// Count for one size
    pub fn size_count(&self, size: Size) -> usize {
        self.size_counts
            .iter()
            .find(|s| s.size == size)
            .map_or(0, |s| s.count)
    }

    /// Number of matching shirts
    pub fn total(&self) -> usize {
        self.shirts.len()
    }
}

/// Search engine over a fixed catalog
#[derive(Debug, Clone, Default)]
pub struct SearchEngine {
    shirts: Vec<Shirt>,
}

impl SearchEngine {
    /// Create an engine owning `shirts`; an empty catalog is allowed
    pub fn new(shirts: Vec<Shirt>) -> Self {
        tracing::debug!("Search engine created with {} shirts", shirts.len());
        Self { shirts }
    }

    /// The catalog, in insertion order
    pub fn shirts(&self) -> &[Shirt] {
        &self.shirts
    }

    pub fn len(&self) -> usize {
        self.shirts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shirts.is_empty()
    }

    /// Filter the catalog and count facets over the matches
    pub fn search(&self, options: &SearchOptions) -> SearchResults {
        let start = Instant::now();

        let colors = effective_set(&options.colors);
        let sizes = effective_set(&options.sizes);

        let mut color_tally = vec![0usize; Color::ALL.len()];
        let mut size_tally = vec![0usize; Size::ALL.len()];
        let mut shirts = Vec::new();

        for shirt in &self.shirts {
            let color = shirt.color().id();
            let size = shirt.size().id();

            if colors[color] && sizes[size] {
                color_tally[color] += 1;
                size_tally[size] += 1;
                shirts.push(shirt.clone());
            }
        }

        let results = SearchResults {
            shirts,
            color_counts: Color::ALL
                .iter()
                .map(|&color| ColorCount {
                    color,
                    count: color_tally[color.id()],
                })
                .collect(),
            size_counts: Size::ALL
                .iter()
                .map(|&size| SizeCount {
                    size,
                    count: size_tally[size.id()],
                })
                .collect(),
        };

        tracing::debug!(
            colors = options.colors.len(),
            sizes = options.sizes.len(),
            matched = results.total(),
            catalog = self.shirts.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "Search completed"
        );

        results
    }
}
