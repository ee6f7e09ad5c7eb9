//! Search options and boundary parsing.
//!
//! Options hold typed variant sets, so a value outside the canonical
//! enumerations cannot reach the engine. Untyped input (CLI flags,
//! config, JSON) goes through [`SearchOptions::parse`], which rejects
//! unknown names instead of letting them silently match nothing.

use crate::core::error::Result;
use crate::core::types::{parse_variant, Color, Size, Variant};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Requested filters for a search
///
/// An empty set means "no restriction" for that facet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    #[serde(default)]
    pub colors: BTreeSet<Color>,

    #[serde(default)]
    pub sizes: BTreeSet<Size>,
}

impl SearchOptions {
    /// Options with no filters (matches the whole catalog)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors.extend(colors);
        self
    }

    pub fn with_sizes(mut self, sizes: impl IntoIterator<Item = Size>) -> Self {
        self.sizes.extend(sizes);
        self
    }

    /// Build options from variant names, failing on the first unknown name
    pub fn parse<C, S>(colors: &[C], sizes: &[S]) -> Result<Self>
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        Ok(Self {
            colors: parse_all(colors)?,
            sizes: parse_all(sizes)?,
        })
    }

    /// True when neither facet is filtered
    pub fn is_unrestricted(&self) -> bool {
        self.colors.is_empty() && self.sizes.is_empty()
    }
}

fn parse_all<V: Variant, T: AsRef<str>>(values: &[T]) -> Result<BTreeSet<V>> {
    values.iter().map(|v| parse_variant(v.as_ref())).collect()
}

/// Membership table for the variants a facet filter admits.
///
/// Indexed by `Variant::id`. An empty filter admits every variant.
pub(crate) fn effective_set<V: Variant>(filter: &BTreeSet<V>) -> Vec<bool> {
    if filter.is_empty() {
        return vec![true; V::all().len()];
    }

    let mut admitted = vec![false; V::all().len()];
    for v in filter {
        admitted[v.id()] = true;
    }
    admitted
}
