//! Core data types for shirt search.
//!
//! Colors and sizes are closed enumerations: every variant is known at
//! compile time, has a stable id (its declaration index) and a display
//! name. `Shirt` composes one of each with an identifier and a label.

use crate::core::error::{Result, ShirtSearchError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A member of a closed, ordered facet enumeration.
///
/// `all()` lists variants in declaration order and `id()` is the
/// variant's position in that list, so `all()[v.id()] == v` always holds.
pub trait Variant: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Facet label used in messages ("color", "size")
    const FACET: &'static str;

    /// Every variant, in declaration order
    fn all() -> &'static [Self];

    /// Stable identity of this variant
    fn id(self) -> usize;

    /// Display name
    fn name(self) -> &'static str;
}

/// Shirt color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Blue,
    Yellow,
    White,
    Black,
}

impl Color {
    pub const ALL: [Color; 5] = [
        Color::Red,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Black,
    ];
}

impl Variant for Color {
    const FACET: &'static str = "color";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn id(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

/// Shirt size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

impl Variant for Size {
    const FACET: &'static str = "size";

    fn all() -> &'static [Self] {
        &Self::ALL
    }

    fn id(self) -> usize {
        self as usize
    }

    fn name(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = ShirtSearchError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

impl FromStr for Size {
    type Err = ShirtSearchError;

    fn from_str(s: &str) -> Result<Self> {
        parse_variant(s)
    }
}

/// Parse a variant by name (case-insensitive, surrounding whitespace ignored).
///
/// Unknown names are rejected with the list of valid names and, when the
/// input is an unambiguous prefix of a valid name, a suggestion.
///
/// # Examples
///
/// ```
/// use shirt_search::core::types::{parse_variant, Color, Size};
///
/// assert_eq!(parse_variant::<Color>("RED").unwrap(), Color::Red);
/// assert_eq!(parse_variant::<Size>(" medium ").unwrap(), Size::Medium);
/// assert!(parse_variant::<Color>("purple").is_err());
/// ```
pub fn parse_variant<V: Variant>(input: &str) -> Result<V> {
    let wanted = input.trim();

    if let Some(v) = V::all()
        .iter()
        .find(|v| v.name().eq_ignore_ascii_case(wanted))
    {
        return Ok(*v);
    }

    Err(ShirtSearchError::UnknownVariant {
        facet: V::FACET,
        value: input.to_string(),
        valid: V::all().iter().map(|v| v.name().to_lowercase()).collect(),
        suggestion: suggest::<V>(wanted),
    })
}

fn suggest<V: Variant>(wanted: &str) -> Option<String> {
    let wanted = wanted.to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    let candidates: Vec<&'static str> = V::all()
        .iter()
        .map(|v| v.name())
        .filter(|name| {
            let name = name.to_lowercase();
            name.starts_with(&wanted) || wanted.starts_with(&name)
        })
        .collect();

    match candidates.as_slice() {
        [only] => Some(only.to_lowercase()),
        _ => None,
    }
}

/// A single catalog entry
///
/// Immutable once constructed; fields are exposed through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shirt {
    id: Uuid,
    name: String,
    size: Size,
    color: Color,
}

impl Shirt {
    pub fn new(id: Uuid, name: impl Into<String>, size: Size, color: Color) -> Self {
        Self {
            id,
            name: name.into(),
            size,
            color,
        }
    }

    /// Shirt with a fresh id, named "<Color> - <Size>"
    pub fn labelled(size: Size, color: Color) -> Self {
        Self::new(Uuid::new_v4(), format!("{color} - {size}"), size, color)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn color(&self) -> Color {
        self.color
    }
}
