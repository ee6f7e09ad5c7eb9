//! Tests for list-variants CLI command

use shirt_search::cli::commands::variants::{build_output, execute, VariantsArgs};
use shirt_search::cli::OutputFormat;
use shirt_search::{Color, Size};

#[test]
fn test_variants_human() {
    assert!(execute(VariantsArgs::default(), OutputFormat::Human).is_ok());
}

#[test]
fn test_variants_json() {
    assert!(execute(VariantsArgs { ids: true }, OutputFormat::Json).is_ok());
}

#[test]
fn test_variants_parse_back() {
    let list = build_output(&VariantsArgs::default());

    let colors: Vec<Color> = list.colors.iter().map(|c| c.name.parse().unwrap()).collect();
    let sizes: Vec<Size> = list.sizes.iter().map(|s| s.name.parse().unwrap()).collect();
    assert_eq!(colors, Color::ALL.to_vec());
    assert_eq!(sizes, Size::ALL.to_vec());
}
