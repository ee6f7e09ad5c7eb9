//! Tests for search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Filters with results
//! - Empty results and empty catalogs
//! - Unknown color/size names
//! - Output format variations

use crate::common::{create_test_services, three_shirts};
use shirt_search::cli::commands::search::{build_output, execute, SearchArgs};
use shirt_search::cli::OutputFormat;
use shirt_search::{Color, Size};
use std::sync::Arc;

fn args(colors: &[&str], sizes: &[&str]) -> SearchArgs {
    SearchArgs {
        colors: colors.iter().map(|s| s.to_string()).collect(),
        sizes: sizes.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

/// Test search with filters in human format
#[test]
fn test_search_human() {
    let services = Arc::new(create_test_services(three_shirts()));

    let result = execute(args(&["red"], &[]), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search in JSON format
#[test]
fn test_search_json() {
    let services = Arc::new(create_test_services(three_shirts()));

    let result = execute(args(&["red", "blue"], &["medium"]), &services, OutputFormat::Json);
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

/// Test search with no matches
#[test]
fn test_search_empty_results() {
    let services = Arc::new(create_test_services(three_shirts()));

    let result = execute(args(&["yellow"], &[]), &services, OutputFormat::Human);
    assert!(result.is_ok(), "Search with no results should succeed");
}

/// Test search over an empty catalog
#[test]
fn test_search_empty_catalog() {
    let services = Arc::new(create_test_services(Vec::new()));

    let result = execute(args(&[], &[]), &services, OutputFormat::Human);
    assert!(result.is_ok());
}

/// Test unknown names are rejected
#[test]
fn test_search_unknown_color() {
    let services = Arc::new(create_test_services(three_shirts()));

    let result = execute(args(&["purple"], &[]), &services, OutputFormat::Human);
    let err = result.expect_err("Unknown color should fail");
    assert!(err.to_string().contains("Unknown color 'purple'"));
}

/// Test suggestion for near-miss names
#[test]
fn test_search_unknown_size_suggestion() {
    let services = create_test_services(three_shirts());

    let err = build_output(&args(&[], &["lar"]), &services, OutputFormat::Json).unwrap_err();
    assert!(err.to_string().contains("Did you mean 'large'?"));
}

/// Test the output mirrors the engine result
#[test]
fn test_search_output_fields() {
    let services = create_test_services(three_shirts());

    let output = build_output(&args(&[], &["Medium"]), &services, OutputFormat::Json).unwrap();
    assert_eq!(output.sizes, vec![Size::Medium]);
    assert_eq!(output.total_results, 2);

    let shirts = output.shirts.expect("Shirts listed by default");
    assert_eq!(shirts[0].color, Color::Blue);
    assert_eq!(shirts[0].rank, 1);
    assert_eq!(shirts[1].color, Color::Red);
    assert_eq!(shirts[1].name, "Red - Medium");

    let json = serde_json::to_value(
        build_output(&args(&[], &["Medium"]), &services, OutputFormat::Json).unwrap(),
    )
    .unwrap();
    assert_eq!(json["size_counts"][1]["count"], 2);
    assert_eq!(json["color_counts"][0]["color"], "red");
}

/// Test human output is capped by configuration
#[test]
fn test_search_human_uses_max_display() {
    let shirts = (0..30).flat_map(|_| three_shirts()).collect();
    let services = create_test_services(shirts);

    let output = build_output(&args(&[], &[]), &services, OutputFormat::Human).unwrap();
    assert_eq!(output.total_results, 90);
    assert_eq!(
        output.shirts.map(|s| s.len()),
        Some(services.config.search.max_display)
    );

    let output = build_output(&args(&[], &[]), &services, OutputFormat::Json).unwrap();
    assert_eq!(output.shirts.map(|s| s.len()), Some(90));
}
