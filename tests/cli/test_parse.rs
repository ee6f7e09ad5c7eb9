//! Tests for CLI argument parsing

use clap::Parser;
use shirt_search::cli::{Cli, Commands, OutputFormat};
use std::path::PathBuf;

#[test]
fn test_parse_search_flags() {
    let cli = Cli::try_parse_from([
        "shirt-search",
        "--format",
        "json",
        "search",
        "-c",
        "red,blue",
        "--color",
        "white",
        "--size",
        "small",
        "--counts-only",
    ])
    .unwrap();

    assert_eq!(cli.format, OutputFormat::Json);
    match cli.command {
        Commands::Search(args) => {
            assert_eq!(args.colors, vec!["red", "blue", "white"]);
            assert_eq!(args.sizes, vec!["small"]);
            assert!(args.counts_only);
            assert_eq!(args.limit, None);
        }
        other => panic!("Expected search command, got {other:?}"),
    }
}

#[test]
fn test_parse_global_catalog_after_subcommand() {
    let cli = Cli::try_parse_from([
        "shirt-search",
        "search",
        "--catalog",
        "/data/shirts.json",
        "-k",
        "5",
    ])
    .unwrap();

    assert_eq!(cli.catalog, Some(PathBuf::from("/data/shirts.json")));
    assert_eq!(cli.format, OutputFormat::Human);
    assert!(matches!(cli.command, Commands::Search(ref a) if a.limit == Some(5)));
}

#[test]
fn test_parse_generate() {
    let cli = Cli::try_parse_from([
        "shirt-search",
        "generate-catalog",
        "-n",
        "1000",
        "--seed",
        "9",
        "-o",
        "shirts.json",
    ])
    .unwrap();

    match cli.command {
        Commands::GenerateCatalog(args) => {
            assert_eq!(args.count, Some(1000));
            assert_eq!(args.seed, Some(9));
            assert_eq!(args.output, Some(PathBuf::from("shirts.json")));
        }
        other => panic!("Expected generate-catalog command, got {other:?}"),
    }
}

#[test]
fn test_parse_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["shirt-search", "--format", "xml", "list-variants"]).is_err());
}

#[test]
fn test_cli_definition_is_valid() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
