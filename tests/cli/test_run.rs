//! Tests for the top-level run() dispatch

use clap::Parser;
use serial_test::serial;
use shirt_search::cli::{run, Cli};
use std::env;
use std::fs;
use tempfile::TempDir;

fn isolate_dirs(temp: &TempDir) {
    env::remove_var("SHIRT_SEARCH_CONFIG");
    env::remove_var("SHIRT_SEARCH_CATALOG");
    env::set_var("SHIRT_SEARCH_CONFIG_DIR", temp.path().join("config"));
    env::set_var("SHIRT_SEARCH_DATA_DIR", temp.path().join("data"));
}

fn clear_dirs() {
    env::remove_var("SHIRT_SEARCH_CONFIG_DIR");
    env::remove_var("SHIRT_SEARCH_DATA_DIR");
}

#[test]
#[serial]
fn test_run_show_config() {
    let temp = TempDir::new().unwrap();
    isolate_dirs(&temp);

    let cli = Cli::try_parse_from(["shirt-search", "--format", "json", "show-config"]).unwrap();
    let result = run(cli);
    clear_dirs();

    assert!(result.is_ok(), "show-config should succeed: {:?}", result.err());
}

#[test]
#[serial]
fn test_run_rejects_bad_xdg_config() {
    let temp = TempDir::new().unwrap();
    isolate_dirs(&temp);
    fs::create_dir_all(temp.path().join("config")).unwrap();
    fs::write(temp.path().join("config/config.toml"), "[search]\nmax_display = 0\n").unwrap();

    let cli = Cli::try_parse_from(["shirt-search", "show-config"]).unwrap();
    let result = run(cli);
    clear_dirs();

    assert!(result.is_err());
}
