//! Shirt Search CLI - faceted color/size search from the command line
//!
//! # Examples
//!
//! ```bash
//! # Red shirts in any size
//! shirt-search search --color red
//!
//! # Red or blue, medium only, as JSON
//! shirt-search --format json search -c red,blue -s medium
//!
//! # Write a 10,000 shirt sample catalog and search it
//! shirt-search generate-catalog -n 10000 -o shirts.json
//! shirt-search --catalog shirts.json search --size large --counts-only
//! ```

use clap::Parser;
use shirt_search::cli::output::print_error;
use shirt_search::cli::{run, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Logs go to stderr; stdout carries command output.
///
/// Level comes from RUST_LOG (default `shirt_search=warn`). Set
/// SHIRT_SEARCH_LOG_FORMAT=json for JSON lines.
fn init_logging() {
    let json = std::env::var("SHIRT_SEARCH_LOG_FORMAT").is_ok_and(|f| f == "json");

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });
    let compact_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .compact()
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shirt_search=warn".into()),
        )
        .with(json_layer)
        .with(compact_layer)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
