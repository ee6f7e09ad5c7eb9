//! Search command - filter the catalog by color and size

use crate::cli::output::{colors, count_bar, format_count, print_header, print_warning, swatch};
use crate::cli::OutputFormat;
use crate::core::search::{ColorCount, SearchOptions, SizeCount};
use crate::core::services::Services;
use crate::core::types::{Color, Size};
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

const BAR_WIDTH: usize = 24;

/// Arguments for the search command
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Colors to include (repeatable or comma-separated; none = all colors)
    #[arg(long = "color", short = 'c', value_delimiter = ',')]
    pub colors: Vec<String>,

    /// Sizes to include (repeatable or comma-separated; none = all sizes)
    #[arg(long = "size", short = 's', value_delimiter = ',')]
    pub sizes: Vec<String>,

    /// Maximum number of shirts to list
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,

    /// Only show facet counts (no shirts)
    #[arg(long)]
    pub counts_only: bool,
}

/// Shirt entry in command output
#[derive(Debug, Serialize)]
pub struct ShirtItem {
    pub rank: usize,
    pub id: String,
    pub name: String,
    pub color: Color,
    pub size: Size,
}

/// Search command output
#[derive(Debug, Serialize)]
pub struct SearchOutput {
    /// True when neither colors nor sizes were given
    pub unfiltered: bool,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub catalog_size: usize,
    pub total_results: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirts: Option<Vec<ShirtItem>>,
    pub color_counts: Vec<ColorCount>,
    pub size_counts: Vec<SizeCount>,
}

/// Run the search and shape its output
///
/// Unknown color or size names are rejected before searching.
pub fn build_output(
    args: &SearchArgs,
    services: &Services,
    format: OutputFormat,
) -> Result<SearchOutput, Box<dyn std::error::Error>> {
    let options = SearchOptions::parse(args.colors.as_slice(), args.sizes.as_slice())
        .map_err(|e| e.message())?;
    let results = services.engine.search(&options);

    // JSON lists every match unless a limit was asked for
    let limit = match (args.limit, format) {
        (Some(limit), _) => limit,
        (None, OutputFormat::Human) => services.config.search.max_display,
        (None, OutputFormat::Json) => usize::MAX,
    };

    let shirts = if args.counts_only {
        None
    } else {
        Some(
            results
                .shirts
                .iter()
                .take(limit)
                .enumerate()
                .map(|(i, shirt)| ShirtItem {
                    rank: i + 1,
                    id: shirt.id().to_string(),
                    name: shirt.name().to_string(),
                    color: shirt.color(),
                    size: shirt.size(),
                })
                .collect(),
        )
    };

    Ok(SearchOutput {
        unfiltered: options.is_unrestricted(),
        colors: options.colors.into_iter().collect(),
        sizes: options.sizes.into_iter().collect(),
        catalog_size: services.engine.len(),
        total_results: results.total(),
        shirts,
        color_counts: results.color_counts,
        size_counts: results.size_counts,
    })
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = build_output(&args, services, format)?;

    match format {
        OutputFormat::Human => {
            if services.engine.is_empty() {
                print_warning("Catalog is empty");
            }
            print_human(&output);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}

fn filter_label<T: ToString>(values: &[T]) -> String {
    if values.is_empty() {
        "any".to_string()
    } else {
        values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn print_human(output: &SearchOutput) {
    if output.unfiltered {
        println!("{} none", colors::label("Filters:"));
    } else {
        println!(
            "{} {}  {} {}",
            colors::label("Colors:"),
            filter_label(&output.colors),
            colors::label("Sizes:"),
            filter_label(&output.sizes)
        );
    }

    if output.total_results == 0 {
        println!(
            "No shirts found in catalog of {}",
            colors::number(&format_count(output.catalog_size))
        );
    } else {
        println!(
            "Found {} shirt(s) in catalog of {}",
            colors::number(&format_count(output.total_results)),
            colors::number(&format_count(output.catalog_size))
        );
    }

    if let Some(shirts) = &output.shirts {
        if !shirts.is_empty() {
            println!();
        }
        for shirt in shirts {
            println!(
                "[{}] {} {}",
                colors::rank(&shirt.rank.to_string()),
                swatch(shirt.color, &shirt.name),
                colors::dim(&shirt.id)
            );
        }
        let hidden = output.total_results.saturating_sub(shirts.len());
        if hidden > 0 {
            println!(
                "{}",
                colors::dim(&format!("... and {} more (use --limit)", format_count(hidden)))
            );
        }
    }

    let max = output.total_results;

    println!();
    print_header("By color:");
    for c in &output.color_counts {
        println!(
            "  {:<8} {:>8} {}",
            swatch(c.color, c.color.to_string().as_str()),
            format_count(c.count),
            swatch(c.color, &count_bar(c.count, max, BAR_WIDTH))
        );
    }

    println!();
    print_header("By size:");
    for s in &output.size_counts {
        println!(
            "  {:<8} {:>8} {}",
            s.size.to_string(),
            format_count(s.count),
            count_bar(s.count, max, BAR_WIDTH)
        );
    }
}
