//! List-variants command - show every known color and size

use crate::cli::output::{self, colors, swatch};
use crate::cli::OutputFormat;
use crate::core::types::{Color, Size, Variant};
use clap::Args;
use serde::Serialize;

/// Arguments for the list-variants command
#[derive(Args, Debug, Default)]
pub struct VariantsArgs {
    /// Include variant ids
    #[arg(long)]
    pub ids: bool,
}

/// A single variant in command output
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VariantItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<usize>,
    pub name: String,
}

/// List-variants command output
#[derive(Debug, Serialize)]
pub struct VariantsOutput {
    pub colors: Vec<VariantItem>,
    pub sizes: Vec<VariantItem>,
}

fn items<V: Variant>(with_ids: bool) -> Vec<VariantItem> {
    V::all()
        .iter()
        .map(|v| VariantItem {
            id: with_ids.then_some(v.id()),
            name: v.name().to_lowercase(),
        })
        .collect()
}

/// Collect variants in declaration order
pub fn build_output(args: &VariantsArgs) -> VariantsOutput {
    VariantsOutput {
        colors: items::<Color>(args.ids),
        sizes: items::<Size>(args.ids),
    }
}

/// Execute the list-variants command
pub fn execute(
    args: VariantsArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let list = build_output(&args);

    match format {
        OutputFormat::Human => {
            output::print_header("Colors:");
            for (item, color) in list.colors.iter().zip(Color::ALL) {
                match item.id {
                    Some(id) => println!(
                        "  {} {}",
                        colors::dim(&id.to_string()),
                        swatch(color, &item.name)
                    ),
                    None => println!("  {}", swatch(color, &item.name)),
                }
            }
            output::print_header("Sizes:");
            for item in &list.sizes {
                match item.id {
                    Some(id) => println!("  {} {}", colors::dim(&id.to_string()), item.name),
                    None => println!("  {}", item.name),
                }
            }
        }
        OutputFormat::Json => output::print_json(&list)?,
    }

    Ok(())
}
