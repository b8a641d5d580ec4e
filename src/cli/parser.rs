//! CLI argument parsing and structure definitions

use clap::{Parser, Subcommand};

use super::commands;

/// Address-parsing evaluation toolkit - results aggregation and report tables
#[derive(Parser)]
#[command(name = "addrbench")]
#[command(
    author,
    version,
    about = "Address-parsing evaluation: per-country results aggregation and comparison tables",
    long_about = r#"
addrbench - evaluation reports for multinational address parsing

The trained parser is evaluated per country; this tool aggregates the
per-country accuracy JSON files of the two embedding variants (fasttext,
bpemb) and renders the article's two-countries-per-row comparison tables.

EXAMPLES:
  addrbench tables noisy
  addrbench tables clean --format md --out-dir tables
  addrbench countries --zero-shot yes
  addrbench info
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Markdown/RST comparison tables from results files
    #[command(visible_alias = "t")]
    Tables(commands::TablesArgs),

    /// List evaluation countries with their display names
    #[command(visible_alias = "c")]
    Countries(commands::CountriesArgs),

    /// Show version and evaluation setup info
    #[command(visible_alias = "i")]
    Info,
}

/// Parse a boolean argument, accepting the usual true/false synonyms.
///
/// Accepts `true/t/yes/y/1` and `false/f/no/n/0`, case-insensitive.
pub fn parse_bool_arg(arg: &str) -> Result<bool, String> {
    match arg.to_lowercase().as_str() {
        "true" | "t" | "yes" | "y" | "1" => Ok(true),
        "false" | "f" | "no" | "n" | "0" => Ok(false),
        _ => Err("Boolean value expected.".to_string()),
    }
}
