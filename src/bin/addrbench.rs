//! addrbench - Address-parsing evaluation CLI
//!
//! Aggregates per-country accuracy results for the two embedding variants
//! of the trained address parser and renders the article's comparison
//! tables.
//!
//! # Usage
//!
//! ```bash
//! # Generate Markdown + RST tables for the noisy test results
//! addrbench tables noisy
//!
//! # Only the Markdown table, custom directories
//! addrbench tables clean --format md --results-dir results --out-dir tables
//!
//! # List zero-shot countries
//! addrbench countries --zero-shot yes
//! ```

use std::process::ExitCode;

use clap::Parser;

use addrbench::cli::commands::{countries, info, tables};
use addrbench::cli::output::color;
use addrbench::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Commands::Tables(args) => tables::run(args),
        Commands::Countries(args) => countries::run(args),
        Commands::Info => info::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
