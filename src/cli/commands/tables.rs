//! Tables command - generate comparison tables from results files

use clap::Parser;

use crate::cli::output::{color, log_info, log_verbose, write_output};
use crate::report::{load_table, markdown, rst, write_tables, TableFormat};

/// Generate Markdown/RST comparison tables from results files
#[derive(Parser, Debug)]
pub struct TablesArgs {
    /// Data type the results were computed on (e.g. noisy, clean, incomplete)
    #[arg(value_name = "DATA_TYPE")]
    pub data_type: String,

    /// Directory holding the `<data_type>_test_results_*.json` files
    #[arg(long, default_value = "results", value_name = "DIR")]
    pub results_dir: String,

    /// Directory the table files are written into
    #[arg(long, default_value = "tables", value_name = "DIR")]
    pub out_dir: String,

    /// Output format (md, rst, both)
    #[arg(long, default_value = "both")]
    pub format: String,

    /// Write the rendered table to PATH instead of the out-dir ("-" for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Show extra progress detail
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress messages
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: TablesArgs) -> Result<(), String> {
    let formats: &[TableFormat] = match args.format.as_str() {
        "md" | "markdown" => &[TableFormat::Markdown],
        "rst" => &[TableFormat::Rst],
        "both" => &[TableFormat::Markdown, TableFormat::Rst],
        other => {
            return Err(format!(
                "Invalid format '{}'. Use: md, rst, or both",
                other
            ));
        }
    };

    log_verbose(
        &format!(
            "reading {} results from {}",
            args.data_type, args.results_dir
        ),
        args.verbose,
    );

    // Single-destination mode: render one format to a file or stdout
    if let Some(output) = &args.output {
        let format = match formats {
            [format] => *format,
            _ => return Err("--output requires --format md or --format rst".to_string()),
        };

        let table = load_table(&args.results_dir, &args.data_type).map_err(|e| e.to_string())?;
        log_verbose(
            &format!("paired {} table rows", table.rows().len()),
            args.verbose,
        );
        let rendered = match format {
            TableFormat::Markdown => markdown::to_markdown(&table),
            TableFormat::Rst => rst::to_rst(&table),
        };

        let dest = (output.as_str() != "-").then_some(output.as_str());
        write_output(&rendered, dest)?;
        if let Some(path) = dest {
            log_info(&format!("{} wrote {}", color("32", "ok:"), path), args.quiet);
        }
        return Ok(());
    }

    let written = write_tables(&args.data_type, &args.results_dir, &args.out_dir, formats)
        .map_err(|e| e.to_string())?;

    for path in &written {
        log_info(
            &format!("{} wrote {}", color("32", "ok:"), path.display()),
            args.quiet,
        );
    }
    Ok(())
}
