//! Comparison-table reports.
//!
//! Renders the per-country accuracies of the two embedding variants into
//! the two-countries-per-row tables used by the article, as Markdown and
//! Sphinx RST.

pub mod markdown;
pub mod rst;
pub mod table;

pub use table::{ComparisonTable, TableRow, COLUMNS};

use std::fs;
use std::path::{Path, PathBuf};

use crate::eval::{results_path, Embedding, ResultSet};
use crate::Result;

/// Output format for a comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    /// GitHub-style pipe table, written as `<data_type>_table.md`.
    Markdown,
    /// Sphinx `.. list-table::`, written as `<data_type>_table.rst`.
    Rst,
}

impl TableFormat {
    /// File extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            TableFormat::Markdown => "md",
            TableFormat::Rst => "rst",
        }
    }
}

/// Load both result files for a data type and build the comparison table.
pub fn load_table(results_dir: impl AsRef<Path>, data_type: &str) -> Result<ComparisonTable> {
    let fasttext = ResultSet::load(results_path(&results_dir, data_type, Embedding::FastText))?;
    let bpemb = ResultSet::load(results_path(&results_dir, data_type, Embedding::BPEmb))?;
    ComparisonTable::build(&fasttext, &bpemb)
}

/// Generate table files for a data type.
///
/// Creates `out_dir` if missing and writes one file per requested format.
/// Returns the paths written.
pub fn write_tables(
    data_type: &str,
    results_dir: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
    formats: &[TableFormat],
) -> Result<Vec<PathBuf>> {
    let table = load_table(results_dir, data_type)?;
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(formats.len());
    for format in formats {
        let rendered = match format {
            TableFormat::Markdown => markdown::to_markdown(&table),
            TableFormat::Rst => rst::to_rst(&table),
        };
        let path = out_dir.join(format!("{}_table.{}", data_type, format.extension()));
        fs::write(&path, rendered)?;
        written.push(path);
    }
    Ok(written)
}
