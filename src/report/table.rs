//! Two-countries-per-row comparison table.

use crate::eval::ResultSet;
use crate::{Error, Result};

/// Column headers, repeated for the left and right country of each row.
pub const COLUMNS: [&str; 3] = ["Country", "Fasttext (%)", "BPEmb (%)"];

/// One country's cells: name plus the two accuracies.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryCells {
    /// Cleaned country display name.
    pub country: String,
    /// fastText accuracy percentage.
    pub fasttext: f64,
    /// BPEmb accuracy percentage.
    pub bpemb: f64,
}

/// One rendered row: a left country and, usually, a right one.
///
/// The right half is absent only on the final row of an odd-length
/// result set.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    /// Left country of the row.
    pub left: CountryCells,
    /// Right country, when the entry count pairs up evenly.
    pub right: Option<CountryCells>,
}

/// Comparison table pairing two countries per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable {
    rows: Vec<TableRow>,
}

impl ComparisonTable {
    /// Pair the two result sets positionally, two entries per row.
    ///
    /// The sets must be the same length; pairing follows the fasttext
    /// file's key order. A trailing unpaired entry becomes a half row.
    pub fn build(fasttext: &ResultSet, bpemb: &ResultSet) -> Result<Self> {
        if fasttext.len() != bpemb.len() {
            return Err(Error::report(format!(
                "result sets differ in length: fasttext has {}, bpemb has {}",
                fasttext.len(),
                bpemb.len()
            )));
        }

        let cells: Vec<CountryCells> = fasttext
            .iter()
            .zip(bpemb.iter())
            .map(|((country, ft), (_, bp))| CountryCells {
                country: country.to_string(),
                fasttext: ft,
                bpemb: bp,
            })
            .collect();

        let mut rows = Vec::with_capacity(cells.len().div_ceil(2));
        let mut it = cells.into_iter();
        while let Some(left) = it.next() {
            rows.push(TableRow {
                left,
                right: it.next(),
            });
        }
        Ok(Self { rows })
    }

    /// Rows in table order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Repeated header cells (six columns).
    pub fn header() -> [&'static str; 6] {
        [
            COLUMNS[0], COLUMNS[1], COLUMNS[2], COLUMNS[0], COLUMNS[1], COLUMNS[2],
        ]
    }

    /// Flatten a row to six display cells, blank-padding a half row.
    pub fn row_cells(row: &TableRow) -> [String; 6] {
        let fmt = |v: f64| format!("{:.2}", v);
        match &row.right {
            Some(right) => [
                row.left.country.clone(),
                fmt(row.left.fasttext),
                fmt(row.left.bpemb),
                right.country.clone(),
                fmt(right.fasttext),
                fmt(right.bpemb),
            ],
            None => [
                row.left.country.clone(),
                fmt(row.left.fasttext),
                fmt(row.left.bpemb),
                String::new(),
                String::new(),
                String::new(),
            ],
        }
    }
}
