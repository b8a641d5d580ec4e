//! Sphinx RST rendering of the comparison table.
//!
//! Emits a `.. list-table::` directive with one header row. Cell layout
//! (tab-indented, `*` marking the first cell of each row) matches the
//! tables checked into the article's documentation.

use super::table::ComparisonTable;

const LINE_PREFIX: &str = "\t\t";

/// Render as a Sphinx list-table.
pub fn to_rst(table: &ComparisonTable) -> String {
    let mut out = String::new();
    out.push_str(".. list-table::\n");
    out.push_str(LINE_PREFIX);
    out.push_str(":header-rows: 1\n\n");

    push_row(&mut out, &ComparisonTable::header().map(String::from));
    for row in table.rows() {
        push_row(&mut out, &ComparisonTable::row_cells(row));
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6]) {
    for (idx, cell) in cells.iter().enumerate() {
        out.push_str(LINE_PREFIX);
        if idx == 0 {
            out.push('*');
        }
        out.push_str(&format!("\t- {}\n", cell));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::ResultSet;

    fn sample() -> ComparisonTable {
        let ft = ResultSet::from_entries(vec![
            ("Brazil".to_string(), 98.0),
            ("Austria".to_string(), 99.1),
        ]);
        let bp = ResultSet::from_entries(vec![
            ("Brazil".to_string(), 97.2),
            ("Austria".to_string(), 98.9),
        ]);
        ComparisonTable::build(&ft, &bp).unwrap()
    }

    #[test]
    fn test_rst_directive_and_header_rows() {
        let rst = to_rst(&sample());
        assert!(rst.starts_with(".. list-table::\n"));
        assert!(rst.contains("\t\t:header-rows: 1\n\n"));
    }

    #[test]
    fn test_rst_row_markers() {
        let rst = to_rst(&sample());
        // Header row + one data row, each starting with the `*` marker
        assert_eq!(rst.matches("\t\t*\t- ").count(), 2);
        assert!(rst.contains("\t\t*\t- Country\n"));
        assert!(rst.contains("\t\t\t- Fasttext (%)\n"));
        assert!(rst.contains("\t\t*\t- Brazil\n"));
        assert!(rst.contains("\t\t\t- 98.00\n"));
    }

    #[test]
    fn test_rst_cell_count() {
        let rst = to_rst(&sample());
        // 6 header cells + 6 data cells
        assert_eq!(rst.matches("\t- ").count(), 12);
    }
}
