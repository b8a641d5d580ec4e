//! Markdown rendering of the comparison table.

use super::table::ComparisonTable;

/// Render as a GitHub-style pipe table.
pub fn to_markdown(table: &ComparisonTable) -> String {
    let header = ComparisonTable::header();

    // Column widths sized to the widest cell so the raw text stays readable
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    let rows: Vec<[String; 6]> = table.rows().iter().map(ComparisonTable::row_cells).collect();
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &header.map(String::from), &widths);

    out.push('|');
    for w in &widths {
        out.push_str(&format!("{:-<width$}|", "", width = w + 2));
    }
    out.push('\n');

    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize]) {
    out.push('|');
    for (cell, w) in cells.iter().zip(widths) {
        out.push_str(&format!(" {:<width$} |", cell, width = *w));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::ResultSet;

    fn sample() -> ComparisonTable {
        let ft = ResultSet::from_entries(vec![
            ("Brazil".to_string(), 98.0),
            ("Austria".to_string(), 99.12),
        ]);
        let bp = ResultSet::from_entries(vec![
            ("Brazil".to_string(), 97.2),
            ("Austria".to_string(), 98.9),
        ]);
        ComparisonTable::build(&ft, &bp).unwrap()
    }

    #[test]
    fn test_markdown_header_repeats_columns() {
        let md = to_markdown(&sample());
        let first = md.lines().next().unwrap();
        assert_eq!(first.matches("Country").count(), 2);
        assert_eq!(first.matches("Fasttext (%)").count(), 2);
        assert_eq!(first.matches("BPEmb (%)").count(), 2);
    }

    #[test]
    fn test_markdown_separator_and_values() {
        let md = to_markdown(&sample());
        let mut lines = md.lines();
        lines.next();
        let sep = lines.next().unwrap();
        assert!(sep.starts_with('|'));
        assert!(sep.contains("---"));

        let row = lines.next().unwrap();
        assert!(row.contains("Brazil"));
        assert!(row.contains("98.00"));
        assert!(row.contains("Austria"));
        assert!(row.contains("99.12"));
    }

    #[test]
    fn test_markdown_row_count() {
        let md = to_markdown(&sample());
        // header + separator + one data row
        assert_eq!(md.lines().count(), 3);
    }
}
