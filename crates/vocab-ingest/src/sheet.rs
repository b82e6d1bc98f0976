//! Slicing a raw grid into labeled data rows.

use vocab_model::{DecodedRow, RawGrid};

/// Literal header labels for a grid, taken from the header row as-is.
///
/// Blank header cells produce empty labels; [`decode_rows`] drops those
/// columns, so unlabeled trailing cells are ignored rather than invented
/// names being assigned to them.
pub fn header_labels(grid: &RawGrid, header_index: usize) -> Vec<String> {
    grid.rows
        .get(header_index)
        .map(|row| row.iter().map(|cell| cell.as_text()).collect())
        .unwrap_or_default()
}

/// Decodes every data row below the header into a labeled row.
///
/// Returns `(data_row_index, row)` pairs where the index is the row's
/// 0-based position below the header in the original grid. Rows whose
/// every labeled cell is blank are not data and are dropped, but the
/// indices of surviving rows keep their true grid positions so reported
/// row numbers always match the source spreadsheet.
pub fn decode_rows(grid: &RawGrid, header_index: usize) -> Vec<(usize, DecodedRow)> {
    let labels = header_labels(grid, header_index);
    let mut rows = Vec::new();
    for (offset, cells) in grid.rows.iter().skip(header_index + 1).enumerate() {
        let mut row = DecodedRow::new();
        for (label, cell) in labels.iter().zip(cells.iter()) {
            if label.trim().is_empty() {
                continue;
            }
            row.push(label.clone(), cell.clone());
        }
        if row.is_blank() {
            continue;
        }
        rows.push((offset, row));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_model::CellValue;

    fn grid(rows: &[&[&str]]) -> RawGrid {
        RawGrid::new(
            rows.iter()
                .map(|row| row.iter().map(|cell| CellValue::from(*cell)).collect())
                .collect(),
        )
    }

    #[test]
    fn slices_below_header_with_literal_labels() {
        let grid = grid(&[
            &["title", "", ""],
            &["Hanzi", "Pinyin", "Meaning"],
            &["你好", "nǐ hǎo", "hello"],
        ]);
        let rows = decode_rows(&grid, 1);
        assert_eq!(rows.len(), 1);
        let (index, row) = &rows[0];
        assert_eq!(*index, 0);
        assert_eq!(row.get("Hanzi"), Some(&CellValue::from("你好")));
        assert_eq!(row.get("Meaning"), Some(&CellValue::from("hello")));
    }

    #[test]
    fn blank_rows_dropped_but_indices_keep_grid_positions() {
        let grid = grid(&[
            &["Hanzi", "Meaning"],
            &["你好", "hello"],
            &["", ""],
            &["再见", "goodbye"],
        ]);
        let rows = decode_rows(&grid, 0);
        let indices: Vec<usize> = rows.iter().map(|(index, _)| *index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn unlabeled_columns_are_ignored() {
        let grid = grid(&[
            &["Hanzi", "", "Meaning"],
            &["你好", "stray", "hello"],
        ]);
        let rows = decode_rows(&grid, 0);
        let (_, row) = &rows[0];
        assert_eq!(row.len(), 2);
        assert_eq!(row.get("Meaning"), Some(&CellValue::from("hello")));
    }

    #[test]
    fn ragged_short_rows_keep_existing_cells() {
        let grid = grid(&[&["Hanzi", "Pinyin", "Meaning"], &["你好"]]);
        let rows = decode_rows(&grid, 0);
        let (_, row) = &rows[0];
        assert_eq!(row.get("Hanzi"), Some(&CellValue::from("你好")));
        assert_eq!(row.get("Pinyin"), None);
    }
}
