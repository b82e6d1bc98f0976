//! Header-row discovery within a raw sheet.

use tracing::warn;

use vocab_model::RawGrid;

/// How deep into a sheet we look for a header row.
const HEADER_PROBE_ROWS: usize = 20;

/// Minimum keyword-matching cells for a row to qualify as the header.
const HEADER_MIN_MATCHES: usize = 2;

/// Keywords that identify header cells, lowercased. Covers the headword,
/// meaning, and romanization columns in English and Vietnamese.
const HEADER_KEYWORDS: &[&str] = &[
    "hanzi",
    "hán tự",
    "hán",
    "meaning",
    "nghĩa",
    "definition",
    "pinyin",
];

/// Finds the row that most plausibly contains column titles.
///
/// Scans at most the first [`HEADER_PROBE_ROWS`] rows; the first row with
/// at least [`HEADER_MIN_MATCHES`] cells containing a header keyword
/// (substring match, lowercased and trimmed) wins. Falls back to row 0
/// when nothing qualifies — the sheet is still parsed with literal column
/// names, which generally fail alias resolution and route rows to
/// rejection instead of crashing.
pub fn locate_header_row(sheet_name: &str, grid: &RawGrid) -> usize {
    for (index, row) in grid.rows.iter().take(HEADER_PROBE_ROWS).enumerate() {
        let matches = row
            .iter()
            .filter(|cell| {
                let value = cell.as_text().to_lowercase();
                let value = value.trim();
                HEADER_KEYWORDS
                    .iter()
                    .any(|keyword| value.contains(keyword))
            })
            .count();
        if matches >= HEADER_MIN_MATCHES {
            return index;
        }
    }
    warn!(
        sheet = %sheet_name,
        probed = grid.rows.len().min(HEADER_PROBE_ROWS),
        "no header row detected, falling back to the first row"
    );
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use vocab_model::CellValue;

    fn text_row(cells: &[&str]) -> Vec<CellValue> {
        cells.iter().map(|cell| CellValue::from(*cell)).collect()
    }

    #[test]
    fn first_qualifying_row_wins() {
        let grid = RawGrid::new(vec![
            text_row(&["Vocabulary list", "", ""]),
            text_row(&["Hanzi only", "", ""]),
            text_row(&["notes", "", ""]),
            text_row(&["Hanzi", "Pinyin", "Meaning"]),
            text_row(&["Hán tự", "Phiên âm", "Nghĩa"]),
        ]);
        assert_eq!(locate_header_row("HSK1", &grid), 3);
    }

    #[test]
    fn single_keyword_cell_does_not_qualify() {
        let grid = RawGrid::new(vec![
            text_row(&["Hanzi", "col b", "col c"]),
            text_row(&["你好", "x", "y"]),
        ]);
        assert_eq!(locate_header_row("HSK1", &grid), 0);
    }

    #[test]
    fn no_match_in_probe_window_defaults_to_zero() {
        let mut rows = Vec::new();
        for _ in 0..25 {
            rows.push(text_row(&["a", "b", "c"]));
        }
        // A real header beyond row 20 is out of reach.
        rows.push(text_row(&["Hanzi", "Pinyin", "Meaning"]));
        let grid = RawGrid::new(rows);
        assert_eq!(locate_header_row("deep", &grid), 0);
    }

    #[test]
    fn keyword_match_ignores_case_and_surrounding_space() {
        let grid = RawGrid::new(vec![text_row(&["  HANZI  ", " NGHĨA "])]);
        assert_eq!(locate_header_row("s", &grid), 0);
        // Still index 0, but because it qualified, not as a fallback: a
        // later header must lose to it.
        let grid = RawGrid::new(vec![
            text_row(&["  HANZI  ", " NGHĨA "]),
            text_row(&["Hanzi", "Meaning"]),
        ]);
        assert_eq!(locate_header_row("s", &grid), 0);
    }

    #[test]
    fn numeric_cells_never_match() {
        let grid = RawGrid::new(vec![
            vec![CellValue::Number(1.0), CellValue::Number(2.0)],
            text_row(&["Hanzi", "Meaning"]),
        ]);
        assert_eq!(locate_header_row("s", &grid), 1);
    }
}
