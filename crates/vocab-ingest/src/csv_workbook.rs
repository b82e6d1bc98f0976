//! CSV workbook decoding: one sheet per file, a directory as a workbook.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use vocab_model::{CellValue, RawGrid, Sheet};

use crate::error::DecodeError;

fn normalize_cell(raw: &str) -> CellValue {
    let value = raw.trim_matches('\u{feff}');
    if value.trim().is_empty() {
        CellValue::Missing
    } else {
        CellValue::Text(value.to_string())
    }
}

fn sheet_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

/// Reads one CSV file as one sheet, named after the file stem.
///
/// Every record becomes a grid row, empty-field rows included, so grid
/// positions match what an author sees in the file. No header
/// interpretation happens here; header discovery runs later over the
/// raw grid.
pub fn read_csv_sheet(path: &Path) -> Result<Sheet, DecodeError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| DecodeError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| DecodeError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(normalize_cell).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "decoded csv sheet");
    Ok(Sheet::new(sheet_name(path), RawGrid::new(rows)))
}

/// Reads a directory of CSV files as a multi-sheet workbook.
///
/// Files are taken in name order so the sheet sequence is deterministic;
/// non-CSV entries are ignored.
pub fn read_csv_dir(path: &Path) -> Result<Vec<Sheet>, DecodeError> {
    let entries = std::fs::read_dir(path).map_err(|source| DecodeError::DirectoryRead {
        path: path.to_path_buf(),
        source,
    })?;
    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DecodeError::DirectoryRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file_path = entry.path();
        let is_csv = file_path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
        if file_path.is_file() && is_csv {
            files.push(file_path);
        }
    }
    files.sort();
    let mut sheets = Vec::with_capacity(files.len());
    for file in &files {
        sheets.push(read_csv_sheet(file)?);
    }
    Ok(sheets)
}
