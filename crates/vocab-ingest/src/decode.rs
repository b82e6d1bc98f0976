//! Workbook decoding entry point.

use std::path::Path;

use vocab_model::Workbook;

use crate::csv_workbook::{read_csv_dir, read_csv_sheet};
use crate::error::DecodeError;
use crate::json::read_json_workbook;

/// Decodes a workbook from a path.
///
/// Accepts a directory of CSV files (one sheet per file, name order), a
/// single CSV file (a one-sheet workbook), or a JSON workbook. Any decode
/// failure is fatal for the whole operation; no partial workbook is
/// produced.
pub fn decode_workbook(path: &Path) -> Result<Workbook, DecodeError> {
    if !path.exists() {
        return Err(DecodeError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let workbook = if path.is_dir() {
        Workbook::new(read_csv_dir(path)?)
    } else {
        let extension = path
            .extension()
            .map(|ext| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.to_str() {
            Some("csv") => Workbook::new(vec![read_csv_sheet(path)?]),
            Some("json") => read_json_workbook(path)?,
            _ => {
                return Err(DecodeError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        }
    };
    if workbook.sheets.is_empty() {
        return Err(DecodeError::EmptyWorkbook {
            path: path.to_path_buf(),
        });
    }
    Ok(workbook)
}
