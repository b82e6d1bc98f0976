//! JSON workbook decoding.
//!
//! The JSON form mirrors the decoded model directly:
//!
//! ```json
//! {
//!   "sheets": [
//!     { "name": "HSK1", "grid": [["Hán tự", "Pinyin"], ["你好", "nǐ hǎo"]] }
//!   ]
//! }
//! ```
//!
//! Cells are strings, numbers, or `null`.

use std::path::Path;

use tracing::debug;

use vocab_model::Workbook;

use crate::error::DecodeError;

/// Reads a JSON workbook file.
pub fn read_json_workbook(path: &Path) -> Result<Workbook, DecodeError> {
    let contents = std::fs::read_to_string(path).map_err(|source| DecodeError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    let workbook: Workbook =
        serde_json::from_str(&contents).map_err(|source| DecodeError::JsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(
        path = %path.display(),
        sheets = workbook.sheets.len(),
        "decoded json workbook"
    );
    Ok(workbook)
}
