//! Error types for workbook decoding.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding an uploaded workbook.
///
/// Decode failures are fatal for the whole operation: no partial batch is
/// ever produced from a workbook that could not be read.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Workbook path does not exist.
    #[error("workbook not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV sheet.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Failed to parse a JSON workbook.
    #[error("failed to parse workbook JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// File extension does not match a supported workbook format.
    #[error("unsupported workbook format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Workbook decoded successfully but contains no sheets.
    #[error("workbook has no sheets: {path}")]
    EmptyWorkbook { path: PathBuf },
}
