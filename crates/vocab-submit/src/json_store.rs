//! File-backed store: attributed records as JSON lines.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::StoreError;
use crate::store::{AttributedRecord, VocabularyStore};

/// Appends each attributed record as one JSON line.
///
/// Gives the CLI a concrete submission target; a real deployment swaps in
/// a database-backed [`VocabularyStore`] behind the same trait.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl VocabularyStore for JsonFileStore {
    fn insert_batch(&self, records: &[AttributedRecord]) -> Result<(), StoreError> {
        // Encode everything before touching the file so an encoding
        // failure never leaves a half-written batch behind.
        let mut lines = String::new();
        for record in records {
            lines.push_str(&serde_json::to_string(record)?);
            lines.push('\n');
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        file.write_all(lines.as_bytes())
            .map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        Ok(())
    }
}
