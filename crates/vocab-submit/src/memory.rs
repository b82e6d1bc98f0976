//! In-memory store, mainly for tests and dry runs.

use std::sync::Mutex;

use crate::error::StoreError;
use crate::store::{AttributedRecord, VocabularyStore};

/// Collects batches in memory; can be told to reject every insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<AttributedRecord>>,
    reject_with: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that rejects every batch with the given message.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            reject_with: Some(message.into()),
        }
    }

    /// Everything inserted so far, in insertion order.
    pub fn records(&self) -> Vec<AttributedRecord> {
        self.records.lock().expect("store lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VocabularyStore for MemoryStore {
    fn insert_batch(&self, records: &[AttributedRecord]) -> Result<(), StoreError> {
        if let Some(message) = &self.reject_with {
            return Err(StoreError::Rejected(message.clone()));
        }
        self.records
            .lock()
            .expect("store lock poisoned")
            .extend_from_slice(records);
        Ok(())
    }
}
