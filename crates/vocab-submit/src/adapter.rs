//! The submission adapter: stamp, submit once, relay the result.

use tracing::info;

use vocab_model::VocabularyRecord;

use crate::error::SubmitError;
use crate::store::{AttributedRecord, VocabularyStore};

/// Outcome of a successful submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SubmissionReceipt {
    /// Number of records handed to the store.
    pub inserted: usize,
}

/// Hands an accepted sequence to the persistence collaborator as one
/// batch, attributing every record to the calling principal.
///
/// All-or-nothing behavior is the store's concern, not the adapter's; on
/// failure the caller's batch is untouched and resubmitting the same
/// sequence is valid from this component's point of view.
pub struct SubmissionAdapter<S: VocabularyStore> {
    store: S,
}

impl<S: VocabularyStore> SubmissionAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Submits the full accepted sequence in one store call.
    pub fn submit(
        &self,
        records: &[VocabularyRecord],
        owner_id: &str,
    ) -> Result<SubmissionReceipt, SubmitError> {
        if records.is_empty() {
            return Err(SubmitError::EmptyBatch);
        }
        let attributed: Vec<AttributedRecord> = records
            .iter()
            .map(|record| AttributedRecord {
                record: record.clone(),
                created_by: owner_id.to_string(),
            })
            .collect();
        self.store.insert_batch(&attributed)?;
        info!(
            count = attributed.len(),
            owner = %owner_id,
            "submitted vocabulary batch"
        );
        Ok(SubmissionReceipt {
            inserted: attributed.len(),
        })
    }
}
