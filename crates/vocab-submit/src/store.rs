//! The persistence collaborator boundary.

use vocab_model::VocabularyRecord;

use crate::error::StoreError;

/// A canonical record stamped with the principal it is attributed to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AttributedRecord {
    #[serde(flatten)]
    pub record: VocabularyRecord,
    /// Owner identifier of the authenticated principal.
    pub created_by: String,
}

/// A persistence collaborator that accepts one batch of attributed
/// records per call.
///
/// Access control and transactional semantics belong to the
/// implementation; the adapter only guarantees a single whole-batch call
/// and relays the result unchanged. Duplicate headwords across repeated
/// submissions are not deduplicated here.
pub trait VocabularyStore {
    fn insert_batch(&self, records: &[AttributedRecord]) -> Result<(), StoreError>;
}
