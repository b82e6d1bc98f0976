pub mod adapter;
pub mod error;
pub mod json_store;
pub mod memory;
pub mod store;

pub use adapter::{SubmissionAdapter, SubmissionReceipt};
pub use error::{StoreError, SubmitError};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;
pub use store::{AttributedRecord, VocabularyStore};
