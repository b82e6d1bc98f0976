//! Error types for batch submission.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a persistence collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the batch (authorization, constraint, quota).
    #[error("{0}")]
    Rejected(String),

    /// Failed to write to a file-backed store.
    #[error("failed to write store file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to encode records for the store.
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors surfaced by the submission adapter.
///
/// Store errors pass through unchanged; the previously computed batch
/// stays intact on the caller's side and can be resubmitted without
/// recomputation.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// There were no accepted records to submit.
    #[error("nothing to submit: the batch has no accepted records")]
    EmptyBatch,

    /// The persistence collaborator rejected the batch.
    #[error(transparent)]
    Store(#[from] StoreError),
}
