//! Failures surfaced by the loader, the trainer and the prediction service.
//! Each one propagates synchronously to the caller unmodified: no retries,
//! no fallback values.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The dataset file is missing or unreadable.
    #[error("failed to read the dataset at {path:?}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The loaded columns or the submitted features do not match the fixed schema.
    #[error("schema mismatch: {reason}")]
    Schema { reason: String },

    /// The dataset cannot produce a valid model.
    #[error("training failed: {reason}")]
    Training { reason: &'static str },
}
