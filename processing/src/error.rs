use thiserror::Error;

use crate::model::ModelId;
use crate::storage::StoreError;

/// Outcomes of the submit/retrieve workflow that callers must handle.
#[derive(Debug, Error)]
pub enum ProcessingError {
    /// The id was never issued, or its entry has expired.
    #[error("No receipt found for id {0}")]
    NotFound(ModelId),

    #[error("Stored receipt {id} could not be decoded: {source}")]
    Decode {
        id: ModelId,
        #[source]
        source: serde_json::Error,
    },

    #[error("Receipt could not be encoded for storage: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for ProcessingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Encode(source) => ProcessingError::Encode(source),
            StoreError::Decode { key, source } => ProcessingError::Decode { id: key, source },
            StoreError::Backend(message) => ProcessingError::Storage(message),
        }
    }
}
