use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Failed to decode value stored under {key}: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Key to opaque bytes, with a time-to-live per entry.
///
/// An expired entry is indistinguishable from one that was never written:
/// `get` returns `Ok(None)` for both.
#[async_trait]
pub trait EphemeralStore: Send + Sync {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Returns `true` if a live entry was removed.
    async fn remove(&self, key: &str) -> Result<bool, StoreError>;

    /// Drops every expired entry and returns how many were dropped.
    async fn purge_expired(&self) -> Result<usize, StoreError>;

    /// Number of live entries.
    async fn len(&self) -> Result<usize, StoreError>;
}

/// JSON (de)serialization on top of any [`EphemeralStore`].
#[async_trait]
pub trait EphemeralStoreExt: EphemeralStore {
    async fn put<V>(&self, key: &str, value: &V, ttl: Duration) -> Result<(), StoreError>
    where
        V: Serialize + Sync + ?Sized,
    {
        let bytes = serde_json::to_vec(value).map_err(StoreError::Encode)?;
        self.set(key, bytes, ttl).await
    }

    async fn get_decoded<V>(&self, key: &str) -> Result<Option<V>, StoreError>
    where
        V: DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StoreError::Decode {
                    key: key.to_string(),
                    source,
                }),
            None => Ok(None),
        }
    }
}

impl<S: EphemeralStore + ?Sized> EphemeralStoreExt for S {}
