use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info};

use super::{EphemeralStore, StoreError};

// Upper bound for deadlines when a TTL would overflow `Instant`.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);
const MIN_CLEANUP_INTERVAL: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
struct Entry {
    value: Vec<u8>,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Sharded in-process TTL map.
///
/// Expiry is checked lazily on every read; [`InMemoryStore::spawn_cleanup`]
/// additionally sweeps entries that are never read again.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: DashMap<String, Entry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a background sweep every `interval`.
    ///
    /// The task only holds a weak reference and ends once the store is dropped.
    pub fn spawn_cleanup(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let store = Arc::downgrade(self);
        let interval = interval.max(MIN_CLEANUP_INTERVAL);
        info!("Starting store cleanup every {:?}", interval);

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // First tick fires immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(store) = store.upgrade() else {
                    debug!("Store dropped, stopping cleanup task");
                    break;
                };
                let removed = store.sweep();
                if removed > 0 {
                    debug!("Cleanup removed {} expired entries", removed);
                }
            }
        })
    }

    fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut removed = 0;
        self.entries.retain(|_, entry| {
            let keep = !entry.is_expired(now);
            if !keep {
                removed += 1;
            }
            keep
        });
        removed
    }
}

#[async_trait]
impl EphemeralStore for InMemoryStore {
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError> {
        let now = Instant::now();
        let expires_at = now
            .checked_add(ttl)
            .unwrap_or_else(|| now + FAR_FUTURE);
        self.entries
            .insert(key.to_string(), Entry { value, expires_at });
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let now = Instant::now();
        {
            let Some(entry) = self.entries.get(key) else {
                return Ok(None);
            };
            if !entry.is_expired(now) {
                return Ok(Some(entry.value.clone()));
            }
        }
        // Re-checked under the shard lock so a fresh concurrent `set` survives.
        self.entries.remove_if(key, |_, entry| entry.is_expired(now));
        Ok(None)
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let now = Instant::now();
        Ok(self
            .entries
            .remove(key)
            .is_some_and(|(_, entry)| !entry.is_expired(now)))
    }

    async fn purge_expired(&self) -> Result<usize, StoreError> {
        Ok(self.sweep())
    }

    async fn len(&self) -> Result<usize, StoreError> {
        let now = Instant::now();
        Ok(self
            .entries
            .iter()
            .filter(|entry| !entry.is_expired(now))
            .count())
    }
}
