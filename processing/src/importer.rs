use std::{marker::PhantomData, sync::Arc, time::Duration};

use metrics::counter;
use uuid::Uuid;

use crate::{
    error::ProcessingError,
    model::{Importable, ModelId},
    storage::{EphemeralStore, EphemeralStoreExt},
};

/// Source of fresh, globally unique ids.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ModelId;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ModelId {
        Uuid::new_v4().to_string()
    }
}

/// Accepts submissions and parks them in the ephemeral store.
pub struct Importer<I: Importable> {
    store: Arc<dyn EphemeralStore>,
    id_generator: Arc<dyn IdGenerator>,
    ttl: Duration,
    _phantom: PhantomData<fn(I)>,
}

impl<I: Importable> Importer<I> {
    pub fn new(
        store: Arc<dyn EphemeralStore>,
        id_generator: Arc<dyn IdGenerator>,
        ttl: Duration,
    ) -> Self {
        tracing::info!("Initializing new Importer with ttl {:?}", ttl);
        Self {
            store,
            id_generator,
            ttl,
            _phantom: PhantomData,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn import(&self, importable: &I) -> Result<ModelId, ProcessingError> {
        let id = self.id_generator.generate();
        tracing::debug!("Storing importable under {}", id);

        self.store.put(&id, importable, self.ttl).await?;
        counter!("receipts_imported_total").increment(1);
        tracing::info!("Successfully imported {}", id);

        Ok(id)
    }
}
