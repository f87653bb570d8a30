use crate::{
    error::ProcessingError,
    model::{Importable, ScorerResult},
    scorers::Scorer,
    storage::{EphemeralStore, EphemeralStoreExt},
};
use metrics::{counter, histogram};
use std::{marker::PhantomData, sync::Arc};
#[cfg(not(test))]
use tracing::{debug, info, warn};
#[cfg(test)]
use {println as debug, println as info, println as warn};

/// Looks up stored submissions and scores them on demand.
pub struct Processor<P: Importable, S: Scorer<P>> {
    scorer: S,
    store: Arc<dyn EphemeralStore>,
    _phantom: PhantomData<fn() -> P>,
}

impl<P, S> Processor<P, S>
where
    P: Importable,
    S: Scorer<P>,
{
    pub fn new(scorer: S, store: Arc<dyn EphemeralStore>) -> Self {
        info!("Initializing new Processor");
        Self {
            scorer,
            store,
            _phantom: PhantomData,
        }
    }

    /// Every rule the stored model triggered.
    pub async fn score(&self, id: &str) -> Result<Vec<ScorerResult>, ProcessingError> {
        let processible = self.fetch(id).await?;
        let results = self.scorer.score(&processible);
        debug!("Scored {}: {:?}", id, results);
        Ok(results)
    }

    pub async fn points(&self, id: &str) -> Result<i64, ProcessingError> {
        let points: i64 = self.score(id).await?.iter().map(|r| r.score).sum();

        counter!("receipts_scored_total").increment(1);
        histogram!("receipts_points").record(points as f64);
        info!("Computed {} points for {}", points, id);

        Ok(points)
    }

    async fn fetch(&self, id: &str) -> Result<P, ProcessingError> {
        let loaded: Result<Option<P>, _> = self.store.get_decoded(id).await;
        match loaded {
            Ok(Some(processible)) => Ok(processible),
            Ok(None) => {
                counter!("receipts_not_found_total").increment(1);
                debug!("No live entry for {}", id);
                Err(ProcessingError::NotFound(id.to_string()))
            }
            Err(e) => {
                warn!("Failed to load {}: {}", id, e);
                Err(e.into())
            }
        }
    }
}
