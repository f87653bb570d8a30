use std::error::Error;
use std::sync::Arc;

use processing::{
    executable_utils::{
        AppState, initialize_executable, initialize_tracing, install_metrics_recorder,
        run_backend,
    },
    importer::{Importer, UuidGenerator},
    processor::Processor,
    scorers::get_receipt_scorer,
    storage::InMemoryStore,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    println!("Starting backend...");
    let config = initialize_executable()?;
    initialize_tracing(&config.backend.log_level);

    let metrics = match install_metrics_recorder() {
        Ok(handle) => Some(handle),
        Err(e) => {
            tracing::warn!(error = %e, "Metrics recorder unavailable, /metrics disabled");
            None
        }
    };

    let store = Arc::new(InMemoryStore::new());
    let cleanup = store.spawn_cleanup(config.store.cleanup_interval());

    let importer = Arc::new(Importer::new(
        store.clone(),
        Arc::new(UuidGenerator),
        config.store.receipt_ttl(),
    ));
    let processor = Arc::new(Processor::new(get_receipt_scorer(), store));

    let result = run_backend(config.backend, AppState::new(importer, processor, metrics)).await;
    cleanup.abort();
    result
}
