#![allow(dead_code)]

use async_trait::async_trait;
use mockall::mock;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use axum::Router;
use processing::{
    executable_utils::{AppState, build_router},
    importer::{IdGenerator, Importer},
    model::{Item, ModelId, Receipt},
    processor::Processor,
    scorers::{RuleBasedScorer, get_receipt_scorer},
    storage::{EphemeralStore, InMemoryStore, StoreError},
};

mock! {
    pub Store {}

    #[async_trait]
    impl EphemeralStore for Store {
        async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError>;
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;
        async fn remove(&self, key: &str) -> Result<bool, StoreError>;
        async fn purge_expired(&self) -> Result<usize, StoreError>;
        async fn len(&self) -> Result<usize, StoreError>;
    }
}

/// Hands out `receipt-1`, `receipt-2`, ...
#[derive(Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequenceIdGenerator {
    fn generate(&self) -> ModelId {
        format!("receipt-{}", self.next.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

pub const TEST_TTL: Duration = Duration::from_secs(60);

pub type ReceiptProcessor = Processor<Receipt, RuleBasedScorer<Receipt>>;

pub fn corner_market_receipt() -> Receipt {
    Receipt {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        total: "9.00".to_string(),
        items: vec![Item::new("Gatorade", "2.25"); 4],
    }
}

pub fn target_receipt() -> Receipt {
    Receipt {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        total: "35.35".to_string(),
        items: vec![
            Item::new("Mountain Dew 12PK", "6.49"),
            Item::new("Emils Cheese Pizza", "12.25"),
            Item::new("Knorr Creamy Chicken", "1.26"),
            Item::new("Doritos Nacho Cheese", "3.35"),
            Item::new("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
    }
}

pub fn create_workflow(
    store: Arc<dyn EphemeralStore>,
    ttl: Duration,
) -> (Arc<Importer<Receipt>>, Arc<ReceiptProcessor>) {
    let importer = Arc::new(Importer::new(
        store.clone(),
        Arc::new(SequenceIdGenerator::default()),
        ttl,
    ));
    let processor = Arc::new(Processor::new(get_receipt_scorer(), store));
    (importer, processor)
}

pub fn create_test_app(store: Arc<dyn EphemeralStore>) -> Router {
    let (importer, processor) = create_workflow(store, TEST_TTL);
    build_router(AppState::new(importer, processor, None))
}

pub fn create_in_memory_app() -> Router {
    create_test_app(Arc::new(InMemoryStore::new()))
}
