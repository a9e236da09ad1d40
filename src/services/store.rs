use crate::models::PaymentRecord;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Store of payment records keyed by gateway reference.
///
/// All four HTTP operations share one instance; concurrent updates to the
/// same reference are last-write-wins on the whole record.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get(&self, reference: &str) -> Option<PaymentRecord>;

    /// Create or overwrite the full record for a reference.
    async fn put(&self, reference: &str, record: PaymentRecord);

    /// Update only the status. Creates a bare record (no `created_at`) when
    /// the reference has not been seen before.
    async fn upsert_status(&self, reference: &str, status: &str);

    async fn len(&self) -> usize;
}

/// Process-lifetime store. Unbounded; records are never evicted or
/// persisted, so everything is lost on restart.
#[derive(Default)]
pub struct InMemoryStore {
    records: RwLock<HashMap<String, PaymentRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn get(&self, reference: &str) -> Option<PaymentRecord> {
        self.records.read().await.get(reference).cloned()
    }

    async fn put(&self, reference: &str, record: PaymentRecord) {
        self.records
            .write()
            .await
            .insert(reference.to_string(), record);
    }

    async fn upsert_status(&self, reference: &str, status: &str) {
        let mut records = self.records.write().await;
        records
            .entry(reference.to_string())
            .and_modify(|record| record.status = status.to_string())
            .or_insert_with(|| PaymentRecord {
                status: status.to_string(),
                created_at: None,
            });
    }

    async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}
