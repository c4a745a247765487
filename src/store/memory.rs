//! In-process lookup history, lost on restart.

use serde_json::json;
use tokio::sync::RwLock;

use super::{HistoryStore, LookupRecord, StoreFuture, StoreResult, StoreStatus, HISTORY_COLLECTION};

#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    records: RwLock<Vec<LookupRecord>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn insert(&self, record: LookupRecord) -> StoreFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            self.records.write().await.push(record);
            Ok(())
        })
    }

    fn list_recent(&self, limit: usize) -> StoreFuture<'_, StoreResult<Vec<LookupRecord>>> {
        Box::pin(async move {
            let records = self.records.read().await;
            Ok(records.iter().rev().take(limit).cloned().collect())
        })
    }

    fn status(&self) -> StoreFuture<'_, StoreStatus> {
        Box::pin(async move {
            let records = self.records.read().await.len();
            StoreStatus::up(json!({
                "collection": HISTORY_COLLECTION,
                "records": records,
                "backend": "memory",
            }))
        })
    }
}
