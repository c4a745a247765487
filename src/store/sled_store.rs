//! Sled-backed lookup history.
//!
//! Each record is one JSON document keyed by a monotonically increasing id
//! stored big-endian, so the tree's key order is insertion order.

use std::path::{Path, PathBuf};

use serde_json::json;
use sled::{Db, Tree};

use super::{
    HistoryStore, LookupRecord, StoreError, StoreFuture, StoreResult, StoreStatus,
    HISTORY_COLLECTION,
};

pub struct SledHistoryStore {
    db: Db,
    history: Tree,
    path: Option<PathBuf>,
}

impl std::fmt::Debug for SledHistoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SledHistoryStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SledHistoryStore {
    /// Open or create a store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let db = sled::open(path.as_ref())?;
        Self::from_db(db, Some(path.as_ref().to_path_buf()))
    }

    /// Open a store that is discarded when dropped.
    pub fn open_temporary() -> StoreResult<Self> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::from_db(db, None)
    }

    fn from_db(db: Db, path: Option<PathBuf>) -> StoreResult<Self> {
        let history = db.open_tree(HISTORY_COLLECTION)?;
        Ok(Self { db, history, path })
    }

    /// Runs a sled operation on tokio's blocking pool.
    async fn blocking<T, F>(&self, op: F) -> StoreResult<T>
    where
        T: Send + 'static,
        F: FnOnce(Db, Tree) -> StoreResult<T> + Send + 'static,
    {
        let db = self.db.clone();
        let history = self.history.clone();
        tokio::task::spawn_blocking(move || op(db, history))
            .await
            .map_err(|e| StoreError::Database(format!("Store task failed: {}", e)))?
    }
}

impl HistoryStore for SledHistoryStore {
    fn insert(&self, record: LookupRecord) -> StoreFuture<'_, StoreResult<()>> {
        Box::pin(async move {
            self.blocking(move |db, history| {
                let id = db.generate_id()?;
                let document = serde_json::to_vec(&record)?;
                history.insert(id.to_be_bytes(), document)?;
                Ok(())
            })
            .await?;
            self.history.flush_async().await?;
            Ok(())
        })
    }

    fn list_recent(&self, limit: usize) -> StoreFuture<'_, StoreResult<Vec<LookupRecord>>> {
        Box::pin(async move {
            self.blocking(move |_, history| -> StoreResult<Vec<LookupRecord>> {
                history
                    .iter()
                    .rev()
                    .take(limit)
                    .map(|entry| {
                        let (_, document) = entry?;
                        serde_json::from_slice(&document).map_err(StoreError::from)
                    })
                    .collect()
            })
            .await
        })
    }

    fn status(&self) -> StoreFuture<'_, StoreStatus> {
        Box::pin(async move {
            let path = self.path.as_ref().map(|p| p.display().to_string());
            let stats = self
                .blocking(move |db, history| {
                    let size_on_disk = db.size_on_disk()?;
                    Ok(json!({
                        "collection": HISTORY_COLLECTION,
                        "records": history.len(),
                        "size_on_disk": size_on_disk,
                        "path": path,
                    }))
                })
                .await;

            match stats {
                Ok(stats) => StoreStatus::up(stats),
                Err(e) => {
                    tracing::error!(error = %e, "Error fetching store info");
                    StoreStatus::down(e)
                }
            }
        })
    }
}
