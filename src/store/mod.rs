//! Lookup history persistence.
//!
//! Records are append-only: nothing in this crate updates or deletes one
//! after it has been inserted.

pub mod memory;
pub mod sled_store;

pub use memory::MemoryHistoryStore;
pub use sled_store::SledHistoryStore;

use serde::{Deserialize, Serialize};
use std::{future::Future, pin::Pin};
use thiserror::Error;

/// Number of records returned by the history endpoint.
pub const DEFAULT_HISTORY_LIMIT: usize = 20;

/// Name of the collection (sled tree) holding lookup history.
pub const HISTORY_COLLECTION: &str = "ip_lookup_history";

/// Outcome of one successful domain-to-IPv4 resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupRecord {
    pub addresses: Vec<String>,
    pub client_ip: String,
    /// Milliseconds since the Unix epoch.
    pub created_at: u64,
    pub domain: String,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<sled::Error> for StoreError {
    fn from(e: sled::Error) -> Self {
        StoreError::Database(e.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Store reachability as reported to the health endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
    pub operational: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StoreStatus {
    pub fn up(stats: serde_json::Value) -> Self {
        Self {
            operational: true,
            stats: Some(stats),
            error: None,
        }
    }

    pub fn down(error: impl ToString) -> Self {
        Self {
            operational: false,
            stats: None,
            error: Some(error.to_string()),
        }
    }
}

pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Append-only history of lookup records.
///
/// Implementations must tolerate concurrent inserts and reads.
pub trait HistoryStore: Send + Sync {
    /// Appends one record.
    fn insert(&self, record: LookupRecord) -> StoreFuture<'_, StoreResult<()>>;

    /// Returns at most `limit` records, most recently inserted first.
    fn list_recent(&self, limit: usize) -> StoreFuture<'_, StoreResult<Vec<LookupRecord>>>;

    /// Reports whether the store is reachable. Never fails; errors are
    /// folded into [`StoreStatus::down`].
    fn status(&self) -> StoreFuture<'_, StoreStatus>;
}
