use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::infra::dns::{DnsResolver, HickoryDnsResolver};
use crate::metrics::Metrics;
use crate::store::{HistoryStore, MemoryHistoryStore, SledHistoryStore, StoreResult};

/// Shared handles passed to every route.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<dyn DnsResolver>,
    pub store: Arc<dyn HistoryStore>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(resolver: Arc<dyn DnsResolver>, store: Arc<dyn HistoryStore>) -> Self {
        Self {
            resolver,
            store,
            metrics: Arc::new(Metrics::new()),
        }
    }

    /// Wires the production resolver and the configured history store.
    pub fn from_config(config: &Config) -> StoreResult<Self> {
        let store: Arc<dyn HistoryStore> = match config.store_backend {
            StoreBackend::Sled => {
                tracing::info!(path = %config.data_path, "Opening lookup history");
                Arc::new(SledHistoryStore::open(&config.data_path)?)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using in-memory lookup history; records are lost on restart");
                Arc::new(MemoryHistoryStore::new())
            }
        };

        Ok(Self::new(Arc::new(HickoryDnsResolver::from_system_conf()), store))
    }
}
