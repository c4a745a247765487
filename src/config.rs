use std::{env, time::Duration};

/// Which [`HistoryStore`](crate::store::HistoryStore) backend to run with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Sled,
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sled" => Some(Self::Sled),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: String,
    pub store_backend: StoreBackend,
    pub shutdown_grace: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_path: env::var("DATA_PATH").unwrap_or_else(|_| "data/tools_api".to_string()),
            store_backend: env::var("STORE_BACKEND")
                .ok()
                .and_then(|b| StoreBackend::parse(&b))
                .unwrap_or(StoreBackend::Sled),
            shutdown_grace: Duration::from_secs(
                env::var("SHUTDOWN_GRACE_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
            ),
        }
    }
}

/// Whether the process runs inside a Kubernetes pod.
pub fn running_in_kubernetes() -> bool {
    env::var_os("KUBERNETES_SERVICE_HOST").is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_store_backend() {
        assert_eq!(StoreBackend::parse("sled"), Some(StoreBackend::Sled));
        assert_eq!(StoreBackend::parse(" Memory "), Some(StoreBackend::Memory));
        assert_eq!(StoreBackend::parse("mongodb"), None);
    }
}
