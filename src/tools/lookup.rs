//! Domain lookup pipeline.
//!
//! Validates the requested domain, resolves it, and builds the
//! [`LookupRecord`] returned to the caller. Persisting that record is a
//! separate, detached step so storage latency and failures never reach the
//! response.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::error::AppError;
use crate::infra::dns::{resolve_ipv4, DnsResolver, ResolveOutcome};
use crate::shared::{is_fqdn, unix_millis};
use crate::store::{HistoryStore, LookupRecord};

/// Runs the lookup for `domain` on behalf of `client_ip`.
///
/// Checks run in order and the first failure wins: a missing or empty
/// domain, a domain that is not an FQDN, then an unresolvable one.
pub async fn lookup_domain(
    resolver: &dyn DnsResolver,
    domain: Option<&str>,
    client_ip: &str,
) -> Result<LookupRecord, AppError> {
    let domain = match domain {
        Some(d) if !d.is_empty() => d,
        _ => {
            return Err(AppError::Validation(
                "Missing required 'domain' query parameter.",
            ))
        }
    };

    if !is_fqdn(domain) {
        return Err(AppError::Validation("Invalid 'domain' format."));
    }

    match resolve_ipv4(resolver, domain).await {
        ResolveOutcome::Found(addresses) => Ok(LookupRecord {
            addresses,
            client_ip: client_ip.to_string(),
            created_at: unix_millis(),
            domain: domain.to_string(),
        }),
        ResolveOutcome::NotFound(reason) => {
            tracing::debug!(domain, reason = reason.message(), "Lookup found nothing");
            Err(AppError::NotFound(reason))
        }
    }
}

/// Persists `record` in the background.
///
/// The returned handle may be dropped; failures are only logged.
pub fn record_lookup(store: Arc<dyn HistoryStore>, record: LookupRecord) -> JoinHandle<()> {
    tokio::spawn(async move {
        let domain = record.domain.clone();
        match store.insert(record).await {
            Ok(()) => tracing::debug!(%domain, "Lookup recorded"),
            Err(e) => tracing::error!(%domain, error = %e, "Error inserting document"),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::dns::NotFoundReason;
    use crate::store::{MemoryHistoryStore, StoreError, StoreFuture, StoreResult, StoreStatus};
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockResolver {
        records: Vec<String>,
        calls: AtomicUsize,
    }

    impl MockResolver {
        fn new(records: &[&str]) -> Self {
            Self {
                records: records.iter().map(|r| r.to_string()).collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl DnsResolver for MockResolver {
        fn lookup_a<'a>(
            &'a self,
            _host: &'a str,
        ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, String>> + Send + 'a>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let records = self.records.clone();
            Box::pin(async move { Ok(records) })
        }
    }

    struct FailingStore;

    impl HistoryStore for FailingStore {
        fn insert(&self, _record: LookupRecord) -> StoreFuture<'_, StoreResult<()>> {
            Box::pin(async { Err(StoreError::Database("connection refused".into())) })
        }

        fn list_recent(&self, _limit: usize) -> StoreFuture<'_, StoreResult<Vec<LookupRecord>>> {
            Box::pin(async { Err(StoreError::Database("connection refused".into())) })
        }

        fn status(&self) -> StoreFuture<'_, StoreStatus> {
            Box::pin(async { StoreStatus::down("connection refused") })
        }
    }

    #[tokio::test]
    async fn test_missing_domain() {
        let resolver = MockResolver::new(&["1.2.3.4"]);
        for domain in [None, Some("")] {
            let err = lookup_domain(&resolver, domain, "127.0.0.1").await.unwrap_err();
            assert_eq!(err.to_string(), "Missing required 'domain' query parameter.");
        }
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_invalid_domain_skips_resolution() {
        let resolver = MockResolver::new(&["1.2.3.4"]);
        let err = lookup_domain(&resolver, Some("invalid-domain"), "127.0.0.1")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid 'domain' format.");
        assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_not_found_reasons() {
        let empty = MockResolver::new(&[]);
        let err = lookup_domain(&empty, Some("example.com"), "127.0.0.1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundReason::NoRecords)));

        let v6_only = MockResolver::new(&["2001:db8::1"]);
        let err = lookup_domain(&v6_only, Some("example.com"), "127.0.0.1")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(NotFoundReason::NoIpv4Records)));
    }

    #[tokio::test]
    async fn test_successful_lookup_builds_record() {
        let resolver = MockResolver::new(&["140.82.121.4"]);
        let before = unix_millis();
        let record = lookup_domain(&resolver, Some("github.com"), "10.1.2.3")
            .await
            .unwrap();

        assert_eq!(record.addresses, vec!["140.82.121.4".to_string()]);
        assert_eq!(record.client_ip, "10.1.2.3");
        assert_eq!(record.domain, "github.com");
        assert!(record.created_at >= before);
    }

    #[tokio::test]
    async fn test_record_lookup_persists() {
        let store = Arc::new(MemoryHistoryStore::new());
        let record = LookupRecord {
            addresses: vec!["140.82.121.4".into()],
            client_ip: "10.1.2.3".into(),
            created_at: 42,
            domain: "github.com".into(),
        };

        record_lookup(store.clone(), record.clone()).await.unwrap();

        assert_eq!(store.list_recent(20).await.unwrap(), vec![record]);
    }

    #[tokio::test]
    async fn test_record_lookup_swallows_store_failure() {
        let record = LookupRecord {
            addresses: vec!["140.82.121.4".into()],
            client_ip: "10.1.2.3".into(),
            created_at: 42,
            domain: "github.com".into(),
        };

        // The task completes normally even though the insert failed.
        record_lookup(Arc::new(FailingStore), record).await.unwrap();
    }
}
