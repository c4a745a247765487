//! DNS resolution infrastructure.
//!
//! Provides a trait-based abstraction for A-record lookups so the lookup
//! pipeline can run against a mock resolver in tests.

use hickory_resolver::{
    config::{ResolverConfig, ResolverOpts},
    TokioAsyncResolver,
};
use std::{future::Future, pin::Pin, sync::Arc};

use crate::shared::validator::is_ipv4;

/// Why a lookup produced no usable addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// The lookup failed or returned an empty answer.
    NoRecords,
    /// The answer had entries but none of them were IPv4 addresses.
    NoIpv4Records,
}

impl NotFoundReason {
    pub fn message(&self) -> &'static str {
        match self {
            NotFoundReason::NoRecords => "No records found for the domain.",
            NotFoundReason::NoIpv4Records => "No IPv4 records found for the domain.",
        }
    }
}

/// Normalized result of an IPv4 resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Non-empty list of IPv4 addresses, in resolver order.
    Found(Vec<String>),
    NotFound(NotFoundReason),
}

/// Trait for DNS A-record resolution.
///
/// This abstraction allows for different DNS resolver implementations
/// and makes testing easier by allowing mock implementations.
pub trait DnsResolver: Send + Sync {
    /// Looks up the A records of `host`.
    ///
    /// Returns the raw answer as strings; any resolver failure, including
    /// NXDOMAIN, is reported as `Err` with a description.
    fn lookup_a<'a>(
        &'a self,
        host: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, String>> + Send + 'a>>;
}

/// DNS resolver implementation using hickory-resolver (formerly trust-dns).
#[derive(Clone)]
pub struct HickoryDnsResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryDnsResolver {
    /// Creates a resolver from the host's system configuration
    /// (`/etc/resolv.conf` on Unix), falling back to the library defaults.
    pub fn from_system_conf() -> Self {
        let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
            Ok(resolver) => resolver,
            Err(e) => {
                tracing::warn!(error = %e, "System DNS configuration unavailable, using defaults");
                TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
            }
        };

        Self {
            resolver: Arc::new(resolver),
        }
    }
}

impl DnsResolver for HickoryDnsResolver {
    fn lookup_a<'a>(
        &'a self,
        host: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<String>, String>> + Send + 'a>> {
        Box::pin(async move {
            match self.resolver.ipv4_lookup(host).await {
                Ok(response) => Ok(response.iter().map(|record| record.to_string()).collect()),
                Err(e) => Err(format!("DNS lookup failed: {}", e)),
            }
        })
    }
}

/// Resolves `domain` to its IPv4 addresses.
///
/// Lookup errors and empty answers collapse into
/// [`NotFoundReason::NoRecords`]; an answer whose entries all fail the IPv4
/// check becomes [`NotFoundReason::NoIpv4Records`].
pub async fn resolve_ipv4(resolver: &dyn DnsResolver, domain: &str) -> ResolveOutcome {
    let records = match resolver.lookup_a(domain).await {
        Ok(records) => records,
        Err(e) => {
            tracing::debug!(domain, error = %e, "DNS lookup failed");
            return ResolveOutcome::NotFound(NotFoundReason::NoRecords);
        }
    };

    if records.is_empty() {
        return ResolveOutcome::NotFound(NotFoundReason::NoRecords);
    }

    let addresses: Vec<String> = records.into_iter().filter(|ip| is_ipv4(ip)).collect();
    if addresses.is_empty() {
        ResolveOutcome::NotFound(NotFoundReason::NoIpv4Records)
    } else {
        ResolveOutcome::Found(addresses)
    }
}
