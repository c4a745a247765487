//! Infrastructure layer providing abstractions for external dependencies.
//!
//! This module contains traits and implementations for:
//! - DNS resolution
//! - Host and process statistics
//!
//! The lookup history store lives in [`crate::store`].

pub mod dns;
pub mod system;

pub use dns::{resolve_ipv4, DnsResolver, HickoryDnsResolver, NotFoundReason, ResolveOutcome};
pub use system::{load_average, process_stats, ProcessStats};
