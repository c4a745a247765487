//! Shared utilities used across the DNS tools API.
//!
//! Pure helpers with no I/O: input validation and timestamps.

pub mod timing;
pub mod validator;

pub use timing::{unix_millis, unix_seconds};
pub use validator::{is_fqdn, is_ipv4};
