pub mod lookup;
pub mod types;
pub mod validate;

pub use lookup::{lookup_domain, record_lookup};
pub use types::*;
pub use validate::validate_ip;
