pub mod config;
pub mod error;
pub mod infra;
pub mod metrics;
pub mod routes;
pub mod shared;
pub mod state;
pub mod store;
pub mod tools;

pub use config::Config;
pub use error::AppError;
pub use routes::router;
pub use state::AppState;
pub use store::LookupRecord;
