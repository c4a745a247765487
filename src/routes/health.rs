use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::config::running_in_kubernetes;
use crate::infra::system::{load_average, process_stats};
use crate::shared::{unix_millis, unix_seconds};
use crate::state::AppState;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `GET /`: build and deployment information.
pub async fn service_info() -> impl IntoResponse {
    Json(json!({
        "version": VERSION,
        "date": unix_seconds(),
        "kubernetes": running_in_kubernetes(),
    }))
}

/// `GET /health`: store reachability plus host and process load.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let memory = match process_stats() {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!(error = %e, "Error fetching health");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "down", "error": "Error fetching health" })),
            );
        }
    };

    let store = state.store.status().await;
    let db_stats = match (store.stats, store.error) {
        (Some(stats), _) => stats,
        (None, Some(error)) => json!({ "error": error }),
        (None, None) => serde_json::Value::Null,
    };

    let database = if store.operational { "connected" } else { "disconnected" };

    (
        StatusCode::OK,
        Json(json!({
            "status": "up",
            "timestamp": unix_millis(),
            "version": VERSION,
            "services": {
                "database": database,
                "dbStats": db_stats,
            },
            "system": {
                "cpuLoad": load_average(),
                "memoryUsage": memory,
            },
        })),
    )
}
