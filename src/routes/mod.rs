pub mod docs;
pub mod health;
pub mod history;
pub mod metrics;
pub mod tools;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::error::AppError;
use crate::state::AppState;

/// Builds the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/metrics", get(metrics::export_metrics))
        .route("/api-docs", get(docs::docs_index))
        .route("/api-docs/*path", get(docs::docs_asset))
        .route("/v1/history", get(history::list_history))
        .route("/v1/tools/lookup", get(tools::lookup))
        .route("/v1/tools/validate", post(tools::validate))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            metrics::track_requests,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    AppError::RouteNotFound
}
