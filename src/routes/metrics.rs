use std::{net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, MatchedPath, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::metrics::{PROMETHEUS_CONTENT_TYPE, UNMATCHED_ROUTE};
use crate::state::AppState;

pub async fn export_metrics(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        state.metrics.export_prometheus().await,
    )
}

/// Times each request, feeds the duration histogram and writes one access
/// log line.
///
/// The histogram is labelled with the route template (`/api-docs/*path`),
/// never the concrete path.
pub async fn track_requests(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());
    let client_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(peer)| peer.ip().to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;

    let elapsed = start.elapsed();
    let status = response.status().as_u16();
    tracing::info!(
        "{} {} - Status: {} - Duration: {}ms - IP: {}",
        method,
        uri,
        status,
        elapsed.as_millis(),
        client_ip
    );

    state
        .metrics
        .observe_request(
            method.as_str(),
            &route,
            status,
            elapsed.as_secs_f64() * 1000.0,
        )
        .await;

    response
}
