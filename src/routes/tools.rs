use std::net::SocketAddr;

use axum::{
    body::Bytes,
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap},
    Json,
};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::LookupRecord;
use crate::tools::{lookup_domain, record_lookup, validate_ip, LookupQuery, ValidateResponse};

pub async fn lookup(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    query: Option<Query<LookupQuery>>,
) -> Result<Json<LookupRecord>, AppError> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let client_ip = peer.ip().to_string();

    tracing::debug!(domain = ?query.domain, %client_ip, "Looking up domain");

    let record = lookup_domain(state.resolver.as_ref(), query.domain.as_deref(), &client_ip).await?;

    tracing::info!(
        domain = %record.domain,
        addresses = record.addresses.len(),
        "Lookup succeeded"
    );

    // Detached: the response does not wait for, or observe, the insert.
    record_lookup(state.store.clone(), record.clone());

    Ok(Json(record))
}

pub async fn validate(headers: HeaderMap, body: Bytes) -> Result<Json<ValidateResponse>, AppError> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    validate_ip(content_type, &body).map(Json)
}
