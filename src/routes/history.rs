use axum::{extract::State, Json};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::{LookupRecord, DEFAULT_HISTORY_LIMIT};

pub async fn list_history(State(state): State<AppState>) -> Result<Json<Vec<LookupRecord>>, AppError> {
    state
        .store
        .list_recent(DEFAULT_HISTORY_LIMIT)
        .await
        .map(Json)
        .map_err(|e| {
            tracing::error!(error = %e, "Error fetching documents");
            AppError::HistoryUnavailable
        })
}
