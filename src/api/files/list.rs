use std::sync::Arc;
use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::state::AppState;

const LIST_FAILED: &str = "Unable to list files";

/// GET /list-files - 列出存储桶中所有对象键（递归）
pub async fn fs_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<String>>, ApiError> {
    let keys = state.store
        .list_keys()
        .await
        .map_err(|e| ApiError::storage(LIST_FAILED, e))?;

    tracing::debug!("fs_list: {} keys", keys.len());
    Ok(Json(keys))
}
