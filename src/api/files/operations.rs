use std::sync::Arc;
use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

use super::FileQuery;

const DELETE_FAILED: &str = "Unable to delete file";

/// DELETE /delete-file?file=<key> - 删除对象，成功后重定向到首页
pub async fn fs_delete(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Response, ApiError> {
    let key = query.key()?;

    state.store
        .delete(key)
        .await
        .map_err(|e| ApiError::storage(DELETE_FAILED, e.context(format!("delete {}", key))))?;

    tracing::debug!("fs_delete: removed key={}", key);
    Ok(Redirect::to("/").into_response())
}
