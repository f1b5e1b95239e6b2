use std::sync::Arc;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, header::InvalidHeaderValue, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

use crate::error::ApiError;
use crate::state::AppState;

use super::FileQuery;

const GET_FAILED: &str = "Unable to get file";

/// Content type of `/view-file`, whatever the object really is / 预览固定类型
pub const VIEW_CONTENT_TYPE: &str = "image/jpeg";

/// `attachment; filename=<key>`, control characters in the key written as spaces
fn attachment_disposition(key: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let value: String = format!("attachment; filename={}", key)
        .chars()
        .map(|c| if c.is_control() && c != '\t' { ' ' } else { c })
        .collect();
    HeaderValue::from_str(&value)
}

/// Open the object and wrap it as a streaming body / 打开对象并转为流式响应体
async fn open_body(state: &AppState, key: &str) -> Result<Body, ApiError> {
    let reader = state.store
        .open_reader(key)
        .await
        .map_err(|e| ApiError::storage(GET_FAILED, e.context(format!("open {}", key))))?;

    Ok(Body::from_stream(ReaderStream::new(reader)))
}

/// GET /download-file?file=<key> - 以附件形式下载对象
pub async fn fs_download(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Response, ApiError> {
    let key = query.key()?;

    let disposition = attachment_disposition(key)
        .map_err(|e| ApiError::storage(GET_FAILED, anyhow::anyhow!("invalid header for {}: {}", key, e)))?;

    let body = open_body(&state, key).await?;
    tracing::debug!("fs_download: key={}", key);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_DISPOSITION, disposition),
            (header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream")),
        ],
        body,
    ).into_response())
}

/// GET /view-file?file=<key> - 在浏览器中预览对象（固定为 image/jpeg）
pub async fn fs_view(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileQuery>,
) -> Result<Response, ApiError> {
    let key = query.key()?;

    let body = open_body(&state, key).await?;
    tracing::debug!("fs_view: key={}", key);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(VIEW_CONTENT_TYPE))],
        body,
    ).into_response())
}
