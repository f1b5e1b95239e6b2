use std::sync::Arc;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    response::{IntoResponse, Redirect, Response},
};
use bytes::Bytes;

use crate::error::ApiError;
use crate::state::AppState;
use crate::utils::{base_file_name, generate_unique_file_name};

/// Multipart field carrying uploads / 上传文件字段名
pub const FILE_FIELD: &str = "file";

const PARSE_FORM_FAILED: &str = "Unable to parse form";
const NO_FILES_UPLOADED: &str = "No files uploaded";
const UPLOAD_FAILED: &str = "Unable to upload file";

/// One file part read from the form / 表单中的一个文件
struct UploadedFile {
    filename: String,
    data: Bytes,
}

/// Read every `file` part of the form before anything is written / 先完整解析表单
async fn read_file_parts(mut multipart: Multipart) -> Result<Vec<UploadedFile>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        tracing::debug!("Upload: failed to read form: {}", e);
        ApiError::BadRequest(PARSE_FORM_FAILED)
    })? {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        // Parts without a file name are plain form values
        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => base_file_name(name).to_string(),
            _ => continue,
        };

        let data = field.bytes().await.map_err(|e| {
            tracing::debug!("Upload: failed to read part {}: {}", filename, e);
            ApiError::BadRequest(PARSE_FORM_FAILED)
        })?;

        files.push(UploadedFile { filename, data });
    }

    Ok(files)
}

/// POST /upload - 上传文件（可多个），成功后重定向到首页
///
/// Parts are written in order; the first storage failure stops the loop
/// and leaves earlier parts in place.
pub async fn fs_upload(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let multipart = multipart.map_err(|e| {
        tracing::debug!("Upload: rejected request: {}", e);
        ApiError::BadRequest(PARSE_FORM_FAILED)
    })?;

    let files = read_file_parts(multipart).await?;
    if files.is_empty() {
        return Err(ApiError::BadRequest(NO_FILES_UPLOADED));
    }

    for file in files {
        let key = if state.upload.unique_names {
            generate_unique_file_name(&file.filename)
        } else {
            file.filename
        };
        let size = file.data.len();

        state.store
            .put(&key, file.data)
            .await
            .map_err(|e| ApiError::storage(UPLOAD_FAILED, e.context(format!("upload {}", key))))?;

        tracing::debug!("Upload: stored key={}, size={}", key, size);
    }

    Ok(Redirect::to("/").into_response())
}
