pub mod files;

use std::sync::Arc;
use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, get_service, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeFile, trace::TraceLayer};

use crate::state::AppState;

/// Build the gateway router / 构建网关路由
///
/// `/` serves the configured index file; every other route maps to one
/// object store call against the gateway bucket.
pub fn create_router(state: Arc<AppState>) -> Router {
    let body_limit = state.upload.max_size_bytes;

    Router::new()
        .route("/", get_service(ServeFile::new(&state.index_path)))
        .route("/upload", post(files::fs_upload))
        .route("/list-files", get(files::fs_list))
        .route("/download-file", get(files::fs_download))
        .route("/view-file", get(files::fs_view))
        .route("/delete-file", delete(files::fs_delete))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
