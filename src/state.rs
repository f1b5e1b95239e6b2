use std::path::PathBuf;

use crate::config::{AppConfig, UploadConfig};
use crate::storage::StoreHandle;

/// Shared application state / 应用共享状态
///
/// Built once before serving; handlers only read from it.
pub struct AppState {
    /// Object store bound to the gateway bucket / 对象存储
    pub store: StoreHandle,
    /// Upload settings / 上传设置
    pub upload: UploadConfig,
    /// File served at `/` / 首页文件
    pub index_path: PathBuf,
}

impl AppState {
    pub fn new(store: StoreHandle, config: &AppConfig) -> Self {
        Self {
            store,
            upload: config.upload.clone(),
            index_path: PathBuf::from(&config.frontend.index_path),
        }
    }
}
