use async_trait::async_trait;
use anyhow::Result;
use bytes::Bytes;
use std::sync::Arc;
use tokio::io::AsyncRead;

/// Shared store handle, built once at startup / 共享存储句柄
pub type StoreHandle = Arc<dyn ObjectStore>;

/// Object store interface bound to a single bucket (primitive operations only) / 对象存储接口
///
/// Keys are used verbatim. Implementations must be safe to share across
/// concurrent requests without external locking.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Driver name / 驱动名称
    fn name(&self) -> &str;

    /// Write an object, replacing any existing object under the same key / 写入对象
    async fn put(&self, key: &str, data: Bytes) -> Result<()>;

    /// Open object reader; a missing key is an error / 打开对象读取器
    async fn open_reader(&self, key: &str) -> Result<Box<dyn AsyncRead + Unpin + Send>>;

    /// List every key in the bucket, recursively, in backend order / 递归列出所有对象键
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Delete an object; a missing key is an error / 删除对象
    async fn delete(&self, key: &str) -> Result<()>;
}
