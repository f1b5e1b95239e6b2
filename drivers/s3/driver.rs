//! S3驱动核心实现
//!
//! One client per process, bound to a single bucket. rust-s3 is built
//! without `fail-on-err`, so every call checks the returned status code.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;
use tokio::io::AsyncRead;

use crate::config::StorageConfig;
use crate::storage::ObjectStore;

/// S3 compatible store (MinIO, AWS, OSS...) / S3兼容存储
pub struct S3Store {
    bucket: Box<Bucket>,
}

impl S3Store {
    /// 创建新的S3存储实例
    pub fn new(config: &StorageConfig) -> Result<Self> {
        let bucket = Self::create_bucket(config)?;
        Ok(Self { bucket })
    }

    /// 创建S3 Bucket客户端
    fn create_bucket(config: &StorageConfig) -> Result<Box<Bucket>> {
        if config.bucket.is_empty() {
            return Err(anyhow!("S3 bucket name is empty"));
        }

        let credentials = Credentials::new(
            Some(&config.access_key),
            Some(&config.secret_key),
            None,
            None,
            None,
        ).map_err(|e| anyhow!("创建S3凭证失败: {}", e))?;

        let region = Region::Custom {
            region: config.region.clone(),
            endpoint: config.endpoint_url(),
        };

        let bucket = Bucket::new(&config.bucket, region, credentials)
            .map_err(|e| anyhow!("创建S3 Bucket失败: {}", e))?;

        let bucket = if config.force_path_style {
            bucket.with_path_style()
        } else {
            bucket
        };

        Ok(bucket)
    }
}

/// Map a non-success S3 status to an error / 检查S3响应状态码
fn check_status(op: &str, key: &str, code: u16) -> Result<()> {
    match code {
        200..=299 => Ok(()),
        404 => Err(anyhow!("{}: object not found: {}", op, key)),
        _ => Err(anyhow!("{}: unexpected status {} for {}", op, code, key)),
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn name(&self) -> &str {
        "s3"
    }

    async fn put(&self, key: &str, data: Bytes) -> Result<()> {
        tracing::debug!("S3 PutObject: key={}, size={}", key, data.len());

        let response = self.bucket
            .put_object(key, &data)
            .await
            .map_err(|e| anyhow!("上传S3对象失败: {}", e))?;

        check_status("PutObject", key, response.status_code())
    }

    async fn open_reader(&self, key: &str) -> Result<Box<dyn AsyncRead + Unpin + Send>> {
        let response = self.bucket
            .get_object(key)
            .await
            .map_err(|e| anyhow!("获取S3对象失败: {}", e))?;

        check_status("GetObject", key, response.status_code())?;

        // rust-s3返回完整响应，封装为AsyncRead
        let data = response.bytes().to_vec();
        Ok(Box::new(std::io::Cursor::new(data)))
    }

    async fn list_keys(&self) -> Result<Vec<String>> {
        // No delimiter: recursive listing, pages are followed by rust-s3
        let results = self.bucket
            .list(String::new(), None)
            .await
            .map_err(|e| anyhow!("列出S3对象失败: {}", e))?;

        let keys = results
            .into_iter()
            .flat_map(|page| page.contents)
            .map(|obj| obj.key)
            .collect();

        Ok(keys)
    }

    async fn delete(&self, key: &str) -> Result<()> {
        // DeleteObject answers 204 for absent keys, so confirm existence first
        let (_, code) = self.bucket
            .head_object(key)
            .await
            .map_err(|e| anyhow!("查询S3对象失败: {}", e))?;
        check_status("HeadObject", key, code)?;

        let response = self.bucket
            .delete_object(key)
            .await
            .map_err(|e| anyhow!("删除S3对象失败: {}", e))?;

        check_status("DeleteObject", key, response.status_code())
    }
}
