// Driver package / 驱动包
pub mod memory;
pub mod s3;

use std::sync::Arc;

use anyhow::{anyhow, Result};

use crate::config::StorageConfig;
use crate::storage::StoreHandle;

/// Driver names accepted in `storage.driver` / 支持的驱动类型
pub const DRIVER_TYPES: &[&str] = &["s3", "memory"];

/// Build the store selected by configuration / 根据配置创建存储驱动
pub fn create_store(config: &StorageConfig) -> Result<StoreHandle> {
    let store: StoreHandle = match config.driver.as_str() {
        // S3 compatible storage (MinIO by default) / S3兼容对象存储
        "s3" => Arc::new(s3::S3Store::new(config)?),
        // In-process storage, lost on restart / 内存存储
        "memory" => Arc::new(memory::MemoryStore::new()),
        other => {
            return Err(anyhow!(
                "Driver type not found: {} (expected one of {:?})",
                other,
                DRIVER_TYPES
            ))
        }
    };

    tracing::info!("Storage driver created: {}", store.name());
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_memory_store() {
        let config = StorageConfig {
            driver: "memory".to_string(),
            ..StorageConfig::default()
        };
        assert_eq!(create_store(&config).unwrap().name(), "memory");
    }

    #[test]
    fn test_unknown_driver_is_rejected() {
        let config = StorageConfig {
            driver: "ftp".to_string(),
            ..StorageConfig::default()
        };
        let err = create_store(&config).err().unwrap();
        assert!(err.to_string().contains("ftp"));
    }
}
