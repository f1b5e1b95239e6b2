//! In-process object store / 内存对象存储
//!
//! Objects live in a sorted map, so listings come back in key order like
//! an S3 ListObjects response. Nothing survives a restart.

use std::collections::BTreeMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use parking_lot::RwLock;
use tokio::io::AsyncRead;

use crate::storage::ObjectStore;

#[derive(Default)]
pub struct MemoryStore {
    objects: RwLock<BTreeMap<String, Bytes>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an object exists under `key` / 对象是否存在
    pub fn contains(&self, key: &str) -> bool {
        self.objects.read().contains_key(key)
    }

    /// Number of stored objects / 对象数量
    pub fn len(&self) -> usize {
        self.objects.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.read().is_empty()
    }
}

#[async_trait]
impl ObjectStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, data: Bytes) -> Result<()> {
        self.objects.write().insert(key.to_string(), data);
        Ok(())
    }

    async fn open_reader(&self, key: &str) -> Result<Box<dyn AsyncRead + Unpin + Send>> {
        let data = self.objects
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| anyhow!("object not found: {}", key))?;
        Ok(Box::new(std::io::Cursor::new(data)))
    }

    async fn list_keys(&self) -> Result<Vec<String>> {
        Ok(self.objects.read().keys().cloned().collect())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.objects
            .write()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| anyhow!("object not found: {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_put_overwrites_same_key() {
        let store = MemoryStore::new();
        store.put("a.txt", Bytes::from_static(b"one")).await.unwrap();
        store.put("a.txt", Bytes::from_static(b"two")).await.unwrap();

        let mut reader = store.open_reader("a.txt").await.unwrap();
        let mut body = String::new();
        reader.read_to_string(&mut body).await.unwrap();
        assert_eq!(body, "two");
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_key_ordered() {
        let store = MemoryStore::new();
        for key in ["b.png", "dir/c.txt", "a.txt"] {
            store.put(key, Bytes::new()).await.unwrap();
        }
        assert_eq!(store.list_keys().await.unwrap(), vec!["a.txt", "b.png", "dir/c.txt"]);
    }

    #[tokio::test]
    async fn test_missing_key_errors() {
        let store = MemoryStore::new();
        assert!(store.open_reader("missing.txt").await.is_err());
        assert!(store.delete("missing.txt").await.is_err());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_key() {
        let store = MemoryStore::new();
        store.put("a.txt", Bytes::from_static(b"hi")).await.unwrap();
        store.delete("a.txt").await.unwrap();
        assert!(!store.contains("a.txt"));
        assert!(store.list_keys().await.unwrap().is_empty());
    }
}
