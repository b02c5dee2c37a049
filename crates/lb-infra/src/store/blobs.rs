use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use lb_core::ports::BlobStorePort;

use crate::error::StoreError;

#[derive(Debug, Clone)]
struct StoredBlob {
    bytes: Vec<u8>,
    content_type: String,
}

/// Object store kept in memory. URLs are `<base_url>/<key>`.
#[derive(Debug)]
pub struct InMemoryBlobStore {
    base_url: String,
    blobs: RwLock<HashMap<String, StoredBlob>>,
}

impl InMemoryBlobStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            blobs: RwLock::new(HashMap::new()),
        }
    }

    /// Stored bytes and content type, if any.
    pub async fn get(&self, key: &str) -> Option<(Vec<u8>, String)> {
        self.blobs
            .read()
            .await
            .get(key)
            .map(|blob| (blob.bytes.clone(), blob.content_type.clone()))
    }
}

#[async_trait]
impl BlobStorePort for InMemoryBlobStore {
    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        self.blobs.write().await.insert(
            key.to_string(),
            StoredBlob {
                bytes: bytes.to_vec(),
                content_type: content_type.to_string(),
            },
        );
        debug!(key, size = bytes.len(), "blob stored");
        Ok(())
    }

    async fn resolve_url(&self, key: &str) -> Result<String> {
        if !self.blobs.read().await.contains_key(key) {
            return Err(StoreError::BlobNotFound(key.to_string()).into());
        }
        Ok(format!("{}/{}", self.base_url, key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn upload_replaces_and_resolves() {
        let store = InMemoryBlobStore::new("memory://blobs/");
        store.upload("profile_images/uid-1", b"one", "image/png").await.unwrap();
        store.upload("profile_images/uid-1", b"two", "image/jpeg").await.unwrap();

        assert_eq!(
            store.get("profile_images/uid-1").await,
            Some((b"two".to_vec(), "image/jpeg".to_string()))
        );
        assert_eq!(
            store.resolve_url("profile_images/uid-1").await.unwrap(),
            "memory://blobs/profile_images/uid-1"
        );
    }

    #[tokio::test]
    async fn unknown_keys_do_not_resolve() {
        let store = InMemoryBlobStore::new("memory://blobs");
        assert!(store.resolve_url("missing").await.is_err());
    }
}
