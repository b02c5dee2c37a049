use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Object store for uploaded files.
#[async_trait]
pub trait BlobStorePort: Send + Sync {
    /// Writes `bytes` under `key`, replacing any previous object.
    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()>;

    /// Public download URL for `key`. Fails when nothing is stored there.
    async fn resolve_url(&self, key: &str) -> Result<String>;
}

#[async_trait]
impl<T: BlobStorePort + ?Sized> BlobStorePort for Arc<T> {
    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        (**self).upload(key, bytes, content_type).await
    }

    async fn resolve_url(&self, key: &str) -> Result<String> {
        (**self).resolve_url(key).await
    }
}
