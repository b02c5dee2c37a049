use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::debug;

use lb_core::ports::BlobStorePort;

use crate::error::StoreError;

const BLOBS_DIR: &str = "blobs";
const META_SUFFIX: &str = ".meta.json";

#[derive(Debug, Serialize, Deserialize)]
struct BlobMeta {
    content_type: String,
    size: usize,
}

/// Object store on the local filesystem, for running without the hosted
/// bucket. Objects live at `<root>/blobs/<key>` with a JSON sidecar holding
/// the content type; URLs are `file://` paths.
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn object_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(BLOBS_DIR).join(key))
    }
}

/// Keys are relative paths without `..`, root components or empty segments.
fn validate_key(key: &str) -> Result<()> {
    let path = Path::new(key);
    // `components()` folds `a//b` and a trailing `/`, so segments are checked first.
    let plain = !key.split('/').any(str::is_empty)
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if plain {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()).into())
    }
}

fn meta_path(object: &Path) -> PathBuf {
    let mut name = object.as_os_str().to_owned();
    name.push(META_SUFFIX);
    PathBuf::from(name)
}

#[async_trait]
impl BlobStorePort for FsBlobStore {
    async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> Result<()> {
        let path = self.object_path(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("create blob dir {}", parent.display()))?;
        }
        fs::write(&path, bytes)
            .await
            .with_context(|| format!("write blob {}", path.display()))?;

        let meta = BlobMeta {
            content_type: content_type.to_string(),
            size: bytes.len(),
        };
        fs::write(meta_path(&path), serde_json::to_vec(&meta)?).await?;
        debug!(key, size = bytes.len(), "blob written");
        Ok(())
    }

    async fn resolve_url(&self, key: &str) -> Result<String> {
        let path = self.object_path(key)?;
        if !fs::try_exists(&path).await.unwrap_or(false) {
            return Err(StoreError::BlobNotFound(key.to_string()).into());
        }
        Ok(format!("file://{}", path.display()))
    }
}
