use anyhow::Result;
use async_trait::async_trait;

/// System clipboard of the presentation layer.
#[async_trait]
pub trait ClipboardPort: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<()>;
}
