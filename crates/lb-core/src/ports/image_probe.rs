use anyhow::Result;

/// Reads image headers without the presentation layer's help.
pub trait ImageProbePort: Send + Sync {
    /// `(width, height)` in pixels.
    fn dimensions(&self, bytes: &[u8]) -> Result<(u32, u32)>;
}
