use std::sync::{Mutex, PoisonError};

use anyhow::Result;
use async_trait::async_trait;

use lb_core::ports::ClipboardPort;

/// Process-local clipboard.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    text: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> Option<String> {
        self.text
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl ClipboardPort for MemoryClipboard {
    async fn write_text(&self, text: &str) -> Result<()> {
        *self.text.lock().unwrap_or_else(PoisonError::into_inner) = Some(text.to_string());
        Ok(())
    }
}
