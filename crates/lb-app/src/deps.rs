//! # Application Dependencies
//!
//! This module defines the dependency grouping for use case construction.
//!
//! **Note**: This is NOT a Builder pattern.
//! - No build steps
//! - No default values
//! - Just parameter grouping

use std::sync::Arc;
use lb_core::ports::*;

/// Application dependency grouping (non-Builder, just parameter grouping)
///
/// All dependencies are required - no defaults, no optional fields.
#[derive(Clone)]
pub struct AppDeps {
    // Identity
    pub auth: Arc<dyn AuthPort>,

    // Storage collaborators
    pub links: Arc<dyn LinkRepositoryPort>,
    pub profiles: Arc<dyn ProfileRepositoryPort>,
    pub blobs: Arc<dyn BlobStorePort>,

    // Presentation layer
    pub notifier: Arc<dyn NotifierPort>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub clipboard: Arc<dyn ClipboardPort>,

    // System
    pub clock: Arc<dyn ClockPort>,
    pub image_probe: Arc<dyn ImageProbePort>,
}
