//! # Dependency Injection
//!
//! Builds the infra adapters, combines them with the presentation ports and
//! hands the result to the use case factory. Assembly only: no business
//! decisions are made here.

use std::sync::Arc;

use lb_app::{AppDeps, UseCases};
use lb_core::config::AppConfig;
use lb_core::ports::{BlobStorePort, ClipboardPort, NavigatorPort, NotifierPort};
use lb_infra::{
    FsBlobStore, ImageCrateProbe, InMemoryAuthSession, InMemoryBlobStore, InMemoryLinkRepository,
    InMemoryProfileRepository, MemoryClipboard, SystemClock, TracingNavigator, TracingNotifier,
};
use tracing::info;

const MEMORY_BLOB_BASE_URL: &str = "memory://blobs";

/// Ports implemented by the user interface.
#[derive(Clone)]
pub struct PresentationPorts {
    pub notifier: Arc<dyn NotifierPort>,
    pub navigator: Arc<dyn NavigatorPort>,
    pub clipboard: Arc<dyn ClipboardPort>,
}

impl PresentationPorts {
    /// Log-only ports for running without a user interface.
    pub fn headless() -> Self {
        Self {
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(TracingNavigator::new()),
            clipboard: Arc::new(MemoryClipboard::new()),
        }
    }
}

/// Everything a presentation layer needs after startup.
pub struct AppRuntime {
    /// Receives the identity produced by the sign-in flow.
    pub auth: Arc<InMemoryAuthSession>,
    pub use_cases: UseCases,
}

fn blob_store(config: &AppConfig) -> Arc<dyn BlobStorePort> {
    match &config.blob_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "storing uploads on disk");
            Arc::new(FsBlobStore::new(dir.clone()))
        }
        None => {
            info!("storing uploads in memory");
            Arc::new(InMemoryBlobStore::new(MEMORY_BLOB_BASE_URL))
        }
    }
}

pub fn create_runtime(config: AppConfig, presentation: PresentationPorts) -> AppRuntime {
    let auth = Arc::new(InMemoryAuthSession::new());
    let deps = AppDeps {
        auth: auth.clone(),
        links: Arc::new(InMemoryLinkRepository::new()),
        profiles: Arc::new(InMemoryProfileRepository::new()),
        blobs: blob_store(&config),
        notifier: presentation.notifier,
        navigator: presentation.navigator,
        clipboard: presentation.clipboard,
        clock: Arc::new(SystemClock),
        image_probe: Arc::new(ImageCrateProbe),
    };
    info!(preview_base_url = %config.preview_base_url, "runtime wired");

    AppRuntime {
        auth,
        use_cases: UseCases::new(deps, config),
    }
}
