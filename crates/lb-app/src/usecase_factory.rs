//! Factory functions for creating use cases with AppDeps

use lb_core::AppConfig;

use crate::deps::AppDeps;
use crate::usecases::links::LinkListController;
use crate::usecases::preview::{LoadPreview, ShareLink};
use crate::usecases::profile::ProfileEditor;
use crate::usecases::session::SessionLifecycle;

/// Hands out use cases wired to one set of dependencies.
///
/// Every call builds a fresh instance; editors keep their own page state.
#[derive(Clone)]
pub struct UseCases {
    deps: AppDeps,
    config: AppConfig,
}

impl UseCases {
    pub fn new(deps: AppDeps, config: AppConfig) -> Self {
        Self { deps, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn link_list(&self) -> LinkListController {
        LinkListController::new(
            self.deps.links.clone(),
            self.deps.auth.clone(),
            self.deps.notifier.clone(),
            self.deps.clock.clone(),
        )
    }

    pub fn profile_editor(&self) -> ProfileEditor {
        ProfileEditor::new(
            self.deps.auth.clone(),
            self.deps.profiles.clone(),
            self.deps.blobs.clone(),
            self.deps.image_probe.clone(),
            self.deps.notifier.clone(),
            self.config.avatar_key_prefix.clone(),
        )
    }

    pub fn load_preview(&self) -> LoadPreview {
        LoadPreview::new(
            self.deps.auth.clone(),
            self.deps.profiles.clone(),
            self.deps.links.clone(),
            self.deps.notifier.clone(),
        )
    }

    pub fn share_link(&self) -> ShareLink {
        ShareLink::new(
            self.deps.clipboard.clone(),
            self.deps.notifier.clone(),
            self.config.preview_base_url.clone(),
        )
    }

    /// Must be called from within a tokio runtime once started.
    pub fn session(&self) -> SessionLifecycle {
        SessionLifecycle::new(
            self.deps.auth.clone(),
            self.deps.navigator.clone(),
            self.deps.notifier.clone(),
            self.config.session,
        )
    }
}
