//! Preview page: the read-only card and the share button.

use std::sync::Arc;

use futures::future::try_join;
use tracing::{debug, info, warn};

use lb_core::ids::UserId;
use lb_core::links::sort_for_display;
use lb_core::ports::{AuthPort, ClipboardPort, LinkRepositoryPort, NotifierPort, ProfileRepositoryPort};
use lb_core::preview::{share_url, PreviewCard, PreviewError};
use lb_core::Notification;

const COPIED: &str = "Link copied successfully to clipboard";

/// Builds the preview card of a user. Only the owner may open it.
pub struct LoadPreview {
    auth: Arc<dyn AuthPort>,
    profiles: Arc<dyn ProfileRepositoryPort>,
    links: Arc<dyn LinkRepositoryPort>,
    notifier: Arc<dyn NotifierPort>,
}

impl LoadPreview {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        profiles: Arc<dyn ProfileRepositoryPort>,
        links: Arc<dyn LinkRepositoryPort>,
        notifier: Arc<dyn NotifierPort>,
    ) -> Self {
        Self {
            auth,
            profiles,
            links,
            notifier,
        }
    }

    #[tracing::instrument(name = "usecase.load_preview.execute", skip(self), fields(owner = %owner))]
    pub async fn execute(&self, owner: &UserId) -> Result<PreviewCard, PreviewError> {
        if self.auth.current_user().as_ref() != Some(owner) {
            info!("preview denied");
            self.notifier
                .notify(Notification::error(PreviewError::AccessDenied.to_string()));
            return Err(PreviewError::AccessDenied);
        }

        let fetched = try_join(self.profiles.get(owner), self.links.fetch_by_owner(owner)).await;
        let (profile, mut links) = match fetched {
            Ok(fetched) => fetched,
            Err(err) => {
                warn!(error = %err, "failed to fetch preview data");
                self.notifier
                    .notify(Notification::error(PreviewError::Fetch.to_string()));
                return Err(PreviewError::Fetch);
            }
        };
        sort_for_display(&mut links);

        let card = PreviewCard::build(profile.as_ref(), &links);
        debug!(links = card.links.len(), "preview built");
        Ok(card)
    }
}

/// Copies the public preview address to the clipboard.
pub struct ShareLink {
    clipboard: Arc<dyn ClipboardPort>,
    notifier: Arc<dyn NotifierPort>,
    base_url: String,
}

impl ShareLink {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        notifier: Arc<dyn NotifierPort>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            clipboard,
            notifier,
            base_url: base_url.into(),
        }
    }

    pub fn url_for(&self, owner: &UserId) -> String {
        share_url(&self.base_url, owner)
    }

    /// Returns the copied URL.
    #[tracing::instrument(name = "usecase.share_link.execute", skip(self), fields(owner = %owner))]
    pub async fn execute(&self, owner: &UserId) -> Result<String, PreviewError> {
        let url = self.url_for(owner);
        match self.clipboard.write_text(&url).await {
            Ok(()) => {
                info!(url = %url, "share link copied");
                self.notifier.notify(Notification::success(COPIED));
                Ok(url)
            }
            Err(err) => {
                warn!(error = %err, "failed to copy share link");
                self.notifier
                    .notify(Notification::error(PreviewError::Clipboard.to_string()));
                Err(PreviewError::Clipboard)
            }
        }
    }
}
