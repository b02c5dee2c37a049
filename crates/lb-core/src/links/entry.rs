use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::platform::Platform;
use crate::ids::{LinkId, UserId};

/// One (platform, URL) pair of a user's profile, as known to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkEntry {
    /// Present only once the entry has been persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<LinkId>,
    /// `None` until the user picks a platform.
    pub platform: Option<Platform>,
    /// Last URL known to be persisted. Typing goes to the draft store.
    pub url: String,
    pub created_at: DateTime<Utc>,
    /// Display order, rewritten from the list index on every save.
    #[serde(default)]
    pub position: u32,
}

impl LinkEntry {
    /// A fresh row created by "add link": no id, no platform, empty URL.
    pub fn unsaved(created_at: DateTime<Utc>) -> Self {
        Self {
            id: None,
            platform: None,
            url: String::new(),
            created_at,
            position: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// Orders stored entries for display: by `position`, then by creation time
/// for documents written before positions existed.
pub fn sort_for_display(entries: &mut [LinkEntry]) {
    entries.sort_by(|a, b| {
        a.position
            .cmp(&b.position)
            .then_with(|| a.created_at.cmp(&b.created_at))
    });
}

/// Document body written on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkPayload {
    pub platform: Platform,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub position: u32,
}

impl LinkPayload {
    /// Rebuilds the client view of a stored document.
    pub fn into_entry(self, id: LinkId) -> LinkEntry {
        LinkEntry {
            id: Some(id),
            platform: Some(self.platform),
            url: self.url,
            created_at: self.created_at,
            position: self.position,
        }
    }
}

/// Create request: the payload plus the owning user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLink {
    #[serde(rename = "userId")]
    pub owner: UserId,
    #[serde(flatten)]
    pub link: LinkPayload,
}
