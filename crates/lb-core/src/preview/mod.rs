//! Read-only projections of a profile: the shareable preview card and the
//! phone mockup shown beside the editors.

use serde::Serialize;
use thiserror::Error;

use crate::ids::UserId;
use crate::links::{LinkEntry, Platform};
use crate::profile::Profile;

/// Number of link slots drawn in the phone mockup.
pub const MOCKUP_SLOTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLink {
    pub platform: Platform,
    pub url: String,
    pub color: &'static str,
    pub icon: &'static str,
}

impl PreviewLink {
    fn new(platform: Platform, url: impl Into<String>) -> Self {
        Self {
            platform,
            url: url.into(),
            color: platform.color(),
            icon: platform.icon(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PreviewCard {
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub links: Vec<PreviewLink>,
}

impl PreviewCard {
    /// Builds the card from stored documents. Links without a platform are
    /// not shown.
    pub fn build(profile: Option<&Profile>, links: &[LinkEntry]) -> Self {
        let links = links
            .iter()
            .filter_map(|entry| Some(PreviewLink::new(entry.platform?, entry.url.clone())))
            .collect();

        match profile {
            Some(profile) => Self {
                display_name: profile.display_name(),
                email: Some(profile.email.clone()).filter(|email| !email.is_empty()),
                avatar_url: profile.image_url.clone(),
                links,
            },
            None => Self {
                links,
                ..Self::default()
            },
        }
    }
}

/// One slot of the phone mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum MockupSlot {
    Filled(PreviewLink),
    Empty,
}

/// Lays out up to [`MOCKUP_SLOTS`] links for the phone mockup.
///
/// Rows without a platform are skipped. A row with no URL yet shows the
/// platform's placeholder URL.
pub fn phone_mockup<'a, I>(rows: I) -> Vec<MockupSlot>
where
    I: IntoIterator<Item = (Option<Platform>, &'a str)>,
{
    let mut slots: Vec<MockupSlot> = rows
        .into_iter()
        .filter_map(|(platform, url)| {
            let platform = platform?;
            let url = if url.is_empty() {
                platform.default_url()
            } else {
                url
            };
            Some(MockupSlot::Filled(PreviewLink::new(platform, url)))
        })
        .take(MOCKUP_SLOTS)
        .collect();
    slots.resize(MOCKUP_SLOTS, MockupSlot::Empty);
    slots
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("You do not have access to this page.")]
    AccessDenied,

    #[error("Failed to fetch data. Please try again later.")]
    Fetch,

    #[error("Failed to copy link")]
    Clipboard,
}

/// Public address of a user's preview page.
pub fn share_url(base_url: &str, owner: &UserId) -> String {
    format!("{}/{}/preview", base_url.trim_end_matches('/'), owner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::LinkId;
    use chrono::{TimeZone, Utc};

    fn entry(platform: Option<Platform>, url: &str) -> LinkEntry {
        LinkEntry {
            id: Some(LinkId::new()),
            platform,
            url: url.to_string(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
            position: 0,
        }
    }

    #[test]
    fn card_carries_profile_details_and_platform_styling() {
        let profile = Profile {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            image_url: Some("memory://avatars/ada".into()),
        };
        let links = [
            entry(Some(Platform::GitHub), "https://github.com/ada"),
            entry(None, ""),
        ];

        let card = PreviewCard::build(Some(&profile), &links);

        assert_eq!(card.display_name.as_deref(), Some("Ada Lovelace"));
        assert_eq!(card.email.as_deref(), Some("ada@example.com"));
        assert_eq!(card.avatar_url.as_deref(), Some("memory://avatars/ada"));
        assert_eq!(card.links.len(), 1);
        assert_eq!(card.links[0].color, "#1A1A1A");
    }

    #[test]
    fn card_without_profile_still_lists_links() {
        let card = PreviewCard::build(None, &[entry(Some(Platform::YouTube), "https://youtube.com/user/x")]);
        assert_eq!(card.display_name, None);
        assert_eq!(card.email, None);
        assert_eq!(card.links[0].color, "#EE3939");
    }

    #[test]
    fn mockup_always_has_five_slots() {
        let slots = phone_mockup([(Some(Platform::GitHub), "https://github.com/a")]);
        assert_eq!(slots.len(), MOCKUP_SLOTS);
        assert!(matches!(slots[0], MockupSlot::Filled(_)));
        assert!(slots[1..].iter().all(|slot| *slot == MockupSlot::Empty));
    }

    #[test]
    fn mockup_skips_rows_without_platform_and_uses_placeholder_urls() {
        let slots = phone_mockup([(None, "ignored"), (Some(Platform::LinkedIn), "")]);
        match &slots[0] {
            MockupSlot::Filled(link) => {
                assert_eq!(link.platform, Platform::LinkedIn);
                assert_eq!(link.url, "https://linkedin.com/in/username");
            }
            MockupSlot::Empty => panic!("first slot should be filled"),
        }
    }

    #[test]
    fn mockup_truncates_beyond_five_links() {
        let rows = vec![(Some(Platform::GitHub), "https://github.com/a"); 7];
        let slots = phone_mockup(rows);
        assert_eq!(slots.len(), MOCKUP_SLOTS);
        assert!(slots.iter().all(|slot| matches!(slot, MockupSlot::Filled(_))));
    }

    #[test]
    fn share_url_points_at_the_owner_preview() {
        let owner = UserId::from("uid-7");
        assert_eq!(share_url("https://links.example/", &owner), "https://links.example/uid-7/preview");
    }
}
