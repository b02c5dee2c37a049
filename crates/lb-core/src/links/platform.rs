use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

// Every pattern is anchored at the start only, trailing text is accepted.
lazy_static! {
    static ref GITHUB_URL: Regex = Regex::new(r"^https://github\.com/.+").unwrap();
    static ref LINKEDIN_URL: Regex =
        Regex::new(r"^https://(www\.)?linkedin\.com/in/.+").unwrap();
    static ref YOUTUBE_URL: Regex =
        Regex::new(r"^https://(www\.)?youtube\.com/(channel|user)/.+").unwrap();
    static ref FACEBOOK_URL: Regex = Regex::new(r"^https://(www\.)?facebook\.com/.+").unwrap();
    static ref TWITTER_URL: Regex = Regex::new(r"^https://twitter\.com/.+").unwrap();
}

/// Social platform a link points to.
///
/// The set is closed: each variant carries its URL pattern, brand colour,
/// icon asset and placeholder URL, so there is no "unknown platform" branch
/// anywhere past parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    GitHub,
    LinkedIn,
    YouTube,
    Facebook,
    Twitter,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0}")]
pub struct UnknownPlatform(pub String);

impl Platform {
    /// All platforms, in the order the platform picker lists them.
    pub const ALL: [Platform; 5] = [
        Platform::GitHub,
        Platform::LinkedIn,
        Platform::YouTube,
        Platform::Facebook,
        Platform::Twitter,
    ];

    /// Stable key used in storage and in the string-keyed validator.
    pub fn key(&self) -> &'static str {
        match self {
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
            Platform::YouTube => "YouTube",
            Platform::Facebook => "Facebook",
            Platform::Twitter => "Twitter",
        }
    }

    pub fn pattern(&self) -> &'static Regex {
        match self {
            Platform::GitHub => &GITHUB_URL,
            Platform::LinkedIn => &LINKEDIN_URL,
            Platform::YouTube => &YOUTUBE_URL,
            Platform::Facebook => &FACEBOOK_URL,
            Platform::Twitter => &TWITTER_URL,
        }
    }

    /// Brand colour used as the background of preview buttons.
    pub fn color(&self) -> &'static str {
        match self {
            Platform::GitHub => "#1A1A1A",
            Platform::LinkedIn => "#2D68FF",
            Platform::YouTube => "#EE3939",
            Platform::Facebook => "#4267B2",
            Platform::Twitter => "#1DA1F2",
        }
    }

    /// Icon asset reference, resolved by the presentation layer.
    pub fn icon(&self) -> &'static str {
        match self {
            Platform::GitHub => "assets/github.svg",
            Platform::LinkedIn => "assets/linkedin.svg",
            Platform::YouTube => "assets/youtube.svg",
            Platform::Facebook => "assets/facebook.svg",
            Platform::Twitter => "assets/twitter.svg",
        }
    }

    /// Example URL shown as input placeholder and used by the phone mockup
    /// when the row has no URL yet.
    pub fn default_url(&self) -> &'static str {
        match self {
            Platform::GitHub => "https://github.com/username",
            Platform::LinkedIn => "https://linkedin.com/in/username",
            Platform::YouTube => "https://youtube.com/channel/username",
            Platform::Facebook => "https://facebook.com/username",
            Platform::Twitter => "https://twitter.com/username",
        }
    }
}

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.key() == s)
            .ok_or_else(|| UnknownPlatform(s.to_string()))
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
