//! Application configuration DTO.
//!
//! Mapped from a TOML value. Missing keys fall back to the defaults below;
//! keys present with the wrong type are reported as errors.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_INACTIVITY_SIGN_OUT_SECS: u64 = 30 * 60;
pub const DEFAULT_UNAUTHENTICATED_REDIRECT_SECS: u64 = 2;
pub const DEFAULT_PREVIEW_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_AVATAR_KEY_PREFIX: &str = "profile_images";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config key `{key}` must be {expected}")]
    InvalidType { key: String, expected: &'static str },
}

/// Wall-clock timeouts owned by the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Signed-in users are signed out after this long without activity.
    pub inactivity_sign_out: Duration,
    /// Signed-out visitors are sent to the login page after this delay.
    pub unauthenticated_redirect: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            inactivity_sign_out: Duration::from_secs(DEFAULT_INACTIVITY_SIGN_OUT_SECS),
            unauthenticated_redirect: Duration::from_secs(DEFAULT_UNAUTHENTICATED_REDIRECT_SECS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub session: SessionConfig,
    /// Origin used to build shareable preview URLs.
    pub preview_base_url: String,
    /// Blob key prefix for profile pictures.
    pub avatar_key_prefix: String,
    /// Directory for uploaded files. Uploads stay in memory when unset.
    pub blob_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            preview_base_url: DEFAULT_PREVIEW_BASE_URL.to_string(),
            avatar_key_prefix: DEFAULT_AVATAR_KEY_PREFIX.to_string(),
            blob_dir: None,
        }
    }
}

fn lookup<'a>(value: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    value.get(section).and_then(|s| s.get(key))
}

fn secs(value: &toml::Value, section: &str, key: &str, default: u64) -> Result<Duration, ConfigError> {
    match lookup(value, section, key) {
        None => Ok(Duration::from_secs(default)),
        Some(v) => v
            .as_integer()
            .and_then(|n| u64::try_from(n).ok())
            .map(Duration::from_secs)
            .ok_or_else(|| ConfigError::InvalidType {
                key: format!("{section}.{key}"),
                expected: "a non-negative integer",
            }),
    }
}

fn string(value: &toml::Value, section: &str, key: &str, default: &str) -> Result<String, ConfigError> {
    match lookup(value, section, key) {
        None => Ok(default.to_string()),
        Some(v) => v
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| ConfigError::InvalidType {
                key: format!("{section}.{key}"),
                expected: "a string",
            }),
    }
}

fn optional_path(value: &toml::Value, section: &str, key: &str) -> Result<Option<PathBuf>, ConfigError> {
    match lookup(value, section, key) {
        None => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(PathBuf::from(s)))
            .ok_or_else(|| ConfigError::InvalidType {
                key: format!("{section}.{key}"),
                expected: "a path string",
            }),
    }
}

impl AppConfig {
    /// Create AppConfig from TOML value
    pub fn from_toml(toml_value: &toml::Value) -> Result<Self, ConfigError> {
        Ok(Self {
            session: SessionConfig {
                inactivity_sign_out: secs(
                    toml_value,
                    "session",
                    "inactivity_sign_out_secs",
                    DEFAULT_INACTIVITY_SIGN_OUT_SECS,
                )?,
                unauthenticated_redirect: secs(
                    toml_value,
                    "session",
                    "unauthenticated_redirect_secs",
                    DEFAULT_UNAUTHENTICATED_REDIRECT_SECS,
                )?,
            },
            preview_base_url: string(toml_value, "preview", "base_url", DEFAULT_PREVIEW_BASE_URL)?,
            avatar_key_prefix: string(
                toml_value,
                "storage",
                "avatar_key_prefix",
                DEFAULT_AVATAR_KEY_PREFIX,
            )?,
            blob_dir: optional_path(toml_value, "storage", "blob_dir")?,
        })
    }
}
