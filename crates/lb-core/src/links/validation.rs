//! Per-platform URL validation.

use super::platform::Platform;

/// Returns `true` when `url` matches the pattern of `platform`.
///
/// An unset platform or an empty URL never validates.
pub fn is_valid_url(platform: Option<Platform>, url: &str) -> bool {
    match platform {
        Some(platform) if !url.is_empty() => platform.pattern().is_match(url),
        _ => false,
    }
}

/// String-keyed variant for callers holding a raw platform key.
///
/// Unknown keys fail closed.
pub fn is_valid_url_for_key(platform_key: &str, url: &str) -> bool {
    is_valid_url(platform_key.parse().ok(), url)
}
