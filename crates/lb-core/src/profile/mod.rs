//! Profile details shown on the preview card.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

lazy_static! {
    static ref EMAIL: Regex = Regex::new(r"(?i)^\S+@\S+$").unwrap();
}

/// Largest accepted avatar edge, in pixels.
pub const MAX_AVATAR_DIMENSION: u32 = 1024;

/// Accepted avatar content types.
pub const AVATAR_CONTENT_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// Stored profile document, keyed by owner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Profile {
    /// "First Last", only when both names are present.
    pub fn display_name(&self) -> Option<String> {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            None
        } else {
            Some(format!("{first} {last}"))
        }
    }
}

/// Values of the profile details form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&Profile> for ProfileForm {
    fn from(profile: &Profile) -> Self {
        Self {
            first_name: profile.first_name.clone(),
            last_name: profile.last_name.clone(),
            email: profile.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ProfileField {
    FirstName,
    LastName,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileFieldError {
    pub field: ProfileField,
    pub message: &'static str,
}

/// Checks the form the way the details page does: both names are required,
/// the email is optional but must look like `x@y` when given.
pub fn validate_profile_form(form: &ProfileForm) -> Result<(), Vec<ProfileFieldError>> {
    let mut errors = Vec::new();
    if form.first_name.is_empty() {
        errors.push(ProfileFieldError {
            field: ProfileField::FirstName,
            message: "Can't be empty",
        });
    }
    if form.last_name.is_empty() {
        errors.push(ProfileFieldError {
            field: ProfileField::LastName,
            message: "Can't be empty",
        });
    }
    if !form.email.is_empty() && !EMAIL.is_match(&form.email) {
        errors.push(ProfileFieldError {
            field: ProfileField::Email,
            message: "Invalid email address",
        });
    }
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A picked avatar file, not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvatarError {
    #[error("Use PNG or JPG format (got {0}).")]
    UnsupportedFormat(String),

    #[error("Image must be below 1024x1024px (got {width}x{height}).")]
    TooLarge { width: u32, height: u32 },

    #[error("Image could not be read: {0}")]
    Unreadable(String),
}

pub fn check_avatar_format(content_type: &str) -> Result<(), AvatarError> {
    if AVATAR_CONTENT_TYPES.contains(&content_type) {
        Ok(())
    } else {
        Err(AvatarError::UnsupportedFormat(content_type.to_string()))
    }
}

pub fn check_avatar_dimensions(width: u32, height: u32) -> Result<(), AvatarError> {
    if width >= MAX_AVATAR_DIMENSION || height >= MAX_AVATAR_DIMENSION {
        Err(AvatarError::TooLarge { width, height })
    } else {
        Ok(())
    }
}

/// Blob key under which a user's avatar is stored.
pub fn avatar_key(prefix: &str, user_id: &crate::ids::UserId) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), user_id)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("You must be logged in to edit your profile.")]
    Unauthenticated,

    #[error("Profile form has invalid fields")]
    Validation(Vec<ProfileFieldError>),

    #[error(transparent)]
    Avatar(#[from] AvatarError),

    #[error("Failed to load profile.")]
    Load,

    #[error("Failed to update profile.")]
    Persistence,
}
