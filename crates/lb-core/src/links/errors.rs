use serde::Serialize;
use thiserror::Error;

use crate::ids::DraftKey;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkListError {
    #[error("link index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Inline validation problem for one URL field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldError {
    Empty,
    Invalid,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Empty => "Can't be empty",
            FieldError::Invalid => "Please check the URL",
        }
    }
}

/// A field error located by both list position and row key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub index: usize,
    pub key: DraftKey,
    pub error: FieldError,
}

/// Why `save()` did not complete cleanly.
///
/// The `Display` text of each variant is the user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveError {
    #[error("Links can't be empty")]
    EmptyLinks(Vec<FieldIssue>),

    #[error("You must be logged in to save links.")]
    Unauthenticated,

    #[error("One or more links are invalid. Please check and try again.")]
    InvalidLinks(Vec<FieldIssue>),

    #[error("A save is already in progress.")]
    AlreadyInProgress,

    /// Some create/update calls failed. The ones that succeeded are not rolled back.
    #[error("Error saving links.")]
    Persistence { failed: usize, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[error(transparent)]
    Index(#[from] LinkListError),

    #[error("Error deleting link.")]
    Persistence,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_error_display_is_the_user_facing_message() {
        assert_eq!(SaveError::EmptyLinks(vec![]).to_string(), "Links can't be empty");
        assert_eq!(
            SaveError::InvalidLinks(vec![]).to_string(),
            "One or more links are invalid. Please check and try again."
        );
        assert_eq!(
            SaveError::Persistence { failed: 1, total: 3 }.to_string(),
            "Error saving links."
        );
    }

    #[test]
    fn field_error_messages() {
        assert_eq!(FieldError::Empty.message(), "Can't be empty");
        assert_eq!(FieldError::Invalid.message(), "Please check the URL");
    }
}
