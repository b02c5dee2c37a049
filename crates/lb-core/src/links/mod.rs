//! Social links: platforms, entries, drafts and validation.

pub mod drafts;
pub mod entry;
pub mod errors;
pub mod platform;
pub mod validation;

pub use drafts::{DraftStore, LinkDraftList, LinkRecord, SaveOp, ValidationReport};
pub use entry::{sort_for_display, LinkEntry, LinkPayload, NewLink};
pub use errors::{FieldError, FieldIssue, LinkListError, RemoveError, SaveError};
pub use platform::{Platform, UnknownPlatform};
pub use validation::{is_valid_url, is_valid_url_for_key};
