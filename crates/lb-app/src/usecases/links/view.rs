use serde::Serialize;

use lb_core::ids::DraftKey;
use lb_core::links::{FieldError, Platform};

/// Progress of the current save, if any. Only `Idle` accepts a new save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveState {
    #[default]
    Idle,
    /// Create/update calls are in flight.
    Saving,
    /// Calls settled; refetching persisted state.
    Settling,
}

impl SaveState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, SaveState::Idle)
    }
}

/// One editor row as the presentation layer renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkRowView {
    pub index: usize,
    pub key: DraftKey,
    pub platform: Option<Platform>,
    /// Text of the URL input: the draft, or empty when there is none.
    pub url: String,
    /// Example URL for the chosen platform.
    pub placeholder_url: &'static str,
    pub persisted: bool,
    /// Inline error, only reported once a save has been attempted.
    pub error: Option<FieldError>,
}

impl LinkRowView {
    pub fn error_message(&self) -> Option<&'static str> {
        self.error.as_ref().map(FieldError::message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkListView {
    pub rows: Vec<LinkRowView>,
    /// The "get started" placeholder shown while the list is empty.
    pub show_placeholder: bool,
    pub save_state: SaveState,
}
