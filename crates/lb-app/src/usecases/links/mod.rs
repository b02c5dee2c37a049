//! Link list editing: rows, drafts, validation and save reconciliation.

mod controller;
mod view;

pub use controller::LinkListController;
pub use view::{LinkListView, LinkRowView, SaveState};
