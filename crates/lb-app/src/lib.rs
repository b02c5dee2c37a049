//! linkbio Application Orchestration Layer
//!
//! This crate contains the use cases that drive the link editor, the profile
//! editor, the preview page and the session timers.

pub mod deps;
pub mod usecase_factory;
pub mod usecases;

pub use deps::AppDeps;
pub use usecase_factory::UseCases;
pub use usecases::links::{LinkListController, LinkListView, LinkRowView, SaveState};
pub use usecases::preview::{LoadPreview, ShareLink};
pub use usecases::profile::{ProfileEditor, ProfileView};
pub use usecases::session::{SessionError, SessionLifecycle};
