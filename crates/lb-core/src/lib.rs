//! # lb-core
//!
//! Core domain models and business logic for linkbio.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod config;
pub mod ids;
pub mod links;
pub mod notification;
pub mod ports;
pub mod preview;
pub mod profile;

// Re-export commonly used types at the crate root
pub use config::{AppConfig, SessionConfig};
pub use ids::{DraftKey, LinkId, UserId};
pub use links::{LinkEntry, Platform};
pub use notification::{Notification, NotificationLevel, Route};
pub use profile::Profile;
