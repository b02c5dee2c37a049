//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases)
//! and the collaborators that implement them: the auth provider, the hosted
//! document store and object store, and the presentation layer.
//!
//! Every fallible port returns `anyhow::Result`. Callers only distinguish
//! success from failure; no error taxonomy is consumed from collaborators.

mod auth;
mod blob_store;
mod clipboard;
mod clock;
mod image_probe;
mod link_repository;
mod navigator;
mod notifier;
mod profile_repository;

pub use auth::AuthPort;
pub use blob_store::BlobStorePort;
pub use clipboard::ClipboardPort;
pub use clock::ClockPort;
pub use image_probe::ImageProbePort;
pub use link_repository::LinkRepositoryPort;
pub use navigator::NavigatorPort;
pub use notifier::NotifierPort;
pub use profile_repository::ProfileRepositoryPort;
