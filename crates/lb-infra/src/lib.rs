//! In-process adapters for the linkbio ports.
//!
//! The document store and blob stores here stand in for the hosted services
//! in tests and local runs; they are not a persistence engine.

pub mod auth;
pub mod error;
pub mod fs;
pub mod imaging;
pub mod presentation;
pub mod store;
pub mod time;

pub use auth::InMemoryAuthSession;
pub use error::StoreError;
pub use fs::FsBlobStore;
pub use imaging::ImageCrateProbe;
pub use presentation::{MemoryClipboard, TracingNavigator, TracingNotifier};
pub use store::{InMemoryBlobStore, InMemoryLinkRepository, InMemoryProfileRepository};
pub use time::SystemClock;
