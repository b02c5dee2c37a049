//! In-memory document and object stores.

mod blobs;
mod links;
mod profiles;

pub use blobs::InMemoryBlobStore;
pub use links::InMemoryLinkRepository;
pub use profiles::InMemoryProfileRepository;
