use anyhow::Result;
use async_trait::async_trait;

use crate::ids::{LinkId, UserId};
use crate::links::{LinkEntry, LinkPayload, NewLink};

/// Document collection holding every user's links.
#[async_trait]
pub trait LinkRepositoryPort: Send + Sync {
    /// All links owned by `owner`. Returned entries always carry an id.
    /// Order is unspecified.
    async fn fetch_by_owner(&self, owner: &UserId) -> Result<Vec<LinkEntry>>;

    /// Stores a new document and returns its generated id.
    async fn create(&self, link: &NewLink) -> Result<LinkId>;

    /// Overwrites the body of an existing document.
    async fn update(&self, id: &LinkId, link: &LinkPayload) -> Result<()>;

    async fn delete(&self, id: &LinkId) -> Result<()>;
}
