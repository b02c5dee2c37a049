use anyhow::Result;
use async_trait::async_trait;

use crate::ids::UserId;
use crate::profile::Profile;

/// Profile documents, one per user, keyed by the user id.
#[async_trait]
pub trait ProfileRepositoryPort: Send + Sync {
    async fn get(&self, owner: &UserId) -> Result<Option<Profile>>;

    /// Replaces the whole document.
    async fn put(&self, owner: &UserId, profile: &Profile) -> Result<()>;
}
