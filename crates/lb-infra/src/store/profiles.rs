use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use lb_core::ids::UserId;
use lb_core::ports::ProfileRepositoryPort;
use lb_core::profile::Profile;

#[derive(Debug, Default)]
pub struct InMemoryProfileRepository {
    docs: RwLock<HashMap<UserId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProfileRepositoryPort for InMemoryProfileRepository {
    async fn get(&self, owner: &UserId) -> Result<Option<Profile>> {
        Ok(self.docs.read().await.get(owner).cloned())
    }

    async fn put(&self, owner: &UserId, profile: &Profile) -> Result<()> {
        self.docs
            .write()
            .await
            .insert(owner.clone(), profile.clone());
        Ok(())
    }
}
