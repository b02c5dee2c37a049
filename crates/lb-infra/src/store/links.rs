use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use lb_core::ids::{LinkId, UserId};
use lb_core::links::{LinkEntry, LinkPayload, NewLink};
use lb_core::ports::LinkRepositoryPort;

use crate::error::StoreError;

#[derive(Debug, Clone)]
struct LinkDocument {
    owner: UserId,
    body: LinkPayload,
}

/// Link collection keyed by generated document id.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    docs: RwLock<HashMap<LinkId, LinkDocument>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl LinkRepositoryPort for InMemoryLinkRepository {
    async fn fetch_by_owner(&self, owner: &UserId) -> Result<Vec<LinkEntry>> {
        let docs = self.docs.read().await;
        Ok(docs
            .iter()
            .filter(|(_, doc)| &doc.owner == owner)
            .map(|(id, doc)| doc.body.clone().into_entry(id.clone()))
            .collect())
    }

    async fn create(&self, link: &NewLink) -> Result<LinkId> {
        let id = LinkId::new();
        self.docs.write().await.insert(
            id.clone(),
            LinkDocument {
                owner: link.owner.clone(),
                body: link.link.clone(),
            },
        );
        debug!(link_id = %id, owner = %link.owner, "link document created");
        Ok(id)
    }

    async fn update(&self, id: &LinkId, link: &LinkPayload) -> Result<()> {
        let mut docs = self.docs.write().await;
        let doc = docs
            .get_mut(id)
            .ok_or_else(|| StoreError::LinkNotFound(id.clone()))?;
        doc.body = link.clone();
        Ok(())
    }

    async fn delete(&self, id: &LinkId) -> Result<()> {
        self.docs
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::LinkNotFound(id.clone()).into())
    }
}
