use std::sync::{PoisonError, RwLock};

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use lb_core::ids::UserId;
use lb_core::ports::AuthPort;

/// Holds the identity handed over by the sign-in flow.
#[derive(Debug, Default)]
pub struct InMemoryAuthSession {
    user: RwLock<Option<UserId>>,
}

impl InMemoryAuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserId) -> Self {
        Self {
            user: RwLock::new(Some(user)),
        }
    }

    /// Records a successful sign-in.
    pub fn sign_in(&self, user: UserId) {
        info!(user = %user, "signed in");
        *self.user.write().unwrap_or_else(PoisonError::into_inner) = Some(user);
    }
}

#[async_trait]
impl AuthPort for InMemoryAuthSession {
    fn current_user(&self) -> Option<UserId> {
        self.user
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    async fn sign_out(&self) -> Result<()> {
        let previous = self
            .user
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(user) = previous {
            info!(user = %user, "signed out");
        }
        Ok(())
    }
}
