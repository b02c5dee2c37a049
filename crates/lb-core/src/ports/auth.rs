use anyhow::Result;
use async_trait::async_trait;

use crate::ids::UserId;

/// Identity provider.
///
/// Sign-in and registration happen outside this crate; the core only reads
/// the current identity and can end the session.
#[async_trait]
pub trait AuthPort: Send + Sync {
    /// The signed-in user, or `None` when nobody is signed in.
    fn current_user(&self) -> Option<UserId>;

    async fn sign_out(&self) -> Result<()>;
}
