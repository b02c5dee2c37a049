//! Session timers owned by the presentation boundary.
//!
//! Two timers exist: signed-in users are signed out after a period without
//! activity, and signed-out visitors are sent to the login page after a
//! short delay. Each timer is a tokio task tracked by its abort handle.
//! Arming a timer replaces the previous task.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use thiserror::Error;
use tokio::task::AbortHandle;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use lb_core::ports::{AuthPort, NavigatorPort, NotifierPort};
use lb_core::{Notification, Route, SessionConfig};

const SIGNED_OUT_INACTIVE: &str = "You have been signed out due to inactivity.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Error signing out.")]
    SignOut,
}

#[derive(Default)]
struct Timers {
    inactivity: Option<AbortHandle>,
    redirect: Option<AbortHandle>,
}

impl Timers {
    fn cancel_inactivity(&mut self) {
        if let Some(handle) = self.inactivity.take() {
            handle.abort();
        }
    }

    fn cancel_redirect(&mut self) {
        if let Some(handle) = self.redirect.take() {
            handle.abort();
        }
    }
}

struct SessionInner {
    auth: Arc<dyn AuthPort>,
    navigator: Arc<dyn NavigatorPort>,
    notifier: Arc<dyn NotifierPort>,
    config: SessionConfig,
    timers: Mutex<Timers>,
}

impl SessionInner {
    fn timers(&self) -> MutexGuard<'_, Timers> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn sign_out(&self) -> Result<(), SessionError> {
        self.timers().cancel_inactivity();
        match self.auth.sign_out().await {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(error = %err, "sign out failed");
                self.notifier
                    .notify(Notification::error(SessionError::SignOut.to_string()));
                Err(SessionError::SignOut)
            }
        }
    }

    async fn expire_inactive(&self) {
        self.timers().inactivity = None;
        info!("signing out after inactivity");
        if self.sign_out().await.is_ok() {
            self.notifier.notify(Notification::info(SIGNED_OUT_INACTIVE));
            self.navigator.navigate(Route::Login);
        }
    }

    fn expire_redirect(&self) {
        self.timers().redirect = None;
        if self.auth.current_user().is_none() {
            debug!("redirecting signed-out visitor to login");
            self.navigator.navigate(Route::Login);
        }
    }
}

/// Inactivity sign-out and unauthenticated redirect timers.
///
/// Must be used from within a tokio runtime. Dropping the lifecycle cancels
/// both timers.
pub struct SessionLifecycle {
    inner: Arc<SessionInner>,
}

impl SessionLifecycle {
    pub fn new(
        auth: Arc<dyn AuthPort>,
        navigator: Arc<dyn NavigatorPort>,
        notifier: Arc<dyn NotifierPort>,
        config: SessionConfig,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                auth,
                navigator,
                notifier,
                config,
                timers: Mutex::new(Timers::default()),
            }),
        }
    }

    /// Arms the timer matching the current identity.
    pub fn start(&self) {
        self.arm_for_current_identity();
    }

    /// User activity: restarts the countdown from now.
    pub fn reset(&self) {
        self.arm_for_current_identity();
    }

    /// Identity changed: swaps the inactivity timer for the redirect timer
    /// or the other way round.
    pub fn on_auth_changed(&self) {
        self.arm_for_current_identity();
    }

    /// Teardown: aborts both timers.
    pub fn cancel(&self) {
        let mut timers = self.inner.timers();
        timers.cancel_inactivity();
        timers.cancel_redirect();
    }

    /// Explicit logout from the navigation bar.
    pub async fn sign_out_now(&self) -> Result<(), SessionError> {
        self.inner.sign_out().await?;
        info!("signed out");
        self.inner.navigator.navigate(Route::Login);
        Ok(())
    }

    pub fn inactivity_armed(&self) -> bool {
        self.inner.timers().inactivity.is_some()
    }

    pub fn redirect_armed(&self) -> bool {
        self.inner.timers().redirect.is_some()
    }

    fn arm_for_current_identity(&self) {
        let signed_in = self.inner.auth.current_user().is_some();
        let mut timers = self.inner.timers();
        if signed_in {
            timers.cancel_redirect();
            timers.cancel_inactivity();
            let after = self.inner.config.inactivity_sign_out;
            timers.inactivity = Some(self.spawn_after(after, |inner| async move {
                inner.expire_inactive().await;
            }));
            debug!(after_secs = after.as_secs(), "inactivity timer armed");
        } else {
            timers.cancel_inactivity();
            timers.cancel_redirect();
            let after = self.inner.config.unauthenticated_redirect;
            timers.redirect = Some(self.spawn_after(after, |inner| async move {
                inner.expire_redirect();
            }));
            debug!(after_secs = after.as_secs(), "redirect timer armed");
        }
    }

    fn spawn_after<F, Fut>(&self, after: Duration, on_fire: F) -> AbortHandle
    where
        F: FnOnce(Arc<SessionInner>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let inner: Weak<SessionInner> = Arc::downgrade(&self.inner);
        tokio::spawn(async move {
            sleep(after).await;
            if let Some(inner) = inner.upgrade() {
                on_fire(inner).await;
            }
        })
        .abort_handle()
    }
}

impl Drop for SessionLifecycle {
    fn drop(&mut self) {
        self.cancel();
    }
}
