//! Port doubles shared by the use case tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use mockall::mock;

use lb_core::ids::{LinkId, UserId};
use lb_core::links::{LinkEntry, LinkPayload, NewLink};
use lb_core::ports::{
    AuthPort, BlobStorePort, ClipboardPort, ClockPort, ImageProbePort, LinkRepositoryPort,
    NavigatorPort, NotifierPort, ProfileRepositoryPort,
};
use lb_core::profile::Profile;
use lb_core::{Notification, NotificationLevel, Route};

mock! {
    pub Links {}

    #[async_trait]
    impl LinkRepositoryPort for Links {
        async fn fetch_by_owner(&self, owner: &UserId) -> anyhow::Result<Vec<LinkEntry>>;
        async fn create(&self, link: &NewLink) -> anyhow::Result<LinkId>;
        async fn update(&self, id: &LinkId, link: &LinkPayload) -> anyhow::Result<()>;
        async fn delete(&self, id: &LinkId) -> anyhow::Result<()>;
    }
}

mock! {
    pub Profiles {}

    #[async_trait]
    impl ProfileRepositoryPort for Profiles {
        async fn get(&self, owner: &UserId) -> anyhow::Result<Option<Profile>>;
        async fn put(&self, owner: &UserId, profile: &Profile) -> anyhow::Result<()>;
    }
}

mock! {
    pub Blobs {}

    #[async_trait]
    impl BlobStorePort for Blobs {
        async fn upload(&self, key: &str, bytes: &[u8], content_type: &str) -> anyhow::Result<()>;
        async fn resolve_url(&self, key: &str) -> anyhow::Result<String>;
    }
}

mock! {
    pub Clipboard {}

    #[async_trait]
    impl ClipboardPort for Clipboard {
        async fn write_text(&self, text: &str) -> anyhow::Result<()>;
    }
}

mock! {
    pub Probe {}

    impl ImageProbePort for Probe {
        fn dimensions(&self, bytes: &[u8]) -> anyhow::Result<(u32, u32)>;
    }
}

/// Auth double whose identity can change during a test.
#[derive(Default)]
pub struct FakeAuth {
    user: Mutex<Option<UserId>>,
    fail_sign_out: bool,
    sign_outs: AtomicUsize,
}

impl FakeAuth {
    pub fn signed_in(uid: &str) -> Arc<Self> {
        Arc::new(Self {
            user: Mutex::new(Some(UserId::from(uid))),
            ..Self::default()
        })
    }

    pub fn signed_out() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing_sign_out(uid: &str) -> Arc<Self> {
        Arc::new(Self {
            user: Mutex::new(Some(UserId::from(uid))),
            fail_sign_out: true,
            ..Self::default()
        })
    }

    pub fn set_user(&self, uid: Option<&str>) {
        *self.user.lock().unwrap() = uid.map(UserId::from);
    }

    pub fn sign_out_calls(&self) -> usize {
        self.sign_outs.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthPort for FakeAuth {
    fn current_user(&self) -> Option<UserId> {
        self.user.lock().unwrap().clone()
    }

    async fn sign_out(&self) -> anyhow::Result<()> {
        self.sign_outs.fetch_add(1, Ordering::SeqCst);
        if self.fail_sign_out {
            anyhow::bail!("auth provider unreachable");
        }
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|n| n.message.clone()).collect()
    }

    pub fn last(&self) -> Option<Notification> {
        self.seen.lock().unwrap().last().cloned()
    }

    pub fn count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn errors(&self) -> usize {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.level == NotificationLevel::Error)
            .count()
    }
}

impl NotifierPort for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.seen.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn epoch() -> Arc<Self> {
        Arc::new(Self(Utc.timestamp_opt(1_700_000_000, 0).unwrap()))
    }
}

impl ClockPort for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Lets the tasks woken by a timer or a notify run to completion.
pub async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}
