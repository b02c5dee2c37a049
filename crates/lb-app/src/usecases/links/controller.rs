use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use anyhow::Context;
use futures::future::join_all;
use tracing::{debug, info, warn};

use lb_core::ids::{DraftKey, UserId};
use lb_core::links::{
    sort_for_display, LinkDraftList, LinkEntry, LinkListError, NewLink, Platform, RemoveError,
    SaveError, SaveOp,
};
use lb_core::ports::{AuthPort, ClockPort, LinkRepositoryPort, NotifierPort};
use lb_core::preview::{phone_mockup, MockupSlot};
use lb_core::Notification;

use super::view::{LinkListView, LinkRowView, SaveState};

const SAVED: &str = "Links saved successfully!";
const DELETED: &str = "Link deleted successfully!";

#[derive(Debug)]
struct EditorState {
    list: LinkDraftList,
    /// Set by the first save attempt; inline errors stay hidden until then.
    validation_performed: bool,
    show_placeholder: bool,
    save_state: SaveState,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            list: LinkDraftList::new(),
            validation_performed: false,
            show_placeholder: true,
            save_state: SaveState::Idle,
        }
    }
}

/// Drives the link editor of the signed-in user.
///
/// All operations take `&self`. State sits behind a mutex that is never held
/// across a collaborator call, so the presentation layer can keep editing
/// while a save or delete is in flight.
pub struct LinkListController {
    links: Arc<dyn LinkRepositoryPort>,
    auth: Arc<dyn AuthPort>,
    notifier: Arc<dyn NotifierPort>,
    clock: Arc<dyn ClockPort>,
    state: Mutex<EditorState>,
}

/// Returns the controller to `Idle` when a save finishes or is dropped.
struct SaveGuard<'a> {
    state: &'a Mutex<EditorState>,
}

impl Drop for SaveGuard<'_> {
    fn drop(&mut self) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .save_state = SaveState::Idle;
    }
}

impl LinkListController {
    pub fn new(
        links: Arc<dyn LinkRepositoryPort>,
        auth: Arc<dyn AuthPort>,
        notifier: Arc<dyn NotifierPort>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            links,
            auth,
            notifier,
            clock,
            state: Mutex::new(EditorState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, EditorState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an unsaved row with no platform and an empty URL.
    pub fn add_link(&self) -> DraftKey {
        let entry = LinkEntry::unsaved(self.clock.now());
        let mut state = self.state();
        let key = state.list.push(entry);
        state.show_placeholder = false;
        debug!(key = %key, rows = state.list.len(), "link row added");
        key
    }

    /// Sets the platform of a row. The row's draft URL is discarded.
    pub fn select_platform(&self, index: usize, platform: Platform) -> Result<(), LinkListError> {
        self.state().list.set_platform(index, platform)?;
        debug!(index, platform = %platform, "platform selected");
        Ok(())
    }

    pub fn update_url(&self, index: usize, text: impl Into<String>) -> Result<(), LinkListError> {
        self.state().list.set_draft(index, text)
    }

    /// Moves a row. The new order is persisted on the next save.
    pub fn move_link(&self, from: usize, to: usize) -> Result<(), LinkListError> {
        self.state().list.move_record(from, to)?;
        debug!(from, to, "link row moved");
        Ok(())
    }

    /// Removes a row.
    ///
    /// A persisted row is deleted from storage first and only leaves the list
    /// once the delete succeeded. An unsaved row is dropped locally.
    #[tracing::instrument(name = "usecase.remove_link.execute", skip(self))]
    pub async fn remove_link(&self, index: usize) -> Result<(), RemoveError> {
        let (key, id) = {
            let state = self.state();
            let record = state.list.get(index)?;
            (record.key.clone(), record.entry.id.clone())
        };

        let Some(id) = id else {
            self.forget(&key);
            debug!(key = %key, "unsaved link removed");
            return Ok(());
        };

        if let Err(err) = self.links.delete(&id).await {
            warn!(link_id = %id, error = %err, "failed to delete link");
            self.notifier
                .notify(Notification::error(RemoveError::Persistence.to_string()));
            return Err(RemoveError::Persistence);
        }

        // Resolved by key: rows may have moved while the delete was in flight.
        self.forget(&key);
        info!(link_id = %id, "link deleted");
        self.notifier.notify(Notification::success(DELETED));
        Ok(())
    }

    fn forget(&self, key: &DraftKey) {
        let mut state = self.state();
        state.list.remove_by_key(key);
        if state.list.is_empty() {
            state.show_placeholder = true;
        }
    }

    /// Validates every row and writes the list to storage.
    ///
    /// Rows with an id are updated, the others are created for the signed-in
    /// user. All calls run concurrently. Whatever the outcome of those calls,
    /// the list is then reloaded from storage.
    #[tracing::instrument(name = "usecase.save_links.execute", skip(self))]
    pub async fn save(&self) -> Result<(), SaveError> {
        let (owner, plan) = match self.begin_save() {
            Ok(started) => started,
            Err(SaveError::AlreadyInProgress) => {
                debug!("save ignored, another save is running");
                return Err(SaveError::AlreadyInProgress);
            }
            Err(err) => {
                info!(reason = %err, "save rejected");
                self.notifier.notify(Notification::error(err.to_string()));
                return Err(err);
            }
        };
        let _guard = SaveGuard { state: &self.state };

        let total = plan.len();
        info!(owner = %owner, total, "saving links");
        let results = join_all(plan.into_iter().map(|op| self.persist(&owner, op))).await;

        let mut failed = 0;
        for err in results.into_iter().filter_map(Result::err) {
            failed += 1;
            warn!(error = ?err, "link write failed");
        }

        let outcome = if failed == 0 {
            info!(total, "links saved");
            self.notifier.notify(Notification::success(SAVED));
            Ok(())
        } else {
            let err = SaveError::Persistence { failed, total };
            warn!(failed, total, "links partially saved");
            self.notifier.notify(Notification::error(err.to_string()));
            Err(err)
        };

        self.state().save_state = SaveState::Settling;
        self.reload(&owner).await;
        outcome
    }

    /// Runs the local checks of a save and marks it as started.
    fn begin_save(&self) -> Result<(UserId, Vec<SaveOp>), SaveError> {
        let mut state = self.state();
        if state.save_state.is_busy() {
            return Err(SaveError::AlreadyInProgress);
        }
        state.validation_performed = true;

        let report = state.list.validate();
        if !report.empty.is_empty() {
            return Err(SaveError::EmptyLinks(report.empty));
        }
        let owner = self.auth.current_user().ok_or(SaveError::Unauthenticated)?;
        if !report.invalid.is_empty() {
            return Err(SaveError::InvalidLinks(report.invalid));
        }
        let plan = state
            .list
            .save_plan()
            .ok_or_else(|| SaveError::InvalidLinks(Vec::new()))?;

        state.save_state = SaveState::Saving;
        Ok((owner, plan))
    }

    async fn persist(&self, owner: &UserId, op: SaveOp) -> anyhow::Result<()> {
        match op {
            SaveOp::Update { id, payload } => self
                .links
                .update(&id, &payload)
                .await
                .with_context(|| format!("update link {id}")),
            SaveOp::Create { payload } => {
                let new_link = NewLink {
                    owner: owner.clone(),
                    link: payload,
                };
                let id = self
                    .links
                    .create(&new_link)
                    .await
                    .context("create link")?;
                debug!(link_id = %id, "link created");
                Ok(())
            }
        }
    }

    /// Replaces the list and drafts with the signed-in user's stored links.
    ///
    /// A failed fetch is logged and leaves the editor as it was.
    #[tracing::instrument(name = "usecase.refresh_links.execute", skip(self))]
    pub async fn refresh(&self) {
        match self.auth.current_user() {
            Some(owner) => self.reload(&owner).await,
            None => debug!("refresh skipped, nobody is signed in"),
        }
    }

    async fn reload(&self, owner: &UserId) {
        let mut entries = match self.links.fetch_by_owner(owner).await {
            Ok(entries) => entries,
            Err(err) => {
                warn!(owner = %owner, error = %err, "failed to fetch links");
                return;
            }
        };
        sort_for_display(&mut entries);

        let mut state = self.state();
        state.list.replace_with_persisted(entries);
        let empty = state.list.is_empty();
        state.show_placeholder = empty;
        debug!(owner = %owner, rows = state.list.len(), "links loaded");
    }

    pub fn snapshot(&self) -> LinkListView {
        let state = self.state();
        let list = &state.list;
        let rows = list
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| LinkRowView {
                index,
                key: record.key.clone(),
                platform: record.entry.platform,
                url: list.drafts().get(&record.key).unwrap_or_default().to_string(),
                placeholder_url: record.entry.platform.map(|p| p.default_url()).unwrap_or(""),
                persisted: record.entry.is_persisted(),
                error: if state.validation_performed {
                    list.field_error(record)
                } else {
                    None
                },
            })
            .collect();

        LinkListView {
            rows,
            show_placeholder: state.show_placeholder,
            save_state: state.save_state,
        }
    }

    /// The phone mockup beside the editor, reflecting unsaved drafts.
    pub fn mockup_links(&self) -> Vec<MockupSlot> {
        let state = self.state();
        let list = &state.list;
        phone_mockup(list.records().iter().map(|record| {
            (
                record.entry.platform,
                list.drafts().get(&record.key).unwrap_or(""),
            )
        }))
    }
}
