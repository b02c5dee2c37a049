//! Draft URL text and the ordered list of editable link rows.
//!
//! Rows and drafts are correlated by [`DraftKey`], never by position. The
//! index-based API resolves the row at an index to its key first, so moving or
//! removing a row cannot hand one row's URL to another.

use std::collections::HashMap;

use super::entry::{LinkEntry, LinkPayload};
use super::errors::{FieldError, FieldIssue, LinkListError};
use super::platform::Platform;
use super::validation::is_valid_url;
use crate::ids::DraftKey;

/// What the user is currently typing, per row.
#[derive(Debug, Clone, Default)]
pub struct DraftStore {
    drafts: HashMap<DraftKey, String>,
}

impl DraftStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &DraftKey) -> Option<&str> {
        self.drafts.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: DraftKey, text: impl Into<String>) {
        self.drafts.insert(key, text.into());
    }

    /// Removes the draft for `key`. Other keys are untouched.
    pub fn delete(&mut self, key: &DraftKey) -> Option<String> {
        self.drafts.remove(key)
    }

    /// Bulk replacement used after a fetch from storage.
    pub fn replace_all(&mut self, drafts: HashMap<DraftKey, String>) {
        self.drafts = drafts;
    }

    pub fn contains(&self, key: &DraftKey) -> bool {
        self.drafts.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }
}

/// One row of the link editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRecord {
    pub key: DraftKey,
    pub entry: LinkEntry,
}

/// Outcome of checking every row before a save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub empty: Vec<FieldIssue>,
    pub invalid: Vec<FieldIssue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.empty.is_empty() && self.invalid.is_empty()
    }
}

/// A planned persistence call for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOp {
    Update {
        id: crate::ids::LinkId,
        payload: LinkPayload,
    },
    Create {
        payload: LinkPayload,
    },
}

/// Ordered link rows plus their drafts.
#[derive(Debug, Clone, Default)]
pub struct LinkDraftList {
    records: Vec<LinkRecord>,
    drafts: DraftStore,
}

impl LinkDraftList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[LinkRecord] {
        &self.records
    }

    pub fn drafts(&self) -> &DraftStore {
        &self.drafts
    }

    pub fn get(&self, index: usize) -> Result<&LinkRecord, LinkListError> {
        self.records.get(index).ok_or(LinkListError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut LinkRecord, LinkListError> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(LinkListError::IndexOutOfRange { index, len })
    }

    pub fn key_at(&self, index: usize) -> Result<&DraftKey, LinkListError> {
        self.get(index).map(|record| &record.key)
    }

    pub fn index_of(&self, key: &DraftKey) -> Option<usize> {
        self.records.iter().position(|record| &record.key == key)
    }

    /// Appends a row and returns its key. No draft is created.
    pub fn push(&mut self, entry: LinkEntry) -> DraftKey {
        let key = DraftKey::new();
        self.records.push(LinkRecord {
            key: key.clone(),
            entry,
        });
        key
    }

    pub fn draft_at(&self, index: usize) -> Result<Option<&str>, LinkListError> {
        let key = self.key_at(index)?;
        Ok(self.drafts.get(key))
    }

    pub fn set_draft(&mut self, index: usize, text: impl Into<String>) -> Result<(), LinkListError> {
        let key = self.key_at(index)?.clone();
        self.drafts.set(key, text);
        Ok(())
    }

    /// Changes the platform of a row and blanks its URL. The stored URL of a
    /// persisted row no longer counts until the user types a new one.
    pub fn set_platform(&mut self, index: usize, platform: Platform) -> Result<(), LinkListError> {
        let record = self.get_mut(index)?;
        record.entry.platform = Some(platform);
        let key = record.key.clone();
        self.drafts.set(key, "");
        Ok(())
    }

    /// Moves the row at `from` so that it ends up at `to`.
    pub fn move_record(&mut self, from: usize, to: usize) -> Result<(), LinkListError> {
        let len = self.records.len();
        if to >= len {
            return Err(LinkListError::IndexOutOfRange { index: to, len });
        }
        self.get(from)?;
        let record = self.records.remove(from);
        self.records.insert(to, record);
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<LinkRecord, LinkListError> {
        self.get(index)?;
        let record = self.records.remove(index);
        self.drafts.delete(&record.key);
        Ok(record)
    }

    pub fn remove_by_key(&mut self, key: &DraftKey) -> Option<LinkRecord> {
        let index = self.index_of(key)?;
        let record = self.records.remove(index);
        self.drafts.delete(&record.key);
        Some(record)
    }

    /// Draft text if the row has one, else the last persisted URL.
    pub fn effective_url<'a>(&'a self, record: &'a LinkRecord) -> &'a str {
        self.drafts
            .get(&record.key)
            .unwrap_or(record.entry.url.as_str())
    }

    /// Inline error for a row, independent of whether it is shown yet.
    pub fn field_error(&self, record: &LinkRecord) -> Option<FieldError> {
        let url = self.effective_url(record);
        if url.is_empty() {
            Some(FieldError::Empty)
        } else if !is_valid_url(record.entry.platform, url) {
            Some(FieldError::Invalid)
        } else {
            None
        }
    }

    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (index, record) in self.records.iter().enumerate() {
            let issue = |error| FieldIssue {
                index,
                key: record.key.clone(),
                error,
            };
            match self.field_error(record) {
                Some(FieldError::Empty) => report.empty.push(issue(FieldError::Empty)),
                Some(FieldError::Invalid) => report.invalid.push(issue(FieldError::Invalid)),
                None => {}
            }
        }
        report
    }

    /// Builds one create or update per row, with `position` taken from the
    /// current order.
    ///
    /// Returns `None` if any row has no platform; callers validate first.
    pub fn save_plan(&self) -> Option<Vec<SaveOp>> {
        self.records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let payload = LinkPayload {
                    platform: record.entry.platform?,
                    url: self.effective_url(record).to_string(),
                    created_at: record.entry.created_at,
                    position: u32::try_from(index).unwrap_or(u32::MAX),
                };
                Some(match &record.entry.id {
                    Some(id) => SaveOp::Update {
                        id: id.clone(),
                        payload,
                    },
                    None => SaveOp::Create { payload },
                })
            })
            .collect()
    }

    /// Replaces every row and draft with what storage returned.
    ///
    /// Rows get fresh keys; drafts are seeded from the persisted URLs.
    pub fn replace_with_persisted(&mut self, entries: Vec<LinkEntry>) {
        let mut drafts = HashMap::with_capacity(entries.len());
        self.records = entries
            .into_iter()
            .map(|entry| {
                let key = DraftKey::new();
                drafts.insert(key.clone(), entry.url.clone());
                LinkRecord { key, entry }
            })
            .collect();
        self.drafts.replace_all(drafts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::LinkId;
    use chrono::{TimeZone, Utc};

    fn unsaved() -> LinkEntry {
        LinkEntry::unsaved(Utc.timestamp_opt(0, 0).unwrap())
    }

    fn persisted(id: &str, platform: Platform, url: &str) -> LinkEntry {
        LinkEntry {
            id: Some(LinkId::from(id)),
            platform: Some(platform),
            url: url.to_string(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
            position: 0,
        }
    }

    #[test]
    fn draft_store_delete_leaves_other_keys_alone() {
        let mut store = DraftStore::new();
        let a = DraftKey::new();
        let b = DraftKey::new();
        store.set(a.clone(), "one");
        store.set(b.clone(), "two");

        assert_eq!(store.delete(&a), Some("one".to_string()));
        assert_eq!(store.get(&a), None);
        assert_eq!(store.get(&b), Some("two"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn draft_store_replace_all_discards_previous_drafts() {
        let mut store = DraftStore::new();
        let stale = DraftKey::new();
        store.set(stale.clone(), "old");

        let fresh = DraftKey::new();
        store.replace_all(HashMap::from([(fresh.clone(), "new".to_string())]));

        assert!(!store.contains(&stale));
        assert_eq!(store.get(&fresh), Some("new"));
    }

    #[test]
    fn set_platform_clears_the_draft_of_that_row_only() {
        let mut list = LinkDraftList::new();
        list.push(unsaved());
        list.push(unsaved());
        list.set_draft(0, "https://github.com/alice").unwrap();
        list.set_draft(1, "https://github.com/bob").unwrap();

        list.set_platform(0, Platform::LinkedIn).unwrap();

        assert_eq!(list.draft_at(0).unwrap(), Some(""));
        assert_eq!(list.draft_at(1).unwrap(), Some("https://github.com/bob"));
        assert_eq!(list.get(0).unwrap().entry.platform, Some(Platform::LinkedIn));
    }

    #[test]
    fn set_platform_hides_the_stored_url_of_a_persisted_row() {
        let mut list = LinkDraftList::new();
        list.push(persisted("d1", Platform::GitHub, "https://github.com/old"));

        list.set_platform(0, Platform::GitHub).unwrap();

        let record = list.get(0).unwrap();
        assert_eq!(list.effective_url(record), "");
        assert_eq!(list.field_error(record), Some(FieldError::Empty));
        assert_eq!(list.validate().empty.len(), 1);
    }

    #[test]
    fn removing_a_row_keeps_later_drafts_attached_to_their_rows() {
        let mut list = LinkDraftList::new();
        for _ in 0..3 {
            list.push(unsaved());
        }
        list.set_draft(0, "a").unwrap();
        list.set_draft(1, "b").unwrap();
        list.set_draft(2, "c").unwrap();

        let removed = list.remove(1).unwrap();

        assert!(!list.drafts().contains(&removed.key));
        assert_eq!(list.draft_at(0).unwrap(), Some("a"));
        assert_eq!(list.draft_at(1).unwrap(), Some("c"));
    }

    #[test]
    fn moving_a_row_moves_its_draft_with_it() {
        let mut list = LinkDraftList::new();
        for _ in 0..3 {
            list.push(unsaved());
        }
        list.set_draft(0, "first").unwrap();
        list.set_draft(2, "third").unwrap();

        list.move_record(2, 0).unwrap();

        assert_eq!(list.draft_at(0).unwrap(), Some("third"));
        assert_eq!(list.draft_at(1).unwrap(), Some("first"));
        assert_eq!(list.draft_at(2).unwrap(), None);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mut list = LinkDraftList::new();
        list.push(unsaved());
        assert_eq!(
            list.set_draft(3, "x"),
            Err(LinkListError::IndexOutOfRange { index: 3, len: 1 })
        );
        assert!(list.move_record(0, 1).is_err());
        assert!(list.remove(1).is_err());
    }

    #[test]
    fn effective_url_prefers_the_draft() {
        let mut list = LinkDraftList::new();
        list.push(persisted("d1", Platform::GitHub, "https://github.com/old"));
        let record = list.get(0).unwrap().clone();
        assert_eq!(list.effective_url(&record), "https://github.com/old");

        list.set_draft(0, "https://github.com/new").unwrap();
        assert_eq!(list.effective_url(&record), "https://github.com/new");
    }

    #[test]
    fn validate_separates_empty_and_invalid_rows() {
        let mut list = LinkDraftList::new();
        list.push(unsaved());
        list.push(unsaved());
        list.push(unsaved());
        list.set_platform(1, Platform::LinkedIn).unwrap();
        list.set_draft(1, "not-a-url").unwrap();
        list.set_platform(2, Platform::GitHub).unwrap();
        list.set_draft(2, "https://github.com/alice").unwrap();

        let report = list.validate();

        assert_eq!(report.empty.len(), 1);
        assert_eq!(report.empty[0].index, 0);
        assert_eq!(report.invalid.len(), 1);
        assert_eq!(report.invalid[0].index, 1);
        assert_eq!(report.invalid[0].error, FieldError::Invalid);
    }

    #[test]
    fn save_plan_creates_unsaved_rows_and_updates_persisted_ones() {
        let mut list = LinkDraftList::new();
        list.push(persisted("d1", Platform::GitHub, "https://github.com/a"));
        list.push(unsaved());
        list.set_platform(1, Platform::YouTube).unwrap();
        list.set_draft(1, "https://youtube.com/user/b").unwrap();

        let plan = list.save_plan().unwrap();

        assert_eq!(plan.len(), 2);
        match &plan[0] {
            SaveOp::Update { id, payload } => {
                assert_eq!(id, &LinkId::from("d1"));
                assert_eq!(payload.url, "https://github.com/a");
                assert_eq!(payload.position, 0);
            }
            other => panic!("expected update, got {other:?}"),
        }
        match &plan[1] {
            SaveOp::Create { payload } => {
                assert_eq!(payload.platform, Platform::YouTube);
                assert_eq!(payload.position, 1);
            }
            other => panic!("expected create, got {other:?}"),
        }
    }

    #[test]
    fn save_plan_requires_a_platform_on_every_row() {
        let mut list = LinkDraftList::new();
        list.push(unsaved());
        list.set_draft(0, "https://github.com/a").unwrap();
        assert_eq!(list.save_plan(), None);
    }

    #[test]
    fn replace_with_persisted_seeds_drafts_from_urls() {
        let mut list = LinkDraftList::new();
        list.push(unsaved());
        list.set_draft(0, "typing...").unwrap();

        list.replace_with_persisted(vec![
            persisted("d1", Platform::GitHub, "https://github.com/a"),
            persisted("d2", Platform::Twitter, "https://twitter.com/b"),
        ]);

        assert_eq!(list.len(), 2);
        assert_eq!(list.drafts().len(), 2);
        assert_eq!(list.draft_at(0).unwrap(), Some("https://github.com/a"));
        assert_eq!(list.draft_at(1).unwrap(), Some("https://twitter.com/b"));
    }
}
