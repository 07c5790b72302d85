//! Progress persistence seam.
//!
//! The tracker is an injected service object rather than a module-level
//! singleton, so the web layer plugs in localStorage while tests use
//! [`MemoryStore`].

use std::cell::RefCell;

use crate::catalog::Selection;
use crate::progress::{CompletionOutcome, ProgressRecord};

/// Durable key-value persistence of the single progress record.
///
/// Implementations never surface errors: a missing or malformed stored
/// value reads as the default record.
pub trait ProgressStore {
    /// Read the stored record merged over defaults. Never fails.
    fn load(&self) -> ProgressRecord;

    /// Serialize and overwrite the stored value synchronously.
    fn save(&self, record: &ProgressRecord);

    /// Remove the stored value entirely, reverting future reads to
    /// defaults.
    fn clear(&self);
}

/// In-memory store used by tests and native builds. Stores the record
/// as JSON text so the serde round-trip matches the browser path.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn load(&self) -> ProgressRecord {
        self.slot
            .borrow()
            .as_deref()
            .map(ProgressRecord::from_json_lossy)
            .unwrap_or_default()
    }

    fn save(&self, record: &ProgressRecord) {
        if let Ok(json) = serde_json::to_string(record) {
            *self.slot.borrow_mut() = Some(json);
        }
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// Service object every game screen talks to. Owns a store and applies
/// the accumulation rules as read-modify-write sequences; safe without
/// locking because all access happens on the single UI thread.
pub struct ProgressTracker<S: ProgressStore> {
    store: S,
}

impl<S: ProgressStore> ProgressTracker<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Current record as stored (defaults when empty or corrupt).
    #[must_use]
    pub fn progress(&self) -> ProgressRecord {
        self.store.load()
    }

    /// Called once when a game session begins.
    pub fn record_game_start(&self, selection: &Selection, now_iso: &str) {
        let mut record = self.store.load();
        record.apply_game_start(selection, now_iso);
        self.store.save(&record);
    }

    /// Called exactly once when a game session ends with its raw score.
    /// Returns `None` for `total == 0`, which is a no-op.
    pub fn record_game_complete(
        &self,
        selection: &Selection,
        correct: u32,
        total: u32,
        now_iso: &str,
    ) -> Option<CompletionOutcome> {
        let mut record = self.store.load();
        let outcome = record.apply_game_complete(selection, correct, total, now_iso)?;
        self.store.save(&record);
        Some(outcome)
    }

    /// Clear all progress. Future reads yield the default record.
    pub fn reset(&self) {
        self.store.clear();
    }
}
