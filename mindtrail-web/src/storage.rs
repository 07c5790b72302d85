//! Browser-backed progress persistence.
//!
//! One JSON entry in localStorage under a fixed key. Storage being
//! unavailable or holding unparsable data degrades silently to a
//! default record; no error ever reaches a caller.

use mindtrail_game::{ProgressRecord, ProgressStore, ProgressTracker};

/// The single localStorage entry the progress record lives under.
pub const PROGRESS_KEY: &str = "mindtrail.progress";

/// `ProgressStore` implementation over `window.localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

fn storage() -> Option<web_sys::Storage> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|win| win.local_storage().ok().flatten())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

impl ProgressStore for LocalStorageStore {
    fn load(&self) -> ProgressRecord {
        let Some(storage) = storage() else {
            return ProgressRecord::default();
        };
        storage
            .get_item(PROGRESS_KEY)
            .ok()
            .flatten()
            .map(|json| ProgressRecord::from_json_lossy(&json))
            .unwrap_or_default()
    }

    fn save(&self, record: &ProgressRecord) {
        let Some(storage) = storage() else {
            return;
        };
        match serde_json::to_string(record) {
            Ok(json) => {
                if storage.set_item(PROGRESS_KEY, &json).is_err() {
                    log::warn!("progress write failed; keeping in-memory state only");
                }
            }
            Err(err) => log::warn!("progress serialize failed: {err}"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(PROGRESS_KEY);
        }
    }
}

/// Tracker every game screen records through. The store handle is
/// zero-sized, so constructing one per call site is free.
#[must_use]
pub const fn tracker() -> ProgressTracker<LocalStorageStore> {
    ProgressTracker::new(LocalStorageStore::new())
}
