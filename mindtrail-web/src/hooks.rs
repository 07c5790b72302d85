//! Reactive bridges between the synchronous store and the UI.

use mindtrail_game::{ProgressRecord, ProgressStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

use crate::storage::LocalStorageStore;

/// How often display pages re-read the stored record. Writers elsewhere
/// are picked up within one interval; that staleness is accepted.
pub const POLL_INTERVAL_MS: i32 = 800;

/// Poll-based view of the progress record.
///
/// Initializes from the store on mount, re-reads every
/// [`POLL_INTERVAL_MS`] for the component's lifetime, and clears the
/// interval on unmount. Deliberately not a subscription model: the
/// store has no change events, and one polling interval of lag is fine
/// for dashboard pages.
#[hook]
pub fn use_progress() -> UseStateHandle<ProgressRecord> {
    let record = use_state(|| LocalStorageStore::new().load());
    {
        let record = record.clone();
        use_effect_with((), move |()| {
            let mut interval_id: Option<i32> = None;
            let mut stored_closure: Option<Closure<dyn FnMut()>> = None;
            if let Some(window) = web_sys::window() {
                let closure = Closure::wrap(Box::new(move || {
                    record.set(LocalStorageStore::new().load());
                }) as Box<dyn FnMut()>);
                if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
                    closure.as_ref().unchecked_ref(),
                    POLL_INTERVAL_MS,
                ) {
                    interval_id = Some(id);
                    stored_closure = Some(closure);
                }
            }
            move || {
                if let Some(id) = interval_id
                    && let Some(win) = web_sys::window()
                {
                    win.clear_interval_with_handle(id);
                }
                if let Some(closure) = stored_closure {
                    drop(closure);
                }
            }
        });
    }
    record
}
