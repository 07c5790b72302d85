//! One-shot load of the embedded catalog and question banks.

#[cfg(target_arch = "wasm32")]
use crate::app::state::AppState;
use mindtrail_game::{BankData, CatalogData};
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Parse the data files compiled into the bundle. A malformed file is a
/// build defect; the app still boots with an empty catalog rather than
/// panicking in the browser.
#[must_use]
pub fn load_embedded() -> (CatalogData, BankData) {
    let catalog = CatalogData::from_json(include_str!("../../static/assets/data/catalog.json"))
        .unwrap_or_else(|err| {
            log::error!("embedded catalog failed to parse: {err}");
            CatalogData::empty()
        });
    let banks = BankData::from_json(include_str!("../../static/assets/data/questions.json"))
        .unwrap_or_else(|err| {
            log::error!("embedded question banks failed to parse: {err}");
            BankData::empty()
        });
    (catalog, banks)
}

#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let app_state = app_state.clone();
    use_effect_with((), move |()| {
        let (catalog, banks) = load_embedded();
        app_state.catalog.set(catalog);
        app_state.banks.set(banks);
        app_state.boot_ready.set(true);
        || {}
    });
}
