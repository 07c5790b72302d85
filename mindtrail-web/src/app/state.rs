use mindtrail_game::{BankData, CatalogData, ChallengeCode, GameKind, Selection};
use yew::prelude::*;

/// Handle bundle shared across the app shell and handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: UseStateHandle<CatalogData>,
    pub banks: UseStateHandle<BankData>,
    pub boot_ready: UseStateHandle<bool>,
    /// What is currently being played, if anything.
    pub selection: UseStateHandle<Option<Selection>>,
    /// Code of the active round; printed on the game screen so the
    /// round can be replayed elsewhere.
    pub challenge: UseStateHandle<ChallengeCode>,
    pub voice: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_state(CatalogData::empty),
        banks: use_state(BankData::empty),
        boot_ready: use_state(|| false),
        selection: use_state(|| None::<Selection>),
        challenge: use_state(|| ChallengeCode::roll(GameKind::Quiz, 0)),
        voice: use_state(crate::narrator::voice_enabled),
    }
}

impl AppState {
    #[must_use]
    pub fn data_ready(&self) -> bool {
        !self.catalog.subjects.is_empty()
    }
}
