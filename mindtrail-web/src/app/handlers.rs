//! Callback builders wiring pages to app state, the tracker, and the
//! narrator.

#[cfg(target_arch = "wasm32")]
use mindtrail_game::ChallengeCode;
use mindtrail_game::{GameKind, Selection};
use yew::prelude::*;
#[cfg(target_arch = "wasm32")]
use yew_router::prelude::Navigator;

use crate::app::state::AppState;
#[cfg(target_arch = "wasm32")]
use crate::router::Route;

/// Fresh entropy for a new round's seed.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn round_entropy() -> u64 {
    js_sys::Date::now() as u64
}

/// Selection a bare challenge code lands on: the standard drill
/// subtopic for its game kind.
#[must_use]
pub fn challenge_selection(kind: GameKind) -> Selection {
    match kind {
        GameKind::Quiz => Selection::new("math", "arithmetic", "times-tables", 1),
        GameKind::Sorting => Selection::new("cs", "sorting", "quick-sort", 1),
        GameKind::Graph => Selection::new("cs", "graphs", "bfs", 1),
    }
}

#[cfg(target_arch = "wasm32")]
pub fn build_pick_game(
    state: &AppState,
    navigator: Option<Navigator>,
) -> Callback<(Selection, GameKind)> {
    let selection_handle = state.selection.clone();
    let challenge_handle = state.challenge.clone();
    Callback::from(move |(selection, kind): (Selection, GameKind)| {
        selection_handle.set(Some(selection));
        challenge_handle.set(ChallengeCode::roll(kind, round_entropy()));
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::for_kind(kind));
        }
    })
}

#[cfg(target_arch = "wasm32")]
pub fn build_load_challenge(state: &AppState, navigator: Option<Navigator>) -> Callback<String> {
    let selection_handle = state.selection.clone();
    let challenge_handle = state.challenge.clone();
    Callback::from(move |text: String| {
        let Ok(code) = text.parse::<ChallengeCode>() else {
            crate::narrator::speak("That challenge code doesn't look right.");
            return;
        };
        selection_handle.set(Some(challenge_selection(code.kind)));
        challenge_handle.set(code);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::for_kind(code.kind));
        }
    })
}

#[cfg(target_arch = "wasm32")]
pub fn build_exit_game(state: &AppState, navigator: Option<Navigator>) -> Callback<()> {
    let selection_handle = state.selection.clone();
    Callback::from(move |()| {
        selection_handle.set(None);
        if let Some(nav) = navigator.as_ref() {
            nav.push(&Route::Games);
        }
    })
}

/// Clears all stored progress. The polling hook makes every display
/// page catch up within one interval.
pub fn build_reset_progress() -> Callback<()> {
    Callback::from(move |()| {
        crate::storage::tracker().reset();
        crate::narrator::speak("Progress cleared. Fresh start!");
    })
}

pub fn build_toggle_voice(state: &AppState) -> Callback<bool> {
    let voice_handle = state.voice.clone();
    Callback::from(move |enabled: bool| {
        crate::narrator::set_voice_enabled(enabled);
        voice_handle.set(enabled);
        if enabled {
            crate::narrator::speak("Narration on.");
        }
    })
}
