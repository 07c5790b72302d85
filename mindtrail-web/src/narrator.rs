//! The spoken narrator: SpeechSynthesis plus a persisted on/off
//! preference.

#[cfg(target_arch = "wasm32")]
const VOICE_KEY: &str = "mindtrail.voice";

/// Whether narration is enabled. Defaults to on when no preference is
/// stored.
#[must_use]
pub fn voice_enabled() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(VOICE_KEY).ok().flatten())
            .is_none_or(|v| v != "0")
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        true
    }
}

/// Persist the narration preference. Speaking stops immediately when
/// turned off.
pub fn set_voice_enabled(enabled: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(win) = web_sys::window() else {
            return;
        };
        if let Some(storage) = win.local_storage().ok().flatten() {
            let _ = storage.set_item(VOICE_KEY, if enabled { "1" } else { "0" });
        }
        if !enabled
            && let Ok(synth) = win.speech_synthesis()
        {
            synth.cancel();
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = enabled;
    }
}

/// Speak one narration line, replacing anything still queued so rapid
/// game events do not back up the speech queue.
pub fn speak(text: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if !voice_enabled() {
            return;
        }
        let Some(win) = web_sys::window() else {
            return;
        };
        let Ok(synth) = win.speech_synthesis() else {
            log::debug!("speech synthesis unavailable; narration skipped");
            return;
        };
        synth.cancel();
        if let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) {
            synth.speak(&utterance);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = text;
    }
}
