//! Small browser helpers shared by the game screens.

/// Current wall-clock time as an ISO-8601 string.
#[must_use]
pub fn now_iso() -> String {
    String::from(js_sys::Date::new_0().to_iso_string())
}
