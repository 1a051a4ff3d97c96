//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Per-subject study tips prompt
pub const STUDY_TIPS: &str = include_str!("../../prompts/study-tips.pmt");

/// Post-Pomodoro break suggestion prompt
pub const BREAK: &str = include_str!("../../prompts/break.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "study-tips" => Some(STUDY_TIPS),
        "break" => Some(BREAK),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}
