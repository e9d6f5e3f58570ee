//! Search box editing (pure state transitions).
//!
//! Each edit records the key first, then reports the new text, so search
//! gating sees the keystroke that produced the text.

use crate::state::CarouselState;
use crossterm::event::KeyCode;
use std::time::Instant;

/// Append a typed character to the search box.
///
/// Returns `true` if a debounced search was scheduled.
pub fn handle_char_input(state: &mut CarouselState, ch: char, now: Instant) -> bool {
    let mut text = state.search_term().to_string();
    text.push(ch);
    state.on_key_pressed(KeyCode::Char(ch));
    state.on_search_text_changed(text, now)
}

/// Delete the last character of the search box.
///
/// Never schedules a search. Still reports the change when the box is
/// already empty, so the recorded key stays accurate.
pub fn handle_backspace(state: &mut CarouselState, now: Instant) -> bool {
    let mut text = state.search_term().to_string();
    text.pop();
    state.on_key_pressed(KeyCode::Backspace);
    state.on_search_text_changed(text, now)
}

/// Clear the whole search box (Ctrl+u).
pub fn handle_clear(state: &mut CarouselState, now: Instant) -> bool {
    state.on_key_pressed(KeyCode::Delete);
    state.on_search_text_changed(String::new(), now)
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
