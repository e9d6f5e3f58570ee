//! Carousel widget state and transitions.
//!
//! `CarouselState` is the single owner of the widget's interaction state. The
//! view reads it; user intent and search completions come in through the
//! transition methods below. Timestamps are passed in explicitly so debounce
//! behaviour is testable without a clock.

use crate::model::{build_layout_with_mode, CarouselLayout, Direction, LayoutMode, Photo};
use crate::state::debounce::{Debouncer, DEFAULT_DEBOUNCE};
use crate::state::query::{LastKey, SearchQuery};
use std::time::{Duration, Instant};
use tracing::debug;

/// Settings that shape the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Quiet period before a typed query is searched.
    pub debounce: Duration,
    /// Whether layouts get wrap-around clones.
    pub layout_mode: LayoutMode,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            layout_mode: LayoutMode::default(),
        }
    }
}

/// Monotonic stamp attached to each dispatched search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(u64);

impl Generation {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A search that has been dispatched and must be reported back with its generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    pub generation: Generation,
    pub term: String,
}

/// Widget state. Created empty on mount, dropped on exit.
#[derive(Debug, Clone)]
pub struct CarouselState {
    search_term: String,
    is_loading: bool,
    /// Term of the latest dispatched search while it is in flight.
    in_flight_term: Option<String>,
    layout: CarouselLayout,
    selected_index: i32,
    last_key: LastKey,
    debouncer: Debouncer<String>,
    /// Generation of the most recently dispatched search.
    generation: Generation,
    layout_mode: LayoutMode,
    spinner_frame: usize,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(CarouselSettings::default())
    }
}

impl CarouselState {
    pub fn new(settings: CarouselSettings) -> Self {
        Self {
            search_term: String::new(),
            is_loading: false,
            in_flight_term: None,
            layout: CarouselLayout::empty(),
            selected_index: 0,
            last_key: LastKey::None,
            debouncer: Debouncer::new(settings.debounce),
            generation: Generation::default(),
            layout_mode: settings.layout_mode,
            spinner_frame: 0,
        }
    }

    // ===== Accessors =====

    /// Raw text of the search box, exactly as typed.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Term of the search being waited on, which may differ from the search box.
    pub fn in_flight_term(&self) -> Option<&str> {
        self.in_flight_term.as_deref()
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn selected_index(&self) -> i32 {
        self.selected_index
    }

    pub fn last_key(&self) -> LastKey {
        self.last_key
    }

    pub fn layout_mode(&self) -> LayoutMode {
        self.layout_mode
    }

    pub fn spinner_frame(&self) -> usize {
        self.spinner_frame
    }

    /// Photo under the selected key, or `None` when the key is not in the layout.
    pub fn selected_photo(&self) -> Option<&Photo> {
        self.layout.get(self.selected_index)
    }

    /// Deadline of the debounced search waiting to fire, if any.
    pub fn pending_search(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    // ===== Input transitions =====

    /// Record the key that produced the next text change.
    pub fn on_key_pressed(&mut self, key: impl Into<LastKey>) {
        self.last_key = key.into();
    }

    /// Store new search box text and schedule a debounced search if it qualifies.
    ///
    /// Returns `true` when a search was (re)scheduled. A deletion keystroke leaves
    /// an already pending search untouched.
    pub fn on_search_text_changed(&mut self, raw_text: impl Into<String>, now: Instant) -> bool {
        self.search_term = raw_text.into();

        match SearchQuery::parse(&self.search_term, self.last_key) {
            Some(query) => {
                debug!(query = query.as_str(), "search scheduled");
                self.debouncer.schedule(query.into_string(), now);
                true
            }
            None => false,
        }
    }

    /// Select the photo stored under `index`.
    ///
    /// Ignored unless `index` is a key of the current layout. A clone selects
    /// the photo it duplicates, so the index stays within `0..len`.
    pub fn on_thumbnail_selected(&mut self, index: i32) -> bool {
        let Some(logical) = self.layout.logical_index_of(index) else {
            debug!(index, "ignoring selection of unknown key");
            return false;
        };
        self.selected_index = logical as i32;
        true
    }

    /// Step the selection one photo, wrapping at both ends.
    ///
    /// Works over the logical photo count: a selected clone is first snapped
    /// back to the photo it duplicates.
    pub fn on_navigate(&mut self, direction: Direction) -> bool {
        let count = self.layout.len();
        if count == 0 {
            return false;
        }

        let last = count - 1;
        let current = self.current_logical_index();
        let next = match direction {
            Direction::Previous if current == 0 => last,
            Direction::Previous => current - 1,
            Direction::Next if current >= last => 0,
            Direction::Next => current + 1,
        };
        self.selected_index = next as i32;
        true
    }

    /// Jump to the first logical photo.
    pub fn select_first(&mut self) -> bool {
        self.select_logical(0)
    }

    /// Jump to the last logical photo.
    pub fn select_last(&mut self) -> bool {
        match self.layout.len() {
            0 => false,
            n => self.select_logical(n - 1),
        }
    }

    fn select_logical(&mut self, index: usize) -> bool {
        if index >= self.layout.len() {
            return false;
        }
        self.selected_index = index as i32;
        true
    }

    fn current_logical_index(&self) -> usize {
        self.layout
            .logical_index_of(self.selected_index)
            .unwrap_or_else(|| {
                self.selected_index
                    .rem_euclid(self.layout.len().max(1) as i32) as usize
            })
    }

    // ===== Search transitions =====

    /// Take the debounced search if its quiet period has elapsed.
    pub fn due_search(&mut self, now: Instant) -> Option<String> {
        self.debouncer.poll(now)
    }

    /// Take the debounced search right away, skipping the rest of its quiet period.
    pub fn take_pending_search(&mut self) -> Option<String> {
        self.debouncer.cancel()
    }

    /// Mark a search as in flight and stamp it with a fresh generation.
    pub fn begin_search(&mut self, term: impl Into<String>) -> SearchTicket {
        self.generation = Generation(self.generation.0 + 1);
        self.is_loading = true;
        let term = term.into();
        self.in_flight_term = Some(term.clone());
        SearchTicket {
            generation: self.generation,
            term,
        }
    }

    /// Replace the layout with the results of a completed search.
    ///
    /// Results stamped with anything but the latest dispatched generation are
    /// discarded. Returns `true` when the layout was replaced.
    pub fn apply_search_results(&mut self, generation: Generation, urls: Vec<String>) -> bool {
        if generation != self.generation {
            debug!(
                stale = generation.value(),
                latest = self.generation.value(),
                "discarding stale search results"
            );
            return false;
        }

        self.layout = build_layout_with_mode(&urls, self.layout_mode);
        self.selected_index = self.layout.zero_key();
        self.is_loading = false;
        self.in_flight_term = None;
        true
    }

    /// Advance the loading spinner by one frame.
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = self.spinner_frame.wrapping_add(1);
    }
}

#[cfg(test)]
#[path = "carousel_tests.rs"]
mod tests;
