//! Application state (pure).
//!
//! The carousel state machine and the transitions that feed it. Nothing in
//! this module touches the terminal; the only async code is the search flow,
//! which talks to the photo service through a trait.

mod carousel;
pub mod debounce;
pub mod query;
pub mod search;
pub mod search_input_handler;

pub use carousel::{CarouselSettings, CarouselState, Generation, SearchTicket};
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE};
pub use query::{LastKey, SearchQuery, MIN_QUERY_CHARS};
pub use search::{fetch_photo_urls, DEFAULT_PAGE_SIZE};
