//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod key_action;
pub mod layout;
pub mod photo;

// Re-export for convenience
pub use error::{AppError, ClientError};
pub use key_action::{Direction, KeyAction};
pub use layout::{build_layout, build_layout_with_mode, extend_circular, CarouselLayout, LayoutMode};
pub use photo::{track_offset_for, Photo, TRACK_ORIGIN, TRACK_STRIDE};
