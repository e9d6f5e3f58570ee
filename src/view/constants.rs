//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the thumbnail track in lines (border + label + file name + border).
pub const TRACK_HEIGHT: u16 = 4;

/// Height of the status bar in lines.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of one thumbnail in columns. One column per track unit, so the
/// track stride (16) leaves a one-column gap between thumbnails.
pub const THUMBNAIL_WIDTH: u16 = 15;

/// Width of the track "window" in track units. The selected thumbnail sits
/// at offset 24 inside it, which centers it.
pub const TRACK_WINDOW: i32 = 64;

/// Spinner animation frames.
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame interval while a search is in flight.
pub const SPINNER_INTERVAL: Duration = Duration::from_millis(80);
