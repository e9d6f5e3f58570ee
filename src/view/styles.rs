//! Carousel styling.
//!
//! Styles are resolved once, before the first frame is drawn, and stay fixed
//! for the lifetime of the process.

use ratatui::style::{Color, Modifier, Style};
use std::sync::OnceLock;

static STYLES: OnceLock<CarouselStyles> = OnceLock::new();

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// `--no-color` or any value of `NO_COLOR` disables colors.
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== CarouselStyles =====

/// Styles for every part of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStyles {
    pub search_box: Style,
    pub cursor: Style,
    pub spinner: Style,
    pub main_photo: Style,
    pub thumbnail: Style,
    /// Border of the selected thumbnail.
    pub selected: Style,
    pub clone_marker: Style,
    pub status: Style,
}

impl CarouselStyles {
    pub fn with_color_config(config: ColorConfig) -> Self {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        if config.colors_enabled() {
            Self {
                search_box: Style::default().fg(Color::White),
                cursor: Style::default().bg(Color::White).fg(Color::Black),
                spinner: Style::default().fg(Color::Blue),
                main_photo: Style::default().fg(Color::Magenta),
                thumbnail: Style::default().fg(Color::Gray),
                selected: bold.fg(Color::LightRed),
                clone_marker: Style::default().fg(Color::DarkGray),
                status: Style::default().fg(Color::DarkGray),
            }
        } else {
            Self {
                search_box: Style::default(),
                cursor: Style::default().add_modifier(Modifier::REVERSED),
                spinner: Style::default(),
                main_photo: Style::default(),
                thumbnail: Style::default(),
                selected: bold,
                clone_marker: Style::default(),
                status: Style::default(),
            }
        }
    }
}

/// Resolve the process-wide styles.
///
/// Only the first call decides; later calls return the styles already set.
pub fn init_styles(config: ColorConfig) -> &'static CarouselStyles {
    STYLES.get_or_init(|| CarouselStyles::with_color_config(config))
}

// ===== Tests =====
