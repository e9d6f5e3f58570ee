//! Screen layout.
//!
//! Pure layout logic: search box on top, carousel in the middle, status bar
//! at the bottom.

use crate::state::CarouselState;
use crate::view::carousel::{split_carousel_area, CarouselView};
use crate::view::constants::{SEARCH_INPUT_HEIGHT, STATUS_BAR_HEIGHT};
use crate::view::search_input::SearchInput;
use crate::view::styles::CarouselStyles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Areas the frame splits into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub search: Rect,
    pub carousel: Rect,
    pub status: Rect,
}

/// Split the frame into search box, carousel and status bar.
pub fn calculate_areas(frame_area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .split(frame_area);

    ScreenAreas {
        search: chunks[0],
        carousel: chunks[1],
        status: chunks[2],
    }
}

/// Area of the thumbnail track, for mouse hit-testing.
pub fn calculate_track_area(frame_area: Rect) -> Rect {
    split_carousel_area(calculate_areas(frame_area).carousel).1
}

/// Render the whole screen.
pub fn render_layout(frame: &mut Frame, state: &CarouselState, styles: &CarouselStyles) {
    let areas = calculate_areas(frame.area());

    frame.render_widget(SearchInput::new(state.search_term(), styles), areas.search);
    frame.render_widget(CarouselView::new(state, styles), areas.carousel);
    render_status_bar(frame, areas.status, state, styles);
}

fn status_text(state: &CarouselState) -> String {
    let hints = "←/→: browse | Home/End: first/last | click: select | Esc: quit";
    if let Some(term) = state.in_flight_term() {
        return format!("searching \"{term}\" | {hints}");
    }
    match state.layout().len() {
        0 => hints.to_string(),
        n => format!("{n} photos | {hints}"),
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &CarouselState, styles: &CarouselStyles) {
    let status = Paragraph::new(Line::from(status_text(state))).style(styles.status);
    frame.render_widget(status, area);
}
