//! Carousel widget: spinner, main photo and thumbnail track.
//!
//! Pure projection of [`CarouselState`]. Track placement is computed by
//! [`track_items`], which the event loop also uses for mouse hit-testing.

use crate::model::{Photo, TRACK_ORIGIN};
use crate::state::CarouselState;
use crate::view::constants::{SPINNER_FRAMES, THUMBNAIL_WIDTH, TRACK_HEIGHT, TRACK_WINDOW};
use crate::view::styles::CarouselStyles;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

/// A thumbnail placed on screen, keyed by its layout key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackItem {
    pub key: i32,
    pub area: Rect,
}

/// Split the carousel area into main photo and track.
pub fn split_carousel_area(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(TRACK_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Screen rectangles of the thumbnails that fit entirely inside `track_area`.
///
/// The track is shifted by the selected photo's track offset, so the selected
/// thumbnail always lands at [`TRACK_ORIGIN`] inside a window of
/// [`TRACK_WINDOW`] columns centered in `track_area`. Empty when nothing is
/// selected or the state is loading.
pub fn track_items(state: &CarouselState, track_area: Rect) -> Vec<TrackItem> {
    let Some(selected) = state.selected_photo() else {
        return Vec::new();
    };
    if state.is_loading() {
        return Vec::new();
    }

    let window_left = track_area.x as i32 + (track_area.width as i32 - TRACK_WINDOW) / 2;
    let shift = selected.track_offset();
    let right_edge = track_area.x as i32 + track_area.width as i32;

    state
        .layout()
        .iter()
        .filter_map(|photo| {
            // TRACK_ORIGIN - offset is the photo's position along the strip.
            let left = window_left + (TRACK_ORIGIN - photo.track_offset()) + shift;
            let right = left + THUMBNAIL_WIDTH as i32;
            if left < track_area.x as i32 || right > right_edge {
                return None;
            }
            Some(TrackItem {
                key: photo.id(),
                area: Rect::new(left as u16, track_area.y, THUMBNAIL_WIDTH, track_area.height),
            })
        })
        .collect()
}

/// Layout key of the thumbnail under screen position `(column, row)`.
pub fn hit_test(items: &[TrackItem], column: u16, row: u16) -> Option<i32> {
    items
        .iter()
        .find(|item| {
            let a = item.area;
            column >= a.x && column < a.x + a.width && row >= a.y && row < a.y + a.height
        })
        .map(|item| item.key)
}

/// Last path segment of an image URL, for compact labels.
fn file_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}

/// The carousel widget.
pub struct CarouselView<'a> {
    state: &'a CarouselState,
    styles: &'a CarouselStyles,
}

impl<'a> CarouselView<'a> {
    pub fn new(state: &'a CarouselState, styles: &'a CarouselStyles) -> Self {
        Self { state, styles }
    }

    fn render_spinner(&self, area: Rect, buf: &mut Buffer) {
        let frame = SPINNER_FRAMES[self.state.spinner_frame() % SPINNER_FRAMES.len()];
        let middle = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
        Paragraph::new(Line::from(vec![
            Span::styled(frame, self.styles.spinner),
            Span::raw(" Searching photos..."),
        ]))
        .alignment(Alignment::Center)
        .render(middle, buf);
    }

    fn render_main_photo(&self, photo: &Photo, area: Rect, buf: &mut Buffer) {
        let title = format!(" Photo {} / {} ", photo.logical_index() + 1, self.state.layout().len());
        Paragraph::new(vec![
            Line::from(Span::styled(file_name(photo.source_url()), self.styles.main_photo)),
            Line::from(""),
            Line::from(photo.source_url()),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.styles.main_photo)
                .title(title),
        )
        .render(area, buf);
    }

    fn render_track(&self, area: Rect, buf: &mut Buffer) {
        let selected = self.state.selected_index();
        for item in track_items(self.state, area) {
            let Some(photo) = self.state.layout().get(item.key) else {
                continue;
            };

            let is_selected = item.key == selected;
            let (border_type, border_style) = if is_selected {
                (BorderType::Thick, self.styles.selected)
            } else {
                (BorderType::Plain, self.styles.thumbnail)
            };

            let mut label = vec![Span::raw(format!("#{}", photo.logical_index() + 1))];
            if photo.is_clone() {
                label.push(Span::styled(" ↺", self.styles.clone_marker));
            }

            Paragraph::new(vec![Line::from(label), Line::from(file_name(photo.source_url()))])
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(border_type)
                        .border_style(border_style),
                )
                .render(item.area, buf);
        }
    }
}

impl Widget for CarouselView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.is_loading() {
            self.render_spinner(area, buf);
            return;
        }

        // Empty layout: no main photo, no track.
        let Some(photo) = self.state.selected_photo() else {
            return;
        };

        let (main_area, track_area) = split_carousel_area(area);
        self.render_main_photo(photo, main_area, buf);
        self.render_track(track_area, buf);
    }
}
