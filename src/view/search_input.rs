//! Search input widget for rendering the search bar.

use crate::view::styles::CarouselStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

const PLACEHOLDER: &str = "Search photos...";

/// Search input widget.
/// Shows the raw typed text with the cursor at the end, or a placeholder.
pub struct SearchInput<'a> {
    text: &'a str,
    styles: &'a CarouselStyles,
}

impl<'a> SearchInput<'a> {
    pub fn new(text: &'a str, styles: &'a CarouselStyles) -> Self {
        Self { text, styles }
    }
}

impl Widget for SearchInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner_width = area.width.saturating_sub(3) as usize;

        // Keep the tail visible when the text is wider than the box.
        let mut visible = self.text;
        while visible.width() > inner_width {
            let mut chars = visible.chars();
            chars.next();
            visible = chars.as_str();
        }

        let line = if self.text.is_empty() {
            Line::from(vec![
                Span::styled(" ", self.styles.cursor),
                Span::styled(PLACEHOLDER, self.styles.status),
            ])
        } else {
            Line::from(vec![
                Span::styled(visible.to_string(), self.styles.search_box),
                Span::styled(" ", self.styles.cursor),
            ])
        };

        Paragraph::new(line)
            .block(Block::default().borders(Borders::ALL).title("Search"))
            .render(area, buf);
    }
}
