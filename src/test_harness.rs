//! Acceptance Test Harness for TUI testing
//!
//! Wraps `TuiApp<TestBackend>` with a virtual clock and an in-memory photo
//! client, so tests can type, wait out the debounce, await searches, click and
//! render without a terminal or network.
//!
//! Searches are spawned on the tokio runtime: tests that let one fire must be
//! `#[tokio::test]`.

use crate::client::InMemoryClient;
use crate::model::LayoutMode;
use crate::state::{CarouselSettings, CarouselState};
use crate::view::TuiApp;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Debounce used by the harness unless a test picks another.
pub const TEST_DEBOUNCE: Duration = Duration::from_millis(750);

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area();
    let mut lines = Vec::new();

    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            line.push_str(buffer[(x, y)].symbol());
        }
        let trimmed = line.trim_end();
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }

    lines.join("\n")
}

/// Test harness for acceptance testing
pub struct CarouselHarness {
    app: TuiApp<TestBackend>,
    client: Arc<InMemoryClient>,
    /// Virtual clock fed to every state transition.
    now: Instant,
}

impl CarouselHarness {
    /// Harness on an 80x24 terminal with circular layout.
    pub fn new(client: InMemoryClient) -> Self {
        Self::with_layout(client, LayoutMode::Circular)
    }

    pub fn with_layout(client: InMemoryClient, layout_mode: LayoutMode) -> Self {
        Self::with_size(client, layout_mode, 80, 24)
    }

    /// Harness with custom terminal size.
    pub fn with_size(client: InMemoryClient, layout_mode: LayoutMode, width: u16, height: u16) -> Self {
        let terminal = Terminal::new(TestBackend::new(width, height))
            .expect("TestBackend terminal creation cannot fail");
        let client = Arc::new(client);
        let app = TuiApp::new_for_test(
            terminal,
            client.clone(),
            CarouselSettings {
                debounce: TEST_DEBOUNCE,
                layout_mode,
            },
        );

        Self {
            app,
            client,
            now: Instant::now(),
        }
    }

    /// Send a single key event. Returns true if the app asked to quit.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        self.app.handle_key_test(KeyEvent::new(key, mods), self.now)
    }

    /// Type `text` one character at a time, `gap` apart on the virtual clock.
    ///
    /// Any search falling due between keystrokes is dispatched, as the event
    /// loop would.
    pub fn type_text(&mut self, text: &str, gap: Duration) {
        for (i, ch) in text.chars().enumerate() {
            if i > 0 {
                self.advance(gap);
            }
            self.send_key(KeyCode::Char(ch));
        }
    }

    /// Move the virtual clock forward and dispatch a search if one fell due.
    ///
    /// Returns true if a search was dispatched.
    pub fn advance(&mut self, by: Duration) -> bool {
        self.now += by;
        self.app.dispatch_due_search_test(self.now)
    }

    /// Wait for the next search to complete and apply its results.
    pub async fn wait_for_search(&mut self) -> bool {
        self.app.next_search_completion().await
    }

    /// Type `text`, wait out the debounce and apply the results.
    pub async fn search(&mut self, text: &str) {
        self.type_text(text, Duration::from_millis(10));
        assert!(self.advance(TEST_DEBOUNCE), "search for {text:?} was not dispatched");
        assert!(self.wait_for_search().await, "search for {text:?} never completed");
    }

    /// Left click at a screen position.
    pub fn click_at(&mut self, column: u16, row: u16) {
        self.app.handle_mouse_test(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    /// Click the thumbnail stored under `key`, if it is on screen.
    ///
    /// Returns false when the thumbnail was not rendered.
    pub fn click_thumbnail(&mut self, key: i32) -> bool {
        self.render_to_string();
        let target = self
            .app
            .track_items_test()
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.area);
        match target {
            Some(area) => {
                self.click_at(area.x + 1, area.y + 1);
                true
            }
            None => false,
        }
    }

    /// Keys of the thumbnails on screen, left to right.
    pub fn visible_thumbnails(&mut self) -> Vec<i32> {
        self.render_to_string();
        self.app.track_items_test().iter().map(|item| item.key).collect()
    }

    /// Render and capture the screen as text.
    pub fn render_to_string(&mut self) -> String {
        self.app.render_test().expect("render to TestBackend failed");
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    pub fn state(&self) -> &CarouselState {
        self.app.state()
    }

    pub fn client(&self) -> &InMemoryClient {
        &self.client
    }
}
