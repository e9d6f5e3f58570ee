//! TUI rendering and terminal management (impure shell)

pub mod carousel;
pub mod constants;
pub mod layout;
mod search_input;
pub mod styles;

pub use carousel::{hit_test, track_items, CarouselView, TrackItem};
pub use search_input::SearchInput;
pub use styles::{init_styles, CarouselStyles, ColorConfig};

use crate::client::{FlickrClient, PhotoSearchClient};
use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{AppError, KeyAction};
use crate::state::{
    fetch_photo_urls, search_input_handler, CarouselSettings, CarouselState, Generation,
};
use crate::view::constants::SPINNER_INTERVAL;
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Capacity of the event channel shared by the input reader and search tasks.
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// How long the input reader blocks in `poll` before checking again.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Application error
    #[error("Application error: {0}")]
    App(#[from] AppError),
}

/// Events consumed by the main loop.
#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input forwarded by the reader thread.
    Input(Event),
    /// A dispatched search finished. `urls` is empty on failure.
    SearchCompleted {
        generation: Generation,
        urls: Vec<String>,
    },
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: CarouselState,
    client: Arc<dyn PhotoSearchClient>,
    key_bindings: KeyBindings,
    styles: CarouselStyles,
    page_size: usize,
    events_tx: mpsc::Sender<AppEvent>,
    events_rx: mpsc::Receiver<AppEvent>,
    /// Thumbnails placed by the last draw (for mouse click detection)
    last_track_items: Vec<TrackItem>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen and mouse capture.
    pub fn new(
        client: Arc<dyn PhotoSearchClient>,
        settings: CarouselSettings,
        page_size: usize,
        styles: CarouselStyles,
    ) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(event::EnableMouseCapture)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal, client, settings, page_size, styles,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits (Esc or Ctrl+C). Redraws after every event,
    /// debounce deadline and spinner frame; sleeps otherwise.
    pub async fn run(&mut self) -> Result<(), TuiError> {
        spawn_input_reader(self.events_tx.clone());

        let mut spinner = tokio::time::interval(SPINNER_INTERVAL);
        spinner.set_missed_tick_behavior(MissedTickBehavior::Skip);

        self.draw()?;

        loop {
            let deadline = self.state.pending_search();
            let loading = self.state.is_loading();

            tokio::select! {
                event = self.events_rx.recv() => {
                    let Some(event) = event else {
                        return Ok(());
                    };
                    if self.handle_event(event, Instant::now()) {
                        return Ok(());
                    }
                }
                _ = wait_for_deadline(deadline) => {
                    self.dispatch_due_search(Instant::now());
                }
                _ = spinner.tick(), if loading => {
                    self.state.tick_spinner();
                }
            }

            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        client: Arc<dyn PhotoSearchClient>,
        settings: CarouselSettings,
        page_size: usize,
        styles: CarouselStyles,
    ) -> Self {
        let (events_tx, events_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            terminal,
            state: CarouselState::new(settings),
            client,
            key_bindings: KeyBindings::default(),
            styles,
            page_size,
            events_tx,
            events_rx,
            last_track_items: Vec::new(),
        }
    }

    /// Put `term` in the search box and search it right away.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_search(&mut self, term: &str) -> bool {
        let now = Instant::now();
        self.state.on_search_text_changed(term, now);
        match self.state.take_pending_search() {
            Some(term) => {
                self.spawn_search(term);
                true
            }
            None => false,
        }
    }

    /// Handle one event. Returns true if the app should quit.
    fn handle_event(&mut self, event: AppEvent, now: Instant) -> bool {
        match event {
            AppEvent::Input(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key, now)
            }
            AppEvent::Input(Event::Mouse(mouse)) => {
                self.handle_mouse(mouse);
                false
            }
            AppEvent::Input(Event::Paste(text)) => {
                for ch in text.chars().filter(|c| !c.is_control()) {
                    search_input_handler::handle_char_input(&mut self.state, ch, now);
                }
                false
            }
            // Resize and focus changes only need the redraw that follows.
            AppEvent::Input(_) => false,
            AppEvent::SearchCompleted { generation, urls } => {
                self.state.apply_search_results(generation, urls);
                false
            }
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Text editing goes to the search box before key binding dispatch
        match key.code {
            KeyCode::Char('u') if ctrl => {
                search_input_handler::handle_clear(&mut self.state, now);
                return false;
            }
            KeyCode::Char(ch) if !ctrl => {
                search_input_handler::handle_char_input(&mut self.state, ch, now);
                return false;
            }
            KeyCode::Backspace | KeyCode::Delete => {
                search_input_handler::handle_backspace(&mut self.state, now);
                return false;
            }
            _ => {}
        }

        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::First => {
                self.state.select_first();
            }
            KeyAction::Last => {
                self.state.select_last();
            }
            KeyAction::Previous | KeyAction::Next => {
                if let Some(direction) = action.direction() {
                    self.state.on_navigate(direction);
                }
            }
        }
        false
    }

    /// Handle a mouse event: click selects a thumbnail, wheel steps through photos.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(key) = hit_test(&self.last_track_items, mouse.column, mouse.row) {
                    self.state.on_thumbnail_selected(key);
                }
            }
            MouseEventKind::ScrollUp => {
                self.state.on_navigate(crate::model::Direction::Previous);
            }
            MouseEventKind::ScrollDown => {
                self.state.on_navigate(crate::model::Direction::Next);
            }
            _ => {}
        }
    }

    /// Dispatch the debounced search if it is due.
    ///
    /// Must be called from within a tokio runtime.
    fn dispatch_due_search(&mut self, now: Instant) -> bool {
        match self.state.due_search(now) {
            Some(term) => {
                self.spawn_search(term);
                true
            }
            None => false,
        }
    }

    /// Start `term` in the background. Its results come back as an [`AppEvent`].
    fn spawn_search(&mut self, term: String) -> tokio::task::JoinHandle<()> {
        let ticket = self.state.begin_search(term);
        info!(
            term = %ticket.term,
            generation = ticket.generation.value(),
            "dispatching search"
        );

        let client = Arc::clone(&self.client);
        let events_tx = self.events_tx.clone();
        let page_size = self.page_size;
        tokio::spawn(async move {
            let urls = fetch_photo_urls(client.as_ref(), &ticket.term, page_size).await;
            let completed = AppEvent::SearchCompleted {
                generation: ticket.generation,
                urls,
            };
            if events_tx.send(completed).await.is_err() {
                debug!("carousel closed before search completed");
            }
        })
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        // Place thumbnails before rendering (for mouse click detection)
        let size = self.terminal.size()?;
        let frame_area = Rect::new(0, 0, size.width, size.height);
        self.last_track_items =
            track_items(&self.state, layout::calculate_track_area(frame_area));

        let state = &self.state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            layout::render_layout(frame, state, styles);
        })?;

        Ok(())
    }
}

// ===== Test Helpers =====

#[cfg(test)]
#[allow(dead_code)] // Not all helpers used in every test module
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without terminal initialization.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        client: Arc<dyn PhotoSearchClient>,
        settings: CarouselSettings,
    ) -> Self {
        Self::with_terminal(
            terminal,
            client,
            settings,
            crate::state::DEFAULT_PAGE_SIZE,
            CarouselStyles::with_color_config(ColorConfig::disabled()),
        )
    }

    pub(crate) fn state(&self) -> &CarouselState {
        &self.state
    }

    pub(crate) fn handle_key_test(&mut self, key: KeyEvent, now: Instant) -> bool {
        self.handle_key(key, now)
    }

    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse);
    }

    pub(crate) fn dispatch_due_search_test(&mut self, now: Instant) -> bool {
        self.dispatch_due_search(now)
    }

    /// Wait for the next search completion and apply it.
    pub(crate) async fn next_search_completion(&mut self) -> bool {
        while let Some(event) = self.events_rx.recv().await {
            if matches!(event, AppEvent::SearchCompleted { .. }) {
                self.handle_event(event, Instant::now());
                return true;
            }
        }
        false
    }

    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    pub(crate) fn track_items_test(&self) -> &[TrackItem] {
        &self.last_track_items
    }
}

/// Forward terminal events to the main loop from a blocking reader thread.
///
/// The thread exits once the receiving side is gone.
fn spawn_input_reader(sender: mpsc::Sender<AppEvent>) {
    std::thread::spawn(move || forward_input(&sender, event::poll, event::read));
}

/// Pump events from `poll`/`read` into `sender` until the receiver is gone.
///
/// A failing poll waits one poll interval before trying again.
fn forward_input<P, R>(sender: &mpsc::Sender<AppEvent>, mut poll: P, mut read: R)
where
    P: FnMut(Duration) -> io::Result<bool>,
    R: FnMut() -> io::Result<Event>,
{
    loop {
        match poll(INPUT_POLL_INTERVAL) {
            Ok(true) => {
                if let Ok(evt) = read() {
                    if sender.blocking_send(AppEvent::Input(evt)).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(error) => {
                debug!(%error, "polling terminal input failed");
                std::thread::sleep(INPUT_POLL_INTERVAL);
            }
        }
        if sender.is_closed() {
            return;
        }
    }
}

/// Sleep until `deadline`, or forever when there is none.
async fn wait_for_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Options taken from the command line that are not part of the resolved config.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Disable colors regardless of `NO_COLOR`.
    pub no_color: bool,
    /// Search to start with, as if typed.
    pub initial_search: Option<String>,
}

/// Initialize and run the carousel against the Flickr API
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit even if the loop failed.
///
/// Note: Logging must be initialized by caller before calling this function.
pub async fn run_with_config(config: &ResolvedConfig, options: RunOptions) -> Result<(), TuiError> {
    let styles = *init_styles(ColorConfig::from_env_and_args(options.no_color));
    let client = FlickrClient::new(config).map_err(AppError::from)?;
    let settings = CarouselSettings {
        debounce: config.debounce(),
        layout_mode: config.layout,
    };

    let mut app = TuiApp::new(Arc::new(client), settings, config.page_size, styles)?;

    if let Some(term) = options.initial_search.as_deref() {
        app.start_search(term);
    }

    // Run the app and ensure cleanup happens even on error
    let result = app.run().await;

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}
