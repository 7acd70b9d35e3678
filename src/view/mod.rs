//! TUI rendering and terminal management (impure shell)

pub mod constants;
mod help;
mod layout;
mod line_menu;
pub mod map;
mod styles;

pub use help::render_help_overlay;
pub use layout::{render_layout, status_segments};
pub use styles::{ColorConfig, MapStyles};

use crate::config::keybindings::KeyBindings;
use crate::model::{AppError, MapAction};
use crate::source::LocationLookup;
use crate::state::AppState;
use constants::{FRAME_INTERVAL, IDLE_POLL_INTERVAL};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info};

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

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: MapStyles,
    /// Outstanding device location lookup; dropped once applied.
    location: Option<LocationLookup>,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen
    pub fn new(app_state: AppState, location: LocationLookup) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self::with_terminal(terminal, app_state, Some(location)))
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C). Sleeps until the next key, the
    /// next playback tick, or the next animation frame, whichever comes first.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.update(Instant::now());
        self.draw(Instant::now())?;

        loop {
            let timeout = self.poll_timeout(Instant::now());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key, Instant::now()) {
                            info!("Quit requested");
                            return Ok(());
                        }
                    }
                    Event::Resize(width, height) => {
                        debug!("Terminal resized to {}x{}", width, height);
                    }
                    _ => {}
                }
            }

            let now = Instant::now();
            self.update(now);
            self.draw(now)?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        location: Option<LocationLookup>,
    ) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: MapStyles::new(),
            location,
        }
    }

    /// How long the loop may block waiting for input.
    fn poll_timeout(&self, now: Instant) -> Duration {
        let mut timeout = IDLE_POLL_INTERVAL;

        if let Some(deadline) = self.app_state.next_deadline() {
            timeout = timeout.min(deadline.saturating_duration_since(now));
        }
        if self.location.is_some() || self.app_state.bus_moving(now) {
            timeout = timeout.min(FRAME_INTERVAL);
        }

        timeout
    }

    /// Deliver the location result and any due playback tick.
    fn update(&mut self, now: Instant) {
        if let Some(result) = self.location.as_mut().and_then(LocationLookup::try_resolve) {
            self.app_state.on_device_location_resolved(result);
            self.location = None;
        }

        self.app_state.advance(now);
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.app_state.help_visible && key.code == KeyCode::Esc {
            self.app_state.help_visible = false;
            return false;
        }

        let menu_open = self.app_state.line_menu.is_open();
        let Some(action) = self.key_bindings.get(key, menu_open) else {
            return false;
        };

        if action.is_menu_action() && !menu_open {
            return false;
        }

        if self.app_state.help_visible && !matches!(action, MapAction::Help | MapAction::Quit) {
            return false;
        }

        debug!(?action, "Key action");
        let state = &mut self.app_state;
        match action {
            MapAction::MoveCursor(direction) => state.move_crosshair(direction),
            MapAction::LongPress => state.long_press_at_crosshair(),
            MapAction::TapMarker => state.on_marker_tap(),
            MapAction::ToggleLineMenu => state.line_menu.toggle(),
            MapAction::HighlightNext => {
                let len = state.catalog().len();
                state.line_menu.next(len);
            }
            MapAction::HighlightPrev => {
                let len = state.catalog().len();
                state.line_menu.prev(len);
            }
            MapAction::SelectLine => {
                let index = state.line_menu.highlighted();
                state.select_line_at(index, now);
                state.line_menu.close();
            }
            MapAction::StopPlayback => state.stop_playback(),
            MapAction::ToggleMapStyle => state.toggle_map_style(),
            MapAction::Help => state.help_visible = !state.help_visible,
            MapAction::Quit => return true,
        }

        false
    }

    /// Render the current frame
    fn draw(&mut self, now: Instant) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal.draw(|frame| {
            render_layout(frame, state, styles, now);
        })?;
        Ok(())
    }

    /// Stop playback; no timer outlives the app.
    fn shutdown(&mut self) {
        self.app_state.shutdown();
        self.location = None;
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing within the crate.

#[cfg(test)]
impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Create TuiApp for testing without touching the real terminal.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        location: Option<LocationLookup>,
    ) -> Self {
        let mut app = Self::with_terminal(terminal, app_state, location);
        app.styles = MapStyles::with_color_config(ColorConfig::new(false));
        app
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }
}

/// Initialize and run the TUI application.
///
/// This is the main entry point for the TUI. It handles terminal
/// setup, runs the event loop, and ensures cleanup on exit.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(app_state: AppState, location: LocationLookup) -> Result<(), TuiError> {
    let mut app = match TuiApp::new(app_state, location) {
        Ok(app) => app,
        Err(e) => {
            // Raw mode may already be on when the alternate screen fails.
            let _ = restore_terminal();
            return Err(e);
        }
    };

    let result = app.run();
    app.shutdown();

    // Always restore terminal state
    restore_terminal()?;

    result
}

/// Restore terminal to normal state
///
/// Disables raw mode and leaves alternate screen
pub fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tests;
