//! Acceptance Test Harness for TUI testing
//!
//! Provides a high-level API for acceptance testing user stories by wrapping
//! TuiApp<TestBackend> with convenient methods for simulating user interactions.

use crate::config::keybindings::KeyBindings;
use crate::source::load_initial_buffer;
use crate::state::{AppState, HitTarget, InputBuffer};
use crate::view::{BoardOptions, ColorConfig, TuiApp, TuiError};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::path::PathBuf;

/// Convert a ratatui buffer to a string representation for snapshot testing.
///
/// Captures the visual output character by character, preserving layout.
/// Empty lines are removed to keep snapshots clean.
pub(crate) fn buffer_to_string(buffer: &ratatui::buffer::Buffer) -> String {
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
///
/// Wraps TuiApp<TestBackend> to provide a clean API for simulating user
/// interactions in acceptance tests.
pub struct AcceptanceTestHarness {
    app: TuiApp<TestBackend>,
    running: bool,
}

impl AcceptanceTestHarness {
    /// Empty board with a custom terminal size.
    pub fn new(width: u16, height: u16) -> Self {
        Self::from_text("", width, height)
    }

    /// Board whose text area is pre-filled with `text`, as if it had been
    /// typed or loaded from a file. Colors are off so rendered output is
    /// stable.
    pub fn from_text(text: &str, width: u16, height: u16) -> Self {
        let terminal = match Terminal::new(TestBackend::new(width, height)) {
            Ok(terminal) => terminal,
            Err(err) => panic!("TestBackend terminal: {err}"),
        };
        let app_state = AppState::with_buffer(InputBuffer::from_text(text));
        let options = BoardOptions {
            colors: ColorConfig::fixed(false),
            ..BoardOptions::default()
        };
        let app = TuiApp::new_for_test(terminal, app_state, KeyBindings::default(), options);
        Self { app, running: true }
    }

    /// Load a data file the way the binary does for its positional argument.
    pub fn from_fixture(path: &str, width: u16, height: u16) -> Result<Self, TuiError> {
        let text = load_initial_buffer(Some(PathBuf::from(path)))?;
        Ok(Self::from_text(&text, width, height))
    }

    /// Send a single key event
    ///
    /// Returns `true` if app quit as a result of this key.
    pub fn send_key(&mut self, key: KeyCode) -> bool {
        self.send_key_with_mods(key, KeyModifiers::NONE)
    }

    /// Send key with modifiers (e.g., Ctrl+C)
    pub fn send_key_with_mods(&mut self, key: KeyCode, mods: KeyModifiers) -> bool {
        if !self.running {
            return true; // Already quit
        }

        let quit = self.app.handle_key_test(KeyEvent::new(key, mods));
        if quit {
            self.running = false;
        }
        quit
    }

    /// Send a sequence of keys, stopping early on quit.
    pub fn send_keys(&mut self, keys: &[KeyCode]) {
        for key in keys {
            if self.send_key(*key) {
                break;
            }
        }
    }

    /// Type text (sends individual character key events)
    ///
    /// Newlines are sent as Enter.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            let key = match ch {
                '\n' => KeyCode::Enter,
                ch => KeyCode::Char(ch),
            };
            if self.send_key(key) {
                break;
            }
        }
    }

    /// Deliver a bracketed paste.
    pub fn paste(&mut self, text: &str) {
        if self.running {
            self.app.handle_paste_test(text);
        }
    }

    /// Access app state for assertions
    pub fn state(&self) -> &AppState {
        self.app.app_state()
    }

    /// Check if app is still running (didn't quit)
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Render the current frame to a string
    ///
    /// # Panics
    /// Panics if rendering fails (should never happen with TestBackend)
    pub fn render_to_string(&mut self) -> String {
        if let Err(err) = self.app.render_test() {
            panic!("Rendering should succeed in test harness: {err}");
        }
        buffer_to_string(self.app.terminal().backend().buffer())
    }

    /// Send a mouse click event at the specified coordinates
    ///
    /// Renders first so the click map matches what is on screen.
    pub fn click_at(&mut self, column: u16, row: u16) {
        if !self.running {
            return; // Already quit
        }

        let _ = self.app.render_test();

        let mouse_event = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        self.app.handle_mouse_test(mouse_event);
    }

    /// Click the top-left cell of a rendered target.
    ///
    /// Returns `false` (and sends nothing) when the target is not on screen.
    pub fn click_on(&mut self, target: HitTarget) -> bool {
        let _ = self.app.render_test();
        match self.app.click_map().area_of(target) {
            Some(area) => {
                self.click_at(area.x, area.y);
                true
            }
            None => false,
        }
    }
}
