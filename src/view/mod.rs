//! TUI rendering and terminal management (impure shell)

pub mod barcode;
pub mod constants;
pub mod form;
pub mod grid;
mod help;
pub mod layout;
pub mod modal;
pub mod pager;
mod styles;

pub use barcode::BarcodeView;
pub use help::render_help_overlay;
pub use layout::{render_board, BoardLayout, RenderContext};
pub use styles::{BoardStyles, ColorConfig};

use crate::config::{KeyBindings, ResolvedConfig};
use crate::model::{InputError, KeyAction};
use crate::source::load_initial_buffer;
use crate::state::{
    handle_action, handle_input_key, handle_mouse_click, AppState, ClickMap, FocusPane,
    InputBuffer,
};
use crate::symbology::{Code128, RenderOptions, Symbology};
use crossterm::{
    event::{
        self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste,
        EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton,
        MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use std::io::{self, Stdout};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error
    #[error("Input error: {0}")]
    Input(#[from] InputError),
}

/// Display options resolved from config and CLI, carried into the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardOptions {
    /// Bar height and module width for grid cards.
    pub grid: RenderOptions,
    /// Bar height and module width for the modal.
    pub modal: RenderOptions,
    /// Print the human-readable value under each barcode.
    pub show_text: bool,
    /// Whether styles use color.
    pub colors: ColorConfig,
}

impl BoardOptions {
    /// Options for the resolved config with the given color setting.
    pub fn from_config(config: &ResolvedConfig, colors: ColorConfig) -> Self {
        Self {
            grid: config.grid_render_options(),
            modal: config.modal_render_options(),
            show_text: config.show_text,
            colors,
        }
    }
}

impl Default for BoardOptions {
    fn default() -> Self {
        Self {
            grid: RenderOptions::new(3, 1),
            modal: RenderOptions::new(8, 2),
            show_text: true,
            colors: ColorConfig::fixed(true),
        }
    }
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    symbology: Box<dyn Symbology>,
    styles: BoardStyles,
    options: BoardOptions,
    /// Clickable regions of the last rendered frame
    click_map: ClickMap,
    /// Grid columns of the last rendered frame, for vertical movement
    grid_columns: usize,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application
    ///
    /// Sets up terminal in raw mode with alternate screen, mouse capture
    /// and bracketed paste.
    pub fn new(app_state: AppState, options: BoardOptions) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableMouseCapture)?;
        stdout.execute(EnableBracketedPaste)?;
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;

        Ok(Self::with_terminal(
            terminal,
            app_state,
            KeyBindings::default(),
            options,
        ))
    }

    /// Run the main event loop
    ///
    /// Returns when the user quits. Blocks on terminal events; every handled
    /// event is followed by exactly one redraw.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;

        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                Event::Paste(text) => self.handle_paste(&text),
                Event::Resize(width, height) => {
                    debug!(width, height, "Terminal resized");
                }
                _ => continue,
            }
            self.draw()?;
        }
    }
}

impl<B> TuiApp<B>
where
    B: Backend,
{
    fn with_terminal(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        options: BoardOptions,
    ) -> Self {
        let symbology: Box<dyn Symbology> = Box::new(Code128);
        debug!(symbology = symbology.name(), ?options, "Board options");
        Self {
            terminal,
            app_state,
            key_bindings,
            symbology,
            styles: BoardStyles::with_color_config(options.colors),
            options,
            click_map: ClickMap::new(),
            grid_columns: 1,
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        // Ctrl+C always quits, even if not in bindings
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The modal's cancellation listener sees keys first
        if self.app_state.selection.on_key(key.code) {
            return false;
        }

        let action = self.key_bindings.get(self.app_state.focus, key);

        if self.app_state.help_visible {
            match (key.code, action) {
                (KeyCode::Esc, _) | (_, Some(KeyAction::Help)) => {
                    self.app_state.help_visible = false;
                }
                (_, Some(KeyAction::Quit)) => return true,
                _ => {}
            }
            return false;
        }

        if self.app_state.selection.is_open() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                self.app_state.selection.close();
            }
            return false;
        }

        if let Some(action) = action {
            debug!(?action, "Key action");
            return handle_action(&mut self.app_state, action, self.grid_columns);
        }

        handle_input_key(&mut self.app_state, key);
        false
    }

    /// Handle a single mouse event
    ///
    /// Left clicks go through the click map of the last frame; the wheel
    /// moves the grid highlight.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.app_state.help_visible {
                    self.app_state.help_visible = false;
                    return;
                }
                let target = handle_mouse_click(
                    &mut self.app_state,
                    &self.click_map,
                    mouse.column,
                    mouse.row,
                );
                debug!(?target, x = mouse.column, y = mouse.row, "Mouse click");
            }
            MouseEventKind::ScrollUp => self.scroll_grid(KeyAction::MoveUp),
            MouseEventKind::ScrollDown => self.scroll_grid(KeyAction::MoveDown),
            _ => {}
        }
    }

    fn scroll_grid(&mut self, action: KeyAction) {
        let overlay_open = self.app_state.help_visible || self.app_state.selection.is_open();
        if overlay_open || self.app_state.focus != FocusPane::Grid {
            return;
        }
        handle_action(&mut self.app_state, action, self.grid_columns);
    }

    /// Insert pasted text at the cursor.
    fn handle_paste(&mut self, text: &str) {
        let overlay_open = self.app_state.help_visible || self.app_state.selection.is_open();
        if overlay_open || self.app_state.focus != FocusPane::Input {
            return;
        }
        // Terminals send CR line endings in bracketed paste
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        self.app_state.buffer.insert_str(&text);
    }

    /// Render the current frame
    ///
    /// Keeps the highlighted card scrolled into view, then draws and stores
    /// the click map for the next mouse event.
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = BoardLayout::compute(area, !self.app_state.entries().is_empty());
        let ctx = RenderContext {
            symbology: self.symbology.as_ref(),
            styles: &self.styles,
            grid_options: self.options.grid,
            modal_options: self.options.modal,
            show_text: self.options.show_text,
        };

        if let Some(geometry) = layout.grid_geometry(&ctx) {
            self.grid_columns = geometry.columns;
            let visible_len = self.app_state.visible_len();
            self.app_state
                .adjust_grid_scroll(geometry.columns, geometry.visible_rows, visible_len);
        }

        let state = &self.app_state;
        let mut click_map = ClickMap::new();
        self.terminal
            .draw(|frame| click_map = render_board(frame, state, &layout, &ctx))?;
        self.click_map = click_map;

        Ok(())
    }
}

// ===== Test Helpers =====
//
// The following methods are ONLY for testing and benchmarking within the crate.
// They are gated with cfg to ensure they're not accessible from outside the crate.
//
// DO NOT use these in production code.

#[cfg(any(test, feature = "bench-internals"))]
#[allow(dead_code)] // Not all helpers used in every context (tests vs benchmarks)
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for testing (test-only constructor)
    ///
    /// Skips terminal initialization. Used by the acceptance test harness.
    pub(crate) fn new_for_test(
        terminal: Terminal<B>,
        app_state: AppState,
        key_bindings: KeyBindings,
        options: BoardOptions,
    ) -> Self {
        Self::with_terminal(terminal, app_state, key_bindings, options)
    }

    /// Get reference to app state (test-only accessor)
    pub(crate) fn app_state(&self) -> &AppState {
        &self.app_state
    }

    /// Handle a single keyboard event (test-only accessor)
    ///
    /// Returns true if app should quit.
    pub(crate) fn handle_key_test(&mut self, key: KeyEvent) -> bool {
        self.handle_key(key)
    }

    /// Handle a single mouse event (test-only accessor)
    pub(crate) fn handle_mouse_test(&mut self, mouse: MouseEvent) {
        self.handle_mouse(mouse)
    }

    /// Handle a bracketed paste (test-only accessor)
    pub(crate) fn handle_paste_test(&mut self, text: &str) {
        self.handle_paste(text)
    }

    /// Render a single frame (test-only accessor)
    pub(crate) fn render_test(&mut self) -> Result<(), TuiError> {
        self.draw()
    }

    /// Get reference to terminal (test-only accessor)
    pub(crate) fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    /// Clickable regions of the last rendered frame (test-only accessor)
    pub(crate) fn click_map(&self) -> &ClickMap {
        &self.click_map
    }
}

// ===== Benchmark Helpers =====
//
// Public wrappers for benchmarks when bench-internals feature is enabled.

#[cfg(feature = "bench-internals")]
impl<B> TuiApp<B>
where
    B: Backend,
{
    /// Create TuiApp for benchmarking (benchmark-only constructor)
    pub fn new_for_bench(terminal: Terminal<B>, app_state: AppState, options: BoardOptions) -> Self {
        Self::new_for_test(terminal, app_state, KeyBindings::default(), options)
    }

    /// Handle a single keyboard event (benchmark-only accessor)
    pub fn handle_key_bench(&mut self, key: KeyEvent) -> bool {
        self.handle_key_test(key)
    }

    /// Render a single frame (benchmark-only accessor)
    pub fn render_bench(&mut self) -> Result<(), TuiError> {
        self.render_test()
    }
}

/// Load the initial barcode data and run the TUI.
///
/// `file` is read to completion before the terminal enters raw mode, so a
/// missing or unreadable file is reported on a normal terminal.
pub fn run_with_file(file: Option<PathBuf>, options: BoardOptions) -> Result<(), TuiError> {
    let initial = load_initial_buffer(file)?;
    info!(bytes = initial.len(), "Initial barcode data loaded");
    run_with_state(AppState::with_buffer(InputBuffer::from_text(initial)), options)
}

/// Initialize and run the TUI application with a prepared state
///
/// Handles terminal setup, runs the event loop, and restores the terminal
/// on exit, including when setup or the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run_with_state(app_state: AppState, options: BoardOptions) -> Result<(), TuiError> {
    let result = TuiApp::new(app_state, options).and_then(|mut app| app.run());

    // Always restore terminal state
    let restored = restore_terminal();

    result?;
    restored
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture and bracketed paste, and leaves the
/// alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(DisableBracketedPaste)?;
    stdout.execute(DisableMouseCapture)?;
    stdout.execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::HitTarget;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;

    fn create_test_app(text: &str) -> TuiApp<TestBackend> {
        let terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let app_state = AppState::with_buffer(InputBuffer::from_text(text));
        TuiApp::new_for_test(
            terminal,
            app_state,
            KeyBindings::default(),
            BoardOptions::default(),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn tui_error_from_io_error() {
        let io_err = io::Error::other("test error");
        let tui_err: TuiError = io_err.into();
        assert!(matches!(tui_err, TuiError::Io(_)));
    }

    #[test]
    fn missing_file_fails_before_terminal_setup() {
        let missing = PathBuf::from("/nonexistent/barboard/codes.txt");
        let result = run_with_file(Some(missing.clone()), BoardOptions::default());
        match result {
            Err(TuiError::Input(InputError::FileNotFound { path })) => assert_eq!(path, missing),
            other => panic!("expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn board_options_follow_resolved_config() {
        let config = ResolvedConfig {
            grid_bar_height: 5,
            modal_module_width: 3,
            show_text: false,
            ..ResolvedConfig::default()
        };
        let options = BoardOptions::from_config(&config, ColorConfig::fixed(false));
        assert_eq!(options.grid, RenderOptions::new(5, 1));
        assert_eq!(options.modal, RenderOptions::new(8, 3));
        assert!(!options.show_text);
        assert!(!options.colors.colors_enabled());
    }

    #[test]
    fn ctrl_c_quits_from_any_focus() {
        let mut app = create_test_app("");
        assert!(app.handle_key(ctrl('c')));
        app.app_state.focus = FocusPane::Grid;
        assert!(app.handle_key(ctrl('c')));
    }

    #[test]
    fn q_types_in_text_area_but_quits_from_grid() {
        let mut app = create_test_app("");
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.app_state.buffer.text(), "q");

        app.app_state.focus = FocusPane::Grid;
        assert!(app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = create_test_app("");
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        app.handle_key(release);
        assert_eq!(app.app_state.buffer.text(), "");
    }

    #[test]
    fn escape_closes_modal_and_releases_listener() {
        let mut app = create_test_app("ABC");
        app.app_state.select_visible(0);
        assert_eq!(app.app_state.key_listeners.active_count(), 1);

        app.handle_key(key(KeyCode::Esc));

        assert!(!app.app_state.selection.is_open());
        assert_eq!(app.app_state.key_listeners.active_count(), 0);
    }

    #[test]
    fn enter_closes_modal() {
        let mut app = create_test_app("ABC");
        app.app_state.select_visible(0);
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.app_state.selection.is_open());
        assert_eq!(app.app_state.key_listeners.active_count(), 0);
    }

    #[test]
    fn modal_swallows_other_keys() {
        let mut app = create_test_app("ABC");
        app.app_state.select_visible(0);
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.app_state.selection.is_open());
        assert_eq!(app.app_state.buffer.text(), "ABC");
    }

    #[test]
    fn help_toggles_with_f1_and_closes_with_escape() {
        let mut app = create_test_app("");
        app.handle_key(key(KeyCode::F(1)));
        assert!(app.app_state.help_visible);
        app.handle_key(key(KeyCode::Char('a')));
        assert_eq!(app.app_state.buffer.text(), "", "help swallows typing");
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.app_state.help_visible);
    }

    #[test]
    fn draw_records_click_map() {
        let mut app = create_test_app("ABC");
        app.draw().unwrap();
        assert!(app.click_map.area_of(HitTarget::Card(0)).is_some());
        assert!(app.click_map.area_of(HitTarget::GenerateButton).is_some());
    }

    #[test]
    fn clicking_card_opens_modal() {
        let mut app = create_test_app("ABC\nDEF");
        app.draw().unwrap();
        let card = app.click_map.area_of(HitTarget::Card(1)).unwrap();
        app.handle_mouse(click(card.x + 1, card.y + 1));
        assert_eq!(app.app_state.selection.value(), Some("DEF"));
    }

    #[test]
    fn click_closes_help_first() {
        let mut app = create_test_app("ABC");
        app.draw().unwrap();
        app.app_state.help_visible = true;
        let card = app.click_map.area_of(HitTarget::Card(0)).unwrap();
        app.handle_mouse(click(card.x, card.y));
        assert!(!app.app_state.help_visible);
        assert!(!app.app_state.selection.is_open());
    }

    #[test]
    fn paste_normalizes_line_endings() {
        let mut app = create_test_app("");
        app.handle_paste("A\r\nB\rC");
        assert_eq!(app.app_state.buffer.text(), "A\nB\nC");
        assert_eq!(app.app_state.entries(), vec!["A", "B", "C"]);
    }

    #[test]
    fn paste_ignored_when_grid_focused() {
        let mut app = create_test_app("");
        app.app_state.focus = FocusPane::Grid;
        app.handle_paste("X");
        assert_eq!(app.app_state.buffer.text(), "");
    }

    #[test]
    fn wheel_moves_highlight_in_grid() {
        let mut app = create_test_app("A\nB\nC\nD\nE");
        app.draw().unwrap();
        app.app_state.focus = FocusPane::Grid;
        let wheel = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(wheel);
        let columns = app.grid_columns;
        assert_eq!(app.app_state.highlighted(5), Some(columns.min(4)));
    }
}
