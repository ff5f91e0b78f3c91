//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that keys on the board map to.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
/// Text editing keys in the input area are not actions; they are routed
/// straight to the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Form
    /// Submit the form: reset to page 1 and show the grid. Default: Ctrl+g/Ctrl+s
    Generate,
    /// Clear the input buffer and reset to page 1. Default: Ctrl+l
    Clear,
    /// Toggle focus between the text area and the grid. Default: Tab
    CycleFocus,

    // Grid navigation
    /// Move the highlighted card up one row. Default: ↑/k
    MoveUp,
    /// Move the highlighted card down one row. Default: ↓/j
    MoveDown,
    /// Move the highlighted card left. Default: ←/h
    MoveLeft,
    /// Move the highlighted card right. Default: →/l
    MoveRight,
    /// Open the modal for the highlighted card. Default: Enter/Space
    OpenSelected,

    // Pagination
    /// Go to the next page (clamped). Default: PageDown/]
    NextPage,
    /// Go to the previous page (clamped). Default: PageUp/[
    PrevPage,
    /// Go to the first page. Default: Home
    FirstPage,
    /// Go to the last page. Default: End
    LastPage,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: F1/?
    Help,
}
