//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crate::state::FocusPane;
use crossterm::event::KeyEvent;
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Global bindings apply regardless of focus. Grid bindings only apply
/// while the grid has focus, so plain letters stay free for typing in the
/// text area.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    global: HashMap<KeyEvent, KeyAction>,
    grid: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event under the given focus.
    pub fn get(&self, focus: FocusPane, key: KeyEvent) -> Option<KeyAction> {
        let focused = match focus {
            FocusPane::Grid => self.grid.get(&key),
            FocusPane::Input => None,
        };
        focused.or_else(|| self.global.get(&key)).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        use crossterm::event::{KeyCode, KeyModifiers};

        let mut global = HashMap::new();
        let mut grid = HashMap::new();

        // Form actions, reachable from the text area
        global.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::CONTROL),
            KeyAction::Generate,
        );
        global.insert(
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL),
            KeyAction::Generate,
        );
        global.insert(
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL),
            KeyAction::Clear,
        );
        global.insert(
            KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            KeyAction::CycleFocus,
        );
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            KeyAction::CycleFocus,
        );
        global.insert(
            KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE),
            KeyAction::Help,
        );

        // Arrow keys and vim-style movement
        for (code, action) in [
            (KeyCode::Up, KeyAction::MoveUp),
            (KeyCode::Down, KeyAction::MoveDown),
            (KeyCode::Left, KeyAction::MoveLeft),
            (KeyCode::Right, KeyAction::MoveRight),
            (KeyCode::Char('k'), KeyAction::MoveUp),
            (KeyCode::Char('j'), KeyAction::MoveDown),
            (KeyCode::Char('h'), KeyAction::MoveLeft),
            (KeyCode::Char('l'), KeyAction::MoveRight),
        ] {
            grid.insert(KeyEvent::new(code, KeyModifiers::NONE), action);
        }

        // Open card
        grid.insert(
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            KeyAction::OpenSelected,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            KeyAction::OpenSelected,
        );

        // Page navigation
        grid.insert(
            KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char(']'), KeyModifiers::NONE),
            KeyAction::NextPage,
        );
        grid.insert(
            KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char('['), KeyModifiers::NONE),
            KeyAction::PrevPage,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Home, KeyModifiers::NONE),
            KeyAction::FirstPage,
        );
        grid.insert(
            KeyEvent::new(KeyCode::End, KeyModifiers::NONE),
            KeyAction::LastPage,
        );

        // Single-letter form shortcuts
        grid.insert(
            KeyEvent::new(KeyCode::Char('g'), KeyModifiers::NONE),
            KeyAction::Generate,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE),
            KeyAction::Clear,
        );

        // Application controls
        grid.insert(
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            KeyAction::Quit,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::NONE),
            KeyAction::Help,
        );
        grid.insert(
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            KeyAction::Help,
        );

        Self { global, grid }
    }
}
