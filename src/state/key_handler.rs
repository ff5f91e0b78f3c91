//! Keyboard handling for the board.
//!
//! Bound keys are translated to [`KeyAction`]s by `KeyBindings` and applied
//! with [`handle_action`]. Unbound keys in the text area are editing keys
//! and go through [`handle_input_key`].

use crate::model::{KeyAction, PageNumber};
use crate::state::{AppState, Direction, FocusPane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply a domain action.
///
/// `columns` is the number of grid columns in the last rendered frame,
/// used for vertical highlight movement.
///
/// Returns `true` when the application should quit.
pub fn handle_action(state: &mut AppState, action: KeyAction, columns: usize) -> bool {
    match action {
        KeyAction::Quit => return true,
        KeyAction::Generate => state.submit(),
        KeyAction::Clear => state.clear(),
        KeyAction::CycleFocus => state.cycle_focus(),
        KeyAction::Help => state.help_visible = !state.help_visible,
        KeyAction::MoveUp => move_highlight(state, Direction::Up, columns),
        KeyAction::MoveDown => move_highlight(state, Direction::Down, columns),
        KeyAction::MoveLeft => move_highlight(state, Direction::Left, columns),
        KeyAction::MoveRight => move_highlight(state, Direction::Right, columns),
        KeyAction::OpenSelected => {
            state.select_highlighted();
        }
        KeyAction::NextPage => state.next_page(),
        KeyAction::PrevPage => state.prev_page(),
        KeyAction::FirstPage => state.goto_page(PageNumber::FIRST),
        KeyAction::LastPage => state.last_page(),
    }
    false
}

fn move_highlight(state: &mut AppState, direction: Direction, columns: usize) {
    let visible_len = state.visible_len();
    state.move_highlight(direction, columns, visible_len);
}

/// Edit the input buffer with an unbound key.
///
/// Returns `true` if the key was consumed. Only acts while the text area
/// has focus.
pub fn handle_input_key(state: &mut AppState, key: KeyEvent) -> bool {
    if state.focus != FocusPane::Input {
        return false;
    }

    let buffer = &mut state.buffer;
    match key.code {
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            buffer.insert_char(ch)
        }
        KeyCode::Enter => buffer.insert_newline(),
        KeyCode::Backspace => buffer.backspace(),
        KeyCode::Delete => buffer.delete(),
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Up => buffer.move_up(),
        KeyCode::Down => buffer.move_down(),
        KeyCode::Home => buffer.move_home(),
        KeyCode::End => buffer.move_end(),
        _ => return false,
    }
    true
}
