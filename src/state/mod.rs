//! UI state machine.
//!
//! All state transitions are plain methods testable without a terminal.

pub mod app_state;
pub mod input_buffer;
pub mod key_handler;
pub mod key_listener;
pub mod mouse_handler;
pub mod selection;

// Re-export for convenience
pub use app_state::{AppState, Direction, FocusPane};
pub use input_buffer::InputBuffer;
pub use key_handler::{handle_action, handle_input_key};
pub use key_listener::{KeyListenerRegistry, ListenerId, Subscription};
pub use mouse_handler::{handle_mouse_click, ClickMap, HitTarget};
pub use selection::{Selection, SelectionController, CANCEL_KEY};
