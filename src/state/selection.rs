//! Selection/modal controller.
//!
//! Tracks which single entry (if any) is shown enlarged. While a value is
//! open, exactly one cancellation-key listener is registered; the
//! registration guard lives inside the `Open` state, so leaving `Open` by
//! any path (close, cancel, teardown) releases it.

use crate::state::key_listener::{KeyListenerRegistry, Subscription};
use crossterm::event::KeyCode;
use tracing::{debug, info};

/// Key that dismisses the modal.
pub const CANCEL_KEY: KeyCode = KeyCode::Esc;

/// Selection state.
///
/// # Cardinality
/// - `Closed`: 1 state
/// - `Open`: one state per selected value
#[derive(Debug, Default)]
pub enum Selection {
    /// No modal.
    #[default]
    Closed,
    /// Modal showing a copy of the selected entry.
    Open {
        /// Value copied from the entry list at selection time.
        value: String,
        /// Cancellation-key registration, released on drop.
        listener: Subscription,
    },
}

/// Owns the selection and its cancellation-key listener.
#[derive(Debug)]
pub struct SelectionController {
    state: Selection,
    registry: KeyListenerRegistry,
}

impl SelectionController {
    /// Closed controller subscribing on `registry` when opened.
    pub fn new(registry: KeyListenerRegistry) -> Self {
        Self {
            state: Selection::Closed,
            registry,
        }
    }

    /// Show `value` in the modal.
    ///
    /// From `Closed` this subscribes the cancellation listener. From
    /// `Open` it only replaces the shown value; the existing registration
    /// is kept, so modals never stack.
    pub fn select(&mut self, value: impl Into<String>) {
        let value = value.into();
        if let Selection::Open { value: current, .. } = &mut self.state {
            debug!(from = %current, to = %value, "Replacing selected barcode");
            *current = value;
            return;
        }

        let listener = self.registry.subscribe(CANCEL_KEY);
        info!(%value, listener = ?listener.id(), "Opening barcode details");
        self.state = Selection::Open { value, listener };
    }

    /// Explicit close action. No-op when closed.
    pub fn close(&mut self) {
        if self.is_open() {
            debug!("Closing barcode details");
        }
        self.state = Selection::Closed;
    }

    /// Cancellation-key dismissal. No-op when closed.
    pub fn cancel(&mut self) {
        if self.is_open() {
            debug!("Barcode details cancelled by key");
        }
        self.state = Selection::Closed;
    }

    /// Deliver a key signal. Returns `true` when it dismissed the modal.
    ///
    /// Only acts while this controller's listener is registered.
    pub fn on_key(&mut self, key: KeyCode) -> bool {
        if key == CANCEL_KEY && self.is_open() && self.registry.is_listening(key) {
            self.cancel();
            return true;
        }
        false
    }

    /// Whether the modal is showing a value.
    pub fn is_open(&self) -> bool {
        matches!(self.state, Selection::Open { .. })
    }

    /// The value shown in the modal, if open.
    pub fn value(&self) -> Option<&str> {
        match &self.state {
            Selection::Open { value, .. } => Some(value),
            Selection::Closed => None,
        }
    }

}
