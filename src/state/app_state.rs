//! Application state and transitions.
//!
//! AppState is the root state type containing all board state.
//! Transitions are synchronous methods driven by the event loop; derived
//! data (entry list, page view) is recomputed on demand, never stored.

use crate::model::{derive_entries, paginate, total_pages, PageNumber, PAGE_SIZE};
use crate::state::input_buffer::InputBuffer;
use crate::state::key_listener::KeyListenerRegistry;
use crate::state::selection::SelectionController;
use tracing::{debug, info};

// ===== AppState =====

/// Application state.
///
/// # State Machine
///
/// - **Focus**: Input ⇄ Grid (via `cycle_focus`)
/// - **Page**: reset to 1 on `submit` and `clear`; otherwise only changed
///   by explicit page selection. Never re-clamped when the list shrinks.
/// - **Selection**: Closed ⇄ Open(value) (see `SelectionController`)
#[derive(Debug)]
pub struct AppState {
    /// Raw user input. The entry list is derived from it on every render.
    pub buffer: InputBuffer,

    /// Current page (1-based). May exceed the page count after the list
    /// shrinks; that renders an empty grid.
    page: PageNumber,

    /// Modal controller. Holds the cancellation-key subscription while open.
    pub selection: SelectionController,

    /// Registry the selection subscribes on. The event loop consults it
    /// before normal key dispatch.
    pub key_listeners: KeyListenerRegistry,

    /// Which region receives keyboard input.
    pub focus: FocusPane,

    /// Highlighted card, as an index into the visible slice.
    /// Clamped against the visible length when read.
    highlighted: usize,

    /// First grid row drawn (vertical scroll of the card grid).
    pub grid_scroll: usize,

    /// Whether the help overlay is visible.
    pub help_visible: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh board: empty buffer, page 1, input focused, modal closed.
    pub fn new() -> Self {
        Self::with_buffer(InputBuffer::new())
    }

    /// Board pre-filled with `buffer`.
    pub fn with_buffer(buffer: InputBuffer) -> Self {
        let key_listeners = KeyListenerRegistry::new();
        Self {
            buffer,
            page: PageNumber::FIRST,
            selection: SelectionController::new(key_listeners.clone()),
            key_listeners,
            focus: FocusPane::Input,
            highlighted: 0,
            grid_scroll: 0,
            help_visible: false,
        }
    }

    /// Entry list derived from the current buffer.
    pub fn entries(&self) -> Vec<String> {
        derive_entries(self.buffer.text())
    }

    /// Current page number.
    pub fn page(&self) -> PageNumber {
        self.page
    }

    /// Page count for the current buffer.
    pub fn total_pages(&self) -> usize {
        total_pages(self.entries().len(), PAGE_SIZE)
    }

    /// Submit the form (Generate): back to page 1 and focus the grid.
    pub fn submit(&mut self) {
        let count = self.entries().len();
        info!(entries = count, "Generating barcodes");
        self.goto_page(PageNumber::FIRST);
        if count > 0 {
            self.focus = FocusPane::Grid;
        }
    }

    /// Clear Data: empty the buffer and go back to page 1.
    pub fn clear(&mut self) {
        info!("Clearing barcode data");
        self.buffer.clear();
        self.goto_page(PageNumber::FIRST);
        self.focus = FocusPane::Input;
    }

    /// Select a page explicitly (page button). No clamping.
    pub fn goto_page(&mut self, page: PageNumber) {
        if page != self.page {
            debug!(from = %self.page, to = %page, "Changing page");
        }
        self.page = page;
        self.highlighted = 0;
        self.grid_scroll = 0;
    }

    /// Next page, clamped to the valid range.
    pub fn next_page(&mut self) {
        let target = self.page.next_within(self.total_pages());
        self.goto_page(target);
    }

    /// Previous page, clamped to the valid range.
    pub fn prev_page(&mut self) {
        let target = self.page.prev_within(self.total_pages());
        self.goto_page(target);
    }

    /// Jump to the last page (page 1 if there are none).
    pub fn last_page(&mut self) {
        let target = PageNumber::new(self.total_pages()).unwrap_or(PageNumber::FIRST);
        self.goto_page(target);
    }

    /// Toggle focus between the text area and the grid.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Input => FocusPane::Grid,
            FocusPane::Grid => FocusPane::Input,
        };
    }

    /// Highlighted card index, clamped to `visible_len`. `None` when the
    /// page is empty.
    pub fn highlighted(&self, visible_len: usize) -> Option<usize> {
        visible_len.checked_sub(1).map(|last| self.highlighted.min(last))
    }

    /// Highlight a card directly (mouse).
    pub fn set_highlighted(&mut self, index: usize) {
        self.highlighted = index;
    }

    /// Move the highlight within a grid of `columns` columns holding
    /// `visible_len` cards. Stops at the edges.
    pub fn move_highlight(&mut self, direction: Direction, columns: usize, visible_len: usize) {
        let Some(current) = self.highlighted(visible_len) else {
            return;
        };
        let columns = columns.max(1);
        self.highlighted = match direction {
            Direction::Up => current.checked_sub(columns).unwrap_or(current),
            Direction::Down if current + columns < visible_len => current + columns,
            Direction::Down => current,
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(visible_len - 1),
        };
    }

    /// Keep the highlighted card's row within the `visible_rows` window.
    pub fn adjust_grid_scroll(&mut self, columns: usize, visible_rows: usize, visible_len: usize) {
        let Some(current) = self.highlighted(visible_len) else {
            self.grid_scroll = 0;
            return;
        };
        let visible_rows = visible_rows.max(1);
        let row = current / columns.max(1);
        if row < self.grid_scroll {
            self.grid_scroll = row;
        } else if row >= self.grid_scroll + visible_rows {
            self.grid_scroll = row + 1 - visible_rows;
        }
    }

    /// Open the modal for the `index`-th card on the current page.
    ///
    /// Returns `false` if there is no such card.
    pub fn select_visible(&mut self, index: usize) -> bool {
        let entries = self.entries();
        let view = paginate(&entries, PAGE_SIZE, self.page);
        match view.visible.get(index) {
            Some(value) => {
                self.highlighted = index;
                self.selection.select(value.clone());
                true
            }
            None => false,
        }
    }

    /// Open the modal for the highlighted card.
    pub fn select_highlighted(&mut self) -> bool {
        match self.highlighted(self.visible_len()) {
            Some(index) => self.select_visible(index),
            None => false,
        }
    }

    /// Number of cards on the current page.
    pub fn visible_len(&self) -> usize {
        let entries = self.entries();
        paginate(&entries, PAGE_SIZE, self.page).visible.len()
    }
}

// ===== FocusPane =====

/// Which region has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The text area. Printable keys edit the buffer.
    #[default]
    Input,
    /// The card grid. Keys navigate and open cards.
    Grid,
}

/// Highlight movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One card row up.
    Up,
    /// One card row down.
    Down,
    /// Previous card.
    Left,
    /// Next card.
    Right,
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
