//! Mouse event handler.
//!
//! The view records where it drew each clickable element in a
//! [`ClickMap`]; these pure functions map a click position back to an
//! action on [`AppState`].

use crate::model::PageNumber;
use crate::state::{AppState, FocusPane};
use ratatui::layout::{Position, Rect};

/// Something on screen that reacts to a left click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The text area.
    InputArea,
    /// "Generate Barcodes" button.
    GenerateButton,
    /// "Clear Data" button.
    ClearButton,
    /// Card at this index of the visible slice.
    Card(usize),
    /// Page selector button.
    PageButton(PageNumber),
    /// The modal's Close button.
    CloseButton,
}

/// Clickable regions from the last rendered frame, in draw order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl ClickMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a region. Later regions are on top of earlier ones.
    pub fn push(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// Topmost target under (`x`, `y`), if any.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<HitTarget> {
        let pos = Position::new(x, y);
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(pos))
            .map(|&(_, target)| target)
    }

    /// Area recorded for `target`, if it was drawn.
    pub fn area_of(&self, target: HitTarget) -> Option<Rect> {
        self.regions
            .iter()
            .find(|(_, t)| *t == target)
            .map(|&(area, _)| area)
    }

    /// Number of recorded regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Whether nothing clickable was drawn.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Apply a left click at (`x`, `y`).
///
/// While the modal is open only its Close button reacts; everything
/// beneath the overlay is inert.
///
/// Returns the target that handled the click.
pub fn handle_mouse_click(
    state: &mut AppState,
    click_map: &ClickMap,
    x: u16,
    y: u16,
) -> Option<HitTarget> {
    let target = click_map.hit_test(x, y)?;

    if state.selection.is_open() {
        return match target {
            HitTarget::CloseButton => {
                state.selection.close();
                Some(target)
            }
            _ => None,
        };
    }

    match target {
        HitTarget::InputArea => state.focus = FocusPane::Input,
        HitTarget::GenerateButton => state.submit(),
        HitTarget::ClearButton => state.clear(),
        HitTarget::Card(index) => {
            state.focus = FocusPane::Grid;
            if !state.select_visible(index) {
                return None;
            }
        }
        HitTarget::PageButton(page) => {
            state.focus = FocusPane::Grid;
            state.goto_page(page);
        }
        HitTarget::CloseButton => return None,
    }

    Some(target)
}

// ===== Tests =====

#[cfg(test)]
#[path = "mouse_handler_tests.rs"]
mod tests;
