//! Board layout rendering.
//!
//! Pure layout logic: splits the screen into title, text area, buttons,
//! grid, page strip and status bar, then draws each part and collects the
//! clickable regions.

use super::constants::{
    BUTTON_ROW_HEIGHT, INPUT_HEIGHT, PAGER_HEIGHT, STATUS_BAR_HEIGHT, TITLE_HEIGHT,
};
use super::grid::GridGeometry;
use super::styles::BoardStyles;
use super::{form, grid, help, modal, pager};
use crate::model::{paginate, PAGE_SIZE};
use crate::state::{AppState, ClickMap, FocusPane};
use crate::symbology::{RenderOptions, Symbology};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Everything the renderer needs besides the state.
pub struct RenderContext<'a> {
    /// Encoder used for every card and the modal.
    pub symbology: &'a dyn Symbology,
    /// Resolved styles.
    pub styles: &'a BoardStyles,
    /// Display size for grid cards.
    pub grid_options: RenderOptions,
    /// Display size for the modal.
    pub modal_options: RenderOptions,
    /// Print the value under the bars.
    pub show_text: bool,
}

/// Screen regions of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// "Barcode Generator" title line.
    pub title: Rect,
    /// Bordered text area.
    pub input: Rect,
    /// Generate and Clear buttons.
    pub buttons: Rect,
    /// Card grid; `None` when there are no entries.
    pub grid: Option<Rect>,
    /// Page strip; `None` when there are no entries.
    pub pager: Option<Rect>,
    /// Status bar.
    pub status: Rect,
}

impl BoardLayout {
    /// Split `area`. The grid and page strip exist only when there is at
    /// least one entry.
    pub fn compute(area: Rect, has_entries: bool) -> Self {
        if has_entries {
            let [title, input, buttons, grid, pager, status] = Layout::vertical([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(BUTTON_ROW_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(PAGER_HEIGHT),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            Self {
                title,
                input,
                buttons,
                grid: Some(grid),
                pager: Some(pager),
                status,
            }
        } else {
            let [title, input, buttons, _, status] = Layout::vertical([
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(BUTTON_ROW_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .areas(area);
            Self {
                title,
                input,
                buttons,
                grid: None,
                pager: None,
                status,
            }
        }
    }

    /// Grid geometry for the current layout.
    pub fn grid_geometry(&self, ctx: &RenderContext<'_>) -> Option<GridGeometry> {
        self.grid
            .map(|area| GridGeometry::new(area, ctx.grid_options, ctx.show_text))
    }
}

/// Render the whole board and return the clickable regions, topmost last.
pub fn render_board(
    frame: &mut Frame,
    state: &AppState,
    layout: &BoardLayout,
    ctx: &RenderContext<'_>,
) -> ClickMap {
    let mut click_map = ClickMap::new();
    let styles = ctx.styles;
    let overlay_open = state.selection.is_open() || state.help_visible;

    form::render_title(frame, layout.title, styles);
    form::render_input(frame, layout.input, state, styles, !overlay_open, &mut click_map);
    form::render_buttons(frame, layout.buttons, styles, &mut click_map);

    let entries = state.entries();
    let view = paginate(&entries, PAGE_SIZE, state.page());

    if let Some(geometry) = layout.grid_geometry(ctx) {
        grid::render_grid(frame, &geometry, &view, state, ctx, &mut click_map);
    }
    if let Some(pager_area) = layout.pager {
        pager::render_pager(
            frame.buffer_mut(),
            pager_area,
            view.total_pages,
            state.page(),
            styles,
            &mut click_map,
        );
    }

    render_status_bar(frame, layout.status, state, entries.len(), view.total_pages, styles);

    if let Some(value) = state.selection.value() {
        let area = frame.area();
        modal::render_selection_modal(frame, area, value, ctx, &mut click_map);
    }
    if state.help_visible {
        help::render_help_overlay(frame, styles);
    }

    click_map
}

/// Key hints for the current mode.
fn status_hints(state: &AppState) -> &'static [(&'static str, &'static str)] {
    if state.help_visible {
        &[("Esc", "close help")]
    } else if state.selection.is_open() {
        &[("Esc", "close"), ("Enter", "close")]
    } else {
        match state.focus {
            FocusPane::Input => &[
                ("Ctrl+G", "generate"),
                ("Ctrl+L", "clear"),
                ("Tab", "grid"),
                ("F1", "help"),
                ("Ctrl+C", "quit"),
            ],
            FocusPane::Grid => &[
                ("←↑↓→", "move"),
                ("Enter", "details"),
                ("[ ]", "page"),
                ("Tab", "edit"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    entry_count: usize,
    total_pages: usize,
    styles: &BoardStyles,
) {
    let mut spans = Vec::new();
    for (key, action) in status_hints(state) {
        spans.push(Span::styled(format!(" {key}"), styles.key_hint));
        spans.push(Span::styled(format!(" {action} "), styles.status));
    }

    let summary = if entry_count == 0 {
        "No barcodes ".to_string()
    } else {
        format!(
            "{entry_count} barcodes · Page {} of {total_pages} ",
            state.page()
        )
    };

    let [hints_area, summary_area] = Layout::horizontal([
        Constraint::Min(0),
        Constraint::Length(summary.chars().count() as u16),
    ])
    .areas(area);

    frame.render_widget(Paragraph::new(Line::from(spans)), hints_area);
    frame.render_widget(
        Paragraph::new(Span::styled(summary, styles.status)),
        summary_area,
    );
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod tests;
