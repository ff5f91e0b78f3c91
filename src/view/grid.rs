//! Card grid for the visible page.

use super::barcode::BarcodeView;
use super::constants::{CARD_LABEL_LINES, THREE_COLUMN_MIN_WIDTH, TWO_COLUMN_MIN_WIDTH};
use super::layout::RenderContext;
use crate::model::PageView;
use crate::state::{AppState, ClickMap, FocusPane, HitTarget};
use crate::symbology::RenderOptions;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Card columns for a grid of the given width.
pub fn grid_columns(width: u16) -> usize {
    if width >= THREE_COLUMN_MIN_WIDTH {
        3
    } else if width >= TWO_COLUMN_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Card height: border, labels and barcode.
pub fn card_height(options: RenderOptions, show_text: bool) -> u16 {
    (2 + CARD_LABEL_LINES).saturating_add(BarcodeView::height(options, show_text))
}

/// Shape of the grid inside its area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Area the grid is drawn in.
    pub area: Rect,
    /// Cards per row.
    pub columns: usize,
    /// Rows per card, including its border.
    pub card_height: u16,
    /// Card rows that fit, at least 1.
    pub visible_rows: usize,
}

impl GridGeometry {
    /// Geometry of cards drawn at `options` inside `area`.
    pub fn new(area: Rect, options: RenderOptions, show_text: bool) -> Self {
        let card_height = card_height(options, show_text);
        Self {
            area,
            columns: grid_columns(area.width),
            card_height,
            visible_rows: usize::from(area.height / card_height).max(1),
        }
    }

    /// Screen rect of the card at `index` when the grid is scrolled to
    /// `scroll` rows, or `None` if it is scrolled out of view.
    pub fn card_rect(&self, index: usize, scroll: usize) -> Option<Rect> {
        let row = index / self.columns;
        let col = index % self.columns;
        if row < scroll || row >= scroll + self.visible_rows {
            return None;
        }
        let columns = Layout::horizontal(vec![Constraint::Fill(1); self.columns]).split(self.area);
        let column = columns.get(col)?;
        let y = self.area.y + (row - scroll) as u16 * self.card_height;
        let height = self.card_height.min(self.area.bottom().saturating_sub(y));
        Some(Rect::new(column.x, y, column.width, height))
    }
}

/// Render the cards of `view`, recording each card in the click map.
pub fn render_grid(
    frame: &mut Frame,
    geometry: &GridGeometry,
    view: &PageView<'_>,
    state: &AppState,
    ctx: &RenderContext<'_>,
    click_map: &mut ClickMap,
) {
    let highlighted = match state.focus {
        FocusPane::Grid => state.highlighted(view.visible.len()),
        FocusPane::Input => None,
    };

    for (index, value) in view.visible.iter().enumerate() {
        let Some(rect) = geometry.card_rect(index, state.grid_scroll) else {
            continue;
        };
        render_card(
            frame,
            rect,
            value,
            view.ordinal(index),
            highlighted == Some(index),
            ctx,
        );
        click_map.push(rect, HitTarget::Card(index));
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    ordinal: usize,
    highlighted: bool,
    ctx: &RenderContext<'_>,
) {
    let styles = ctx.styles;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if highlighted {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(if highlighted {
            styles.card_highlighted
        } else {
            styles.border
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [labels, bars] = Layout::vertical([
        Constraint::Length(CARD_LABEL_LINES),
        Constraint::Min(0),
    ])
    .areas(inner);

    let label_lines = vec![
        Line::from(vec![
            Span::styled("Barcode Data: ", styles.card_label),
            Span::raw(value),
        ]),
        Line::from(vec![
            Span::styled("Number: ", styles.card_label),
            Span::raw(ordinal.to_string()),
        ]),
    ];
    frame.render_widget(Paragraph::new(label_lines), labels);

    frame.render_widget(
        BarcodeView::new(value, ctx.symbology, ctx.grid_options)
            .show_text(ctx.show_text)
            .bar_style(styles.bars)
            .error_style(styles.error),
        bars,
    );
}
