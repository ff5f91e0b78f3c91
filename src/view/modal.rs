//! "Barcode Details" modal.

use super::barcode::BarcodeView;
use super::constants::{MODAL_CHROME_HEIGHT, MODAL_MIN_WIDTH};
use super::layout::RenderContext;
use crate::state::{ClickMap, HitTarget};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Modal block title.
pub const MODAL_TITLE: &str = " Barcode Details ";
/// Close button label.
pub const CLOSE_LABEL: &str = "[ Close ]";

/// Centered modal rect wide enough for `content_width` cells of barcode
/// and tall enough for `barcode_height` rows, clamped to `area`.
pub fn modal_rect(area: Rect, content_width: u16, barcode_height: u16) -> Rect {
    let width = content_width
        .saturating_add(4)
        .max(MODAL_MIN_WIDTH)
        .min(area.width);
    let height = barcode_height
        .saturating_add(MODAL_CHROME_HEIGHT)
        .min(area.height);

    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}

/// Render the modal for `value` over `area`, recording the Close button.
pub fn render_selection_modal(
    frame: &mut Frame,
    area: Rect,
    value: &str,
    ctx: &RenderContext<'_>,
    click_map: &mut ClickMap,
) {
    let styles = ctx.styles;
    let options = ctx.modal_options;

    let content_width = match ctx.symbology.encode(value) {
        Ok(barcode) => barcode.columns(options),
        Err(_) => 0,
    }
    .max(value.width());
    let content_width = u16::try_from(content_width).unwrap_or(u16::MAX);
    let barcode_height = BarcodeView::height(options, ctx.show_text);
    let modal_area = modal_rect(area, content_width, barcode_height);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(Line::from(Span::styled(MODAL_TITLE, styles.title)).centered())
        .title_bottom(Line::from(" Esc: close ").centered())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles.border_focused)
        .style(styles.modal);
    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let [bars, value_line, _, button_row] = Layout::vertical([
        Constraint::Length(barcode_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    frame.render_widget(
        BarcodeView::new(value, ctx.symbology, options)
            .show_text(ctx.show_text)
            .bar_style(styles.bars)
            .error_style(styles.error),
        bars,
    );

    if !ctx.show_text {
        frame.render_widget(
            Paragraph::new(value).alignment(Alignment::Center),
            value_line,
        );
    }

    let close_width = (CLOSE_LABEL.width() as u16).min(button_row.width);
    let close = Rect {
        x: button_row.x + button_row.width.saturating_sub(close_width) / 2,
        width: close_width,
        ..button_row
    };
    frame.render_widget(
        Paragraph::new(Span::styled(CLOSE_LABEL, styles.close_button)),
        close,
    );
    click_map.push(close, HitTarget::CloseButton);
}
