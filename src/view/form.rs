//! Title, text area and form buttons.

use super::constants::{BUTTON_GAP, INPUT_ROWS};
use super::styles::BoardStyles;
use crate::state::{AppState, ClickMap, FocusPane, HitTarget, InputBuffer};
use ratatui::{
    layout::{Alignment, Position, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Title line text.
pub const TITLE: &str = "Barcode Generator";
/// Shown in the empty text area.
pub const PLACEHOLDER: &str = "Enter Barcode Data (one per line):";
/// Generate button label.
pub const GENERATE_LABEL: &str = "[ Generate Barcodes ]";
/// Clear button label.
pub const CLEAR_LABEL: &str = "[ Clear Data ]";

/// Draw the centered title line.
pub fn render_title(frame: &mut Frame, area: Rect, styles: &BoardStyles) {
    let title = Paragraph::new(Line::from(Span::styled(TITLE, styles.title)))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

/// Scroll offsets (rows, columns) that keep the cursor inside a viewport
/// of `width` x `height` cells.
pub fn input_scroll(buffer: &InputBuffer, width: u16, height: u16) -> (u16, u16) {
    let (line, col) = buffer.cursor_line_col();
    let cursor_x = cursor_display_col(buffer, line, col);

    let rows = usize::from(height.max(1));
    let vscroll = (line + 1).saturating_sub(rows);
    let cols = usize::from(width.max(1));
    let hscroll = (cursor_x + 1).saturating_sub(cols);

    (
        u16::try_from(vscroll).unwrap_or(u16::MAX),
        u16::try_from(hscroll).unwrap_or(u16::MAX),
    )
}

/// Display column of the cursor on its line.
fn cursor_display_col(buffer: &InputBuffer, line: usize, col: usize) -> usize {
    let text = buffer.text().split('\n').nth(line).unwrap_or("");
    let prefix: String = text.chars().take(col).collect();
    prefix.width()
}

/// Render the bordered text area. Places the terminal cursor when
/// `show_cursor` is set.
pub fn render_input(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    styles: &BoardStyles,
    show_cursor: bool,
    click_map: &mut ClickMap,
) {
    let focused = state.focus == FocusPane::Input;
    let block = Block::default()
        .title(" Barcode Data ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            styles.border_focused
        } else {
            styles.border
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);
    click_map.push(area, HitTarget::InputArea);

    let buffer = &state.buffer;
    if buffer.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(PLACEHOLDER, styles.placeholder)),
            inner,
        );
    } else {
        let (vscroll, hscroll) = input_scroll(buffer, inner.width, inner.height.min(INPUT_ROWS));
        let lines: Vec<Line> = buffer.text().split('\n').map(Line::raw).collect();
        frame.render_widget(Paragraph::new(lines).scroll((vscroll, hscroll)), inner);
    }

    if show_cursor && focused && !inner.is_empty() {
        let (vscroll, hscroll) = input_scroll(buffer, inner.width, inner.height.min(INPUT_ROWS));
        let (line, col) = buffer.cursor_line_col();
        let x = cursor_display_col(buffer, line, col).saturating_sub(usize::from(hscroll));
        let y = line.saturating_sub(usize::from(vscroll));
        frame.set_cursor_position(Position::new(
            inner.x + u16::try_from(x).unwrap_or(0),
            inner.y + u16::try_from(y).unwrap_or(0),
        ));
    }
}

/// Button rects (Generate, Clear), centered in `area`.
pub fn button_areas(area: Rect) -> (Rect, Rect) {
    let generate_width = GENERATE_LABEL.width() as u16;
    let clear_width = CLEAR_LABEL.width() as u16;
    let total = generate_width + BUTTON_GAP + clear_width;
    let x = area.x + area.width.saturating_sub(total) / 2;

    let generate = Rect::new(x, area.y, generate_width, 1).intersection(area);
    let clear = Rect::new(x + generate_width + BUTTON_GAP, area.y, clear_width, 1).intersection(area);
    (generate, clear)
}

/// Draw the Generate and Clear buttons and record their click regions.
pub fn render_buttons(
    frame: &mut Frame,
    area: Rect,
    styles: &BoardStyles,
    click_map: &mut ClickMap,
) {
    let (generate, clear) = button_areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(GENERATE_LABEL, styles.generate_button)),
        generate,
    );
    frame.render_widget(
        Paragraph::new(Span::styled(CLEAR_LABEL, styles.clear_button)),
        clear,
    );
    click_map.push(generate, HitTarget::GenerateButton);
    click_map.push(clear, HitTarget::ClearButton);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_scroll_when_cursor_fits() {
        let buffer = InputBuffer::from_text("A\nB\nC");
        assert_eq!(input_scroll(&buffer, 20, 10), (0, 0));
    }

    #[test]
    fn scrolls_down_to_keep_cursor_row_visible() {
        let text = (1..=15).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let buffer = InputBuffer::from_text(text);
        // Cursor on line index 14, 10 visible rows.
        assert_eq!(input_scroll(&buffer, 20, 10).0, 5);
    }

    #[test]
    fn scrolls_right_for_long_line() {
        let buffer = InputBuffer::from_text("X".repeat(30));
        // Cursor at column 30 needs 31 cells.
        assert_eq!(input_scroll(&buffer, 20, 10).1, 11);
    }

    #[test]
    fn buttons_are_centered_and_do_not_overlap() {
        let (generate, clear) = button_areas(Rect::new(0, 5, 80, 1));
        assert_eq!(generate.width, 21);
        assert_eq!(clear.width, 14);
        assert_eq!(clear.x, generate.x + generate.width + BUTTON_GAP);
        assert_eq!(generate.x, (80 - 39) / 2);
    }

    #[test]
    fn buttons_are_clipped_to_narrow_area() {
        let area = Rect::new(0, 0, 25, 1);
        let (generate, clear) = button_areas(area);
        assert!(generate.right() <= area.right());
        assert!(clear.width == 0 || clear.right() <= area.right());
    }
}
