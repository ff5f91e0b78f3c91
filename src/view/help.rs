//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered overlay with all keyboard shortcuts grouped by focus.
//! Toggled by F1 (or '?' in the grid), dismissed by Esc.

use super::constants::{HELP_POPUP_HEIGHT_PERCENT, HELP_POPUP_WIDTH_PERCENT};
use super::styles::BoardStyles;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the help overlay centered on the screen.
pub fn render_help_overlay(frame: &mut Frame, styles: &BoardStyles) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content(styles))
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .title_bottom(
                    Line::from(Span::styled(
                        " Press Esc or F1 to close ",
                        styles.status.add_modifier(Modifier::DIM),
                    ))
                    .alignment(Alignment::Center),
                )
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(styles.border_focused),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help_paragraph, popup_area);
}

/// Calculate the centered rect for the help overlay.
///
/// Returns a Rect that is centered on the screen with the specified
/// percentage of width and height.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Text area",
        &[
            ("Type / Enter", "Edit barcode data, one value per line"),
            ("Ctrl+G / Ctrl+S", "Generate barcodes"),
            ("Ctrl+L", "Clear data"),
        ],
    ),
    (
        "Grid",
        &[
            ("Arrows / h j k l", "Move between cards"),
            ("Enter / Space", "Show barcode details"),
            ("] / PageDown", "Next page"),
            ("[ / PageUp", "Previous page"),
            ("Home / End", "First / last page"),
            ("g / c", "Generate / clear"),
        ],
    ),
    (
        "Details",
        &[("Esc / Enter", "Close")],
    ),
    (
        "Application",
        &[
            ("Tab", "Switch between text area and grid"),
            ("Mouse", "Click cards, pages and buttons"),
            ("F1 / ?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

/// Build the help content lines grouped by category.
fn build_help_content(styles: &BoardStyles) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, (title, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(*title, styles.title)));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<18}"), styles.key_hint),
                Span::raw(*desc),
            ]));
        }
    }
    lines
}
