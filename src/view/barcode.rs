//! Barcode widget.
//!
//! Encodes a value with a [`Symbology`] at render time and draws the bars
//! centered in the given area. An encoding failure is drawn in place of
//! the bars and affects nothing outside this widget's area.

use crate::symbology::{RenderOptions, Symbology};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

/// Prefix of the inline failure indicator.
pub const INVALID_PREFIX: &str = "Invalid barcode:";

/// Renders one value as a barcode, or as an inline failure indicator.
pub struct BarcodeView<'a> {
    value: &'a str,
    symbology: &'a dyn Symbology,
    options: RenderOptions,
    show_text: bool,
    bar_style: Style,
    text_style: Style,
    error_style: Style,
}

impl<'a> BarcodeView<'a> {
    /// Widget for `value`, encoded with `symbology` at `options`.
    pub fn new(value: &'a str, symbology: &'a dyn Symbology, options: RenderOptions) -> Self {
        Self {
            value,
            symbology,
            options,
            show_text: true,
            bar_style: Style::default(),
            text_style: Style::default(),
            error_style: Style::default(),
        }
    }

    /// Print the value under the bars.
    pub fn show_text(mut self, show_text: bool) -> Self {
        self.show_text = show_text;
        self
    }

    /// Style of the bars.
    pub fn bar_style(mut self, style: Style) -> Self {
        self.bar_style = style;
        self
    }

    /// Style of the value printed under the bars.
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = style;
        self
    }

    /// Style of the inline failure indicator.
    pub fn error_style(mut self, style: Style) -> Self {
        self.error_style = style;
        self
    }

    /// Rows needed for a successfully encoded barcode.
    pub fn height(options: RenderOptions, show_text: bool) -> u16 {
        options.height.saturating_add(u16::from(show_text))
    }
}

/// Middle `width` cells of `row`. Overflow is cut evenly from both sides so
/// the quiet zones go first.
fn center_crop(row: &str, width: usize) -> String {
    let len = row.chars().count();
    if len <= width {
        return row.to_owned();
    }
    let skip = (len - width) / 2;
    row.chars().skip(skip).take(width).collect()
}

impl Widget for BarcodeView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let barcode = match self.symbology.encode(self.value) {
            Ok(barcode) => barcode,
            Err(err) => {
                Paragraph::new(format!("{INVALID_PREFIX} {err}"))
                    .style(self.error_style)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .render(area, buf);
                return;
            }
        };

        let width = usize::from(area.width);
        let row = center_crop(&barcode.bar_row(self.options), width);
        let row_width = row.chars().count() as u16;
        let x = area.x + (area.width - row_width) / 2;

        let text_rows = u16::from(self.show_text);
        let bar_rows = self.options.height.min(area.height.saturating_sub(text_rows).max(1));
        for dy in 0..bar_rows {
            buf.set_stringn(x, area.y + dy, &row, width, self.bar_style);
        }

        if self.show_text && area.height > bar_rows {
            let text_area = Rect {
                y: area.y + bar_rows,
                height: 1,
                ..area
            };
            Paragraph::new(barcode.text())
                .style(self.text_style)
                .alignment(Alignment::Center)
                .render(text_area, buf);
        }
    }
}
