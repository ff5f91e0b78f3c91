//! Page-selector strip.
//!
//! One button per page. When the buttons do not fit, the strip shows a
//! window of pages around the active one with `‹`/`›` markers at the cut.

use super::styles::BoardStyles;
use crate::model::PageNumber;
use crate::state::{ClickMap, HitTarget};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
};
use std::ops::Range;

const GAP: usize = 1;
const LEFT_MARKER: &str = "‹ ";
const RIGHT_MARKER: &str = " ›";
const MARKER_WIDTH: usize = 2;

fn label(page: usize) -> String {
    format!(" {page} ")
}

fn button_width(page: usize) -> usize {
    page.to_string().len() + 2
}

/// Width of buttons for `pages`, with gaps between them.
fn buttons_width(pages: Range<usize>) -> usize {
    let count = pages.len();
    pages.map(button_width).sum::<usize>() + count.saturating_sub(1) * GAP
}

/// Pages shown in a strip of `max_width` cells, as a 1-based half-open
/// range. Centered on `active` (clamped into `1..=total`).
pub fn page_window(total: usize, active: usize, max_width: u16) -> Range<usize> {
    if total == 0 {
        return 1..1;
    }
    let max_width = usize::from(max_width);
    if buttons_width(1..total + 1) <= max_width {
        return 1..total + 1;
    }

    let budget = max_width.saturating_sub(2 * MARKER_WIDTH);
    let anchor = active.clamp(1, total);
    let (mut start, mut end) = (anchor, anchor + 1);
    let mut used = button_width(anchor);

    loop {
        let mut grew = false;
        if end <= total && used + GAP + button_width(end) <= budget {
            used += GAP + button_width(end);
            end += 1;
            grew = true;
        }
        if start > 1 && used + GAP + button_width(start - 1) <= budget {
            used += GAP + button_width(start - 1);
            start -= 1;
            grew = true;
        }
        if !grew {
            break;
        }
    }

    start..end
}

/// Render the strip centered in `area` and record each page button.
pub fn render_pager(
    buf: &mut Buffer,
    area: Rect,
    total: usize,
    active: PageNumber,
    styles: &BoardStyles,
    click_map: &mut ClickMap,
) {
    if area.is_empty() || total == 0 {
        return;
    }

    let window = page_window(total, active.get(), area.width);
    let left = window.start > 1;
    let right = window.end <= total;
    let width = buttons_width(window.clone())
        + usize::from(left) * MARKER_WIDTH
        + usize::from(right) * MARKER_WIDTH;

    let mut x = area.x + area.width.saturating_sub(width as u16) / 2;
    let right_edge = area.right();

    let mut put = |x: &mut u16, text: &str, style: Style| -> Option<Rect> {
        if *x >= right_edge {
            return None;
        }
        let avail = usize::from(right_edge - *x);
        let (next_x, _) = buf.set_stringn(*x, area.y, text, avail, style);
        let rect = Rect::new(*x, area.y, next_x - *x, 1);
        *x = next_x;
        Some(rect)
    };

    if left {
        put(&mut x, LEFT_MARKER, styles.page_button);
    }
    for (i, page) in window.clone().enumerate() {
        if i > 0 {
            put(&mut x, " ", Style::default());
        }
        let style = if page == active.get() {
            styles.page_active
        } else {
            styles.page_button
        };
        let rect = put(&mut x, &label(page), style);
        if let (Some(rect), Some(number)) = (rect, PageNumber::new(page)) {
            click_map.push(rect, HitTarget::PageButton(number));
        }
    }
    if right {
        put(&mut x, RIGHT_MARKER, styles.page_button);
    }
}
