//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the title line.
pub const TITLE_HEIGHT: u16 = 1;

/// Visible text rows in the input area.
pub const INPUT_ROWS: u16 = 10;

/// Height of the input area in lines (content rows + border).
pub const INPUT_HEIGHT: u16 = INPUT_ROWS + 2;

/// Height of the Generate/Clear button row.
pub const BUTTON_ROW_HEIGHT: u16 = 1;

/// Columns between the two form buttons.
pub const BUTTON_GAP: u16 = 4;

/// Height of the page-selector strip.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for status text and keyboard hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Minimum grid width for two card columns.
pub const TWO_COLUMN_MIN_WIDTH: u16 = 60;

/// Minimum grid width for three card columns.
pub const THREE_COLUMN_MIN_WIDTH: u16 = 100;

/// Lines in a card above the barcode ("Barcode Data", "Number").
pub const CARD_LABEL_LINES: u16 = 2;

/// Minimum width of the details modal, border included.
pub const MODAL_MIN_WIDTH: u16 = 30;

/// Lines in the modal besides the barcode: border (2), value, spacer,
/// Close button.
pub const MODAL_CHROME_HEIGHT: u16 = 5;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
