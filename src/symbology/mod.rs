//! Barcode symbologies.
//!
//! The board treats encoding as a black-box capability behind the
//! [`Symbology`] trait: given a string, produce a [`Barcode`] or fail with
//! an [`EncodeError`]. A [`Barcode`] is rendered to terminal rows at a
//! requested display size via [`RenderOptions`].

pub mod code128;

pub use code128::Code128;

use thiserror::Error;

/// Reasons a value cannot be turned into a barcode.
///
/// Non-fatal: the render surface shows these inline in place of the
/// barcode, one entry at a time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Nothing to encode.
    #[error("empty value")]
    Empty,

    /// A character outside the symbology's alphabet.
    #[error("unsupported character {ch:?} at position {position}")]
    UnsupportedCharacter {
        /// Offending character.
        ch: char,
        /// 0-based character index in the value.
        position: usize,
    },
}

/// An encoding scheme able to turn a string into bars.
pub trait Symbology {
    /// Human-readable name, e.g. "CODE128".
    fn name(&self) -> &'static str;

    /// Encode `value` into a barcode.
    fn encode(&self, value: &str) -> Result<Barcode, EncodeError>;
}

/// Tallest bar height, in terminal rows, that a barcode is drawn at.
pub const MAX_BAR_HEIGHT: u16 = 64;

/// Widest module, in half-cells.
pub const MAX_MODULE_WIDTH: u16 = 8;

/// Requested display size for a rendered barcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Number of terminal rows the bars occupy.
    pub height: u16,
    /// Width of one module in half-cells. 1 packs two modules into each
    /// terminal cell using half blocks; 2 gives each module a full cell.
    pub width: u16,
}

impl RenderOptions {
    /// Create render options, clamped to `1..=MAX_BAR_HEIGHT` rows and
    /// `1..=MAX_MODULE_WIDTH` half-cells.
    pub fn new(height: u16, width: u16) -> Self {
        Self {
            height: height.clamp(1, MAX_BAR_HEIGHT),
            width: width.clamp(1, MAX_MODULE_WIDTH),
        }
    }

    /// Terminal columns needed to draw `modules` modules.
    pub fn columns_for(&self, modules: usize) -> usize {
        (modules * usize::from(self.width)).div_ceil(2)
    }
}

/// An encoded barcode: a run of dark/light modules plus the text it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Barcode {
    /// `true` = bar (dark), `false` = space (light). Includes quiet zones.
    modules: Vec<bool>,
    /// Symbol values in encoding order, including start and checksum,
    /// excluding stop.
    symbols: Vec<u8>,
    /// The human-readable value.
    text: String,
}

impl Barcode {
    pub(crate) fn new(modules: Vec<bool>, symbols: Vec<u8>, text: impl Into<String>) -> Self {
        Self {
            modules,
            symbols,
            text: text.into(),
        }
    }

    /// Module pattern including quiet zones.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Encoded symbol values (start, data, checksum).
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// The encoded text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Terminal columns this barcode needs at the given options.
    pub fn columns(&self, options: RenderOptions) -> usize {
        options.columns_for(self.modules.len())
    }

    /// Render one row of bars using block characters.
    ///
    /// Each module is expanded to `options.width` half-cells; consecutive
    /// half-cell pairs become one terminal cell.
    pub fn bar_row(&self, options: RenderOptions) -> String {
        let repeat = usize::from(options.width.max(1));
        let half_cells: Vec<bool> = self
            .modules
            .iter()
            .flat_map(|&dark| std::iter::repeat_n(dark, repeat))
            .collect();

        half_cells
            .chunks(2)
            .map(|pair| match pair {
                [true, true] => '█',
                [true, false] | [true] => '▌',
                [false, true] => '▐',
                _ => ' ',
            })
            .collect()
    }
}
