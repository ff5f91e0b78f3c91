//! Barcode board (barboard)
//!
//! TUI application that turns multiline text into a paginated grid of
//! Code 128 barcodes, with a details modal for a single entry.
//!
//! This is the library root, split along the Pure Core / Impure Shell line:
//! `model`, `symbology` and `state` are pure; `view`, `source` and
//! `logging` touch the terminal and the filesystem.

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod symbology;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
