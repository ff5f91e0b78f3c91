//! Error types for barboard.
//!
//! Uses `thiserror`, composing via `?` and `From`. [`InputError`] covers
//! failures loading the initial buffer (file or stdin); the TUI shell wraps
//! it together with terminal I/O failures in [`crate::view::TuiError`].
//!
//! Barcode encoding failures are deliberately *not* part of this hierarchy.
//! They are per-entry, non-fatal and rendered inline (see
//! [`crate::symbology::EncodeError`]).

use std::path::PathBuf;
use thiserror::Error;

/// Errors encountered when reading the initial barcode data.
#[derive(Debug, Error)]
pub enum InputError {
    /// The data file passed on the command line does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// Reading the data file failed (permissions, invalid UTF-8, ...).
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// `-` was given but stdin is a terminal, not a pipe.
    #[error("No piped input on stdin")]
    NoInput,

    /// Reading piped stdin failed.
    #[error("Failed to read stdin: {0}")]
    Stdin(#[source] std::io::Error),
}
