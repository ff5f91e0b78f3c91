//! Initial barcode data.
//!
//! The board can start pre-filled from a file or from piped stdin. Either
//! way the content lands in the input buffer verbatim; entry derivation
//! happens later, on every render.

use crate::model::error::InputError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;
use tracing::info;

/// Where the initial buffer comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Read once from a file.
    File(PathBuf),
    /// Read piped stdin to EOF.
    Stdin,
}

impl InputSource {
    /// Interpret the optional positional argument. `-` means stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Option<Self> {
        let path = arg?;
        if path.as_os_str() == "-" {
            Some(InputSource::Stdin)
        } else {
            Some(InputSource::File(path))
        }
    }

    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// - `InputError::FileNotFound` if the file does not exist.
    /// - `InputError::Read` for other file errors (including invalid UTF-8).
    /// - `InputError::NoInput` if stdin is a terminal rather than a pipe.
    /// - `InputError::Stdin` if reading the pipe fails.
    pub fn read_all(&self) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path: path.clone() });
                }
                let text = std::fs::read_to_string(path).map_err(|source| InputError::Read {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), bytes = text.len(), "Loaded barcode data");
                Ok(text)
            }
            InputSource::Stdin => {
                let stdin = std::io::stdin();
                if stdin.is_terminal() {
                    return Err(InputError::NoInput);
                }
                let text = read_from(stdin.lock())?;
                info!(bytes = text.len(), "Loaded barcode data from stdin");
                Ok(text)
            }
        }
    }
}

/// Read a pipe to EOF.
pub fn read_from<R: Read>(mut reader: R) -> Result<String, InputError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(InputError::Stdin)?;
    Ok(text)
}

/// Initial buffer text for the optional positional argument. Empty when
/// no source was given.
pub fn load_initial_buffer(arg: Option<PathBuf>) -> Result<String, InputError> {
    match InputSource::from_arg(arg) {
        Some(source) => source.read_all(),
        None => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn dash_means_stdin() {
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("-"))),
            Some(InputSource::Stdin)
        );
    }

    #[test]
    fn path_means_file() {
        assert_eq!(
            InputSource::from_arg(Some(PathBuf::from("codes.txt"))),
            Some(InputSource::File(PathBuf::from("codes.txt")))
        );
    }

    #[test]
    fn no_arg_means_empty_buffer() {
        assert_eq!(InputSource::from_arg(None), None);
        assert_eq!(load_initial_buffer(None).unwrap(), "");
    }

    #[test]
    fn read_all_returns_file_content_verbatim() {
        let path = std::env::temp_dir().join("barboard_source_test.txt");
        fs::write(&path, "ABC\n\n  123  \n").unwrap();

        let text = load_initial_buffer(Some(path.clone())).unwrap();
        assert_eq!(text, "ABC\n\n  123  \n");

        fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let path = PathBuf::from("/nonexistent/barboard/codes.txt");
        let err = load_initial_buffer(Some(path.clone())).unwrap_err();
        match err {
            InputError::FileNotFound { path: p } => assert_eq!(p, path),
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn read_from_reads_to_eof() {
        let data = b"ONE\nTWO\n";
        assert_eq!(read_from(&data[..]).unwrap(), "ONE\nTWO\n");
    }

    #[test]
    fn read_from_reports_invalid_utf8() {
        let data: &[u8] = &[0xff, 0xfe];
        assert!(matches!(read_from(data), Err(InputError::Stdin(_))));
    }
}
