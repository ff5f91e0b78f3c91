//! Entry list derivation from the raw input buffer.

/// Derive the ordered list of barcode entries from the raw input buffer.
///
/// The buffer is split on line breaks, every piece is trimmed, and pieces
/// that are empty after trimming are dropped. Order is preserved and
/// duplicates are kept: two identical lines produce two entries.
///
/// Total function: never fails, an empty or whitespace-only buffer yields
/// an empty list.
pub fn derive_entries(buffer: &str) -> Vec<String> {
    buffer
        .trim()
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffer_yields_no_entries() {
        assert!(derive_entries("").is_empty());
    }

    #[test]
    fn whitespace_only_buffer_yields_no_entries() {
        assert!(derive_entries("   \n  \n").is_empty());
    }

    #[test]
    fn blank_lines_are_dropped_and_order_preserved() {
        assert_eq!(derive_entries("A\n\nB\n  \nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn entries_are_trimmed() {
        assert_eq!(derive_entries("  ABC-1 \n\tXYZ\t"), vec!["ABC-1", "XYZ"]);
    }

    #[test]
    fn duplicates_are_not_removed() {
        assert_eq!(derive_entries("X\nX\nX"), vec!["X", "X", "X"]);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        assert_eq!(derive_entries("A\r\nB\r\n"), vec!["A", "B"]);
    }

    #[test]
    fn inner_whitespace_is_kept() {
        assert_eq!(derive_entries("HELLO WORLD"), vec!["HELLO WORLD"]);
    }
}
