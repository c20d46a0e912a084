//! Cell sanitizer
//!
//! Carriage returns, line feeds and double quotes are removed outright, not
//! escaped. Every cell is sanitized immediately before it is encoded.

use std::borrow::Cow;

const STRIPPED: [char; 3] = ['\r', '\n', '"'];

/// Strip CR, LF and `"` from a cell value
///
/// Borrows when there is nothing to remove.
pub fn sanitize(cell: &str) -> Cow<'_, str> {
    if cell.contains(STRIPPED) {
        Cow::Owned(cell.replace(STRIPPED, ""))
    } else {
        Cow::Borrowed(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_value_borrowed() {
        assert!(matches!(sanitize("plain value, with comma"), Cow::Borrowed(_)));
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_strips_quotes_and_line_breaks() {
        assert_eq!(sanitize("Say \"hi\"\nnow"), "Say hinow");
        assert_eq!(sanitize("a\r\nb"), "ab");
        assert_eq!(sanitize("\"\"\""), "");
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(sanitize("tab\there; 'single' , comma"), "tab\there; 'single' , comma");
        assert_eq!(sanitize("café ☕"), "café ☕");
    }

    #[test]
    fn test_idempotent() {
        let once = sanitize("x\"y\nz").into_owned();
        assert_eq!(sanitize(&once), once);
    }
}
