//! Plain-text projection of an HTXT archive
//!
//! One record per line, in on-disk order. Newlines inside a record are
//! written as the two characters `\` `n` so a record never spans lines.
//!
//! The escape is not reversible for text that already contains a literal
//! backslash followed by `n`: such a sequence comes back as a newline after
//! import. Existing translation files depend on this exact escape, so it is
//! kept as-is.

use std::borrow::Cow;

/// The two-character sequence standing in for a newline.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Replace every newline with `\n` (backslash, `n`).
pub fn escape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', NEWLINE_ESCAPE))
    } else {
        Cow::Borrowed(text)
    }
}

/// Replace every `\n` (backslash, `n`) with a newline.
pub fn unescape_newlines(line: &str) -> Cow<'_, str> {
    if line.contains(NEWLINE_ESCAPE) {
        Cow::Owned(line.replace(NEWLINE_ESCAPE, "\n"))
    } else {
        Cow::Borrowed(line)
    }
}

/// Split text file content into lines.
///
/// A trailing newline at end of file does not produce an extra empty line.
/// Files saved with CRLF line endings read like LF files; in any other file
/// a `\r` is record text and kept.
pub fn split_lines(content: &str) -> Vec<&str> {
    if content.is_empty() {
        return Vec::new();
    }

    let crlf = is_crlf(content);
    let body = content.strip_suffix('\n').unwrap_or(content);
    body.split('\n')
        .map(|line| {
            if crlf {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}

/// Whether every line break is `\r\n`, with at least two of them.
///
/// Exported text never ends lines in `\r` unless the record itself does, so a
/// single `\r\n` is taken as record text.
fn is_crlf(content: &str) -> bool {
    let breaks = content.matches('\n').count();
    breaks >= 2 && content.matches("\r\n").count() == breaks
}

/// Join lines with single newlines, no trailing newline.
pub fn join_lines<S: AsRef<str>>(lines: &[S]) -> String {
    let mut out = String::with_capacity(lines.iter().map(|l| l.as_ref().len() + 1).sum());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.as_ref());
    }
    out
}

/// Number of UTF-16 code units needed to encode `text`.
pub fn code_units(text: &str) -> usize {
    text.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_roundtrip() {
        let samples = ["", "plain", "a\nb", "\n", "\n\nx\n", "ends with\n"];
        for s in samples {
            assert_eq!(unescape_newlines(&escape_newlines(s)), s);
        }
    }

    #[test]
    fn test_escape_borrows_when_clean() {
        assert!(matches!(escape_newlines("no breaks"), Cow::Borrowed(_)));
        assert!(matches!(unescape_newlines("no breaks"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_unescape_literal_sequence() {
        assert_eq!(unescape_newlines("Hello\\nWorld"), "Hello\nWorld");
    }

    #[test]
    fn test_split_lines_trailing_newline() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("AB\n"), vec!["AB"]);
    }

    #[test]
    fn test_split_lines_keeps_empty_records() {
        assert_eq!(split_lines("AB\n"), vec!["AB"]);
        assert_eq!(split_lines("AB\n\n"), vec!["AB", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_split_lines_crlf() {
        assert_eq!(split_lines("one\r\ntwo\r\n"), vec!["one", "two"]);
        assert_eq!(split_lines("one\r\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_split_lines_keeps_record_carriage_return() {
        assert_eq!(split_lines("Press A\r\nnext"), vec!["Press A\r", "next"]);
        // Mixed endings: not a CRLF file, so every \r is text
        assert_eq!(split_lines("a\r\nb\nc\r\n"), vec!["a\r", "b", "c\r"]);
        assert_eq!(split_lines("only\r"), vec!["only\r"]);
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines(&["AB", ""]), "AB\n");
        assert_eq!(join_lines::<&str>(&[]), "");
        assert_eq!(join_lines(&["x"]), "x");
    }

    #[test]
    fn test_code_units() {
        assert_eq!(code_units(""), 0);
        assert_eq!(code_units("Hello\nWorld"), 11);
        assert_eq!(code_units("\u{e9}"), 1);
        assert_eq!(code_units("\u{1F600}"), 2);
    }
}
