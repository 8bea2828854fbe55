//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! Plain-text to HTXT import

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::{Error, Result, read_file, read_text_file};
use crate::formats::htxt::{self, text};

use std::path::Path;

/// What an import changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Number of records written
    pub records: usize,
    /// `archive_length` of the reference archive
    pub old_length: u32,
    /// `archive_length` written to the new archive
    pub new_length: u32,
}

/// Rebuild an HTXT archive from a reference archive and an edited text file
///
/// Neither input is modified. The output file only appears once complete.
///
/// # Errors
/// Returns [`Error::RecordCountMismatch`] if the text file does not have one
/// line per record, [`Error::CorruptArchive`] if the reference cannot be
/// scanned, [`Error::ReadFile`] naming whichever input could not be read, and
/// [`Error::Utf8`] if the text file is not UTF-8.
pub fn convert_text_to_htxt<P: AsRef<Path>>(
    reference: P,
    text_path: P,
    dest: P,
) -> Result<ImportSummary> {
    convert_text_to_htxt_with_progress(reference, text_path, dest, &|_| {})
}

/// Rebuild an HTXT archive with progress callback
///
/// # Errors
/// Returns an error if reading, scanning, encoding, or writing fails.
pub fn convert_text_to_htxt_with_progress<P: AsRef<Path>>(
    reference: P,
    text_path: P,
    dest: P,
    progress: ConvertProgressCallback,
) -> Result<ImportSummary> {
    let reference = reference.as_ref();
    let text_path = text_path.as_ref();
    let dest = dest.as_ref();

    tracing::info!(
        "Importing TXT→HTXT: {:?} + {:?} → {:?}",
        reference,
        text_path,
        dest
    );

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        4,
        "Reading text file...",
    ));
    let content = read_text_file(text_path)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Parsing,
        2,
        4,
        "Scanning reference archive...",
    ));
    let data = read_file(reference)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        3,
        4,
        "Rebuilding text records...",
    ));
    let (bytes, summary) = rebuild_from_content(&data, &content).map_err(|e| match e {
        Error::RecordCountMismatch { .. } | Error::LengthOverflow { .. } => e,
        other => other.in_archive(reference),
    })?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        4,
        4,
        format!("Writing {} records...", summary.records),
    ));
    htxt::write_output(dest, &bytes)?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 4, 4));
    tracing::info!(
        "Imported {} records, archive length {} → {}",
        summary.records,
        summary.old_length,
        summary.new_length
    );
    Ok(summary)
}

/// Split text file content into unescaped record texts
pub fn parse_text_file(content: &str) -> Vec<String> {
    text::split_lines(content)
        .into_iter()
        .map(|line| text::unescape_newlines(line).into_owned())
        .collect()
}

/// Build new archive bytes from reference archive bytes and record texts
///
/// Hashes are taken from the reference by position. The preamble is copied
/// with only `archive_length` recomputed, and the tail is copied unchanged.
///
/// # Errors
/// Returns [`Error::RecordCountMismatch`] unless there is exactly one text
/// per reference record, or a scan error from the reference.
pub fn rebuild_htxt<S: AsRef<str>>(reference: &[u8], texts: &[S]) -> Result<Vec<u8>> {
    rebuild(reference, texts).map(|(bytes, _)| bytes)
}

fn rebuild_from_content(reference: &[u8], content: &str) -> Result<(Vec<u8>, ImportSummary)> {
    let mut texts = parse_text_file(content);

    // An archive whose last record is empty exports with a trailing newline
    // (or as an empty file if it is the only record). Splitting drops that
    // last empty line, so restore it when exactly one record is missing.
    let expected = htxt::parse_preamble(reference)?.record_count() as usize;
    if texts.len() + 1 == expected && (content.is_empty() || content.ends_with('\n')) {
        texts.push(String::new());
    }

    rebuild(reference, &texts)
}

fn rebuild<S: AsRef<str>>(reference: &[u8], texts: &[S]) -> Result<(Vec<u8>, ImportSummary)> {
    let skeleton = htxt::scan_htxt_bytes(reference)?;

    if texts.len() != skeleton.envelopes.len() {
        return Err(Error::RecordCountMismatch {
            expected: skeleton.envelopes.len(),
            found: texts.len(),
        });
    }

    let old_length = skeleton.preamble.archive_length();
    let new_length = htxt::recompute_archive_length(
        old_length,
        htxt::old_total(&skeleton.envelopes),
        htxt::new_total(texts),
    )?;
    tracing::debug!("archive_length {old_length} → {new_length}");

    let preamble = skeleton.preamble.with_archive_length(new_length);
    let mut out = Vec::with_capacity(reference.len());
    out.extend_from_slice(preamble.as_bytes());
    for (hash, text) in skeleton.hashes().zip(texts) {
        htxt::write_record(&mut out, hash, text.as_ref())?;
    }
    out.extend_from_slice(&skeleton.tail);

    Ok((
        out,
        ImportSummary {
            records: texts.len(),
            old_length,
            new_length,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::htxt::test_support::archive_bytes;
    use crate::formats::htxt::{ARCHIVE_LENGTH_OFFSET, parse_htxt_bytes};

    fn rebuild_text(reference: &[u8], content: &str) -> Result<Vec<u8>> {
        rebuild_from_content(reference, content).map(|(bytes, _)| bytes)
    }

    #[test]
    fn test_unedited_import_is_identical() {
        let data = archive_bytes(
            777,
            &[(0x11, "first"), (0x22, "multi\nline"), (0x33, "last")],
            b"\x00\x01keytable",
        );
        let content = crate::converter::htxt_to_text(&data).unwrap();
        assert_eq!(rebuild_text(&data, &content).unwrap(), data);
    }

    #[test]
    fn test_trailing_empty_record_roundtrips() {
        let data = archive_bytes(12, &[(0x1, "AB"), (0x2, "")], b"tail");
        let content = crate::converter::htxt_to_text(&data).unwrap();
        assert_eq!(content, "AB\n");
        assert_eq!(rebuild_text(&data, &content).unwrap(), data);
    }

    #[test]
    fn test_record_ending_in_carriage_return_roundtrips() {
        let data = archive_bytes(100, &[(1, "Press A\r"), (2, "next")], b"tail");
        let content = crate::converter::htxt_to_text(&data).unwrap();
        assert_eq!(content, "Press A\r\nnext");
        assert_eq!(rebuild_text(&data, &content).unwrap(), data);
    }

    #[test]
    fn test_single_empty_record_roundtrips() {
        let data = archive_bytes(3, &[(0x9, "")], &[]);
        assert_eq!(rebuild_text(&data, "").unwrap(), data);
    }

    #[test]
    fn test_escaped_newline_import() {
        let data = archive_bytes(100, &[(0x5, "x")], &[]);
        let out = rebuild_text(&data, "Hello\\nWorld").unwrap();
        let archive = parse_htxt_bytes(&out).unwrap();

        assert_eq!(archive.records[0].text, "Hello\nWorld");
        assert_eq!(archive.records[0].hash, 0x5);
        assert_eq!(&out[44..48], &12u32.to_le_bytes());
        // 2 old units out, 12 new units in
        assert_eq!(archive.preamble.archive_length(), 110);
    }

    #[test]
    fn test_longer_line_only_changes_length_and_record() {
        let tail = b"TAILDATA";
        let data = archive_bytes(500, &[(1, "one"), (2, "abc"), (3, "three")], tail);
        let out = rebuild_text(&data, "one\n0123456789\nthree").unwrap();

        let expected = archive_bytes(507, &[(1, "one"), (2, "0123456789"), (3, "three")], tail);
        assert_eq!(out, expected);

        // Everything outside the length field and the edited record is untouched
        assert_eq!(out[..ARCHIVE_LENGTH_OFFSET], data[..ARCHIVE_LENGTH_OFFSET]);
        assert_eq!(out[16..40], data[16..40]);
        assert_eq!(out[40..54], data[40..54]);
        assert_eq!(out[out.len() - tail.len()..], data[data.len() - tail.len()..]);
    }

    #[test]
    fn test_empty_text_against_empty_archive() {
        let data = archive_bytes(42, &[], b"only tail");
        assert_eq!(rebuild_text(&data, "").unwrap(), data);
    }

    #[test]
    fn test_too_few_lines() {
        let data = archive_bytes(0, &[(1, "a"), (2, "b"), (3, "c")], &[]);
        let err = rebuild_text(&data, "a").unwrap_err();
        assert!(matches!(
            err,
            Error::RecordCountMismatch {
                expected: 3,
                found: 1
            }
        ));
    }

    #[test]
    fn test_too_many_lines() {
        let data = archive_bytes(0, &[(1, "a")], &[]);
        let err = rebuild_text(&data, "a\nb\nc").unwrap_err();
        assert!(matches!(
            err,
            Error::RecordCountMismatch {
                expected: 1,
                found: 3
            }
        ));
    }

    #[test]
    fn test_missing_last_line_without_newline_is_rejected() {
        // Only a trailing newline stands in for a final empty record
        let data = archive_bytes(0, &[(1, "a"), (2, "b")], &[]);
        assert!(matches!(
            rebuild_text(&data, "a").unwrap_err(),
            Error::RecordCountMismatch { .. }
        ));
    }

    #[test]
    fn test_rebuild_htxt_keeps_hashes() {
        let data = archive_bytes(0, &[(0xDEAD, "a"), (0xBEEF, "b")], &[]);
        let out = rebuild_htxt(&data, &["changed", "texts here"]).unwrap();
        let archive = parse_htxt_bytes(&out).unwrap();
        let hashes: Vec<u32> = archive.records.iter().map(|r| r.hash).collect();
        assert_eq!(hashes, vec![0xDEAD, 0xBEEF]);
        assert_eq!(archive.preamble.record_count(), 2);
    }

    #[test]
    fn test_parse_text_file() {
        assert_eq!(
            parse_text_file("a\\nb\r\nc\r\n"),
            vec!["a\nb".to_string(), "c".to_string()]
        );
    }
}
