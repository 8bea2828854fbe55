//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! HTXT to plain-text export

use crate::converter::{ConvertPhase, ConvertProgress, ConvertProgressCallback};
use crate::error::{Result, read_file};
use crate::formats::htxt::{self, text};

use std::path::Path;

/// Export an HTXT archive to a UTF-8 text file, one line per record
///
/// Returns the number of exported records.
///
/// # Errors
/// Returns [`Error::CorruptArchive`](crate::Error::CorruptArchive) if the
/// archive cannot be decoded; no text file is written in that case.
pub fn convert_htxt_to_text<P: AsRef<Path>>(source: P, dest: P) -> Result<usize> {
    convert_htxt_to_text_with_progress(source, dest, &|_| {})
}

/// Export an HTXT archive to a UTF-8 text file with progress callback
///
/// # Errors
/// Returns an error if reading, decoding, or writing fails.
pub fn convert_htxt_to_text_with_progress<P: AsRef<Path>>(
    source: P,
    dest: P,
    progress: ConvertProgressCallback,
) -> Result<usize> {
    let source = source.as_ref();
    let dest = dest.as_ref();

    tracing::info!("Exporting HTXT→TXT: {:?} → {:?}", source, dest);

    progress(&ConvertProgress::with_file(
        ConvertPhase::ReadingSource,
        1,
        3,
        "Reading HTXT archive...",
    ));
    let data = read_file(source)?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::Converting,
        2,
        3,
        "Decoding text records...",
    ));
    let lines = export_lines(&data).map_err(|e| e.in_archive(source))?;

    progress(&ConvertProgress::with_file(
        ConvertPhase::WritingOutput,
        3,
        3,
        format!("Writing {} lines...", lines.len()),
    ));
    htxt::write_output(dest, text::join_lines(&lines).as_bytes())?;

    progress(&ConvertProgress::new(ConvertPhase::Complete, 3, 3));
    tracing::info!("Exported {} records", lines.len());
    Ok(lines.len())
}

/// Decode archive bytes into escaped text lines, dropping hashes
///
/// # Errors
/// Returns the decode error with the byte offset where it occurred.
pub fn export_lines(data: &[u8]) -> Result<Vec<String>> {
    let archive = htxt::parse_htxt_bytes(data)?;
    Ok(archive
        .records
        .iter()
        .map(|record| text::escape_newlines(&record.text).into_owned())
        .collect())
}

/// Decode archive bytes into the full text file content
///
/// # Errors
/// Returns the decode error with the byte offset where it occurred.
pub fn htxt_to_text(data: &[u8]) -> Result<String> {
    Ok(text::join_lines(&export_lines(data)?))
}
