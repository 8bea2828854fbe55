//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! HTXT archive writing

use super::{HtxtArchive, TextRecord, stored_len_of};
use crate::error::{Error, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write an HTXT archive to disk
///
/// The file appears at `path` only once it is complete.
///
/// # Errors
/// Returns an error if encoding or file writing fails.
pub fn write_htxt<P: AsRef<Path>>(path: P, archive: &HtxtArchive) -> Result<()> {
    let bytes = htxt_to_bytes(archive)?;
    write_output(path, &bytes)
}

/// Encode an HTXT archive: preamble, records, tail
///
/// # Errors
/// Returns [`Error::LengthOverflow`] if a record is too long for its
/// 32-bit length field.
pub fn htxt_to_bytes(archive: &HtxtArchive) -> Result<Vec<u8>> {
    let records_size: usize = archive.records.iter().map(TextRecord::encoded_size).sum();
    let mut out = Vec::with_capacity(
        archive.preamble.as_bytes().len() + records_size + archive.tail.len(),
    );

    out.extend_from_slice(archive.preamble.as_bytes());
    for record in &archive.records {
        write_record(&mut out, record.hash, &record.text)?;
    }
    out.extend_from_slice(&archive.tail);

    Ok(out)
}

/// Encode one text record
///
/// # Errors
/// Returns an error if writing fails or the text is too long.
pub fn write_record<W: Write>(writer: &mut W, hash: u32, text: &str) -> Result<()> {
    let stored_len = stored_len_of(text)?;

    // 4 - hash
    writer.write_u32::<LittleEndian>(hash)?;
    // 4 - code units including terminator
    writer.write_u32::<LittleEndian>(stored_len)?;
    // 2 * (stored_len - 1) - UTF-16LE payload
    for unit in text.encode_utf16() {
        writer.write_u16::<LittleEndian>(unit)?;
    }
    // 2 - null terminator
    writer.write_u16::<LittleEndian>(0)?;

    Ok(())
}

/// Write bytes to `path` through a temporary file in the same directory
///
/// On any failure the temporary file is removed and `path` is left as it was.
///
/// # Errors
/// Returns [`Error::Io`] if the temporary file cannot be created or written,
/// [`Error::Persist`] if it cannot be renamed into place.
pub fn write_output<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = tempfile::NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(temp);
    writer.write_all(bytes)?;
    let temp = writer.into_inner().map_err(|e| Error::Io(e.into_error()))?;
    temp.as_file().sync_all()?;

    temp.persist(path).map_err(|e| Error::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    tracing::debug!("Wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{archive_bytes, preamble, record_bytes};
    use super::super::parse_htxt_bytes;
    use super::*;

    #[test]
    fn test_write_record_layout() {
        let mut out = Vec::new();
        write_record(&mut out, 0x1, "AB").unwrap();
        assert_eq!(
            out,
            vec![
                0x01, 0x00, 0x00, 0x00, // hash
                0x03, 0x00, 0x00, 0x00, // stored_len
                0x41, 0x00, 0x42, 0x00, // "AB"
                0x00, 0x00, // terminator
            ]
        );
    }

    #[test]
    fn test_empty_record_has_stored_len_one() {
        let mut out = Vec::new();
        write_record(&mut out, 0x2, "").unwrap();
        assert_eq!(out, record_bytes(0x2, ""));
        assert_eq!(&out[4..8], &1u32.to_le_bytes());
    }

    #[test]
    fn test_newline_record() {
        let mut out = Vec::new();
        write_record(&mut out, 9, "Hello\nWorld").unwrap();
        assert_eq!(&out[4..8], &12u32.to_le_bytes());
        assert_eq!(out.len(), 8 + 22 + 2);
    }

    #[test]
    fn test_decoded_archive_reencodes_identically() {
        let data = archive_bytes(
            321,
            &[(0xAAAA, "first"), (0xBBBB, ""), (0xCCCC, "line\nbreak \u{1F600}")],
            b"\x01\x02tail",
        );
        let archive = parse_htxt_bytes(&data).unwrap();
        assert_eq!(htxt_to_bytes(&archive).unwrap(), data);
    }

    #[test]
    fn test_header_only_archive() {
        let archive = HtxtArchive {
            preamble: preamble(16, 0),
            records: Vec::new(),
            tail: vec![7; 16],
        };
        let bytes = htxt_to_bytes(&archive).unwrap();
        assert_eq!(bytes.len(), 56);
        assert_eq!(bytes[40..], [7u8; 16]);
    }

    #[test]
    fn test_write_htxt_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.asr");
        let archive = HtxtArchive {
            preamble: preamble(64, 2),
            records: vec![TextRecord::new(0x10, "Reload"), TextRecord::new(0x20, "")],
            tail: b"keys".to_vec(),
        };

        write_htxt(&path, &archive).unwrap();
        let read = super::super::read_htxt(&path).unwrap();

        assert_eq!(read, archive);
        assert_eq!(read.len(), 2);
        assert!(!read.is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), htxt_to_bytes(&archive).unwrap());
    }

    #[test]
    fn test_write_htxt_empty_archive() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.asr");
        let archive = HtxtArchive {
            preamble: preamble(0, 0),
            records: Vec::new(),
            tail: Vec::new(),
        };

        write_htxt(&path, &archive).unwrap();
        let read = super::super::read_htxt(&path).unwrap();
        assert!(read.is_empty());
        assert_eq!(read.len(), 0);
    }

    #[test]
    fn test_write_output_replaces_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.bin");
        std::fs::write(&path, b"old contents").unwrap();

        write_output(&path, b"new").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"new");
        // Only the target remains, no stray temp files
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
