//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! HTXT archive reading and parsing

use super::{
    HtxtArchive, HtxtSkeleton, PREAMBLE_SIZE, Preamble, RecordEnvelope, TERMINATOR_SIZE,
    TextRecord,
};
use crate::error::{Error, Result, read_file};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Cursor;
use std::path::Path;

/// Read and fully decode an HTXT archive from disk
///
/// # Errors
///
/// Returns [`Error::ReadFile`] if the file cannot be read.
/// Returns [`Error::CorruptArchive`] if decoding fails.
///
/// [`Error::ReadFile`]: crate::Error::ReadFile
/// [`Error::CorruptArchive`]: crate::Error::CorruptArchive
pub fn read_htxt<P: AsRef<Path>>(path: P) -> Result<HtxtArchive> {
    let path = path.as_ref();
    let data = read_file(path)?;
    parse_htxt_bytes(&data).map_err(|e| e.in_archive(path))
}

/// Read an HTXT archive from disk, keeping only record envelopes
///
/// # Errors
///
/// Same as [`read_htxt`].
pub fn scan_htxt<P: AsRef<Path>>(path: P) -> Result<HtxtSkeleton> {
    let path = path.as_ref();
    let data = read_file(path)?;
    scan_htxt_bytes(&data).map_err(|e| e.in_archive(path))
}

/// Decode an HTXT archive from bytes
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`], [`Error::MalformedRecord`] or
/// [`Error::Utf16`] with the byte offset of the failure.
pub fn parse_htxt_bytes(data: &[u8]) -> Result<HtxtArchive> {
    let preamble = parse_preamble(data)?;
    let mut cursor = Cursor::new(data);
    cursor.set_position(PREAMBLE_SIZE as u64);

    let count = preamble.record_count() as usize;
    // Every record is at least 10 bytes; don't trust the count for preallocation
    let mut records = Vec::with_capacity(count.min(data.len() / 10));
    for _ in 0..count {
        records.push(read_record(&mut cursor)?);
    }

    let tail = remaining(&cursor).to_vec();
    tracing::debug!(
        "Decoded {} records, {} tail bytes",
        records.len(),
        tail.len()
    );

    Ok(HtxtArchive {
        preamble,
        records,
        tail,
    })
}

/// Scan an HTXT archive from bytes without decoding record text
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] or [`Error::MalformedRecord`] with the
/// byte offset of the failure.
pub fn scan_htxt_bytes(data: &[u8]) -> Result<HtxtSkeleton> {
    let preamble = parse_preamble(data)?;
    let mut cursor = Cursor::new(data);
    cursor.set_position(PREAMBLE_SIZE as u64);

    let count = preamble.record_count() as usize;
    let mut envelopes = Vec::with_capacity(count.min(data.len() / 10));
    for _ in 0..count {
        envelopes.push(read_envelope(&mut cursor)?);
    }

    Ok(HtxtSkeleton {
        preamble,
        envelopes,
        tail: remaining(&cursor).to_vec(),
    })
}

/// Parse the fixed 40-byte header
///
/// # Errors
///
/// Returns [`Error::TruncatedInput`] if `data` is shorter than the header.
pub fn parse_preamble(data: &[u8]) -> Result<Preamble> {
    let header = data.get(..PREAMBLE_SIZE).ok_or(Error::TruncatedInput {
        offset: 0,
        needed: PREAMBLE_SIZE as u64,
        available: data.len() as u64,
    })?;

    let mut bytes = [0u8; PREAMBLE_SIZE];
    bytes.copy_from_slice(header);
    Ok(Preamble::from_bytes(bytes))
}

/// Decode one text record at the cursor
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] for a zero `stored_len`,
/// [`Error::Utf16`] for an invalid payload, and [`Error::TruncatedInput`]
/// when the record runs past the end of the data.
pub fn read_record(cursor: &mut Cursor<&[u8]>) -> Result<TextRecord> {
    let envelope = read_prefix(cursor)?;
    let payload_offset = cursor.position();
    let payload = take(cursor, u64::from(envelope.code_units()) * 2)?;

    let units: Vec<u16> = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let text = String::from_utf16(&units).map_err(|_| Error::Utf16 {
        offset: payload_offset,
    })?;

    let terminator_offset = cursor.position();
    let terminator = take(cursor, TERMINATOR_SIZE as u64)?;
    if terminator.iter().any(|&b| b != 0) {
        tracing::warn!(
            "Record {:#010x} at offset {}: non-zero terminator {:02x?} at offset {}",
            envelope.hash,
            envelope.offset,
            terminator,
            terminator_offset
        );
    }

    Ok(TextRecord {
        hash: envelope.hash,
        text,
    })
}

/// Read a record's hash and length, then skip its payload and terminator
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] for a zero `stored_len` and
/// [`Error::TruncatedInput`] when the record runs past the end of the data.
pub fn read_envelope(cursor: &mut Cursor<&[u8]>) -> Result<RecordEnvelope> {
    let envelope = read_prefix(cursor)?;
    take(
        cursor,
        u64::from(envelope.code_units()) * 2 + TERMINATOR_SIZE as u64,
    )?;
    Ok(envelope)
}

/// Hash and `stored_len`, with the length checked for underflow.
fn read_prefix(cursor: &mut Cursor<&[u8]>) -> Result<RecordEnvelope> {
    let offset = cursor.position();
    let hash = read_u32(cursor)?;
    let stored_len = read_u32(cursor)?;

    if stored_len == 0 {
        return Err(Error::MalformedRecord {
            offset,
            reason: "stored length is 0 (must count the terminator)".to_string(),
        });
    }

    Ok(RecordEnvelope {
        hash,
        stored_len,
        offset,
    })
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32> {
    let offset = cursor.position();
    let available = remaining(cursor).len() as u64;
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| Error::TruncatedInput {
            offset,
            needed: 4,
            available,
        })
}

/// Borrow the next `len` bytes and advance past them.
fn take<'a>(cursor: &mut Cursor<&'a [u8]>, len: u64) -> Result<&'a [u8]> {
    let offset = cursor.position();
    let rest: &'a [u8] = remaining(cursor);
    let truncated = || Error::TruncatedInput {
        offset,
        needed: len,
        available: rest.len() as u64,
    };

    let n = usize::try_from(len).map_err(|_| truncated())?;
    let bytes = rest.get(..n).ok_or_else(truncated)?;
    cursor.set_position(offset + len);
    Ok(bytes)
}

fn remaining<'a>(cursor: &Cursor<&'a [u8]>) -> &'a [u8] {
    let data: &'a [u8] = *cursor.get_ref();
    let pos = usize::try_from(cursor.position()).unwrap_or(usize::MAX);
    data.get(pos..).unwrap_or_default()
}
