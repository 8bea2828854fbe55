//! SPDX-FileCopyrightText: 2026 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT
//!
//! HTXT localization archive format
//!
//! Binary string table used by Asura engine games (Sniper Elite 3 and
//! relatives). The archive is a fixed 40-byte preamble, `record_count` text
//! records, and an opaque tail holding the game's key tables.
//!
//! | Offset | Size | Field            |
//! |--------|------|------------------|
//! | 0      | 8    | magic (`Asura   `) |
//! | 8      | 4    | format tag (`HTXT`) |
//! | 12     | 4    | `archive_length` |
//! | 16     | 8    | version          |
//! | 24     | 4    | `record_count`   |
//! | 28     | 12   | reserved         |
//! | 40     | ...  | records          |
//! | ...    | ...  | tail             |
//!
//! Each record is `hash: u32`, `stored_len: u32` (UTF-16 code units including
//! the terminator), `stored_len - 1` UTF-16LE code units, and a 2-byte
//! `0x0000` terminator. All integers are little-endian.

mod info;
mod length;
mod reader;
pub mod text;
mod writer;

pub use info::{HtxtInfo, inspect_htxt};
pub use length::{new_total, old_total, recompute_archive_length};
pub use reader::{
    parse_htxt_bytes, parse_preamble, read_envelope, read_htxt, read_record, scan_htxt,
    scan_htxt_bytes,
};
pub use writer::{htxt_to_bytes, write_htxt, write_output, write_record};

use crate::error::{Error, Result};

/// Size of the fixed header in bytes
pub const PREAMBLE_SIZE: usize = 40;

/// Offset of the `archive_length` field
pub const ARCHIVE_LENGTH_OFFSET: usize = 12;

/// Offset of the `record_count` field
pub const RECORD_COUNT_OFFSET: usize = 24;

/// Size of the per-record hash + `stored_len` prefix
pub const RECORD_PREFIX_SIZE: usize = 8;

/// Size of the UTF-16 null terminator after every payload
pub const TERMINATOR_SIZE: usize = 2;

/// The fixed 40-byte archive header, kept verbatim.
///
/// Everything except `archive_length` is copied through untouched on import,
/// so the bytes are stored as-is and fields are read on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preamble {
    bytes: [u8; PREAMBLE_SIZE],
}

impl Preamble {
    /// Wrap raw header bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; PREAMBLE_SIZE]) -> Self {
        Self { bytes }
    }

    /// The raw header bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; PREAMBLE_SIZE] {
        &self.bytes
    }

    /// 8-byte magic (`Asura   ` in shipped files).
    #[must_use]
    pub fn magic(&self) -> [u8; 8] {
        let mut magic = [0u8; 8];
        magic.copy_from_slice(&self.bytes[0..8]);
        magic
    }

    /// 4-byte format tag (`HTXT` in shipped files).
    #[must_use]
    pub fn format_tag(&self) -> [u8; 4] {
        let mut tag = [0u8; 4];
        tag.copy_from_slice(&self.bytes[8..12]);
        tag
    }

    /// The archive length accumulator at offset 12.
    #[must_use]
    pub fn archive_length(&self) -> u32 {
        self.read_u32(ARCHIVE_LENGTH_OFFSET)
    }

    /// 8-byte version field at offset 16.
    #[must_use]
    pub fn version(&self) -> u64 {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(&self.bytes[16..24]);
        u64::from_le_bytes(raw)
    }

    /// Number of text records.
    #[must_use]
    pub fn record_count(&self) -> u32 {
        self.read_u32(RECORD_COUNT_OFFSET)
    }

    /// Copy of this header with only the `archive_length` field replaced.
    #[must_use]
    pub fn with_archive_length(&self, archive_length: u32) -> Self {
        let mut bytes = self.bytes;
        bytes[ARCHIVE_LENGTH_OFFSET..ARCHIVE_LENGTH_OFFSET + 4]
            .copy_from_slice(&archive_length.to_le_bytes());
        Self { bytes }
    }

    fn read_u32(&self, offset: usize) -> u32 {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[offset..offset + 4]);
        u32::from_le_bytes(raw)
    }
}

/// A single decoded text record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    /// Opaque identifier, passed through unchanged
    pub hash: u32,
    /// The localized text, newlines literal
    pub text: String,
}

impl TextRecord {
    pub fn new(hash: u32, text: impl Into<String>) -> Self {
        Self {
            hash,
            text: text.into(),
        }
    }

    /// On-disk length field: UTF-16 code units plus the terminator.
    pub fn stored_len(&self) -> Result<u32> {
        stored_len_of(&self.text)
    }

    /// Total on-disk size of the record in bytes.
    #[must_use]
    pub fn encoded_size(&self) -> usize {
        RECORD_PREFIX_SIZE + text::code_units(&self.text) * 2 + TERMINATOR_SIZE
    }
}

/// On-disk span of a record, read without decoding its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordEnvelope {
    pub hash: u32,
    /// Code units including the terminator; never zero
    pub stored_len: u32,
    /// Byte offset of the record start
    pub offset: u64,
}

impl RecordEnvelope {
    /// Number of UTF-16 code units in the payload.
    #[must_use]
    pub fn code_units(&self) -> u32 {
        self.stored_len.saturating_sub(1)
    }

    /// Total on-disk size of the record in bytes.
    #[must_use]
    pub fn encoded_size(&self) -> u64 {
        (RECORD_PREFIX_SIZE + TERMINATOR_SIZE) as u64 + u64::from(self.code_units()) * 2
    }
}

/// A fully decoded archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtxtArchive {
    pub preamble: Preamble,
    pub records: Vec<TextRecord>,
    /// Bytes after the last record, opaque
    pub tail: Vec<u8>,
}

impl HtxtArchive {
    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the archive has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// An archive with record envelopes only, as scanned for import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtxtSkeleton {
    pub preamble: Preamble,
    pub envelopes: Vec<RecordEnvelope>,
    pub tail: Vec<u8>,
}

impl HtxtSkeleton {
    /// Record hashes in on-disk order.
    pub fn hashes(&self) -> impl Iterator<Item = u32> + '_ {
        self.envelopes.iter().map(|e| e.hash)
    }
}

/// `stored_len` for a string, checked against the 32-bit field.
pub(crate) fn stored_len_of(text: &str) -> Result<u32> {
    let units = text::code_units(text) as u64 + 1;
    u32::try_from(units).map_err(|_| Error::LengthOverflow {
        value: i64::try_from(units).unwrap_or(i64::MAX),
    })
}
