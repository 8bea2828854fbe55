//! `archive_length` recomputation
//!
//! The header's length field is only ever adjusted, never interpreted: the
//! stored lengths of the replaced records are taken out and the stored
//! lengths of the new ones added, both counted in UTF-16 code units.

use super::{RecordEnvelope, text};
use crate::error::{Error, Result};

/// Sum of `stored_len` over the records being replaced.
pub fn old_total(envelopes: &[RecordEnvelope]) -> u64 {
    envelopes.iter().map(|e| u64::from(e.stored_len)).sum()
}

/// Sum of `stored_len` (code units + terminator) over the new texts.
pub fn new_total<S: AsRef<str>>(texts: &[S]) -> u64 {
    texts
        .iter()
        .map(|t| text::code_units(t.as_ref()) as u64 + 1)
        .sum()
}

/// `initial - old_total + new_total`, checked against the 32-bit field.
///
/// # Errors
///
/// Returns [`Error::LengthOverflow`] if the result is negative or above
/// `u32::MAX`.
pub fn recompute_archive_length(initial: u32, old_total: u64, new_total: u64) -> Result<u32> {
    let value = i128::from(initial) - i128::from(old_total) + i128::from(new_total);
    u32::try_from(value).map_err(|_| Error::LengthOverflow {
        value: i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX }),
    })
}
