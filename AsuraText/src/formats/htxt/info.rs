//! HTXT archive summary for display

use super::{HtxtArchive, read_htxt, text};
use crate::error::Result;
use std::path::Path;

/// Header fields and record statistics of one archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtxtInfo {
    pub magic: String,
    pub format_tag: String,
    pub version: u64,
    pub archive_length: u32,
    pub record_count: u32,
    pub file_size: u64,
    pub tail_size: usize,
    /// UTF-16 code units across all records, terminators excluded
    pub total_code_units: u64,
    pub empty_records: usize,
    /// Index and code unit count of the longest record
    pub longest: Option<(usize, usize)>,
}

/// Decode an archive and summarize it
///
/// # Errors
/// Returns an error if the archive cannot be read or decoded.
pub fn inspect_htxt<P: AsRef<Path>>(path: P) -> Result<HtxtInfo> {
    let archive = read_htxt(&path)?;
    let file_size = std::fs::metadata(&path)?.len();
    Ok(HtxtInfo::from_archive(&archive, file_size))
}

impl HtxtInfo {
    /// Summarize an already decoded archive.
    #[must_use]
    pub fn from_archive(archive: &HtxtArchive, file_size: u64) -> Self {
        let header = &archive.preamble;
        let lengths: Vec<usize> = archive
            .records
            .iter()
            .map(|r| text::code_units(&r.text))
            .collect();

        let longest = lengths
            .iter()
            .copied()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.cmp(b).then(ib.cmp(ia)));

        Self {
            magic: String::from_utf8_lossy(&header.magic()).into_owned(),
            format_tag: String::from_utf8_lossy(&header.format_tag()).into_owned(),
            version: header.version(),
            archive_length: header.archive_length(),
            record_count: header.record_count(),
            file_size,
            tail_size: archive.tail.len(),
            total_code_units: lengths.iter().map(|&n| n as u64).sum(),
            empty_records: lengths.iter().filter(|&&n| n == 0).count(),
            longest,
        }
    }
}
