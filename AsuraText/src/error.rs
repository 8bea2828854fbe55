//! Error types for `AsuraText`

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The error type for `AsuraText` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An input file could not be read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The finished output could not be moved from its temporary file into place.
    #[error("failed to write {path}: {source}")]
    Persist {
        /// The destination path.
        path: PathBuf,
        /// The underlying rename error.
        #[source]
        source: std::io::Error,
    },

    // ==================== HTXT Format Errors ====================
    /// A text record is structurally impossible.
    #[error("malformed record at offset {offset}: {reason}")]
    MalformedRecord {
        /// Byte offset of the record start.
        offset: u64,
        /// What is wrong with it.
        reason: String,
    },

    /// A record payload is not valid UTF-16LE (e.g. an unpaired surrogate).
    #[error("invalid UTF-16 text at offset {offset}")]
    Utf16 {
        /// Byte offset of the payload start.
        offset: u64,
    },

    /// A declared length runs past the end of the data.
    #[error("truncated input at offset {offset}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        /// Byte offset where the read started.
        offset: u64,
        /// Number of bytes the read required.
        needed: u64,
        /// Number of bytes left in the input.
        available: u64,
    },

    /// The text file does not have one line per archive record.
    #[error("record count mismatch: archive has {expected} records, text file has {found} lines")]
    RecordCountMismatch {
        /// `record_count` from the reference archive.
        expected: usize,
        /// Number of lines in the text file.
        found: usize,
    },

    /// A recomputed length does not fit the 32-bit on-disk field.
    #[error("length {value} does not fit in a 32-bit field")]
    LengthOverflow {
        /// The out-of-range value.
        value: i64,
    },

    /// Decoding an archive file failed.
    #[error("corrupt archive {path} at offset {offset}: {source}")]
    CorruptArchive {
        /// The archive that failed to decode.
        path: PathBuf,
        /// Byte offset where decoding failed.
        offset: u64,
        /// The decode failure.
        #[source]
        source: Box<Error>,
    },

    // ==================== Parsing Errors ====================
    /// A text file is not valid UTF-8.
    #[error("{path} is not valid UTF-8: {source}")]
    Utf8 {
        /// The offending text file.
        path: PathBuf,
        /// The conversion error.
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl Error {
    /// Byte offset of a decode failure, if the error carries one.
    #[must_use]
    pub fn offset(&self) -> Option<u64> {
        match self {
            Error::MalformedRecord { offset, .. }
            | Error::Utf16 { offset }
            | Error::TruncatedInput { offset, .. }
            | Error::CorruptArchive { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    /// Attach the archive path to a decode failure.
    ///
    /// IO errors pass through unchanged; they already say what went wrong.
    pub(crate) fn in_archive(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Error::Io(_) | Error::ReadFile { .. } | Error::CorruptArchive { .. } => self,
            other => Error::CorruptArchive {
                path: path.into(),
                offset: other.offset().unwrap_or(0),
                source: Box::new(other),
            },
        }
    }
}

/// Read a whole input file, naming it in the error.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a whole UTF-8 text file, naming it in the error.
pub(crate) fn read_text_file(path: &Path) -> Result<String> {
    String::from_utf8(read_file(path)?).map_err(|source| Error::Utf8 {
        path: path.to_path_buf(),
        source,
    })
}

/// A specialized Result type for `AsuraText` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_archive_keeps_offset() {
        let err = Error::TruncatedInput {
            offset: 48,
            needed: 10,
            available: 2,
        }
        .in_archive("strings.asr");

        assert_eq!(err.offset(), Some(48));
        assert!(matches!(err, Error::CorruptArchive { .. }));
        assert!(err.to_string().contains("strings.asr"));
    }

    #[test]
    fn test_in_archive_passes_io_through() {
        let err = Error::Io(std::io::ErrorKind::NotFound.into()).in_archive("missing.asr");
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_read_file_names_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = read_file(&path).unwrap_err();
        match &err {
            Error::ReadFile { path: p, source } => {
                assert_eq!(p, &path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_text_file_names_invalid_utf8_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("strings.txt");
        std::fs::write(&path, [0x41, 0xFF]).unwrap();

        let err = read_text_file(&path).unwrap_err();
        assert!(matches!(&err, Error::Utf8 { path: p, .. } if p == &path));
        assert!(err.to_string().contains("strings.txt"));
    }
}
