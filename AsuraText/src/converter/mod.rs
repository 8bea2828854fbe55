//! Format conversion utilities
//!
//! This module handles conversions between the HTXT archive and its
//! plain-text projection:
//! - HTXT (binary) → TXT - one escaped line per record, for translators
//! - TXT + reference HTXT → HTXT - rebuild the archive around edited lines

pub mod htxt_text;

use std::borrow::Cow;

/// Phase of a conversion, reported through [`ConvertProgressCallback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertPhase {
    ReadingSource,
    Parsing,
    Converting,
    WritingOutput,
    Complete,
}

/// A progress update from a conversion.
#[derive(Debug, Clone)]
pub struct ConvertProgress {
    pub phase: ConvertPhase,
    pub current: usize,
    pub total: usize,
    pub message: Option<Cow<'static, str>>,
}

impl ConvertProgress {
    #[must_use]
    pub fn new(phase: ConvertPhase, current: usize, total: usize) -> Self {
        Self {
            phase,
            current,
            total,
            message: None,
        }
    }

    /// Progress update carrying a status message.
    #[must_use]
    pub fn with_file(
        phase: ConvertPhase,
        current: usize,
        total: usize,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            phase,
            current,
            total,
            message: Some(message.into()),
        }
    }
}

/// Progress callback type for conversion operations.
pub type ConvertProgressCallback<'a> = &'a dyn Fn(&ConvertProgress);

// HTXT/TXT conversion exports
pub use htxt_text::{
    ImportSummary, convert_htxt_to_text, convert_htxt_to_text_with_progress,
    convert_text_to_htxt, convert_text_to_htxt_with_progress, export_lines, htxt_to_text,
    parse_text_file, rebuild_htxt,
};
