#![allow(non_snake_case)]
//! # AsuraText
//!
//! A pure-Rust library for the localization archives of Asura engine games
//! (Sniper Elite 3 and relatives).
//!
//! ## Supported Formats
//!
//! - **HTXT** - Binary string tables (`Asura   ` / `HTXT` header, hashed UTF-16 records)
//! - **TXT** - One escaped line per record, for translators
//!
//! ## Quick Start
//!
//! ### Exporting strings for translation
//!
//! ```no_run
//! use asuratext::converter::convert_htxt_to_text;
//!
//! let count = convert_htxt_to_text("strings.asr", "strings.txt")?;
//! println!("Exported {count} lines");
//! # Ok::<(), asuratext::Error>(())
//! ```
//!
//! ### Importing an edited text file
//!
//! ```no_run
//! use asuratext::converter::convert_text_to_htxt;
//!
//! // Hashes, header and trailing key data come from the original archive
//! let summary = convert_text_to_htxt("strings.asr", "strings.txt", "strings_new.asr")?;
//! println!("archive_length {} -> {}", summary.old_length, summary.new_length);
//! # Ok::<(), asuratext::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `asuratext` command-line binary

pub mod converter;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        ImportSummary, convert_htxt_to_text, convert_text_to_htxt, htxt_to_text, rebuild_htxt,
    };
    pub use crate::error::{Error, Result};
    pub use crate::formats::htxt::{
        HtxtArchive, HtxtInfo, HtxtSkeleton, Preamble, RecordEnvelope, TextRecord, inspect_htxt,
        parse_htxt_bytes, read_htxt, scan_htxt, write_htxt,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
