//! File format handlers for Asura engine formats

pub mod htxt;

// Re-export main archive types
pub use htxt::{
    HtxtArchive, HtxtInfo, HtxtSkeleton, Preamble, RecordEnvelope, TextRecord, inspect_htxt,
    read_htxt, scan_htxt, write_htxt,
};
