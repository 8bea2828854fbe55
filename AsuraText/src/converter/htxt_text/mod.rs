//! HTXT and plain-text localization conversions
//!
//! - Export: decode every record, escape embedded newlines, one line each
//! - Import: transplant the reference archive's hashes, header and tail
//!   around the edited lines

mod htxt_to_text;
mod text_to_htxt;

pub use htxt_to_text::{
    convert_htxt_to_text, convert_htxt_to_text_with_progress, export_lines, htxt_to_text,
};
pub use text_to_htxt::{
    ImportSummary, convert_text_to_htxt, convert_text_to_htxt_with_progress, parse_text_file,
    rebuild_htxt,
};
