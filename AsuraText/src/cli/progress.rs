//! CLI progress display utilities
//!
//! Step indicators with emojis, matching the conversion phases reported by
//! the library.

use std::time::Duration;

use console::{Emoji, style};
use indicatif::HumanDuration;

use crate::converter::{ConvertPhase, ConvertProgress};

/// Magnifying glass - for reading/scanning operations
pub static LOOKING_GLASS: Emoji<'_, '_> = Emoji("🔍 ", "");
/// Floppy disk - for writing/saving operations
pub static DISK: Emoji<'_, '_> = Emoji("💾 ", "");
/// Gear - for processing/conversion operations
pub static GEAR: Emoji<'_, '_> = Emoji("⚙️  ", "");
/// Document - for file operations
pub static DOCUMENT: Emoji<'_, '_> = Emoji("📄 ", "");
/// Sparkles - for completion
pub static SPARKLE: Emoji<'_, '_> = Emoji("✨ ", "");

/// Print a step indicator: `[1/3] 📄 Message...`
pub fn print_step(current: usize, total: usize, emoji: Emoji, msg: &str) {
    println!(
        "{} {}{}",
        style(format!("[{current}/{total}]")).bold().dim(),
        emoji,
        msg
    );
}

/// Print completion message: `✨ Done in 2s`
pub fn print_done(elapsed: Duration) {
    println!("{} Done in {}", SPARKLE, HumanDuration(elapsed));
}

/// Print a conversion progress update as a step line.
///
/// The final `Complete` update is skipped; callers finish with [`print_done`].
pub fn print_convert_step(progress: &ConvertProgress) {
    let emoji = match progress.phase {
        ConvertPhase::ReadingSource => DOCUMENT,
        ConvertPhase::Parsing => LOOKING_GLASS,
        ConvertPhase::Converting => GEAR,
        ConvertPhase::WritingOutput => DISK,
        ConvertPhase::Complete => return,
    };
    print_step(
        progress.current,
        progress.total,
        emoji,
        progress.message.as_deref().unwrap_or_default(),
    );
}
