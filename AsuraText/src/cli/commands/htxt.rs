//! CLI commands for HTXT localization archives

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;

use crate::cli::progress::{print_convert_step, print_done};
use crate::converter::{
    ConvertProgress, convert_htxt_to_text_with_progress, convert_text_to_htxt_with_progress,
};
use crate::formats::htxt::inspect_htxt;

/// Export an archive to a text file
pub fn export(archive: &Path, text: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let progress = |p: &ConvertProgress| {
        if !quiet {
            print_convert_step(p);
        }
    };

    let count = convert_htxt_to_text_with_progress(archive, text, &progress)
        .with_context(|| format!("Failed to export {}", archive.display()))?;

    if !quiet {
        println!("Exported {} lines to {}", count, text.display());
        print_done(started.elapsed());
    }
    Ok(())
}

/// Import a text file against its original archive
pub fn import(reference: &Path, text: &Path, output: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    let progress = |p: &ConvertProgress| {
        if !quiet {
            print_convert_step(p);
        }
    };

    let summary = convert_text_to_htxt_with_progress(reference, text, output, &progress)
        .with_context(|| {
            format!(
                "Failed to import {} against {}",
                text.display(),
                reference.display()
            )
        })?;

    if !quiet {
        println!(
            "Wrote {} records to {} (archive length {} -> {})",
            summary.records,
            output.display(),
            summary.old_length,
            summary.new_length
        );
        print_done(started.elapsed());
    }
    Ok(())
}

/// Show archive statistics
pub fn info(archives: &[PathBuf]) -> anyhow::Result<()> {
    for path in archives {
        let info =
            inspect_htxt(path).with_context(|| format!("Failed to read {}", path.display()))?;

        println!("{}:", path.display());
        println!("  Magic:          {:?}", info.magic);
        println!("  Format tag:     {:?}", info.format_tag);
        println!("  Version:        {}", info.version);
        println!("  Archive length: {}", info.archive_length);
        println!("  Records:        {}", info.record_count);
        println!("  File size:      {} bytes", info.file_size);
        println!("  Tail size:      {} bytes", info.tail_size);
        println!("  Code units:     {}", info.total_code_units);
        if info.empty_records > 0 {
            println!("  Empty records:  {}", info.empty_records);
        }
        if let Some((index, units)) = info.longest {
            println!("  Longest:        line {} ({} code units)", index + 1, units);
        }
        println!();
    }

    Ok(())
}
