use clap::Subcommand;
use std::path::PathBuf;

pub mod execute;
pub mod htxt;

#[derive(Subcommand)]
pub enum Commands {
    /// Export an HTXT archive to a text file (one line per string)
    Export {
        /// Source HTXT archive
        archive: PathBuf,

        /// Output text file
        text: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rebuild an HTXT archive from an edited text file
    Import {
        /// Original HTXT archive (hashes, header and tail are taken from it)
        reference: PathBuf,

        /// Edited text file
        text: PathBuf,

        /// Output HTXT archive
        output: PathBuf,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Show header fields and record statistics
    Info {
        /// HTXT archive(s)
        #[arg(required = true)]
        archives: Vec<PathBuf>,
    },
}
