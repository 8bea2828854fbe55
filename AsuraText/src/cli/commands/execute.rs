//! Command execution implementations

use super::Commands;
use super::htxt;

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Export {
                archive,
                text,
                quiet,
            } => htxt::export(archive, text, *quiet),
            Commands::Import {
                reference,
                text,
                output,
                quiet,
            } => htxt::import(reference, text, output, *quiet),
            Commands::Info { archives } => htxt::info(archives),
        }
    }
}
