//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Medscribe - extract structured medical information from documents.
#[derive(Debug, Parser)]
#[command(name = "medscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract medical information from a document
    Extract(ExtractArgs),
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Path to the document to process (PDF, DOCX, or TXT)
    pub file_path: PathBuf,

    /// Directory to save extracted JSON
    #[arg(short = 'o', long, default_value = "output")]
    pub output_dir: PathBuf,

    /// Model to use for extraction
    #[arg(long, env = "MEDSCRIBE_MODEL")]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_extract_defaults() {
        let cli = Cli::parse_from(["medscribe", "extract", "note.txt"]);
        let Command::Extract(args) = cli.command;
        assert_eq!(args.file_path, PathBuf::from("note.txt"));
        assert_eq!(args.output_dir, PathBuf::from("output"));
        assert!(args.model.is_none());
    }

    #[test]
    fn test_extract_with_options() {
        let cli = Cli::parse_from([
            "medscribe", "extract", "scan.pdf", "-o", "records", "--model", "claude-opus-4-20250514",
        ]);
        let Command::Extract(args) = cli.command;
        assert_eq!(args.output_dir, PathBuf::from("records"));
        assert_eq!(args.model.as_deref(), Some("claude-opus-4-20250514"));
    }
}
