//! Error types for the CLI application.

use medscribe_extractor::ExtractorError;
use medscribe_parser::ParserError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors. Each variant names the stage that failed.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error, reported before any processing starts
    #[error("configuration error: {0}")]
    Config(String),

    /// Input file missing or unreadable, checked before the pipeline runs
    #[error("input file not found or not readable: '{0}'")]
    InputFile(PathBuf),

    /// Text acquisition failed
    #[error("failed while acquiring text: {0}")]
    Parser(#[from] ParserError),

    /// Structured extraction failed
    #[error("failed while extracting medical information: {0}")]
    Extractor(#[from] ExtractorError),

    /// Writing the output record failed; no partial file is left behind
    #[error("failed while persisting record: {0}")]
    Persist(String),
}
