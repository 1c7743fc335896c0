//! Error types for text acquisition

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring text from a document
#[derive(Debug, Error)]
pub enum ParserError {
    /// File extension is outside the supported set; raised before any I/O
    #[error("unsupported file format: '.{extension}' (supported formats: .pdf, .docx, .txt)")]
    UnsupportedFormat {
        /// Lowercased extension of the rejected file, empty if none
        extension: String,
    },

    /// Reading the input file failed
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The document converter could not turn the file into text
    #[error("failed to parse document '{path}': {source}")]
    Conversion {
        /// Path of the document that failed to convert
        path: PathBuf,
        /// Underlying converter failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
