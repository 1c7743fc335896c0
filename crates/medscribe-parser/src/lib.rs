//! Medscribe Text Acquisition
//!
//! Turns a source document (PDF, DOCX, or plain text) into a single text
//! string suitable for prompting. The extension gate runs before any file
//! I/O; converter failures are wrapped as [`ParserError`] and never leak
//! library-specific error types.
//!
//! An empty or whitespace-only result is not an error at this layer; the
//! extraction stage may simply find nothing to extract.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod docx;
mod error;

pub use error::ParserError;

use std::fs;
use std::path::Path;
use tracing::debug;

/// File extensions the pipeline accepts, lowercased.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["pdf", "docx", "txt"];

/// Acquire the text content of a document.
///
/// Plain text is read directly (UTF-8, falling back to latin-1); PDF and
/// DOCX are converted to linear text. The same unmodified file always
/// yields identical text.
pub fn acquire_text(path: &Path) -> Result<String, ParserError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    // Extension gate comes first: no bytes of an unsupported file are read.
    match extension.as_str() {
        "txt" => read_plaintext(path),
        "pdf" => {
            debug!("converting PDF {}", path.display());
            pdf_extract::extract_text(path).map_err(|e| ParserError::Conversion {
                path: path.to_path_buf(),
                source: Box::new(e),
            })
        }
        "docx" => {
            debug!("converting DOCX {}", path.display());
            docx::convert(path)
        }
        _ => Err(ParserError::UnsupportedFormat { extension }),
    }
}

/// Read a plain-text file: UTF-8 first, latin-1 as the fallback.
///
/// latin-1 maps every byte, so the fallback cannot fail.
fn read_plaintext(path: &Path) -> Result<String, ParserError> {
    let bytes = fs::read(path).map_err(|e| ParserError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{} is not UTF-8, decoding as latin-1", path.display());
            Ok(encoding_rs::mem::decode_latin1(e.as_bytes()).into_owned())
        }
    }
}
