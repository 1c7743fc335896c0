//! Medscribe CLI - Extract structured medical information from documents.
//!
//! The binary wires the pipeline together: credential check, then a
//! strictly linear Acquire → Extract → Persist run, with each stage's
//! typed failure surfaced as a [`CliError`] naming the failing stage.

pub mod cli;
pub mod error;
pub mod output;
pub mod pipeline;

pub use cli::{Cli, Command, ExtractArgs};
pub use error::{CliError, Result};
