//! Pipeline orchestration: Acquire → Extract → Persist.
//!
//! The pipeline is strictly linear and fails fast: any stage's failure
//! maps to a stage-tagged [`CliError`] and nothing further runs. No
//! retries, no partial output files.

use crate::cli::ExtractArgs;
use crate::error::{CliError, Result};
use chrono::{DateTime, Local};
use colored::Colorize;
use medscribe_domain::MedicalRecord;
use medscribe_extractor::{Extractor, ExtractorConfig};
use medscribe_llm::ClaudeProvider;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a successful pipeline run.
#[derive(Debug)]
pub struct PipelineOutcome {
    /// The extracted, validated record
    pub record: MedicalRecord,
    /// Where the record was written
    pub output_path: PathBuf,
}

/// Look up the extraction credential.
///
/// Called before any file is touched; a missing or empty key is a fatal
/// configuration error and no network call is ever attempted.
pub fn require_api_key() -> Result<String> {
    std::env::var("ANTHROPIC_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            CliError::Config(
                "ANTHROPIC_API_KEY not found. Set it in a .env file or the environment."
                    .to_string(),
            )
        })
}

/// Run the full extract pipeline for one document.
pub async fn run_extract(args: &ExtractArgs, api_key: &str) -> Result<PipelineOutcome> {
    if !args.file_path.is_file() {
        return Err(CliError::InputFile(args.file_path.clone()));
    }

    let source_file = args
        .file_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!("Processing: {}", source_file.bold());

    // Stage: acquiring
    println!("  Parsing document...");
    let text = medscribe_parser::acquire_text(&args.file_path)?;
    println!("  Extracted {} characters", text.len());

    // Stage: extracting
    println!("  Extracting medical information...");
    let mut config = ExtractorConfig::default();
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    config
        .validate()
        .map_err(CliError::Config)?;

    let provider =
        ClaudeProvider::new(api_key, &config.model).with_timeout(config.request_timeout());
    let extractor = Extractor::new(provider, config);
    let record = extractor.extract(&text, &source_file).await?;

    // Stage: persisting
    let output_path = persist_record(&record, &args.output_dir, &args.file_path)?;
    info!("record written to {}", output_path.display());

    Ok(PipelineOutcome {
        record,
        output_path,
    })
}

/// Output filename: `{source-file-stem}_{YYYYMMDD_HHMMSS}.json`.
pub fn output_filename(source: &Path, timestamp: DateTime<Local>) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}_{}.json", stem, timestamp.format("%Y%m%d_%H%M%S"))
}

/// Serialize the record and write it in one step.
///
/// Serialization happens fully in memory before the file is created, so a
/// failure here never leaves a partial output file behind.
fn persist_record(
    record: &MedicalRecord,
    output_dir: &Path,
    source: &Path,
) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| CliError::Persist(e.to_string()))?;

    fs::create_dir_all(output_dir).map_err(|e| {
        CliError::Persist(format!(
            "could not create output directory '{}': {}",
            output_dir.display(),
            e
        ))
    })?;

    let output_path = output_dir.join(output_filename(source, Local::now()));
    fs::write(&output_path, json).map_err(|e| {
        CliError::Persist(format!(
            "could not write '{}': {}",
            output_path.display(),
            e
        ))
    })?;

    Ok(output_path)
}
