//! Medscribe - command-line medical document extraction.

use clap::Parser;
use colored::Colorize;
use medscribe_cli::{output, pipeline, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> medscribe_cli::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Extract(args) => {
            // Credential comes first: a missing key fails before the input
            // file is touched and before any network call.
            dotenvy::dotenv().ok();
            let api_key = pipeline::require_api_key()?;

            let outcome = pipeline::run_extract(&args, &api_key).await?;

            println!(
                "  {} {}",
                "Saved to:".green(),
                outcome.output_path.display()
            );
            println!();
            println!("{}", output::format_summary(&outcome.record));
        }
    }

    Ok(())
}
