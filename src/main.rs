//! outdates - npm outdated dependency reporter
//!
//! Reads package.json, looks up the latest release of every dependency and
//! highlights those whose latest release is outside the declared range.

use anyhow::Context;
use clap::Parser;
use outdates::cli::CliArgs;
use outdates::config::RunConfig;
use outdates::orchestrator::{self, RunOutcome};
use std::io::{self, Write};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Run the main logic and handle errors
    match run(args).await {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<ExitCode> {
    let config = RunConfig::from_cli(&args)?;

    let mut stdout = io::stdout().lock();
    let outcome = orchestrator::run(&config, &mut stdout)
        .await
        .context("dependency check aborted")?;
    stdout.flush()?;

    match outcome {
        RunOutcome::ManifestNotFound => Ok(ExitCode::FAILURE),
        RunOutcome::Completed(reports) => {
            if config.verbose {
                let total: usize = reports.iter().map(|r| r.results.len()).sum();
                let outdated: usize = reports.iter().map(|r| r.outdated_count()).sum();
                eprintln!("Checked {} dependencies, {} flagged", total, outdated);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
