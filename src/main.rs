//! # Waiting Period
//!
//! Tracks how far behind Transportstyrelsen is on vehicle import
//! applications. Each run reads the date of the cases currently being
//! evaluated from the agency's import page, measures how many weeks ago
//! that was, and appends the result to a CSV log.
//!
//! ## Usage
//!
//! ```sh
//! waiting_period                 # append to ./transportstyrelsen_data.csv
//! RUST_LOG=debug waiting_period  # with verbose logs on stderr
//! ```
//!
//! ## Pipeline
//!
//! 1. **Fetching**: one GET with a short timeout
//! 2. **Extraction**: day, Swedish month name and year from the alert block
//! 3. **Computation**: whole days since that date, in weeks
//! 4. **Output**: one row appended to the CSV log
//!
//! ## Exit codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Row written |
//! | 64 | Page content not as expected |
//! | 69 | Page could not be fetched |
//! | 74 | Value computed but the CSV write failed |
//!
//! Scheduling and retries are left to whatever invokes the binary.

use chrono::Utc;
use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod api;
mod cli;
mod error;
mod models;
mod outputs;
mod pipeline;
mod scrapers;
mod utils;

use api::HttpSource;
use cli::Cli;
use pipeline::{Outcome, RunConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = RunConfig::from(args);
    let now = Utc::now();

    let source = match HttpSource::new(config.timeout) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Failed to build HTTP client");
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let code = match pipeline::run(&source, &config, now).await {
        Ok(outcome) => {
            let result = outcome.result();
            match &outcome {
                Outcome::Recorded(_) => println!(
                    "Written to disk: {} ({}, {} weeks)",
                    config.csv_path.display(),
                    result.case_date,
                    utils::format_weeks(result.processing_time_weeks)
                ),
                Outcome::NotRecorded { error, .. } => eprintln!("Error writing to CSV: {error}"),
            }
            outcome.exit_code()
        }
        Err(e) => {
            error!(error = %e, code = e.exit_code(), "Run aborted");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    let elapsed = start_time.elapsed();
    info!(?elapsed, code, "Execution complete");
    ExitCode::from(code)
}
