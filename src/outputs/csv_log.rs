//! Append-only CSV log of waiting periods.
//!
//! # Format
//!
//! ```text
//! Date,Evaluating cases,Waiting period
//! 2024-01-22T09:30:15Z,2024-01-01,3.0
//! 2024-01-23T09:30:11Z,2024-01-02,3.0
//! ```
//!
//! UTF-8, LF line endings, quoting only where needed. The header is written
//! once, when the file is empty at open time. Rows are never rewritten.

use crate::error::PersistError;
use crate::utils::format_weeks;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde::Serialize;
use std::path::Path;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, instrument};

/// One CSV record. Field names are the column headers.
#[derive(Debug, Serialize)]
struct Row<'a> {
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "Evaluating cases")]
    evaluating_cases: &'a str,
    #[serde(rename = "Waiting period")]
    waiting_period: String,
}

/// Append one row to the log at `path`, creating it if needed.
///
/// # Arguments
///
/// * `path` - Location of the CSV file
/// * `date` - Invocation timestamp
/// * `case_date` - Case date as `YYYY-MM-DD`
/// * `processing_time_weeks` - Waiting period, rounded to hundredths here
///
/// # Errors
///
/// Any failure to open, inspect or write the file.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn append_row(
    path: &Path,
    date: &str,
    case_date: &str,
    processing_time_weeks: f64,
) -> Result<(), PersistError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    let write_header = file.metadata().await?.len() == 0;
    debug!(write_header, "Opened CSV log");

    let row = Row {
        date,
        evaluating_cases: case_date,
        waiting_period: format_weeks(processing_time_weeks),
    };

    let mut writer = WriterBuilder::new()
        .has_headers(write_header)
        .terminator(Terminator::Any(b'\n'))
        .quote_style(QuoteStyle::Necessary)
        .from_writer(Vec::new());
    writer.serialize(&row)?;
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;

    file.write_all(&bytes).await?;
    file.flush().await?;

    info!(
        date,
        case_date,
        waiting_period = %row.waiting_period,
        header = write_header,
        "Appended row to CSV log"
    );
    Ok(())
}
