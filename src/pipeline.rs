//! The run: fetch → extract → compute → append.
//!
//! Everything before the append is fatal and leaves the CSV untouched. A
//! failed append is absorbed into [`Outcome::NotRecorded`] so that "could not
//! record" never looks like "could not scrape".

use crate::api::PageSource;
use crate::error::{EXIT_IO, PersistError, ScrapeError};
use crate::models::{CaseDate, RunResult};
use crate::outputs::csv_log;
use crate::scrapers::transportstyrelsen::extract_date;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info, instrument};
use url::Url;

pub const DEFAULT_URL: &str = "https://www.transportstyrelsen.se/sv/vagtrafik/fordon/aga-kopa-eller-salja-fordon/import-och-export-av-fordon/fordonsimport-och-ursprungskontroll/";
pub const DEFAULT_CSV_PATH: &str = "transportstyrelsen_data.csv";
pub const DEFAULT_TIMEZONE: &str = "Europe/Stockholm";
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// Inputs for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub url: Url,
    pub csv_path: PathBuf,
    /// Civil timezone the published date belongs to.
    pub timezone: Tz,
    pub timeout: Duration,
}

/// How a run that got as far as computing a result ended.
#[derive(Debug)]
pub enum Outcome {
    Recorded(RunResult),
    NotRecorded {
        result: RunResult,
        error: PersistError,
    },
}

impl Outcome {
    pub fn result(&self) -> &RunResult {
        match self {
            Outcome::Recorded(result) | Outcome::NotRecorded { result, .. } => result,
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Recorded(_) => 0,
            Outcome::NotRecorded { .. } => EXIT_IO,
        }
    }
}

/// Execute a single run against `source`.
///
/// # Errors
///
/// Any [`ScrapeError`]; in that case nothing has been written.
#[instrument(level = "info", skip_all, fields(url = %config.url, csv = %config.csv_path.display()))]
pub async fn run<S: PageSource>(
    source: &S,
    config: &RunConfig,
    now: DateTime<Utc>,
) -> Result<Outcome, ScrapeError> {
    let markup = source.get(&config.url).await?;
    let parts = extract_date(&markup)?;
    let case_date = CaseDate::from_parts(&parts, config.timezone)?;
    let result = RunResult::new(&case_date, now);

    info!(
        case_date = %result.case_date,
        weeks = result.processing_time_weeks,
        timezone = %config.timezone,
        "Computed waiting period"
    );

    match csv_log::append_row(
        &config.csv_path,
        &result.date_field(),
        &result.case_date,
        result.processing_time_weeks,
    )
    .await
    {
        Ok(()) => Ok(Outcome::Recorded(result)),
        Err(error) => {
            error!(error = %error, "Failed to append to CSV log");
            Ok(Outcome::NotRecorded { result, error })
        }
    }
}
