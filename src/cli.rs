//! Command-line interface definitions.
//!
//! Every option has a default, so a bare invocation (as from cron) scrapes
//! the Transportstyrelsen page into `transportstyrelsen_data.csv`. Options
//! can also be set through environment variables.

use crate::pipeline::{
    DEFAULT_CSV_PATH, DEFAULT_TIMEOUT_MS, DEFAULT_TIMEZONE, DEFAULT_URL, RunConfig,
};
use chrono_tz::Tz;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Command-line arguments.
///
/// # Examples
///
/// ```sh
/// # Defaults
/// waiting_period
///
/// # Write somewhere else
/// waiting_period -o /var/lib/waiting_period/data.csv
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Page carrying the notice with the evaluation date
    #[arg(long, env = "WAITING_PERIOD_URL", default_value = DEFAULT_URL)]
    pub url: Url,

    /// CSV file to append to
    #[arg(short, long, env = "WAITING_PERIOD_CSV", default_value = DEFAULT_CSV_PATH)]
    pub output: PathBuf,

    /// IANA timezone of the published date
    #[arg(long, env = "WAITING_PERIOD_TZ", default_value = DEFAULT_TIMEZONE)]
    pub timezone: Tz,

    /// HTTP timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        RunConfig {
            url: cli.url,
            csv_path: cli.output,
            timezone: cli.timezone,
            timeout: Duration::from_millis(cli.timeout_ms),
        }
    }
}
