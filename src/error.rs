//! Error types for the scrape pipeline.
//!
//! Failures are split in two families so an operator can tell them apart:
//!
//! - [`ScrapeError`]: nothing was extracted (fetch, markup, month, date).
//!   These abort the run before the CSV is touched.
//! - [`PersistError`]: a value was extracted but could not be recorded.

use thiserror::Error;

/// Exit code for malformed or unexpected page content.
pub const EXIT_DATA: u8 = 64;
/// Exit code for an unreachable page or a non-success HTTP status.
pub const EXIT_UNAVAILABLE: u8 = 69;
/// Exit code for a failed CSV write.
pub const EXIT_IO: u8 = 74;

/// Errors raised before anything is written.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure, timeout or non-success status.
    #[error("failed to fetch page: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The alert block or one of its emphasized fragments is absent or empty.
    #[error("could not find the expected elements on the page")]
    MissingElements,

    /// The day and month fragment did not split into exactly two tokens.
    #[error("expected \"<day> <month>\", got {0:?}")]
    MalformedDayMonth(String),

    /// Month name not present in the lookup table.
    #[error("unknown month name: {0}")]
    UnknownMonth(String),

    /// The extracted components do not form a calendar date.
    #[error("invalid case date: year {year:?}, month {month:?}, day {day:?}")]
    InvalidDate {
        year: String,
        month: String,
        day: String,
    },
}

impl ScrapeError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            ScrapeError::Fetch(_) => EXIT_UNAVAILABLE,
            _ => EXIT_DATA,
        }
    }
}

/// Errors raised while appending to the record store.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_distinguish_fetch_from_data() {
        assert_eq!(ScrapeError::MissingElements.exit_code(), 64);
        assert_eq!(ScrapeError::UnknownMonth("x".into()).exit_code(), 64);
        assert_eq!(ScrapeError::MalformedDayMonth("15".into()).exit_code(), EXIT_DATA);
    }

    #[test]
    fn test_messages_are_single_line() {
        let e = ScrapeError::UnknownMonth("Jan".into());
        assert_eq!(e.to_string(), "unknown month name: Jan");
        assert!(!ScrapeError::MissingElements.to_string().contains('\n'));
    }
}
