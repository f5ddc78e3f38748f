//! Data models for a single run.
//!
//! - [`CaseDate`]: the date of the applications currently being evaluated,
//!   anchored to midnight in the publisher's civil timezone
//! - [`RunResult`]: what one run observed, before it becomes a CSV row

use crate::error::ScrapeError;
use crate::scrapers::transportstyrelsen::DateParts;
use chrono::{DateTime, NaiveDate, NaiveTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;

const SECONDS_PER_DAY: i64 = 86_400;

/// Publication date read from the source page.
///
/// Construction fails unless year, month and day form a real calendar date
/// in the given timezone. Immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseDate {
    start: DateTime<Tz>,
}

impl CaseDate {
    /// Build a case date from textual components.
    ///
    /// # Errors
    ///
    /// [`ScrapeError::InvalidDate`] if a component is not numeric or the
    /// combination is not a calendar date (e.g. 30 februari).
    pub fn new(year: &str, month: &str, day: &str, timezone: Tz) -> Result<Self, ScrapeError> {
        let invalid = || ScrapeError::InvalidDate {
            year: year.to_string(),
            month: month.to_string(),
            day: day.to_string(),
        };

        let y: i32 = year.parse().map_err(|_| invalid())?;
        let m: u32 = month.parse().map_err(|_| invalid())?;
        let d: u32 = day.parse().map_err(|_| invalid())?;

        let date = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(invalid)?;
        let start = timezone
            .from_local_datetime(&date.and_time(NaiveTime::MIN))
            .earliest()
            .ok_or_else(invalid)?;

        Ok(Self { start })
    }

    pub fn from_parts(parts: &DateParts, timezone: Tz) -> Result<Self, ScrapeError> {
        Self::new(&parts.year, &parts.month, &parts.day, timezone)
    }

    /// `YYYY-MM-DD`, zero padded.
    pub fn to_iso8601(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// Whole 24-hour days elapsed since local midnight of the case date,
    /// floored.
    ///
    /// This is absolute elapsed time, not a count of calendar days: an
    /// interval spanning the spring DST change is an hour short and counts
    /// one day fewer. Negative when `since` precedes the case date.
    pub fn elapsed_days(&self, since: DateTime<Utc>) -> i64 {
        let delta = since - self.start.with_timezone(&Utc);
        delta.num_seconds().div_euclid(SECONDS_PER_DAY)
    }

    /// Elapsed whole days expressed in weeks. Not rounded.
    pub fn processing_time(&self, since: DateTime<Utc>) -> f64 {
        self.elapsed_days(since) as f64 / 7.0
    }
}

/// One run's observation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunResult {
    pub recorded_at: DateTime<Utc>,
    /// Case date as `YYYY-MM-DD`.
    pub case_date: String,
    pub processing_time_weeks: f64,
}

impl RunResult {
    pub fn new(case_date: &CaseDate, now: DateTime<Utc>) -> Self {
        Self {
            recorded_at: now,
            case_date: case_date.to_iso8601(),
            processing_time_weeks: case_date.processing_time(now),
        }
    }

    /// Value of the CSV `Date` column: RFC 3339 in UTC, second precision.
    pub fn date_field(&self) -> String {
        self.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::Europe::Stockholm;

    fn at(tz: Tz, y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        tz.with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn test_iso_rendering_is_zero_padded() {
        let case = CaseDate::new("2024", "03", "5", Stockholm).unwrap();
        assert_eq!(case.to_iso8601(), "2024-03-05");
    }

    #[test]
    fn test_two_weeks_exactly() {
        let case = CaseDate::new("2024", "01", "01", Stockholm).unwrap();
        let now = at(Stockholm, 2024, 1, 15, 0, 0);
        assert_eq!(case.elapsed_days(now), 14);
        assert_eq!(case.processing_time(now), 2.0);
    }

    #[test]
    fn test_partial_days_are_floored() {
        let case = CaseDate::new("2024", "01", "01", Stockholm).unwrap();
        let now = at(Stockholm, 2024, 1, 14, 23, 59);
        assert_eq!(case.elapsed_days(now), 13);
        assert_eq!(case.processing_time(now), 13.0 / 7.0);
    }

    #[test]
    fn test_now_before_case_date_is_negative() {
        let case = CaseDate::new("2024", "01", "15", Stockholm).unwrap();
        let now = at(Stockholm, 2024, 1, 14, 12, 0);
        assert_eq!(case.elapsed_days(now), -1);
        assert!(case.processing_time(now) < 0.0);

        let week_early = at(Stockholm, 2024, 1, 8, 0, 0);
        assert_eq!(case.processing_time(week_early), -1.0);
    }

    #[test]
    fn test_case_date_starts_at_local_midnight() {
        let case = CaseDate::new("2024", "01", "01", Stockholm).unwrap();
        // Stockholm midnight on 1 January is 23:00 UTC the day before.
        let before = Utc.with_ymd_and_hms(2023, 12, 31, 22, 59, 59).unwrap();
        let after = Utc.with_ymd_and_hms(2023, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(case.elapsed_days(before), -1);
        assert_eq!(case.elapsed_days(after), 0);
    }

    #[test]
    fn test_elapsed_days_across_dst_changes() {
        // Spring forward on 31 March: midnight to midnight is 31 days less an hour.
        let spring = CaseDate::new("2024", "03", "01", Stockholm).unwrap();
        assert_eq!(spring.elapsed_days(at(Stockholm, 2024, 4, 1, 0, 0)), 30);
        assert_eq!(spring.elapsed_days(at(Stockholm, 2024, 4, 1, 1, 0)), 31);

        // Fall back on 27 October: the extra hour only adds to the day count.
        let autumn = CaseDate::new("2024", "10", "01", Stockholm).unwrap();
        assert_eq!(autumn.elapsed_days(at(Stockholm, 2024, 11, 1, 0, 30)), 31);
        assert_eq!(autumn.elapsed_days(at(Stockholm, 2024, 10, 31, 23, 30)), 31);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        let rejected = [
            ("2023", "02", "29"),
            ("2024", "02", "30"),
            ("2024", "13", "1"),
            ("2024", "01", "1a"),
            ("tjugo", "01", "01"),
        ];
        for (y, m, d) in rejected {
            assert!(
                matches!(CaseDate::new(y, m, d, Stockholm), Err(ScrapeError::InvalidDate { .. })),
                "{y}-{m}-{d} should be rejected"
            );
        }
        assert!(CaseDate::new("2024", "02", "29", Stockholm).is_ok());
    }

    #[test]
    fn test_run_result_fields() {
        let case = CaseDate::new("2024", "01", "01", Stockholm).unwrap();
        let now = Utc.with_ymd_and_hms(2024, 1, 22, 9, 30, 15).unwrap();
        let result = RunResult::new(&case, now);
        assert_eq!(result.case_date, "2024-01-01");
        assert_eq!(result.date_field(), "2024-01-22T09:30:15Z");
        assert_eq!(result.processing_time_weeks, 3.0);
    }
}
