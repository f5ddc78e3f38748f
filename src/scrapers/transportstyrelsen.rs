//! Transportstyrelsen vehicle import page scraper.
//!
//! The page carries a notice block (`#page-alert-block`) announcing which
//! applications are currently being evaluated:
//!
//! ```html
//! <div id="page-alert-block">
//!   <div><div>
//!     <p>Vi handlägger nu ärenden från <strong>15 januari</strong> <strong>2024</strong>.</p>
//!   </div></div>
//! </div>
//! ```
//!
//! The first `<strong>` holds day and month, the second the year.

use crate::error::ScrapeError;
use crate::scrapers::months::map_month;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, instrument, warn};

static DAY_AND_MONTH: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#page-alert-block > div > div > p > strong:nth-of-type(1)").unwrap()
});
static YEAR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("#page-alert-block > div > div > p > strong:nth-of-type(2)").unwrap()
});

/// Numeric date components read from the page, still as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub year: String,
    /// Two-digit month, `"01"` to `"12"`.
    pub month: String,
    pub day: String,
}

/// Extract the case date from the page markup.
///
/// # Errors
///
/// - [`ScrapeError::MissingElements`] if either fragment is absent or blank
/// - [`ScrapeError::MalformedDayMonth`] if the first fragment is not `<day> <month>`
/// - [`ScrapeError::UnknownMonth`] if the month name is not Swedish
#[instrument(level = "info", skip_all, fields(bytes = markup.len()))]
pub fn extract_date(markup: &str) -> Result<DateParts, ScrapeError> {
    let document = Html::parse_document(markup);

    let day_and_month = first_text(&document, &DAY_AND_MONTH);
    let year = first_text(&document, &YEAR);

    let (Some(day_and_month), Some(year)) = (day_and_month, year) else {
        warn!("Alert block fragments not found");
        return Err(ScrapeError::MissingElements);
    };
    debug!(%day_and_month, %year, "Found alert block fragments");

    let tokens: Vec<&str> = day_and_month.split_whitespace().collect();
    let [day, month_name] = tokens.as_slice() else {
        return Err(ScrapeError::MalformedDayMonth(day_and_month.clone()));
    };

    Ok(DateParts {
        month: map_month(month_name)?.to_string(),
        day: day.to_string(),
        year,
    })
}

/// Whitespace-normalized text of the first match, `None` when absent or blank.
fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document
        .select(selector)
        .next()
        .map(|el| normalize_space(&el.text().collect::<String>()))
        .filter(|text| !text.is_empty())
}

fn normalize_space(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
