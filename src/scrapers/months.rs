//! Swedish month names.
//!
//! The source page writes dates like `15 januari`. This table is the only
//! locale knowledge in the crate and must stay exhaustive and exact.

use crate::error::ScrapeError;

/// Map a Swedish month name to its two-digit number.
///
/// Lookup is case-insensitive; anything else must match exactly.
///
/// # Errors
///
/// [`ScrapeError::UnknownMonth`] when the name is not one of the twelve.
pub fn map_month(name: &str) -> Result<&'static str, ScrapeError> {
    let code = match name.to_lowercase().as_str() {
        "januari" => "01",
        "februari" => "02",
        "mars" => "03",
        "april" => "04",
        "maj" => "05",
        "juni" => "06",
        "juli" => "07",
        "augusti" => "08",
        "september" => "09",
        "oktober" => "10",
        "november" => "11",
        "december" => "12",
        _ => return Err(ScrapeError::UnknownMonth(name.to_string())),
    };
    Ok(code)
}
