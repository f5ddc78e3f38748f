//! Small helpers shared across the pipeline.
//!
//! - Rounding and rendering of the waiting period for the CSV
//! - String truncation for log previews

/// Round to two decimal places, halves away from zero.
///
/// Rounding is done on the shortest decimal form of the value, the digits
/// `{:?}` prints, so `2.005` becomes `2.01` even though its binary value sits
/// just below the half. Multiplying by 100 first would not give that
/// consistently (`1.005 * 100.0` is `100.49999999999999`).
pub fn round_hundredths(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    // e.g. "2.005e0", "4e-3", "2.125e2"
    let repr = format!("{:e}", value.abs());
    let Some((mantissa, exp)) = repr.split_once('e') else {
        return value;
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return value;
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    // Digits up to and including the hundredths place.
    let keep = exp + 3;
    if keep >= digits.len() as i32 {
        return value;
    }

    let (hundredths, next) = if keep < 0 {
        (0, 0)
    } else {
        let keep = keep as usize;
        let head = digits[..keep].parse::<u64>().unwrap_or(0);
        let next = digits.as_bytes()[keep] - b'0';
        (head, next)
    };
    let hundredths = if next >= 5 { hundredths + 1 } else { hundredths };

    if hundredths == 0 {
        return 0.0;
    }
    value.signum() * (hundredths as f64 / 100.0)
}

/// Render a waiting period for the CSV, rounded to hundredths.
///
/// Always plain decimal notation with a fractional part (`2.0`, not `2`
/// or `1e17`).
pub fn format_weeks(weeks: f64) -> String {
    let rounded = round_hundredths(weeks);
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        format!("{rounded}")
    }
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut at `max` bytes (moved back to a char boundary) with
/// `"…(+N bytes)"` appended.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…(+{} bytes)", &s[..end], s.len() - end)
}
