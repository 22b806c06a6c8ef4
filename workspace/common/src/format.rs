//! Display formatting shared by every view.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso};

/// Rendered when a timestamp cannot be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

/// Formats a probability in `[0, 1]` as a percentage with two decimals.
///
/// Rounding happens on the shortest decimal form of the float, half away from
/// zero, so `0.12345` becomes `12.35%` even though the nearest binary value
/// lies just below the midpoint.
pub fn format_percentage(probability: f64) -> String {
    let percent = Decimal::from_str(&probability.to_string())
        .ok()
        .and_then(|value| value.checked_mul(Decimal::ONE_HUNDRED));

    match percent {
        Some(percent) => {
            let mut rounded =
                percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
            rounded.rescale(2);
            format!("{}%", rounded)
        }
        // NaN, infinities and magnitudes outside Decimal's range
        None => format!("{:.2}%", probability * 100.0),
    }
}

/// Replaces the first underscore of a purpose code with a space. Later
/// underscores are left alone.
pub fn purpose_display(purpose: &str) -> String {
    purpose.replacen('_', " ", 1)
}

/// Formats an amount as US dollars, e.g. `$12,500.00`.
pub fn format_usd(amount: Decimal) -> String {
    let mut amount = amount;
    // Money prints the scale of the Decimal it wraps.
    amount.rescale(2);
    Money::from_decimal(amount, iso::USD).to_string()
}

/// Formats a backend timestamp as a `M/D/YYYY` date.
///
/// Accepts RFC 3339 timestamps (the date is taken in the timestamp's own
/// offset), naive ISO 8601 date-times and plain dates.
pub fn format_locale_date(timestamp: &str) -> String {
    match parse_date(timestamp) {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => INVALID_DATE.to_string(),
    }
}

fn parse_date(timestamp: &str) -> Option<NaiveDate> {
    let timestamp = timestamp.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(timestamp) {
        return Some(parsed.date_naive());
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(timestamp, pattern) {
            return Some(parsed.date());
        }
    }

    NaiveDate::parse_from_str(timestamp, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.12345, "12.35%")]
    #[case(0.42, "42.00%")]
    #[case(0.0, "0.00%")]
    #[case(1.0, "100.00%")]
    #[case(0.005, "0.50%")]
    #[case(0.00005, "0.01%")]
    #[case(0.999999, "100.00%")]
    #[case(1.5, "150.00%")]
    #[case(-0.1, "-10.00%")]
    fn test_format_percentage(#[case] probability: f64, #[case] expected: &str) {
        assert_eq!(format_percentage(probability), expected);
    }

    #[test]
    fn test_format_percentage_non_finite() {
        assert_eq!(format_percentage(f64::NAN), "NaN%");
    }

    #[rstest]
    #[case("DEBT_CONSOLIDATION_EXTRA", "DEBT CONSOLIDATION_EXTRA")]
    #[case("CREDIT_CARD", "CREDIT CARD")]
    #[case("OTHER", "OTHER")]
    #[case("", "")]
    #[case("_LEADING", " LEADING")]
    fn test_purpose_display(#[case] purpose: &str, #[case] expected: &str) {
        assert_eq!(purpose_display(purpose), expected);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(Decimal::new(12500, 0)), "$12,500.00");
        assert_eq!(format_usd(Decimal::new(8500050, 2)), "$85,000.50");
        assert_eq!(format_usd(Decimal::new(125, 1)), "$12.50");
        assert_eq!(format_usd(Decimal::ZERO), "$0.00");
    }

    #[rstest]
    #[case("2025-06-13T19:45:27.123456", "6/13/2025")]
    #[case("2025-06-13T19:45:27", "6/13/2025")]
    #[case("2025-01-02T08:00:00Z", "1/2/2025")]
    #[case("2025-12-31T23:30:00+02:00", "12/31/2025")]
    #[case("2025-03-04 10:11:12", "3/4/2025")]
    #[case("2025-03-04", "3/4/2025")]
    #[case("yesterday", "Invalid Date")]
    #[case("", "Invalid Date")]
    fn test_format_locale_date(#[case] timestamp: &str, #[case] expected: &str) {
        assert_eq!(format_locale_date(timestamp), expected);
    }
}
