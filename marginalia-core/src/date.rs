//! Dateline formatting for posts and the archive page.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DateError {
    #[error("date `{0}` is not in YYYY-MM-DD form")]
    Malformed(String),

    #[error("date `{0}` is out of range")]
    OutOfRange(String),
}

/// Month rendering used by [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `January  3, 2024`
    Full,
    /// `Jan  3, 2024`
    Abbr,
}

const MONTHS_FULL: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format an ISO `YYYY-MM-DD` date for display.
///
/// The input must be exactly ten bytes of digits and two hyphens; anything
/// else is [`DateError::Malformed`]. Calendar validation (months 1..12,
/// days valid for the month) is delegated to chrono. The day is space-padded
/// to two columns, so the third of January renders as `Jan  3, 2024`.
pub fn format_date(iso: &str, style: DateStyle) -> Result<String, DateError> {
    if !is_iso_shaped(iso) {
        return Err(DateError::Malformed(iso.to_string()));
    }

    let date = NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map_err(|_| DateError::OutOfRange(iso.to_string()))?;

    let month = match style {
        DateStyle::Full => MONTHS_FULL[date.month0() as usize],
        DateStyle::Abbr => MONTHS_ABBR[date.month0() as usize],
    };

    Ok(format!("{} {:>2}, {:04}", month, date.day(), date.year()))
}

fn is_iso_shaped(iso: &str) -> bool {
    let bytes = iso.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| {
            if i == 4 || i == 7 {
                b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_style() {
        assert_eq!(
            format_date("2024-01-03", DateStyle::Full).unwrap(),
            "January  3, 2024"
        );
        assert_eq!(
            format_date("2023-12-25", DateStyle::Full).unwrap(),
            "December 25, 2023"
        );
    }

    #[test]
    fn test_abbr_style() {
        // Single-digit days get a two-column pad: two spaces before the 3.
        assert_eq!(
            format_date("2024-01-03", DateStyle::Abbr).unwrap(),
            "Jan  3, 2024"
        );
        assert_eq!(
            format_date("2024-11-13", DateStyle::Abbr).unwrap(),
            "Nov 13, 2024"
        );
    }

    #[test]
    fn test_rejects_wrong_shape() {
        for bad in ["2024-1-3", "24-01-03", "2024/01/03", "2024-01-03T00", "", "garbage"] {
            assert_eq!(
                format_date(bad, DateStyle::Abbr),
                Err(DateError::Malformed(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        for bad in ["2024-13-01", "2024-00-10", "2024-02-30"] {
            assert_eq!(
                format_date(bad, DateStyle::Abbr),
                Err(DateError::OutOfRange(bad.to_string()))
            );
        }
    }
}
