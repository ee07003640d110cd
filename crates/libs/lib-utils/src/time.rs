//! # Time Utilities
//!
//! Calendar helpers using chrono. Expense dates travel as ISO `YYYY-MM-DD` strings.

use chrono::{DateTime, NaiveDate, Utc};

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Today's UTC date as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    now_utc().date_naive().format(ISO_DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string.
pub fn parse_iso_date(date: &str) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(date, ISO_DATE_FORMAT)
        .map_err(|_| Error::FailToDateParse(date.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso_date() {
        let date = parse_iso_date("2025-11-11").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 11, 11).unwrap());
        assert!(parse_iso_date("11/11/2025").is_err());
        assert!(parse_iso_date("2025-02-30").is_err());
    }

    #[test]
    fn test_today_iso_round_trips() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(parse_iso_date(&today).is_ok());
    }
}
