//! Date helpers for the end-date control and the CLI.

use crate::error::{ForecastError, Result};
use chrono::{Local, NaiveDate, Timelike};

/// Date format used by the date picker and the `/predict` request: "YYYY-MM-DD"
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| ForecastError::DateParse(s.to_string()))
}

/// Today's local calendar date, zero padded.
pub fn today() -> String {
    format_date(&Local::now().date_naive())
}

/// Current local hour (0-23).
pub fn current_hour() -> u32 {
    Local::now().hour()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_pads_month_and_day() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(format_date(&date), "2024-03-07");
    }

    #[test]
    fn test_parse_date() {
        let parsed = parse_date("2023-06-15").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap());
        assert!(parse_date(" 2023-06-15 ").is_ok());
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert!(matches!(
            parse_date("20230615"),
            Err(ForecastError::DateParse(_))
        ));
        assert!(parse_date("2023-02-30").is_err());
    }

    #[test]
    fn test_today_round_trips() {
        let today = today();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_ok());
    }
}
