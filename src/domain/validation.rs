// src/domain/validation.rs
//
// Field rules shared by every entity.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::domain::{DomainError, DomainResult};

/// Exact `YYYY-MM-DD` shape. chrono alone accepts single-digit months and days.
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

/// Text fields cannot be empty
pub(crate) fn require_non_empty(field: &'static str, value: &str) -> DomainResult<()> {
    if value.is_empty() {
        return Err(DomainError::EmptyField { field });
    }
    Ok(())
}

/// Dates are kept as text but must name a real day on the calendar
pub(crate) fn require_calendar_date(field: &'static str, value: &str) -> DomainResult<()> {
    require_non_empty(field, value)?;

    let invalid = || DomainError::InvalidDate {
        field,
        value: value.to_string(),
    };

    if !DATE_SHAPE.is_match(value) {
        return Err(invalid());
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| invalid())?;
    // Year zero has no place in the Gregorian calendar
    if date.year() < 1 {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_fails() {
        assert_eq!(
            require_non_empty("Title", ""),
            Err(DomainError::EmptyField { field: "Title" })
        );
        assert!(require_non_empty("Title", " ").is_ok());
    }

    #[test]
    fn test_valid_dates() {
        for date in ["1962-10-05", "2024-02-29", "0001-01-01", "9999-12-31"] {
            assert!(require_calendar_date("Release date", date).is_ok(), "{date}");
        }
    }

    #[test]
    fn test_non_calendar_dates_fail() {
        for date in ["2023-02-30", "1962-13-01", "1962-00-10", "1900-02-29", "0000-01-01"] {
            assert!(
                matches!(
                    require_calendar_date("Release date", date),
                    Err(DomainError::InvalidDate { .. })
                ),
                "{date}"
            );
        }
    }

    #[test]
    fn test_malformed_dates_fail() {
        for date in [
            "1962-1-5",
            "62-10-05",
            "1962/10/05",
            "1962-10-05T00:00:00",
            " 1962-10-05",
            "October 5, 1962",
            "+1962-10-05",
        ] {
            assert!(require_calendar_date("Release date", date).is_err(), "{date}");
        }
    }

    #[test]
    fn test_empty_date_reports_empty_field() {
        assert_eq!(
            require_calendar_date("Date of birth", ""),
            Err(DomainError::EmptyField {
                field: "Date of birth"
            })
        );
    }
}
