//! Deadline validation.

use chrono::{Datelike, NaiveDate};

/// Check that `s` is a real calendar date written exactly as `YYYY-MM-DD`.
///
/// chrono alone accepts unpadded fields such as `2024-1-5`, so the shape is
/// checked byte by byte before the calendar check. Year 0000 is rejected.
/// Never panics.
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 {
        return false;
    }
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shape_ok
        && NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(|d| d.year() >= 1)
            .unwrap_or(false)
}

/// Parse a deadline that passed [`is_valid_date`].
pub fn parse_deadline(s: &str) -> Option<NaiveDate> {
    if is_valid_date(s) {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_calendar_dates() {
        assert!(is_valid_date("2024-01-31"));
        assert!(is_valid_date("2024-02-29"));
        assert!(is_valid_date("1999-12-01"));
    }

    #[test]
    fn rejects_impossible_dates() {
        assert!(!is_valid_date("2024-13-40"));
        assert!(!is_valid_date("2023-02-29"));
        assert!(!is_valid_date("2024-04-31"));
        assert!(!is_valid_date("2024-00-10"));
        assert!(!is_valid_date("0000-01-01"));
        assert!(is_valid_date("0001-01-01"));
    }

    #[test]
    fn rejects_wrong_shape() {
        assert!(!is_valid_date(""));
        assert!(!is_valid_date("2024-1-05"));
        assert!(!is_valid_date("2024/01/05"));
        assert!(!is_valid_date("2024-01-05 "));
        assert!(!is_valid_date("+024-01-05"));
        assert!(!is_valid_date("tomorrow"));
        assert!(!is_valid_date("２０２４-01-05"));
    }

    #[test]
    fn parse_deadline_requires_valid_shape() {
        assert_eq!(parse_deadline("2024-03-09"), NaiveDate::from_ymd_opt(2024, 3, 9));
        assert_eq!(parse_deadline("2024-3-9"), None);
    }
}
