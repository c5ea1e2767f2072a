//! Date conversion helpers for fixture and UI values.
//!
//! Patterns use chrono's `strftime` syntax. Parsing never falls back to the
//! current time: a value that does not match its pattern is an error.

use std::fmt::Write;

use chrono::format::{Item, ParseErrorKind, StrftimeItems};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::DateError;

/// Format of dates shown in process lists, e.g. `16.12.2020 19:36`.
pub const LIST_DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Human-readable form of [`LIST_DATE_FORMAT`] used in messages.
pub const LIST_DATE_PATTERN: &str = "dd.MM.yyyy HH:mm";

/// Parses a list date, requiring exactly `dd.MM.yyyy HH:mm`.
///
/// chrono accepts single-digit fields for `%d` and friends, so the shape is
/// checked separately before the value is parsed.
pub fn parse_list_date(value: &str) -> Result<NaiveDateTime, DateError> {
    if !has_list_date_shape(value) {
        return Err(DateError::Shape {
            value: value.to_string(),
            expected: LIST_DATE_PATTERN.to_string(),
        });
    }

    NaiveDateTime::parse_from_str(value, LIST_DATE_FORMAT).map_err(|e| DateError::Parse {
        value: value.to_string(),
        pattern: LIST_DATE_FORMAT.to_string(),
        source: e,
    })
}

fn has_list_date_shape(value: &str) -> bool {
    const SHAPE: &[u8] = b"00.00.0000 00:00";

    let bytes = value.as_bytes();
    bytes.len() == SHAPE.len()
        && bytes.iter().zip(SHAPE).all(|(b, s)| match s {
            b'0' => b.is_ascii_digit(),
            other => b == other,
        })
}

/// Converts a string to a date-time using the given pattern.
///
/// Date-only patterns (no time fields) resolve to midnight. Time-only
/// patterns resolve to that time on 1970-01-01.
pub fn convert_date_time_by_pattern(value: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
    let err = match NaiveDateTime::parse_from_str(value, pattern) {
        Ok(parsed) => return Ok(parsed),
        Err(err) => err,
    };
    let parse_error = || DateError::Parse {
        value: value.to_string(),
        pattern: pattern.to_string(),
        source: err,
    };

    // Only a pattern missing whole fields may be completed
    if err.kind() != ParseErrorKind::NotEnough {
        return Err(parse_error());
    }

    let date_only = NaiveDate::parse_from_str(value, pattern)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0));
    let time_only = || {
        let time = NaiveTime::parse_from_str(value, pattern).ok()?;
        Some(NaiveDate::from_ymd_opt(1970, 1, 1)?.and_time(time))
    };

    date_only.or_else(time_only).ok_or_else(parse_error)
}

/// Current local time truncated to the precision of `pattern`.
pub fn convert_current_date_time_by_pattern(pattern: &str) -> Result<NaiveDateTime, DateError> {
    let invalid = || DateError::InvalidPattern {
        pattern: pattern.to_string(),
    };

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(invalid());
    }

    let mut formatted = String::new();
    write!(formatted, "{}", Local::now().format(pattern)).map_err(|_| invalid())?;
    convert_date_time_by_pattern(&formatted, pattern)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_list_date() {
        let parsed = parse_list_date("16.12.2020 19:36").unwrap();

        assert_eq!(parsed.day(), 16);
        assert_eq!(parsed.month(), 12);
        assert_eq!(parsed.year(), 2020);
        assert_eq!(parsed.hour(), 19);
        assert_eq!(parsed.minute(), 36);
    }

    #[test]
    fn test_parse_list_date_rejects_other_shapes() {
        for value in ["2022-01-01", "1.01.2022 10:00", "01.01.2022 10:00:00", "", "01.01.22 10:00"] {
            match parse_list_date(value) {
                Err(DateError::Shape { value: v, .. }) => assert_eq!(v, value),
                other => panic!("Expected Shape error for {:?}, got {:?}", value, other),
            }
        }
    }

    #[test]
    fn test_parse_list_date_rejects_impossible_values() {
        let result = parse_list_date("31.02.2022 10:00");
        assert!(matches!(result, Err(DateError::Parse { .. })));

        let result = parse_list_date("01.01.2022 25:00");
        assert!(matches!(result, Err(DateError::Parse { .. })));
    }

    #[test]
    fn test_convert_iso_timestamp() {
        let parsed =
            convert_date_time_by_pattern("2022-07-05T08:52:11.635Z", "%Y-%m-%dT%H:%M:%S%.3fZ")
                .unwrap();

        assert_eq!(parsed.year(), 2022);
        assert_eq!(parsed.second(), 11);
    }

    #[test]
    fn test_convert_date_only_pattern_is_midnight() {
        let parsed = convert_date_time_by_pattern("05.07.2022", "%d.%m.%Y").unwrap();

        assert_eq!(parsed.day(), 5);
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_convert_mismatch_is_error() {
        let result = convert_date_time_by_pattern("not a date", "%d.%m.%Y");

        match result {
            Err(DateError::Parse { value, pattern, .. }) => {
                assert_eq!(value, "not a date");
                assert_eq!(pattern, "%d.%m.%Y");
            }
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_current_date_time_truncated_to_pattern() {
        let now = convert_current_date_time_by_pattern("%d.%m.%Y %H:%M").unwrap();

        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn test_convert_time_only_pattern_is_epoch_day() {
        let parsed = convert_date_time_by_pattern("19:36", "%H:%M").unwrap();

        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
        assert_eq!(parsed.hour(), 19);
        assert_eq!(parsed.minute(), 36);
    }

    #[test]
    fn test_convert_impossible_date_is_not_completed() {
        let result = convert_date_time_by_pattern("31.02.2022 10:00", "%d.%m.%Y %H:%M");
        assert!(matches!(result, Err(DateError::Parse { .. })));
    }

    #[test]
    fn test_current_time_only_pattern() {
        let now = convert_current_date_time_by_pattern("%H:%M").unwrap();

        assert_eq!(now.year(), 1970);
        assert_eq!(now.second(), 0);
    }

    #[test]
    fn test_current_date_time_invalid_pattern_is_error() {
        match convert_current_date_time_by_pattern("%d.%m.%Y %Q") {
            Err(DateError::InvalidPattern { pattern }) => assert_eq!(pattern, "%d.%m.%Y %Q"),
            other => panic!("Expected InvalidPattern error, got {:?}", other),
        }
    }
}
