//! Date and time field parsers.
//!
//! These follow the formats HTML `date`, `time` and `datetime-local` inputs
//! submit: `YYYY-MM-DD`, `HH:MM[:SS]` and `YYYY-MM-DDTHH:MM[:SS]`.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use crate::error::FieldError;

use super::{scalar, Parser};

static DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").expect("date pattern is valid")
});

static TIME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2})(?::([0-9]{2}))?$").expect("time pattern is valid")
});

/// Parses a `YYYY-MM-DD` calendar date.
///
/// The day must exist in the given month, so `2023-02-29` is rejected while
/// `2024-02-29` is accepted. Fails with [`FieldError::MustBeDate`] and yields
/// 1970-01-01.
///
/// # Example
///
/// ```rust
/// use inquest::{parse_date, CheckStatus, FieldError};
///
/// let parsed = parse_date().run(&["2024-02-29".to_string()], CheckStatus::Check);
/// assert!(parsed.is_ok());
///
/// let parsed = parse_date().run(&["2023-02-29".to_string()], CheckStatus::Check);
/// assert_eq!(parsed.errors, vec![FieldError::MustBeDate]);
/// ```
pub fn parse_date() -> Parser<NaiveDate> {
    scalar(FieldError::MustBeDate, NaiveDate::default, read_date)
}

/// Parses an `HH:MM` or `HH:MM:SS` time of day.
///
/// Hours run 0–23, minutes and seconds 0–59; missing seconds are 0. Fails
/// with [`FieldError::MustBeTime`] and yields midnight.
pub fn parse_time() -> Parser<NaiveTime> {
    scalar(FieldError::MustBeTime, NaiveTime::default, read_time)
}

/// Parses a `<date>T<time>` local date and time.
///
/// Both halves follow the rules of [`parse_date`] and [`parse_time`]. Fails
/// with [`FieldError::MustBeDateTime`] and yields 1970-01-01T00:00:00.
pub fn parse_date_time() -> Parser<NaiveDateTime> {
    scalar(FieldError::MustBeDateTime, NaiveDateTime::default, |input| {
        let (date, time) = input.split_once('T')?;
        Some(NaiveDateTime::new(read_date(date)?, read_time(time)?))
    })
}

fn read_date(input: &str) -> Option<NaiveDate> {
    let caps = DATE.captures(input)?;
    let year = caps[1].parse().ok()?;
    let month = caps[2].parse().ok()?;
    let day = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn read_time(input: &str) -> Option<NaiveTime> {
    let caps = TIME.captures(input)?;
    let hour = caps[1].parse().ok()?;
    let minute = caps[2].parse().ok()?;
    let second = match caps.get(3) {
        Some(s) => s.as_str().parse().ok()?,
        None => 0,
    };
    NaiveTime::from_hms_opt(hour, minute, second)
}
