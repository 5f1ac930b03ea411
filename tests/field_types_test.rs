//! Integration tests for the built-in field-type parsers, run through forms.

use chrono::{NaiveDate, NaiveTime};
use inquest::{
    field, parse_colour, parse_date, parse_date_time, parse_email, parse_float, parse_int,
    parse_phone_number, parse_time, parse_url, success, FieldError, Form, Parser,
};
use pretty_assertions::assert_eq;

/// Decodes a single field called "value" with `parser`.
fn decode<T>(parser: Parser<T>, value: &str) -> Result<T, Vec<FieldError>>
where
    T: Clone + Send + Sync + std::fmt::Debug + 'static,
{
    Form::new(field("value", parser, success))
        .add_string("value", value)
        .run()
        .into_result()
        .map_err(|form| form.field_errors("value"))
}

#[test]
fn test_email() {
    assert_eq!(decode(parse_email(), "wib@example.com"), Ok("wib@example.com".to_string()));
    assert_eq!(decode(parse_email(), ""), Err(vec![FieldError::MustBeEmail]));
    assert_eq!(decode(parse_email(), "wib.example.com"), Err(vec![FieldError::MustBeEmail]));
}

#[test]
fn test_int_bounds() {
    let parser = || parse_int().check_int_less_than(100);

    assert_eq!(decode(parser(), "99"), Ok(99));
    assert_eq!(decode(parser(), "-10"), Ok(-10));
    assert_eq!(decode(parser(), "100"), Err(vec![FieldError::MustBeIntLessThan(100)]));
    assert_eq!(decode(parser(), "150"), Err(vec![FieldError::MustBeIntLessThan(100)]));
    assert_eq!(decode(parser(), "ninety"), Err(vec![FieldError::MustBeInt]));
}

#[test]
fn test_float() {
    assert_eq!(decode(parse_float(), "2.5"), Ok(2.5));
    assert_eq!(decode(parse_float(), "2"), Ok(2.0));
    assert_eq!(decode(parse_float(), "two"), Err(vec![FieldError::MustBeFloat]));
    assert_eq!(
        decode(parse_float().check_float_more_than(3.0), "2"),
        Err(vec![FieldError::MustBeFloatMoreThan(3.0)])
    );
}

#[test]
fn test_date_leap_years() {
    assert_eq!(decode(parse_date(), "2023-02-29"), Err(vec![FieldError::MustBeDate]));
    assert_eq!(
        decode(parse_date(), "2024-02-29"),
        Ok(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap())
    );
    assert_eq!(decode(parse_date(), "2024-06-31"), Err(vec![FieldError::MustBeDate]));
}

#[test]
fn test_time() {
    assert_eq!(decode(parse_time(), "07:05"), Ok(NaiveTime::from_hms_opt(7, 5, 0).unwrap()));
    assert_eq!(decode(parse_time(), "24:00"), Err(vec![FieldError::MustBeTime]));
}

#[test]
fn test_date_time() {
    let expected = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(8, 0, 30)
        .unwrap();
    assert_eq!(decode(parse_date_time(), "2024-01-31T08:00:30"), Ok(expected));
    assert_eq!(
        decode(parse_date_time(), "2024-01-32T08:00"),
        Err(vec![FieldError::MustBeDateTime])
    );
}

#[test]
fn test_phone_number() {
    assert_eq!(
        decode(parse_phone_number(), "+1 (555) 123-4567"),
        Ok("15551234567".to_string())
    );
    assert_eq!(decode(parse_phone_number(), "123"), Err(vec![FieldError::MustBePhoneNumber]));
}

#[test]
fn test_colour_is_case_insensitive() {
    assert_eq!(decode(parse_colour(), "#ABCdef"), Ok("#ABCdef".to_string()));
    assert_eq!(decode(parse_colour(), "#abcdeg"), Err(vec![FieldError::MustBeColour]));
}

#[test]
fn test_url() {
    let url = decode(parse_url(), "https://example.com/a").unwrap();
    assert_eq!(url.as_str(), "https://example.com/a");
    assert_eq!(decode(parse_url(), "not a url"), Err(vec![FieldError::MustBeUrl]));
}
