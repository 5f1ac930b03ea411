//! Text-shaped field parsers: strings, emails, phone numbers, colours and
//! URLs.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::error::FieldError;

use super::{first_value, scalar, Parsed, Parser};

static HEX_COLOUR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("hex colour pattern is valid"));

static BLANK_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("about:blank").expect("about:blank is a valid URL"));

/// Parses a string. Never fails; a missing field yields an empty string.
pub fn parse_string() -> Parser<String> {
    Parser::new(|values, status| Parsed::ok(first_value(values).to_string(), status))
}

/// Parses an email address.
///
/// Only the shape is checked: the value must contain exactly one `@`.
/// Fails with [`FieldError::MustBeEmail`] and yields an empty string.
///
/// # Example
///
/// ```rust
/// use inquest::{parse_email, CheckStatus, FieldError};
///
/// let parsed = parse_email().run(&["wib@example.com".to_string()], CheckStatus::Check);
/// assert_eq!(parsed.value, "wib@example.com");
///
/// let parsed = parse_email().run(&["wib".to_string()], CheckStatus::Check);
/// assert_eq!(parsed.errors, vec![FieldError::MustBeEmail]);
/// ```
pub fn parse_email() -> Parser<String> {
    scalar(FieldError::MustBeEmail, String::new, |input| {
        (input.matches('@').count() == 1).then(|| input.to_string())
    })
}

/// Parses a phone number into its digits.
///
/// Dashes, spaces and parentheses are stripped, but only once at least one
/// digit has been read. A `+` is allowed as the very first character and is
/// dropped. Everything else must be a digit, and there must be more than 7
/// and at most 15 digits. Fails with [`FieldError::MustBePhoneNumber`] and
/// yields an empty string.
///
/// # Example
///
/// ```rust
/// use inquest::{parse_phone_number, CheckStatus};
///
/// let parsed = parse_phone_number().run(&["+1 (555) 123-4567".to_string()], CheckStatus::Check);
/// assert_eq!(parsed.value, "15551234567");
/// ```
pub fn parse_phone_number() -> Parser<String> {
    scalar(FieldError::MustBePhoneNumber, String::new, scan_phone_number)
}

fn scan_phone_number(input: &str) -> Option<String> {
    let body = input.strip_prefix('+').unwrap_or(input);
    let mut digits = String::with_capacity(body.len());

    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '-' | ' ' | '(' | ')' if !digits.is_empty() => {}
            _ => return None,
        }
    }

    (digits.len() > 7 && digits.len() <= 15).then_some(digits)
}

/// Parses a `#rrggbb` hex colour, case-insensitively.
///
/// The value is returned as submitted. Fails with [`FieldError::MustBeColour`]
/// and yields an empty string.
pub fn parse_colour() -> Parser<String> {
    scalar(FieldError::MustBeColour, String::new, |input| {
        HEX_COLOUR.is_match(input).then(|| input.to_string())
    })
}

/// Parses an absolute URL.
///
/// Fails with [`FieldError::MustBeUrl`] and yields `about:blank`.
pub fn parse_url() -> Parser<Url> {
    scalar(FieldError::MustBeUrl, || BLANK_URL.clone(), |input| {
        Url::parse(input).ok()
    })
}
