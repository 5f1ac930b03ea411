//! Parser combinators for repeated, optional and custom fields.

use std::slice;

use crate::error::FieldError;

use super::{CheckStatus, Parsed, Parser};

/// Applies `inner` to each raw value of a field.
///
/// Use this with [`multifield`](crate::multifield), which hands over every
/// value submitted under a name. Values keep the order they have in the
/// value store, most recent first. Each item is parsed independently,
/// starting from the field's incoming status. Errors from all items are
/// collected with duplicates removed, so five unparseable numbers produce a
/// single [`FieldError::MustBeInt`].
///
/// The outgoing status is the status of the last item parsed, or the
/// incoming status when there are no values.
///
/// # Example
///
/// ```rust
/// use inquest::{parse_int, parse_list, CheckStatus, FieldError};
///
/// let parser = parse_list(parse_int());
///
/// let values = vec!["3".to_string(), "2".to_string(), "1".to_string()];
/// assert_eq!(parser.run(&values, CheckStatus::Check).value, vec![3, 2, 1]);
///
/// let values = vec!["a".to_string(), "2".to_string(), "b".to_string()];
/// assert_eq!(parser.run(&values, CheckStatus::Check).errors, vec![FieldError::MustBeInt]);
/// ```
pub fn parse_list<T: 'static>(inner: Parser<T>) -> Parser<Vec<T>> {
    Parser::new(move |values, status| {
        let mut items = Vec::with_capacity(values.len());
        let mut errors: Vec<FieldError> = Vec::new();
        let mut last = status;

        for value in values {
            let parsed = inner.run(slice::from_ref(value), status);
            items.push(parsed.value);
            for error in parsed.errors {
                if !errors.contains(&error) {
                    errors.push(error);
                }
            }
            last = parsed.status;
        }

        Parsed {
            value: items,
            status: last,
            errors,
        }
    })
}

/// Makes a field optional.
///
/// No value, or a single empty value, yields `None` without errors. Anything
/// else is handed to `inner` and wrapped in `Some`.
///
/// # Example
///
/// ```rust
/// use inquest::{parse_int, parse_optional, CheckStatus, FieldError};
///
/// let parser = parse_optional(parse_int());
///
/// assert_eq!(parser.run(&["".to_string()], CheckStatus::Check).value, None);
/// assert_eq!(parser.run(&["5".to_string()], CheckStatus::Check).value, Some(5));
/// assert_eq!(
///     parser.run(&["five".to_string()], CheckStatus::Check).errors,
///     vec![FieldError::MustBeInt]
/// );
/// ```
pub fn parse_optional<T: 'static>(inner: Parser<T>) -> Parser<Option<T>> {
    Parser::new(move |values, status| match values {
        [] => Parsed::ok(None, status),
        [only] if only.is_empty() => Parsed::ok(None, status),
        _ => inner.run(values, status).map(Some),
    })
}

/// Builds a parser from a custom function over all raw values of a field.
///
/// The function returns the decoded value, or a zero value together with a
/// message. A failure is reported as [`FieldError::CustomError`] and stops
/// later checks, like any other parse failure.
///
/// # Example
///
/// ```rust
/// use inquest::{parse, CheckStatus, FieldError};
///
/// let parser = parse(|values| match values.first().map(String::as_str) {
///     Some("red") => Ok(0xff0000),
///     Some("green") => Ok(0x00ff00),
///     _ => Err((0, "must be red or green".to_string())),
/// });
///
/// assert_eq!(parser.run(&["green".to_string()], CheckStatus::Check).value, 0x00ff00);
///
/// let parsed = parser.run(&["blue".to_string()], CheckStatus::Check);
/// assert_eq!(parsed.errors, vec![FieldError::CustomError("must be red or green".to_string())]);
/// assert_eq!(parsed.status, CheckStatus::DontCheck);
/// ```
pub fn parse<T, F>(custom: F) -> Parser<T>
where
    T: 'static,
    F: Fn(&[String]) -> Result<T, (T, String)> + Send + Sync + 'static,
{
    Parser::new(move |values, status| match custom(values) {
        Ok(value) => Parsed::ok(value, status),
        Err((zero, message)) => Parsed::failed(zero, FieldError::CustomError(message)),
    })
}
