//! Field parsers and checks.
//!
//! A [`Parser`] turns the raw values submitted for one field into a typed
//! value. Checks are builder methods on `Parser` that wrap it with further
//! validation of the parsed value, so a chain like
//! `parse_int().check_int_more_than(0).check_int_less_than(100)` is itself a
//! `Parser`.
//!
//! Two failure modes are distinguished:
//! - A **parse failure** means the value could not be converted at all. The
//!   parser reports one error and sets [`CheckStatus::DontCheck`], so every
//!   check after it in the chain is skipped.
//! - A **check failure** means the value converted but is invalid. The check
//!   reports one error and leaves the status at [`CheckStatus::Check`], so the
//!   remaining checks still run and may add errors of their own.
//!
//! # Example
//!
//! ```rust
//! use inquest::{parse_int, CheckStatus, FieldError};
//!
//! let parser = parse_int().check_int_more_than(0).check_int_less_than(10);
//!
//! let parsed = parser.run(&["42".to_string()], CheckStatus::Check);
//! assert_eq!(parsed.value, 42);
//! assert_eq!(parsed.errors, vec![FieldError::MustBeIntLessThan(10)]);
//!
//! // A parse failure skips both checks
//! let parsed = parser.run(&["forty".to_string()], CheckStatus::Check);
//! assert_eq!(parsed.errors, vec![FieldError::MustBeInt]);
//! ```

mod checks;
mod combinators;
mod numeric;
mod temporal;
mod text;

use std::fmt;
use std::sync::Arc;

use crate::error::FieldError;

pub use combinators::{parse, parse_list, parse_optional};
pub use numeric::{parse_float, parse_int};
pub use temporal::{parse_date, parse_date_time, parse_time};
pub use text::{parse_colour, parse_email, parse_phone_number, parse_string, parse_url};

/// Whether checks later in a parser chain should run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckStatus {
    /// Run later checks.
    #[default]
    Check,
    /// Skip later checks; the value could not be parsed.
    DontCheck,
}

/// The outcome of running a parser over a field's raw values.
///
/// A failed parse still carries a value (the type's zero value) so decoding
/// can continue and every other field is still evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct Parsed<T> {
    /// The decoded value, or the zero value for the type on a parse failure.
    pub value: T,
    /// The status handed to the next check in the chain.
    pub status: CheckStatus,
    /// Errors reported so far, most recent first.
    pub errors: Vec<FieldError>,
}

impl<T> Parsed<T> {
    /// A successful parse that keeps the incoming status.
    pub fn ok(value: T, status: CheckStatus) -> Self {
        Self {
            value,
            status,
            errors: Vec::new(),
        }
    }

    /// A parse failure: one error and [`CheckStatus::DontCheck`].
    pub fn failed(zero: T, error: FieldError) -> Self {
        Self {
            value: zero,
            status: CheckStatus::DontCheck,
            errors: vec![error],
        }
    }

    /// Returns true if no errors were reported.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    fn with_error(mut self, error: FieldError) -> Self {
        self.errors.insert(0, error);
        self
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Parsed<U> {
        Parsed {
            value: f(self.value),
            status: self.status,
            errors: self.errors,
        }
    }
}

pub(crate) type ParseFn<T> = Arc<dyn Fn(&[String], CheckStatus) -> Parsed<T> + Send + Sync>;

/// A reusable decoder for one field.
///
/// `Parser` wraps a function from the field's raw values and an incoming
/// [`CheckStatus`] to a [`Parsed`] outcome. Parsers are immutable and cheap
/// to clone; every check method returns a new parser wrapping the previous
/// one.
///
/// Built-in parsers are created with the `parse_*` functions. Single-value
/// parsers look only at the first value they are given, treating no value as
/// an empty string.
pub struct Parser<T> {
    run: ParseFn<T>,
}

impl<T> Clone for Parser<T> {
    fn clone(&self) -> Self {
        Self {
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Parser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("output", &std::any::type_name::<T>())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Parser<T> {
    /// Creates a parser from a function.
    ///
    /// The function receives the raw values for the field and the incoming
    /// status. Prefer [`parse`] for custom parsers; this is the low-level
    /// constructor the built-in parsers use.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[String], CheckStatus) -> Parsed<T> + Send + Sync + 'static,
    {
        Self { run: Arc::new(f) }
    }

    /// Runs the parser over raw values.
    pub fn run(&self, values: &[String], status: CheckStatus) -> Parsed<T> {
        (self.run)(values, status)
    }

    /// Transforms the parsed value, leaving status and errors untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inquest::{parse_string, CheckStatus};
    ///
    /// let parser = parse_string().map(|s| s.trim().to_uppercase());
    /// let parsed = parser.run(&[" gb ".to_string()], CheckStatus::Check);
    /// assert_eq!(parsed.value, "GB");
    /// ```
    pub fn map<U, F>(self, f: F) -> Parser<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = self.run;
        Parser::new(move |values, status| inner(values, status).map(&f))
    }

    /// Wraps this parser with a rule that runs only when checking is enabled.
    ///
    /// The rule returns the error to report, if any. A failing rule never
    /// changes the status, so later rules still run.
    fn guard<F>(self, rule: F) -> Self
    where
        F: Fn(&T) -> Option<FieldError> + Send + Sync + 'static,
    {
        let inner = self.run;
        Parser::new(move |values, status| {
            let parsed = inner(values, status);
            if parsed.status == CheckStatus::DontCheck {
                return parsed;
            }
            match rule(&parsed.value) {
                Some(error) => parsed.with_error(error),
                None => parsed,
            }
        })
    }
}

/// Parses a checkbox.
///
/// Browsers omit unchecked checkboxes entirely, so the presence of the field
/// means `true` whatever its value (including an empty string) and absence
/// means `false`. Never fails.
pub fn parse_checkbox() -> Parser<bool> {
    Parser::new(|values, status| Parsed::ok(!values.is_empty(), status))
}

/// Returns the first raw value, or an empty string when there is none.
fn first_value(values: &[String]) -> &str {
    values.first().map(String::as_str).unwrap_or_default()
}

/// Builds a single-value parser from a conversion rule.
///
/// When the rule rejects the input the parser yields `zero()` and `error`.
fn scalar<T, R>(error: FieldError, zero: fn() -> T, rule: R) -> Parser<T>
where
    T: 'static,
    R: Fn(&str) -> Option<T> + Send + Sync + 'static,
{
    Parser::new(move |values, status| match rule(first_value(values)) {
        Some(value) => Parsed::ok(value, status),
        None => Parsed::failed(zero(), error.clone()),
    })
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Parser<String>>();
    assert_sync::<Parser<String>>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_checkbox_absent_is_false() {
        let parsed = parse_checkbox().run(&[], CheckStatus::Check);
        assert!(!parsed.value);
        assert!(parsed.is_ok());
    }

    #[test]
    fn test_checkbox_present_is_true() {
        for value in ["", "on", "true", "false", "1"] {
            let parsed = parse_checkbox().run(&raw(&[value]), CheckStatus::Check);
            assert!(parsed.value, "checkbox with value {value:?} should be ticked");
            assert!(parsed.is_ok());
        }
    }

    #[test]
    fn test_guard_skipped_when_dont_check() {
        let parser = parse_string().guard(|_| Some(FieldError::MustBePresent));
        let parsed = parser.run(&raw(&["x"]), CheckStatus::DontCheck);
        assert!(parsed.is_ok());
        assert_eq!(parsed.status, CheckStatus::DontCheck);
    }

    #[test]
    fn test_guard_failure_keeps_checking() {
        let parser = parse_string()
            .guard(|_| Some(FieldError::MustBePresent))
            .guard(|_| Some(FieldError::MustBeUnique));
        let parsed = parser.run(&raw(&["x"]), CheckStatus::Check);
        assert_eq!(parsed.status, CheckStatus::Check);
        assert_eq!(
            parsed.errors,
            vec![FieldError::MustBeUnique, FieldError::MustBePresent]
        );
    }

    #[test]
    fn test_map_keeps_errors() {
        let parser = parse_int().map(|n| n * 2);
        let parsed = parser.run(&raw(&["nope"]), CheckStatus::Check);
        assert_eq!(parsed.value, 0);
        assert_eq!(parsed.errors, vec![FieldError::MustBeInt]);
        assert_eq!(parsed.status, CheckStatus::DontCheck);

        let parsed = parser.run(&raw(&["21"]), CheckStatus::Check);
        assert_eq!(parsed.value, 42);
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = parse_int();
        let cloned = parser.clone();
        assert_eq!(parser.run(&raw(&["1"]), CheckStatus::Check).value, 1);
        assert_eq!(cloned.run(&raw(&["2"]), CheckStatus::Check).value, 2);
    }
}
