//! Field-level error types.
//!
//! This module provides [`FieldError`] for a single decoding failure and
//! [`ErrorRecord`] for every error collected against one field name.

use std::fmt::{self, Display};

use stillwater::{NonEmptyVec, Semigroup};
use thiserror::Error;

/// A single reason why a submitted field was rejected.
///
/// `FieldError` is a closed set of error kinds. Variants that describe a
/// threshold carry the exact limit so translators can format it into the
/// message. The `Display` implementation renders the British English message
/// (the same text the [`EnGb`](crate::EnGb) translator produces).
///
/// # Example
///
/// ```rust
/// use inquest::FieldError;
///
/// let error = FieldError::MustBeIntLessThan(100);
///
/// assert_eq!(error.code(), "must_be_int_less_than");
/// assert_eq!(error.to_string(), "must be less than 100");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// The field was blank.
    #[error("must not be blank")]
    MustBePresent,
    /// The value was not a base-10 integer.
    #[error("must be a whole number")]
    MustBeInt,
    /// The value was not a decimal number.
    #[error("must be a number")]
    MustBeFloat,
    /// The value did not contain exactly one `@`.
    #[error("must be an email")]
    MustBeEmail,
    /// The value was not a phone number.
    #[error("must be a phone number")]
    MustBePhoneNumber,
    /// The value was not an absolute URL.
    #[error("must be a URL")]
    MustBeUrl,
    /// The value was not a `YYYY-MM-DD` calendar date.
    #[error("must be a date")]
    MustBeDate,
    /// The value was not an `HH:MM` or `HH:MM:SS` time of day.
    #[error("must be a time")]
    MustBeTime,
    /// The value was not a `<date>T<time>` local date and time.
    #[error("must be a date and time")]
    MustBeDateTime,
    /// The value was not a `#rrggbb` hex colour.
    #[error("must be a hex colour code")]
    MustBeColour,
    /// The string had too few characters.
    #[error("must be more than {0} characters")]
    MustBeStringLengthMoreThan(usize),
    /// The string had too many characters.
    #[error("must be less than {0} characters")]
    MustBeStringLengthLessThan(usize),
    /// The integer was too small.
    #[error("must be more than {0}")]
    MustBeIntMoreThan(i64),
    /// The integer was too large.
    #[error("must be less than {0}")]
    MustBeIntLessThan(i64),
    /// The number was too small.
    #[error("must be more than {0}")]
    MustBeFloatMoreThan(f64),
    /// The number was too large.
    #[error("must be less than {0}")]
    MustBeFloatLessThan(f64),
    /// A checkbox that must be ticked was not.
    #[error("must be accepted")]
    MustBeAccepted,
    /// The value did not match the value it confirms.
    #[error("doesn't match")]
    MustConfirm,
    /// The value is already taken. Never produced by a parser; callers add it
    /// with [`Form::add_error`](crate::Form::add_error).
    #[error("is already in use")]
    MustBeUnique,
    /// A caller-supplied message.
    #[error("{0}")]
    CustomError(String),
}

impl FieldError {
    /// Returns the machine-readable code for this error kind.
    ///
    /// Codes are stable snake_case identifiers, suitable for mapping onto
    /// client-side validation rules.
    pub fn code(&self) -> &'static str {
        match self {
            FieldError::MustBePresent => "must_be_present",
            FieldError::MustBeInt => "must_be_int",
            FieldError::MustBeFloat => "must_be_float",
            FieldError::MustBeEmail => "must_be_email",
            FieldError::MustBePhoneNumber => "must_be_phone_number",
            FieldError::MustBeUrl => "must_be_url",
            FieldError::MustBeDate => "must_be_date",
            FieldError::MustBeTime => "must_be_time",
            FieldError::MustBeDateTime => "must_be_date_time",
            FieldError::MustBeColour => "must_be_colour",
            FieldError::MustBeStringLengthMoreThan(_) => "must_be_string_length_more_than",
            FieldError::MustBeStringLengthLessThan(_) => "must_be_string_length_less_than",
            FieldError::MustBeIntMoreThan(_) => "must_be_int_more_than",
            FieldError::MustBeIntLessThan(_) => "must_be_int_less_than",
            FieldError::MustBeFloatMoreThan(_) => "must_be_float_more_than",
            FieldError::MustBeFloatLessThan(_) => "must_be_float_less_than",
            FieldError::MustBeAccepted => "must_be_accepted",
            FieldError::MustConfirm => "must_confirm",
            FieldError::MustBeUnique => "must_be_unique",
            FieldError::CustomError(_) => "custom_error",
        }
    }
}

/// All errors collected against one field name during a run.
///
/// The error list is a [`NonEmptyVec`], so a record always holds at least one
/// error. Errors are ordered most-recently-added first.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorRecord {
    /// The field name the errors belong to.
    pub name: String,
    /// The errors, most recent first.
    pub errors: NonEmptyVec<FieldError>,
}

impl ErrorRecord {
    /// Creates a record holding a single error.
    pub fn single(name: impl Into<String>, error: FieldError) -> Self {
        Self {
            name: name.into(),
            errors: NonEmptyVec::singleton(error),
        }
    }

    /// Creates a record from a list of errors.
    ///
    /// Returns `None` if the list is empty, since a field without errors has
    /// no record.
    pub fn from_errors(name: impl Into<String>, errors: Vec<FieldError>) -> Option<Self> {
        let mut errors = errors.into_iter();
        let head = NonEmptyVec::singleton(errors.next()?);
        Some(Self {
            name: name.into(),
            errors: errors.fold(head, |acc, e| acc.combine(NonEmptyVec::singleton(e))),
        })
    }

    /// Puts an error in front of the existing ones.
    pub fn prepend(&mut self, error: FieldError) {
        self.errors = NonEmptyVec::singleton(error).combine(self.errors.clone());
    }

    /// Returns an iterator over the errors, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Returns the number of errors in this record.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns false since a record is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.name)?;
        for (i, error) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

/// Errors raised by crate-level operations outside of form decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InquestError {
    /// A locale tag did not name a bundled translator.
    #[error("unknown locale '{0}', expected one of: en, en-GB, en-US")]
    UnknownLocale(String),
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldError>();
    assert_sync::<FieldError>();
    assert_send::<ErrorRecord>();
    assert_sync::<ErrorRecord>();
};
