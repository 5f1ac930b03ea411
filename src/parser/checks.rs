//! Checks that validate an already-parsed value.
//!
//! Every check is a builder method on [`Parser`] that returns a new parser
//! wrapping the previous one. Checks are skipped once the status is
//! [`CheckStatus::DontCheck`] and never change the status themselves.

use crate::error::FieldError;

use super::{CheckStatus, Parser};

impl Parser<String> {
    /// Rejects an empty string with [`FieldError::MustBePresent`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use inquest::{parse_string, CheckStatus, FieldError};
    ///
    /// let parsed = parse_string().check_not_empty().run(&[], CheckStatus::Check);
    /// assert_eq!(parsed.errors, vec![FieldError::MustBePresent]);
    /// ```
    pub fn check_not_empty(self) -> Self {
        self.guard(|value| value.is_empty().then_some(FieldError::MustBePresent))
    }

    /// Requires strictly fewer than `limit` characters.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn check_string_length_less_than(self, limit: usize) -> Self {
        self.guard(move |value| {
            (value.chars().count() >= limit)
                .then_some(FieldError::MustBeStringLengthLessThan(limit))
        })
    }

    /// Requires strictly more than `limit` characters.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    pub fn check_string_length_more_than(self, limit: usize) -> Self {
        self.guard(move |value| {
            (value.chars().count() <= limit)
                .then_some(FieldError::MustBeStringLengthMoreThan(limit))
        })
    }
}

impl Parser<i64> {
    /// Requires the integer to be strictly less than `limit`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inquest::{parse_int, CheckStatus, FieldError};
    ///
    /// let parser = parse_int().check_int_less_than(100);
    ///
    /// assert!(parser.run(&["99".to_string()], CheckStatus::Check).is_ok());
    /// assert_eq!(
    ///     parser.run(&["100".to_string()], CheckStatus::Check).errors,
    ///     vec![FieldError::MustBeIntLessThan(100)]
    /// );
    /// ```
    pub fn check_int_less_than(self, limit: i64) -> Self {
        self.guard(move |value| (*value >= limit).then_some(FieldError::MustBeIntLessThan(limit)))
    }

    /// Requires the integer to be strictly more than `limit`.
    pub fn check_int_more_than(self, limit: i64) -> Self {
        self.guard(move |value| (*value <= limit).then_some(FieldError::MustBeIntMoreThan(limit)))
    }
}

impl Parser<f64> {
    /// Requires the number to be strictly less than `limit`.
    pub fn check_float_less_than(self, limit: f64) -> Self {
        self.guard(move |value| {
            (*value >= limit).then_some(FieldError::MustBeFloatLessThan(limit))
        })
    }

    /// Requires the number to be strictly more than `limit`.
    pub fn check_float_more_than(self, limit: f64) -> Self {
        self.guard(move |value| {
            (*value <= limit).then_some(FieldError::MustBeFloatMoreThan(limit))
        })
    }
}

impl Parser<bool> {
    /// Requires a ticked checkbox, for "I accept the terms" style fields.
    pub fn check_accepted(self) -> Self {
        self.guard(|value| (!*value).then_some(FieldError::MustBeAccepted))
    }
}

impl<T: PartialEq + Send + Sync + 'static> Parser<T> {
    /// Requires the value to equal `other`, typically a value decoded from an
    /// earlier field such as a password being confirmed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inquest::{parse_string, CheckStatus, FieldError};
    ///
    /// let parser = parse_string().check_confirms("hunter2".to_string());
    ///
    /// assert!(parser.run(&["hunter2".to_string()], CheckStatus::Check).is_ok());
    /// assert_eq!(
    ///     parser.run(&[], CheckStatus::Check).errors,
    ///     vec![FieldError::MustConfirm]
    /// );
    /// ```
    pub fn check_confirms(self, other: T) -> Self {
        self.guard(move |value| (*value != other).then_some(FieldError::MustConfirm))
    }
}

impl<T: Clone + 'static> Parser<T> {
    /// Adds a custom check.
    ///
    /// The predicate returns the (possibly adjusted) value on success or a
    /// message on failure. A failure is reported as
    /// [`FieldError::CustomError`] and keeps the value as it was before the
    /// check.
    ///
    /// # Example
    ///
    /// ```rust
    /// use inquest::{parse_int, CheckStatus, FieldError};
    ///
    /// let even = parse_int().check(|n| {
    ///     if n % 2 == 0 {
    ///         Ok(n)
    ///     } else {
    ///         Err("must be even".to_string())
    ///     }
    /// });
    ///
    /// let parsed = even.run(&["3".to_string()], CheckStatus::Check);
    /// assert_eq!(parsed.value, 3);
    /// assert_eq!(parsed.errors, vec![FieldError::CustomError("must be even".to_string())]);
    /// ```
    pub fn check<F>(self, predicate: F) -> Self
    where
        F: Fn(T) -> Result<T, String> + Send + Sync + 'static,
    {
        let inner = self.run;
        Parser::new(move |values, status| {
            let parsed = inner(values, status);
            if parsed.status == CheckStatus::DontCheck {
                return parsed;
            }
            match predicate(parsed.value.clone()) {
                Ok(value) => super::Parsed { value, ..parsed },
                Err(message) => parsed.with_error(FieldError::CustomError(message)),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_checkbox, parse_float, parse_int, parse_string};

    fn raw(value: &str) -> Vec<String> {
        vec![value.to_string()]
    }

    #[test]
    fn test_int_less_than_boundaries() {
        let parser = parse_int().check_int_less_than(100);

        for ok in ["99", "-10"] {
            assert!(parser.run(&raw(ok), CheckStatus::Check).is_ok(), "{ok} should pass");
        }
        for bad in ["100", "150"] {
            let parsed = parser.run(&raw(bad), CheckStatus::Check);
            assert_eq!(parsed.errors, vec![FieldError::MustBeIntLessThan(100)]);
            assert_eq!(parsed.status, CheckStatus::Check);
        }
    }

    #[test]
    fn test_int_less_than_short_circuits_on_parse_failure() {
        let parsed = parse_int()
            .check_int_less_than(100)
            .run(&raw("lots"), CheckStatus::Check);
        assert_eq!(parsed.errors, vec![FieldError::MustBeInt]);
    }

    #[test]
    fn test_int_more_than_is_strict() {
        let parser = parse_int().check_int_more_than(0);
        assert!(parser.run(&raw("1"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&raw("0"), CheckStatus::Check).errors,
            vec![FieldError::MustBeIntMoreThan(0)]
        );
    }

    #[test]
    fn test_failed_checks_accumulate_most_recent_first() {
        let parser = parse_int().check_int_more_than(10).check_int_less_than(5);
        let parsed = parser.run(&raw("7"), CheckStatus::Check);
        assert_eq!(
            parsed.errors,
            vec![FieldError::MustBeIntLessThan(5), FieldError::MustBeIntMoreThan(10)]
        );
    }

    #[test]
    fn test_string_length_counts_characters() {
        let parser = parse_string().check_string_length_less_than(4);
        assert!(parser.run(&raw("日本語"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&raw("abcd"), CheckStatus::Check).errors,
            vec![FieldError::MustBeStringLengthLessThan(4)]
        );

        let parser = parse_string().check_string_length_more_than(2);
        assert!(parser.run(&raw("abc"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&raw("ab"), CheckStatus::Check).errors,
            vec![FieldError::MustBeStringLengthMoreThan(2)]
        );
    }

    #[test]
    fn test_not_empty_and_length_both_report() {
        let parser = parse_string()
            .check_not_empty()
            .check_string_length_more_than(3);
        let parsed = parser.run(&[], CheckStatus::Check);
        assert_eq!(
            parsed.errors,
            vec![FieldError::MustBeStringLengthMoreThan(3), FieldError::MustBePresent]
        );
    }

    #[test]
    fn test_float_bounds() {
        let parser = parse_float().check_float_more_than(0.5).check_float_less_than(1.5);
        assert!(parser.run(&raw("1"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&raw("0.5"), CheckStatus::Check).errors,
            vec![FieldError::MustBeFloatMoreThan(0.5)]
        );
        assert_eq!(
            parser.run(&raw("1.5"), CheckStatus::Check).errors,
            vec![FieldError::MustBeFloatLessThan(1.5)]
        );
    }

    #[test]
    fn test_accepted() {
        let parser = parse_checkbox().check_accepted();
        assert!(parser.run(&raw("on"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&[], CheckStatus::Check).errors,
            vec![FieldError::MustBeAccepted]
        );
    }

    #[test]
    fn test_confirms() {
        let parser = parse_string().check_confirms("123".to_string());
        assert!(parser.run(&raw("123"), CheckStatus::Check).is_ok());
        assert_eq!(
            parser.run(&[], CheckStatus::Check).errors,
            vec![FieldError::MustConfirm]
        );
    }

    #[test]
    fn test_custom_check_can_replace_value() {
        let parser = parse_string().check(|s| Ok(s.to_lowercase()));
        let parsed = parser.run(&raw("MiXeD"), CheckStatus::Check);
        assert_eq!(parsed.value, "mixed");
    }

    #[test]
    fn test_custom_check_skipped_after_parse_failure() {
        let parser = parse_int().check(|_| Err("never".to_string()));
        let parsed = parser.run(&raw("x"), CheckStatus::Check);
        assert_eq!(parsed.errors, vec![FieldError::MustBeInt]);
    }

    #[test]
    fn test_checks_pass_through_incoming_dont_check() {
        let parser = parse_string().check_not_empty();
        let parsed = parser.run(&[], CheckStatus::DontCheck);
        assert!(parsed.is_ok());
        assert_eq!(parsed.status, CheckStatus::DontCheck);
    }
}
