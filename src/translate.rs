//! Turning field errors into messages.
//!
//! A [`Translator`] maps a [`FieldError`] to the text shown next to a form
//! field. Two translators are bundled, [`EnGb`] and [`EnUs`]; any
//! `Fn(&FieldError) -> String` is a translator too. [`Locale`] selects a
//! bundled translator from a language tag.

use std::str::FromStr;

use crate::error::{FieldError, InquestError};

/// Maps a field error to a human-readable message.
pub trait Translator: Send + Sync {
    /// Returns the message for `error`.
    fn translate(&self, error: &FieldError) -> String;
}

impl<F> Translator for F
where
    F: Fn(&FieldError) -> String + Send + Sync,
{
    fn translate(&self, error: &FieldError) -> String {
        self(error)
    }
}

/// British English messages. This is the default translator for a new form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnGb;

impl Translator for EnGb {
    fn translate(&self, error: &FieldError) -> String {
        error.to_string()
    }
}

/// American English messages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnUs;

impl Translator for EnUs {
    fn translate(&self, error: &FieldError) -> String {
        match error {
            FieldError::MustBeColour => "must be a hex color code".to_string(),
            other => other.to_string(),
        }
    }
}

/// A bundled translator, selectable by language tag.
///
/// # Example
///
/// ```rust
/// use inquest::{FieldError, Locale, Translator};
///
/// let locale: Locale = "en-US".parse().unwrap();
/// assert_eq!(locale.translate(&FieldError::MustBeColour), "must be a hex color code");
///
/// assert!("fr-FR".parse::<Locale>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// British English.
    #[default]
    EnGb,
    /// American English.
    EnUs,
}

impl Translator for Locale {
    fn translate(&self, error: &FieldError) -> String {
        match self {
            Locale::EnGb => EnGb.translate(error),
            Locale::EnUs => EnUs.translate(error),
        }
    }
}

impl FromStr for Locale {
    type Err = InquestError;

    /// Accepts `en`, `en-GB` and `en-US`, case-insensitively, with `-` or `_`.
    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag.to_ascii_lowercase().replace('_', "-").as_str() {
            "en" | "en-gb" => Ok(Locale::EnGb),
            "en-us" => Ok(Locale::EnUs),
            _ => Err(InquestError::UnknownLocale(tag.to_string())),
        }
    }
}
