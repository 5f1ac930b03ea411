//! Forms: a schema, submitted values and the errors from the last run.
//!
//! A [`Form`] pairs a [`Schema`] with the values a user submitted. Running
//! it yields either the decoded model or a new form carrying per-field
//! errors, ready to re-render with feedback and to run again.
//!
//! # Example
//!
//! ```rust
//! use inquest::{field, parse_email, parse_string, success, FieldError, Form, Schema};
//! use stillwater::Validation;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Contact {
//!     name: String,
//!     email: String,
//! }
//!
//! fn contact() -> Schema<Contact> {
//!     field("name", parse_string().check_not_empty(), |name| {
//!         field("email", parse_email(), move |email| {
//!             success(Contact { name: name.clone(), email })
//!         })
//!     })
//! }
//!
//! let form = Form::new(contact())
//!     .add_values([("name", "Louis"), ("email", "not an email")]);
//!
//! match form.run() {
//!     Validation::Success(contact) => println!("Hello, {}", contact.name),
//!     Validation::Failure(form) => {
//!         assert_eq!(form.field_errors("email"), vec![FieldError::MustBeEmail]);
//!         assert_eq!(form.field_error_messages("email"), vec!["must be an email"]);
//!         assert_eq!(form.field_value("email"), "not an email");
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use stillwater::Validation;
use tracing::debug;

use crate::error::{ErrorRecord, FieldError};
use crate::schema::Schema;
use crate::translate::{EnGb, Translator};
use crate::values::ValueStore;

/// The result of running a form: the decoded model, or the form annotated
/// with errors.
pub type DecodeResult<M> = Validation<M, Form<M>>;

/// A schema together with submitted values and collected errors.
///
/// Forms are immutable: every method that changes something consumes the
/// form and returns a new one. Clone a form to keep the original.
pub struct Form<M> {
    translator: Arc<dyn Translator>,
    values: ValueStore,
    errors: Vec<ErrorRecord>,
    schema: Schema<M>,
}

impl<M> Clone for Form<M> {
    fn clone(&self) -> Self {
        Self {
            translator: Arc::clone(&self.translator),
            values: self.values.clone(),
            errors: self.errors.clone(),
            schema: self.schema.clone(),
        }
    }
}

impl<M> fmt::Debug for Form<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Form")
            .field("values", &self.values)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl<M: 'static> Form<M> {
    /// Creates a form with no values, no errors and the [`EnGb`] translator.
    pub fn new(schema: Schema<M>) -> Self {
        Self {
            translator: Arc::new(EnGb),
            values: ValueStore::new(),
            errors: Vec::new(),
            schema,
        }
    }

    /// Replaces the translator used by [`field_error_messages`](Self::field_error_messages).
    ///
    /// Values and errors are left untouched.
    pub fn language<L: Translator + 'static>(mut self, translator: L) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Adds a string value ahead of existing values.
    pub fn add_string(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.add_string(name, value);
        self
    }

    /// Adds an integer value, formatted in base 10, ahead of existing values.
    pub fn add_int(mut self, name: impl Into<String>, value: i64) -> Self {
        self.values.add_int(name, value);
        self
    }

    /// Adds a batch of values ahead of existing values, keeping the batch's
    /// own order.
    pub fn add_values<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values.add_values(pairs);
        self
    }

    /// Replaces all values.
    pub fn set_values<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.values.set_values(pairs);
        self
    }

    /// Adds an error found outside the schema, such as a uniqueness check
    /// against a database.
    ///
    /// The error goes in front of any existing errors for the field. The
    /// schema is not re-run.
    pub fn add_error(mut self, name: impl Into<String>, error: FieldError) -> Self {
        let name = name.into();
        match self.errors.iter_mut().find(|record| record.name == name) {
            Some(record) => record.prepend(error),
            None => self.errors.insert(0, ErrorRecord::single(name, error)),
        }
        self
    }

    /// Runs the schema over the form's values.
    ///
    /// Returns `Success` with the model if no field produced an error.
    /// Otherwise returns `Failure` with a form holding the same values and
    /// translator and the errors from this run; errors from earlier runs or
    /// [`add_error`](Self::add_error) are not carried over.
    pub fn run(&self) -> DecodeResult<M> {
        let (model, errors) = self.schema.run(&self.values);
        if errors.is_empty() {
            debug!(values = self.values.len(), "form decoded");
            return Validation::Success(model);
        }

        debug!(
            values = self.values.len(),
            failed_fields = errors.len(),
            "form rejected"
        );
        Validation::Failure(Self {
            errors,
            ..self.clone()
        })
    }

    /// Returns all values, most recent first.
    pub fn all_values(&self) -> &[(String, String)] {
        self.values.all()
    }

    /// Returns all error records, most recently processed field first.
    pub fn all_errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    /// Returns true if the form carries any errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the most recent value for `name`, or an empty string.
    pub fn field_value(&self, name: &str) -> String {
        self.values.field_value(name)
    }

    /// Returns every value for `name`, most recent first.
    pub fn field_values(&self, name: &str) -> Vec<String> {
        self.values.field_values(name)
    }

    /// Returns the errors recorded against `name`, most recent first.
    pub fn field_errors(&self, name: &str) -> Vec<FieldError> {
        self.errors
            .iter()
            .filter(|record| record.name == name)
            .flat_map(|record| record.iter().cloned())
            .collect()
    }

    /// Returns the translated messages for the errors on `name`.
    pub fn field_error_messages(&self, name: &str) -> Vec<String> {
        self.field_errors(name)
            .iter()
            .map(|error| self.translator.translate(error))
            .collect()
    }

    /// Returns the form's translator.
    pub fn translator(&self) -> &dyn Translator {
        &*self.translator
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Form<String>>();
    assert_sync::<Form<String>>();
};
