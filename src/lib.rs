//! # Inquest
//!
//! Decodes HTML form submissions into typed values, reporting every invalid
//! field at once so the form can be re-rendered with feedback.
//!
//! ## Overview
//!
//! A submission is an ordered list of `(name, value)` string pairs. Inquest
//! decodes it with a [`Schema`] built from per-field [`Parser`]s. Each
//! parser converts the raw text (an integer, an email, a date, ...) and may
//! be followed by checks (a range, a length, a confirmation). A field that
//! cannot be parsed skips its checks; a field that parses but fails a check
//! still runs the remaining checks. Every field is always evaluated, so a
//! failed run reports all problems together.
//!
//! ## Core Types
//!
//! - [`ValueStore`]: The submitted `(name, value)` pairs, most recent first
//! - [`Parser`]: Decodes one field; built with `parse_*` and `check_*`
//! - [`Schema`]: Composes fields into a model with [`field`], [`multifield`] and [`success`]
//! - [`Form`]: Runs a schema over values and exposes values and errors for display
//! - [`FieldError`] / [`ErrorRecord`]: Structured per-field errors
//! - [`Translator`]: Turns errors into messages ([`EnGb`], [`EnUs`], [`Locale`])
//!
//! ## Example
//!
//! ```rust
//! use inquest::{field, parse_int, parse_string, success, FieldError, Form, Schema};
//! use stillwater::Validation;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! fn person() -> Schema<Person> {
//!     field("name", parse_string().check_not_empty(), |name| {
//!         field("age", parse_int().check_int_more_than(0), move |age| {
//!             success(Person { name: name.clone(), age })
//!         })
//!     })
//! }
//!
//! // Valid input decodes to the model
//! let result = Form::new(person())
//!     .add_string("name", "Lucy")
//!     .add_int("age", 7)
//!     .run();
//! assert_eq!(result.into_result().unwrap(), Person { name: "Lucy".to_string(), age: 7 });
//!
//! // Invalid input reports every field
//! let result = Form::new(person()).add_string("age", "seven").run();
//! match result {
//!     Validation::Success(_) => unreachable!(),
//!     Validation::Failure(form) => {
//!         assert_eq!(form.field_errors("name"), vec![FieldError::MustBePresent]);
//!         assert_eq!(form.field_error_messages("age"), vec!["must be a whole number"]);
//!     }
//! }
//! ```

pub mod error;
pub mod form;
pub mod interop;
pub mod parser;
pub mod schema;
pub mod translate;
pub mod values;

pub use error::{ErrorRecord, FieldError, InquestError};
pub use form::{DecodeResult, Form};
pub use parser::{
    parse, parse_checkbox, parse_colour, parse_date, parse_date_time, parse_email, parse_float,
    parse_int, parse_list, parse_optional, parse_phone_number, parse_string, parse_time, parse_url,
    CheckStatus, Parsed, Parser,
};
pub use schema::{field, multifield, success, Schema};
pub use translate::{EnGb, EnUs, Locale, Translator};
pub use values::ValueStore;
