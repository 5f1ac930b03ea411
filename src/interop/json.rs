//! JSON export of field errors.

use serde_json::{json, Map, Value};

use crate::error::{ErrorRecord, FieldError};
use crate::form::Form;
use crate::translate::Translator;

/// Trait for converting error types to JSON.
pub trait ToJson {
    /// Converts this value to a `serde_json::Value`.
    fn to_json(&self) -> Value;
}

impl ToJson for FieldError {
    /// `{"code": ...}`, plus `"limit"` for threshold errors and `"message"`
    /// for custom errors.
    fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("code".to_string(), json!(self.code()));
        match self {
            FieldError::MustBeStringLengthMoreThan(limit)
            | FieldError::MustBeStringLengthLessThan(limit) => {
                object.insert("limit".to_string(), json!(limit));
            }
            FieldError::MustBeIntMoreThan(limit) | FieldError::MustBeIntLessThan(limit) => {
                object.insert("limit".to_string(), json!(limit));
            }
            FieldError::MustBeFloatMoreThan(limit) | FieldError::MustBeFloatLessThan(limit) => {
                object.insert("limit".to_string(), json!(limit));
            }
            FieldError::CustomError(message) => {
                object.insert("message".to_string(), json!(message));
            }
            _ => {}
        }
        Value::Object(object)
    }
}

impl ToJson for ErrorRecord {
    fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "errors": self.iter().map(|error| error.to_json()).collect::<Vec<_>>(),
        })
    }
}

/// Exports a form's errors as a JSON object keyed by field name.
///
/// Each field maps to a list of `{"code", "message"}` objects, most recent
/// first, where `message` comes from the form's translator. Threshold errors
/// also carry `"limit"`.
///
/// # Example
///
/// ```rust
/// use inquest::{field, parse_int, success, Form};
/// use inquest::interop::errors_to_json;
/// use serde_json::json;
///
/// let form = Form::new(field("age", parse_int().check_int_less_than(130), success))
///     .add_string("age", "200");
/// let failed = form.run().into_result().unwrap_err();
///
/// assert_eq!(
///     errors_to_json(&failed),
///     json!({
///         "age": [{"code": "must_be_int_less_than", "limit": 130, "message": "must be less than 130"}]
///     })
/// );
/// ```
pub fn errors_to_json<M: 'static>(form: &Form<M>) -> Value {
    let translator = form.translator();
    let mut fields = Map::new();

    for record in form.all_errors() {
        let entry = fields
            .entry(record.name.clone())
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(list) = entry {
            list.extend(record.iter().map(|error| describe(error, translator)));
        }
    }

    Value::Object(fields)
}

fn describe(error: &FieldError, translator: &dyn Translator) -> Value {
    let mut value = error.to_json();
    if let Value::Object(object) = &mut value {
        object.insert("message".to_string(), json!(translator.translate(error)));
    }
    value
}
