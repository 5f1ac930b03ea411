//! Whole-form schemas.
//!
//! A [`Schema`] describes how to decode a model from named fields. It is
//! built by nesting [`field`] and [`multifield`] steps, each of which hands
//! its decoded value to a continuation that builds the rest of the schema,
//! and ends with [`success`], which returns the model.
//!
//! Every step always runs, whether or not earlier fields failed; a failed
//! field contributes its zero value to the model and an [`ErrorRecord`] to
//! the run. Because continuations receive earlier values, later fields can
//! be checked against them.
//!
//! # Example
//!
//! ```rust
//! use inquest::{field, parse_email, parse_int, parse_string, success, Schema, ValueStore};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Signup {
//!     email: String,
//!     age: i64,
//! }
//!
//! fn signup() -> Schema<Signup> {
//!     field("email", parse_email(), |email| {
//!         field("age", parse_int().check_int_more_than(17), move |age| {
//!             success(Signup { email: email.clone(), age })
//!         })
//!     })
//! }
//!
//! let values: ValueStore = [("email", "wib@example.com"), ("age", "30")].into_iter().collect();
//! let (model, errors) = signup().run(&values);
//!
//! assert!(errors.is_empty());
//! assert_eq!(model, Signup { email: "wib@example.com".to_string(), age: 30 });
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::error::ErrorRecord;
use crate::parser::{CheckStatus, Parser};
use crate::values::ValueStore;

pub(crate) type StepFn<M> = Arc<dyn Fn(&ValueStore, &mut Vec<ErrorRecord>) -> M + Send + Sync>;

/// A reusable description of how to decode a model of type `M`.
///
/// Schemas are immutable and cheap to clone, and can be shared across
/// threads and forms.
pub struct Schema<M> {
    step: StepFn<M>,
}

impl<M> Clone for Schema<M> {
    fn clone(&self) -> Self {
        Self {
            step: Arc::clone(&self.step),
        }
    }
}

impl<M> fmt::Debug for Schema<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("model", &std::any::type_name::<M>())
            .finish_non_exhaustive()
    }
}

impl<M: 'static> Schema<M> {
    fn new<F>(step: F) -> Self
    where
        F: Fn(&ValueStore, &mut Vec<ErrorRecord>) -> M + Send + Sync + 'static,
    {
        Self {
            step: Arc::new(step),
        }
    }

    /// Runs the schema over a value store.
    ///
    /// Returns the model together with one [`ErrorRecord`] per failed field,
    /// most recently processed field first. The model is only meaningful when
    /// the error list is empty.
    pub fn run(&self, values: &ValueStore) -> (M, Vec<ErrorRecord>) {
        let mut errors = Vec::new();
        let model = (self.step)(values, &mut errors);
        (model, errors)
    }
}

/// Decodes the most recent value submitted under `name`.
///
/// The parser sees a single value, or no value if `name` is absent. Its
/// errors, if any, are recorded against `name`, and the decoded value is
/// passed to `next` to build the rest of the schema.
pub fn field<T, M, F>(name: impl Into<String>, parser: Parser<T>, next: F) -> Schema<M>
where
    T: 'static,
    M: 'static,
    F: Fn(T) -> Schema<M> + Send + Sync + 'static,
{
    let name = name.into();
    Schema::new(move |values, errors| {
        let input: Vec<String> = values.latest(&name).map(str::to_string).into_iter().collect();
        let value = decode(&name, &parser, &input, errors);
        (next(value).step)(values, errors)
    })
}

/// Decodes every value submitted under `name`.
///
/// Identical to [`field`] except the parser sees all values for the name,
/// most recent first. Pair it with [`parse_list`](crate::parse_list) for
/// checkbox groups and repeated inputs.
pub fn multifield<T, M, F>(name: impl Into<String>, parser: Parser<T>, next: F) -> Schema<M>
where
    T: 'static,
    M: 'static,
    F: Fn(T) -> Schema<M> + Send + Sync + 'static,
{
    let name = name.into();
    Schema::new(move |values, errors| {
        let input = values.field_values(&name);
        let value = decode(&name, &parser, &input, errors);
        (next(value).step)(values, errors)
    })
}

/// Ends a schema, returning `model`.
pub fn success<M>(model: M) -> Schema<M>
where
    M: Clone + Send + Sync + 'static,
{
    Schema::new(move |_, _| model.clone())
}

fn decode<T: 'static>(
    name: &str,
    parser: &Parser<T>,
    input: &[String],
    errors: &mut Vec<ErrorRecord>,
) -> T {
    let parsed = parser.run(input, CheckStatus::Check);
    trace!(
        field = name,
        values = input.len(),
        errors = parsed.errors.len(),
        "decoded field"
    );
    if let Some(record) = ErrorRecord::from_errors(name, parsed.errors) {
        errors.insert(0, record);
    }
    parsed.value
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Schema<String>>();
    assert_sync::<Schema<String>>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::parser::{parse_int, parse_list, parse_string};

    #[derive(Debug, Clone, PartialEq)]
    struct Pair {
        a: i64,
        b: i64,
    }

    fn pair() -> Schema<Pair> {
        field("a", parse_int(), |a| {
            field("b", parse_int(), move |b| success(Pair { a, b }))
        })
    }

    fn errors_of(record: &ErrorRecord) -> Vec<FieldError> {
        record.iter().cloned().collect()
    }

    #[test]
    fn test_success_returns_model() {
        let (model, errors) = success(7).run(&ValueStore::new());
        assert_eq!(model, 7);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_fields_decode_in_order() {
        let values: ValueStore = [("a", "1"), ("b", "2")].into_iter().collect();
        let (model, errors) = pair().run(&values);
        assert_eq!(model, Pair { a: 1, b: 2 });
        assert!(errors.is_empty());
    }

    #[test]
    fn test_every_field_is_evaluated() {
        let values: ValueStore = [("a", "x"), ("b", "y")].into_iter().collect();
        let (model, errors) = pair().run(&values);
        assert_eq!(model, Pair { a: 0, b: 0 });
        assert_eq!(errors.len(), 2);
        // Most recently processed field first
        assert_eq!(errors[0].name, "b");
        assert_eq!(errors[1].name, "a");
        assert_eq!(errors_of(&errors[0]), vec![FieldError::MustBeInt]);
    }

    #[test]
    fn test_field_uses_most_recent_value() {
        let mut values = ValueStore::new();
        values.add_string("a", "1");
        values.add_string("a", "5");
        values.add_string("b", "2");
        let (model, _) = pair().run(&values);
        assert_eq!(model.a, 5);
    }

    #[test]
    fn test_multifield_sees_all_values() {
        let schema = multifield("n", parse_list(parse_int()), success);
        let mut values = ValueStore::new();
        values.add_string("n", "1");
        values.add_string("n", "2");
        values.add_string("n", "3");

        let (model, errors) = schema.run(&values);
        assert_eq!(model, vec![3, 2, 1]);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_continuation_sees_earlier_value() {
        let schema = field("password", parse_string(), |password: String| {
            field(
                "confirm",
                parse_string().check_confirms(password.clone()),
                move |_| success(password.clone()),
            )
        });

        let values: ValueStore = [("password", "123"), ("confirm", "124")].into_iter().collect();
        let (_, errors) = schema.run(&values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name, "confirm");
        assert_eq!(errors_of(&errors[0]), vec![FieldError::MustConfirm]);
    }

    #[test]
    fn test_schema_is_reusable() {
        let schema = pair();
        let first: ValueStore = [("a", "1"), ("b", "2")].into_iter().collect();
        let second: ValueStore = [("a", "3"), ("b", "4")].into_iter().collect();
        assert_eq!(schema.run(&first).0, Pair { a: 1, b: 2 });
        assert_eq!(schema.clone().run(&second).0, Pair { a: 3, b: 4 });
    }
}
