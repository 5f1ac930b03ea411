//! Error types for form decoding.
//!
//! This module provides [`FieldError`] for a single field-level failure,
//! [`ErrorRecord`] for the errors collected against one field name, and
//! [`InquestError`] for the few crate-level operations that can fail.

mod field_error;

pub use field_error::{ErrorRecord, FieldError, InquestError};
