//! Interoperability with client-side tooling.
//!
//! This module exports field errors as JSON, for front-ends that render
//! validation feedback themselves or hand it to a client-side validation
//! library.

pub mod json;

pub use json::{errors_to_json, ToJson};
