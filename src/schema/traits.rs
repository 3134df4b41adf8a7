//! The validator contract.
//!
//! This module provides the [`Validator`] trait every schema node implements,
//! and [`FnValidator`] for turning a closure into one.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ErrorList;
use crate::path::JsonPath;
use crate::ValidationResult;

/// A reusable, stateless check of a value against a schema fragment.
///
/// `check` never returns a result: it communicates the outcome by appending
/// zero or more path-qualified errors to `errors`. Invoking the same validator
/// twice on the same `(value, path)` with fresh lists yields identical errors.
///
/// The `Send + Sync` bounds allow one schema tree to be shared across threads
/// and used through trait objects like `Arc<dyn Validator>`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object(
///     Schema::fields()
///         .field("id", Schema::integer())
///         .field("name", Schema::string()),
/// );
///
/// assert!(schema.is_valid(&json!({"id": 1, "name": "Alice"})));
///
/// let errors = schema.errors(&json!({"name": "Alice"}));
/// assert_eq!(errors.messages(), vec!["Field [id] is required"]);
/// ```
pub trait Validator: Send + Sync {
    /// Validates `value` located at `path`, appending any violations to `errors`.
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList);

    /// Validates `value` from the root into a fresh list and returns it.
    fn errors(&self, value: &Value) -> ErrorList {
        let mut errors = ErrorList::new();
        self.check(value, &JsonPath::root(), &mut errors);
        tracing::debug!(errors = errors.len(), "validation finished");
        errors
    }

    /// Returns true when `value` produces no errors from the root.
    fn is_valid(&self, value: &Value) -> bool {
        self.errors(value).is_empty()
    }

    /// Validates `value` from the root and returns the outcome as a `Validation`.
    fn validate(&self, value: &Value) -> ValidationResult<()> {
        self.errors(value).into_validation()
    }
}

impl<V: Validator + ?Sized> Validator for &V {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        (**self).check(value, path, errors)
    }
}

impl<V: Validator + ?Sized> Validator for Box<V> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        (**self).check(value, path, errors)
    }
}

impl<V: Validator + ?Sized> Validator for Arc<V> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        (**self).check(value, path, errors)
    }
}

/// A validator backed by a closure.
///
/// The closure receives the same `(value, path, errors)` triple as
/// [`Validator::check`]. Like every other validator, it takes part in
/// optionality inference: a closure that appends nothing for `null` makes the
/// field it guards optional.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, SchemaError, Validator};
/// use serde_json::json;
///
/// let even = Schema::custom(|value, path, errors| {
///     if value.as_i64().map_or(true, |n| n % 2 != 0) {
///         errors.push(SchemaError::Predicate {
///             path: path.clone(),
///             description: "expected an even integer".to_string(),
///         });
///     }
/// });
///
/// assert!(even.is_valid(&json!(4)));
/// assert_eq!(
///     even.errors(&json!(3)).messages(),
///     vec!["Field : expected an even integer"]
/// );
/// ```
#[derive(Clone)]
pub struct FnValidator<F>(F);

impl<F> FnValidator<F>
where
    F: Fn(&Value, &JsonPath, &mut ErrorList) + Send + Sync,
{
    /// Wraps a closure.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&Value, &JsonPath, &mut ErrorList) + Send + Sync,
{
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        (self.0)(value, path, errors)
    }
}
