//! Null-tolerant wrapper for arbitrary validators.

use serde_json::Value;

use crate::error::ErrorList;
use crate::path::JsonPath;

use super::traits::Validator;

/// Accepts `null`, delegating every other value to the inner validator.
///
/// Object and array validators reject `null`, so a field holding one of them is
/// required. Wrapping it here makes the field optional and lets it be `null`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let address = Schema::object(Schema::fields().field("city", Schema::string()));
/// let user = Schema::object(
///     Schema::fields()
///         .field("name", Schema::string())
///         .field("address", Schema::nullable(address)),
/// );
///
/// assert!(user.is_valid(&json!({"name": "A"})));
/// assert!(user.is_valid(&json!({"name": "A", "address": null})));
/// assert_eq!(
///     user.errors(&json!({"name": "A", "address": {}})).messages(),
///     vec!["Field [address][city] is required"]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct NullableValidator<V> {
    inner: V,
}

impl<V: Validator> NullableValidator<V> {
    /// Wraps `inner`.
    pub fn new(inner: V) -> Self {
        Self { inner }
    }

    /// Returns the wrapped validator.
    pub fn inner(&self) -> &V {
        &self.inner
    }

    /// Extracts the wrapped validator.
    pub fn into_inner(self) -> V {
        self.inner
    }
}

impl<V: Validator> Validator for NullableValidator<V> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        if !value.is_null() {
            self.inner.check(value, path, errors);
        }
    }
}
