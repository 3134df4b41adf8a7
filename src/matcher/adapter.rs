//! Adapters between matchers and validators.

use serde_json::Value;

use crate::error::{ErrorList, SchemaError};
use crate::path::JsonPath;
use crate::schema::Validator;

use super::Matcher;

/// A validator that delegates to a [`Matcher`].
///
/// When the matcher rejects a value, one `Field <path>: <description>` error is
/// appended. The description is the matcher's mismatch explanation, or, when
/// that is empty, `does not match <expectation> (got: <value>)`, or, when the
/// expectation is empty too, `validation failed (got: <value>)`.
///
/// A matcher that wraps a validator of this crate is not evaluated as a
/// predicate: its validator runs directly, so nested errors keep their own
/// paths.
///
/// # Example
///
/// ```rust
/// use shapecheck::matcher::equal_to;
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let version = Schema::matcher(equal_to(json!(2)));
/// assert!(version.is_valid(&json!(2)));
/// assert_eq!(version.errors(&json!(3)).messages(), vec!["Field : was 3"]);
/// ```
#[derive(Debug, Clone)]
pub struct PredicateValidator<M> {
    matcher: M,
}

impl<M: Matcher> PredicateValidator<M> {
    /// Wraps `matcher`.
    pub fn new(matcher: M) -> Self {
        Self { matcher }
    }

    /// Returns the wrapped matcher.
    pub fn matcher(&self) -> &M {
        &self.matcher
    }

    fn describe_failure(&self, value: &Value) -> String {
        let mismatch = self.matcher.describe_mismatch(value);
        if !mismatch.trim().is_empty() {
            return mismatch;
        }

        let expectation = self.matcher.describe();
        if !expectation.trim().is_empty() {
            return format!("does not match {} (got: {})", expectation, value);
        }

        format!("validation failed (got: {})", value)
    }
}

impl<M: Matcher> Validator for PredicateValidator<M> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        if let Some(inner) = self.matcher.as_validator() {
            inner.check(value, path, errors);
            return;
        }

        if !self.matcher.matches(value) {
            errors.push(SchemaError::Predicate {
                path: path.clone(),
                description: self.describe_failure(value),
            });
        }
    }
}

/// A matcher that succeeds when a validator reports no errors.
///
/// The mismatch description lists every error on its own line, each prefixed
/// with `- `, which makes it suitable as the failure report of an assertion.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Matcher, Schema};
/// use serde_json::json;
///
/// let matcher = Schema::as_matcher(Schema::object(
///     Schema::fields()
///         .field("id", Schema::integer())
///         .field("name", Schema::string()),
/// ));
///
/// assert!(matcher.matches(&json!({"id": 1, "name": "Alice"})));
/// assert!(!matcher.matches(&json!({"id": "1"})));
/// assert_eq!(
///     matcher.describe_mismatch(&json!({"id": "1"})),
///     "- Field [id] has invalid type (expected Integer, received String)\n\
///      - Field [name] is required"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ValidatorMatcher<V> {
    validator: V,
}

impl<V: Validator> ValidatorMatcher<V> {
    /// Wraps `validator`.
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Returns the wrapped validator.
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Extracts the wrapped validator.
    pub fn into_inner(self) -> V {
        self.validator
    }
}

impl<V: Validator> Matcher for ValidatorMatcher<V> {
    fn matches(&self, value: &Value) -> bool {
        self.validator.is_valid(value)
    }

    fn describe(&self) -> String {
        "value conforming to the schema".to_string()
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        self.validator.errors(value).to_report()
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        Some(&self.validator)
    }
}
