//! Stock matchers.
//!
//! These cover the predicates test suites reach for most often. Each one can be
//! used directly in an assertion or as a schema leaf through
//! [`Schema::matcher`](crate::Schema::matcher). [`instance_of`] is the
//! matcher-based counterpart of [`TypeValidator`](crate::TypeValidator) and
//! follows the same optionality rules: only `instance_of(Kind::Any)` and
//! [`nullable`] matchers accept `null`.

use regex::Regex;
use serde_json::Value;

use crate::error::ErrorList;
use crate::path::JsonPath;
use crate::schema::{value_type_name, Kind, Validator};

use super::{Matcher, PredicateValidator};

/// Matches values of a given [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstanceOf {
    kind: Kind,
}

/// Creates a matcher accepting values of `kind`.
///
/// ```rust
/// use shapecheck::matcher::instance_of;
/// use shapecheck::{Kind, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object(
///     Schema::fields()
///         .field("id", Schema::matcher(instance_of(Kind::Integer)))
///         .field("extra", Schema::matcher(instance_of(Kind::Any))),
/// );
///
/// assert!(schema.is_valid(&json!({"id": 1})));
/// assert_eq!(
///     schema.errors(&json!({"id": "1"})).messages(),
///     vec!["Field [id]: is not an instance of Integer (received String)"]
/// );
/// ```
pub fn instance_of(kind: Kind) -> InstanceOf {
    InstanceOf { kind }
}

impl Matcher for InstanceOf {
    fn matches(&self, value: &Value) -> bool {
        self.kind.accepts(value)
    }

    fn describe(&self) -> String {
        format!("an instance of {}", self.kind)
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        format!(
            "is not an instance of {} (received {})",
            self.kind,
            value_type_name(value)
        )
    }
}

/// Matches `null` or whatever the inner matcher accepts.
///
/// When the inner matcher wraps a validator, `Nullable` behaves as that
/// validator for non-null values, so nested errors keep their own paths.
#[derive(Debug, Clone)]
pub struct Nullable<M> {
    inner: M,
}

/// Creates a matcher accepting `null` in addition to the values `inner` accepts.
pub fn nullable<M: Matcher>(inner: M) -> Nullable<M> {
    Nullable { inner }
}

impl<M: Matcher> Matcher for Nullable<M> {
    fn matches(&self, value: &Value) -> bool {
        value.is_null() || self.inner.matches(value)
    }

    fn describe(&self) -> String {
        format!("null or {}", self.inner.describe())
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        self.inner.describe_mismatch(value)
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        self.inner.as_validator().map(|_| self as &dyn Validator)
    }
}

impl<M: Matcher> Validator for Nullable<M> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        if value.is_null() {
            return;
        }
        match self.inner.as_validator() {
            Some(inner) => inner.check(value, path, errors),
            None => PredicateValidator::new(self).check(value, path, errors),
        }
    }
}

/// Matches values equal to an expected value.
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo {
    expected: Value,
}

/// Creates a matcher accepting only `expected`.
pub fn equal_to(expected: Value) -> EqualTo {
    EqualTo { expected }
}

impl Matcher for EqualTo {
    fn matches(&self, value: &Value) -> bool {
        *value == self.expected
    }

    fn describe(&self) -> String {
        format!("equal to {}", self.expected)
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        format!("was {}", value)
    }
}

/// Matches strings against a regular expression.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

/// Creates a matcher accepting strings that match `pattern`.
///
/// Returns an error if the pattern is not a valid regular expression.
///
/// ```rust
/// use shapecheck::matcher::matches_pattern;
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let email = Schema::matcher(matches_pattern(r"^[^@]+@[^@]+$").unwrap());
///
/// assert!(email.is_valid(&json!("a@b.io")));
/// assert_eq!(
///     email.errors(&json!("nope")).messages(),
///     vec![r#"Field : was "nope""#]
/// );
/// ```
pub fn matches_pattern(pattern: &str) -> Result<Pattern, regex::Error> {
    Ok(Pattern {
        regex: Regex::new(pattern)?,
    })
}

impl Matcher for Pattern {
    fn matches(&self, value: &Value) -> bool {
        value.as_str().is_some_and(|s| self.regex.is_match(s))
    }

    fn describe(&self) -> String {
        format!("a string matching /{}/", self.regex.as_str())
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        match value {
            Value::String(_) => format!("was {}", value),
            _ => format!("was {}, not a string", value_type_name(value)),
        }
    }
}

/// Matches values accepted by a closure.
pub struct Predicate<F> {
    description: String,
    f: F,
}

/// Creates a matcher from a closure and a description of what it accepts.
///
/// The matcher gives no mismatch explanation, so failures read
/// `does not match <description> (got: <value>)`.
///
/// ```rust
/// use shapecheck::matcher::predicate;
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let short = Schema::matcher(predicate("a short string", |v| {
///     v.as_str().is_some_and(|s| s.len() <= 3)
/// }));
///
/// assert!(short.is_valid(&json!("abc")));
/// assert_eq!(
///     short.errors(&json!("abcd")).messages(),
///     vec![r#"Field : does not match a short string (got: "abcd")"#]
/// );
/// ```
pub fn predicate<F>(description: impl Into<String>, f: F) -> Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    Predicate {
        description: description.into(),
        f,
    }
}

impl<F> Matcher for Predicate<F>
where
    F: Fn(&Value) -> bool + Send + Sync,
{
    fn matches(&self, value: &Value) -> bool {
        (self.f)(value)
    }

    fn describe(&self) -> String {
        self.description.clone()
    }
}
