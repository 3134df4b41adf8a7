//! Assertion helpers for test suites.
//!
//! [`assert_that`] checks a value against any [`Matcher`] and panics with a
//! readable report when it does not match. [`assert_conforms!`](crate::assert_conforms)
//! does the same for a [`Validator`](crate::Validator), listing every error.

use serde_json::Value;

use crate::matcher::Matcher;

/// Builds the report shown when `value` fails `matcher`.
///
/// Multi-line mismatch descriptions are indented under the `Which:` label.
pub fn failure_report<M: Matcher + ?Sized>(value: &Value, matcher: &M) -> String {
    let mismatch = matcher.describe_mismatch(value).replace('\n', "\n          ");
    format!(
        "Expected: {}\n  Actual: {}\n   Which: {}",
        matcher.describe(),
        value,
        mismatch
    )
}

/// Panics with a [`failure_report`] unless `matcher` accepts `value`.
///
/// # Example
///
/// ```rust
/// use shapecheck::assert::assert_that;
/// use shapecheck::matcher::equal_to;
/// use serde_json::json;
///
/// assert_that(&json!(1), &equal_to(json!(1)));
/// ```
///
/// ```rust,should_panic
/// use shapecheck::assert::assert_that;
/// use shapecheck::matcher::equal_to;
/// use serde_json::json;
///
/// assert_that(&json!(2), &equal_to(json!(1)));
/// ```
#[track_caller]
pub fn assert_that<M: Matcher + ?Sized>(value: &Value, matcher: &M) {
    if !matcher.matches(value) {
        panic!("{}", failure_report(value, matcher));
    }
}

/// Asserts that a value conforms to a validator.
///
/// On failure the panic message lists every error, one per line.
///
/// ```rust
/// use shapecheck::{assert_conforms, Schema};
/// use serde_json::json;
///
/// let user = Schema::object(Schema::fields().field("id", Schema::integer()));
/// assert_conforms!(json!({"id": 7}), user);
/// ```
#[macro_export]
macro_rules! assert_conforms {
    ($value:expr, $validator:expr $(,)?) => {
        $crate::assert::assert_that(&$value, &$crate::ValidatorMatcher::new(&$validator))
    };
}
