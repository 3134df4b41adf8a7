//! Interoperation with predicate-style matchers.
//!
//! Assertion frameworks describe expectations as matchers: a boolean predicate
//! plus human-readable descriptions of what was expected and what went wrong.
//! This module defines that contract as [`Matcher`] and bridges it with
//! [`Validator`](crate::Validator) in both directions:
//!
//! - [`PredicateValidator`] lets any matcher act as a leaf of a schema tree;
//! - [`ValidatorMatcher`] lets any schema tree be handed to an assertion.
//!
//! Stock matchers live in [`library`].

mod adapter;
pub mod library;

use std::sync::Arc;

use serde_json::Value;

use crate::schema::Validator;

pub use adapter::{PredicateValidator, ValidatorMatcher};
pub use library::{equal_to, instance_of, matches_pattern, nullable, predicate};

/// A boolean predicate over values that can describe itself.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Matcher, Schema, Validator};
/// use serde_json::{json, Value};
///
/// struct Positive;
///
/// impl Matcher for Positive {
///     fn matches(&self, value: &Value) -> bool {
///         value.as_f64().is_some_and(|n| n > 0.0)
///     }
///
///     fn describe(&self) -> String {
///         "a positive number".to_string()
///     }
/// }
///
/// let schema = Schema::object(Schema::fields().field("qty", Schema::matcher(Positive)));
/// assert_eq!(
///     schema.errors(&json!({"qty": -1})).messages(),
///     vec!["Field [qty]: does not match a positive number (got: -1)"]
/// );
/// ```
pub trait Matcher: Send + Sync {
    /// Returns true if `value` satisfies the predicate.
    fn matches(&self, value: &Value) -> bool;

    /// Describes what a matching value looks like.
    fn describe(&self) -> String;

    /// Explains why `value` does not match.
    ///
    /// An empty string means no specific explanation is available; callers then
    /// fall back to [`describe`](Matcher::describe).
    fn describe_mismatch(&self, _value: &Value) -> String {
        String::new()
    }

    /// Returns the validator this matcher was built from, if any.
    ///
    /// Matchers produced by [`ValidatorMatcher`] return their validator so that
    /// a [`PredicateValidator`] wrapping them can report every nested error
    /// instead of a single summary line.
    fn as_validator(&self) -> Option<&dyn Validator> {
        None
    }
}

impl<M: Matcher + ?Sized> Matcher for &M {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        (**self).describe_mismatch(value)
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }
}

impl<M: Matcher + ?Sized> Matcher for Box<M> {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        (**self).describe_mismatch(value)
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }
}

impl<M: Matcher + ?Sized> Matcher for Arc<M> {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }

    fn describe_mismatch(&self, value: &Value) -> String {
        (**self).describe_mismatch(value)
    }

    fn as_validator(&self) -> Option<&dyn Validator> {
        (**self).as_validator()
    }
}
