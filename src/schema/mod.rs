//! Validator combinators.
//!
//! This module provides the building blocks of a schema tree: leaf type checks,
//! object and array validators, and the [`Schema`] entry point that constructs
//! them. A tree is built once and can then validate any number of values; every
//! node appends its violations to a shared, caller-owned
//! [`ErrorList`](crate::ErrorList).
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::object(
//!     Schema::fields()
//!         .field("users", Schema::object_array(
//!             Schema::fields()
//!                 .field("id", Schema::integer())
//!                 .field("tags", Schema::array(Schema::string())),
//!         )),
//! );
//!
//! let errors = schema.errors(&json!({
//!     "users": [{"id": 1, "tags": ["a"]}, {"tags": ["b", 2]}]
//! }));
//!
//! assert_eq!(
//!     errors.messages(),
//!     vec![
//!         "Field [users][1][id] is required",
//!         "Field [users][1][tags][1] has invalid type (expected String, received Integer)",
//!     ]
//! );
//! ```

mod array;
mod kind;
mod nullable;
mod object;
mod traits;

pub use array::{ArrayValidator, ObjectArrayValidator};
pub use kind::{value_type_name, Kind, TypeValidator};
pub use nullable::NullableValidator;
pub use object::{FieldSpec, ObjectValidator};
pub use traits::{FnValidator, Validator};

use serde_json::Value;

use crate::error::ErrorList;
use crate::matcher::{Matcher, PredicateValidator, ValidatorMatcher};
use crate::path::JsonPath;

/// Entry point for building validators.
///
/// Every constructor is pure and returns a value implementing
/// [`Validator`], so results can be nested freely.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Kind, Schema, Validator};
/// use serde_json::json;
///
/// let id = Schema::leaf(Kind::Integer, false);
/// let score = Schema::number().nullable();
///
/// assert!(id.is_valid(&json!(3)));
/// assert!(score.is_valid(&json!(2.5)));
/// assert!(score.is_valid(&json!(null)));
/// ```
pub struct Schema;

impl Schema {
    /// Creates a leaf validator for `kind`, allowing `null` when `nullable` is set.
    pub fn leaf(kind: Kind, nullable: bool) -> TypeValidator {
        TypeValidator::new(kind, nullable)
    }

    /// Creates a validator accepting booleans.
    pub fn boolean() -> TypeValidator {
        TypeValidator::new(Kind::Boolean, false)
    }

    /// Creates a validator accepting integers (floats are rejected).
    pub fn integer() -> TypeValidator {
        TypeValidator::new(Kind::Integer, false)
    }

    /// Creates a validator accepting any number.
    pub fn number() -> TypeValidator {
        TypeValidator::new(Kind::Number, false)
    }

    /// Creates a validator accepting strings.
    pub fn string() -> TypeValidator {
        TypeValidator::new(Kind::String, false)
    }

    /// Creates a validator accepting any sequence without inspecting its items.
    pub fn list() -> TypeValidator {
        TypeValidator::new(Kind::List, false)
    }

    /// Creates a validator accepting any mapping without inspecting its entries.
    pub fn map() -> TypeValidator {
        TypeValidator::new(Kind::Map, false)
    }

    /// Creates a validator accepting every value, `null` included.
    ///
    /// A field validated by `any()` is therefore optional.
    pub fn any() -> TypeValidator {
        TypeValidator::new(Kind::Any, false)
    }

    /// Starts an empty field declaration.
    pub fn fields() -> FieldSpec {
        FieldSpec::new()
    }

    /// Creates an object validator for `fields`.
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
    /// assert_eq!(
    ///     schema.errors(&json!({"name": "Alice"})).messages(),
    ///     vec!["Field [id] is required"]
    /// );
    /// ```
    pub fn object(fields: FieldSpec) -> ObjectValidator {
        ObjectValidator::new(fields)
    }

    /// Creates a validator for a sequence of mappings sharing `fields`.
    pub fn object_array(fields: FieldSpec) -> ObjectArrayValidator {
        ObjectArrayValidator::new(fields)
    }

    /// Creates a validator for a sequence whose elements are checked by `item`.
    pub fn array<V: Validator>(item: V) -> ArrayValidator<V> {
        ArrayValidator::new(item)
    }

    /// Makes any validator accept `null`.
    pub fn nullable<V: Validator>(inner: V) -> NullableValidator<V> {
        NullableValidator::new(inner)
    }

    /// Creates a validator from a closure.
    pub fn custom<F>(f: F) -> FnValidator<F>
    where
        F: Fn(&Value, &JsonPath, &mut ErrorList) + Send + Sync,
    {
        FnValidator::new(f)
    }

    /// Uses an external matcher as a validator.
    pub fn matcher<M: Matcher>(matcher: M) -> PredicateValidator<M> {
        PredicateValidator::new(matcher)
    }

    /// Exposes a validator as a matcher.
    pub fn as_matcher<V: Validator>(validator: V) -> ValidatorMatcher<V> {
        ValidatorMatcher::new(validator)
    }
}
