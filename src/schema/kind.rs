//! Leaf type and nullability checks.
//!
//! This module provides the closed [`Kind`] tag and [`TypeValidator`], which
//! checks a value's runtime kind against a tag chosen at construction time.

use std::fmt::{self, Display};

use serde_json::Value;

use crate::error::{ErrorList, SchemaError};
use crate::path::JsonPath;

use super::traits::Validator;

/// The kinds of value a leaf schema can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `true` or `false`.
    Boolean,
    /// A number without a fractional part that fits `i64` or `u64`.
    Integer,
    /// Any number, integer or floating point.
    Number,
    /// A string.
    String,
    /// An ordered sequence.
    List,
    /// A key/value mapping.
    Map,
    /// Anything, `null` included.
    Any,
}

impl Kind {
    /// Returns true when `value` is of this kind.
    ///
    /// `null` is only accepted by [`Kind::Any`]; nullability of the other kinds
    /// is a property of the validator, not of the tag.
    pub fn accepts(self, value: &Value) -> bool {
        match self {
            Kind::Boolean => value.is_boolean(),
            Kind::Integer => value.is_i64() || value.is_u64(),
            Kind::Number => value.is_number(),
            Kind::String => value.is_string(),
            Kind::List => value.is_array(),
            Kind::Map => value.is_object(),
            Kind::Any => true,
        }
    }

    /// Returns the name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Integer => "Integer",
            Kind::Number => "Number",
            Kind::String => "String",
            Kind::List => "List",
            Kind::Map => "Map",
            Kind::Any => "Any",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the runtime kind name of a value as reported in error messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "Integer",
        Value::Number(_) => "Float",
        Value::String(_) => "String",
        Value::Array(_) => "List",
        Value::Object(_) => "Map",
    }
}

/// A validator checking a value's kind, optionally allowing `null`.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::string();
/// assert!(schema.is_valid(&json!("hello")));
/// assert_eq!(
///     schema.errors(&json!(1)).messages(),
///     vec!["Field  has invalid type (expected String, received Integer)"]
/// );
///
/// let nullable = Schema::string().nullable();
/// assert!(nullable.is_valid(&json!(null)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeValidator {
    kind: Kind,
    nullable: bool,
}

impl TypeValidator {
    /// Creates a validator for `kind`, allowing `null` when `nullable` is set.
    pub fn new(kind: Kind, nullable: bool) -> Self {
        Self { kind, nullable }
    }

    /// Returns a copy of this validator that also accepts `null`.
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Returns the kind this validator checks for.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns true if `null` is accepted.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl Validator for TypeValidator {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        if value.is_null() && self.nullable {
            return;
        }
        if !self.kind.accepts(value) {
            errors.push(SchemaError::InvalidType {
                path: path.clone(),
                expected: self.kind,
                received: value_type_name(value),
            });
        }
    }
}
