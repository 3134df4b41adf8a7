//! Schema validation error types.
//!
//! This module provides [`SchemaError`] for single violations, [`ErrorList`] for
//! the caller-owned list a validator appends to, and [`SchemaErrors`] for the
//! non-empty failure side of a [`ValidationResult`](crate::ValidationResult).

use std::fmt::{self, Display};

use stillwater::prelude::*;
use stillwater::Validation;
use thiserror::Error;

use crate::path::JsonPath;
use crate::schema::Kind;

/// A single structural violation.
///
/// The `Display` form of each variant is the exact message reported to users,
/// so test tooling can compare against it verbatim.
///
/// # Example
///
/// ```rust
/// use shapecheck::{JsonPath, Kind, SchemaError};
///
/// let error = SchemaError::InvalidType {
///     path: JsonPath::root().push_field("id"),
///     expected: Kind::Integer,
///     received: "String",
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "Field [id] has invalid type (expected Integer, received String)"
/// );
/// assert_eq!(error.code(), "invalid_type");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The value's runtime kind is not the one the schema asks for.
    #[error("Field {path} has invalid type (expected {expected}, received {received})")]
    InvalidType {
        path: JsonPath,
        expected: Kind,
        received: &'static str,
    },

    /// An element of an object array is not a mapping.
    #[error("Item {path} has invalid type (expected {expected}, received {received})")]
    InvalidItemType {
        path: JsonPath,
        expected: Kind,
        received: &'static str,
    },

    /// A declared field is absent and its validator rejects null.
    #[error("Field {path} is required")]
    Required { path: JsonPath },

    /// A key not declared by a strict object schema.
    #[error("Field {path} is not expected")]
    NotExpected { path: JsonPath },

    /// An external matcher rejected the value.
    #[error("Field {path}: {description}")]
    Predicate { path: JsonPath, description: String },
}

impl SchemaError {
    /// Returns the path of the offending node.
    pub fn path(&self) -> &JsonPath {
        match self {
            SchemaError::InvalidType { path, .. }
            | SchemaError::InvalidItemType { path, .. }
            | SchemaError::Required { path }
            | SchemaError::NotExpected { path }
            | SchemaError::Predicate { path, .. } => path,
        }
    }

    /// Returns a machine-readable code for programmatic handling.
    pub fn code(&self) -> &'static str {
        match self {
            SchemaError::InvalidType { .. } => "invalid_type",
            SchemaError::InvalidItemType { .. } => "invalid_item_type",
            SchemaError::Required { .. } => "required",
            SchemaError::NotExpected { .. } => "not_expected",
            SchemaError::Predicate { .. } => "predicate_failed",
        }
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};

/// The ordered, append-only list a validator writes into.
///
/// An `ErrorList` is owned by whoever starts a validation and is passed by
/// mutable reference through the whole descent. Entries are never removed,
/// merged or deduplicated.
///
/// # Example
///
/// ```rust
/// use shapecheck::{ErrorList, JsonPath, Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object(Schema::fields().field("id", Schema::integer()));
///
/// let mut errors = ErrorList::new();
/// schema.check(&json!({}), &JsonPath::root(), &mut errors);
///
/// assert_eq!(errors.messages(), vec!["Field [id] is required"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorList(Vec<SchemaError>);

impl ErrorList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error.
    pub fn push(&mut self, error: SchemaError) {
        self.0.push(error);
    }

    /// Returns the number of errors collected so far.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no error has been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the errors in the order they were appended.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.path() == path).collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }

    /// Renders every error to its message.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }

    /// Renders the list as a mismatch report, one `- ` prefixed line per error.
    pub fn to_report(&self) -> String {
        self.0
            .iter()
            .map(|e| format!("- {}", e))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Converts this list into a `Vec<SchemaError>`.
    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0
    }

    /// Converts the list into a validation outcome.
    ///
    /// An empty list is a success; anything else becomes a failure carrying
    /// every error.
    pub fn into_validation(self) -> Validation<(), SchemaErrors> {
        match SchemaErrors::try_from_vec(self.0) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

impl Extend<SchemaError> for ErrorList {
    fn extend<I: IntoIterator<Item = SchemaError>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ErrorList {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a SchemaError;
    type IntoIter = std::slice::Iter<'a, SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A non-empty collection of schema validation errors.
///
/// `SchemaErrors` wraps a `NonEmptyVec<SchemaError>` so a failed
/// [`ValidationResult`](crate::ValidationResult) always carries at least one
/// error. It implements `Semigroup`, so failures from independent validations
/// can be combined.
///
/// ```rust
/// use shapecheck::{JsonPath, SchemaError, SchemaErrors};
/// use stillwater::prelude::*;
///
/// let missing = SchemaErrors::single(SchemaError::Required {
///     path: JsonPath::from_field("name"),
/// });
/// let extra = SchemaErrors::single(SchemaError::NotExpected {
///     path: JsonPath::from_field("nickname"),
/// });
///
/// assert_eq!(missing.combine(extra).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    /// Creates a `SchemaErrors` containing a single error.
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `SchemaErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<SchemaError>) -> Self {
        Self(errors)
    }

    /// Creates a `SchemaErrors` from a `Vec`, or `None` if it is empty.
    pub fn try_from_vec(errors: Vec<SchemaError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.path() == path).collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code() == code).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<SchemaError>`.
    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for error in self.iter() {
            writeln!(f, "- {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl From<SchemaErrors> for ErrorList {
    fn from(errors: SchemaErrors) -> Self {
        ErrorList(errors.into_vec())
    }
}
