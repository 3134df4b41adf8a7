//! # Shapecheck
//!
//! Structural validation of decoded JSON values that reports every violation,
//! each with the exact path to the offending node.
//!
//! ## Overview
//!
//! A schema is a tree of [`Validator`]s assembled once from combinators. Running
//! it over a `serde_json::Value` walks the whole value and appends every problem
//! to a caller-owned [`ErrorList`]; an empty list means the value conforms. The
//! crate is aimed at test assertions on large nested payloads, where one run
//! should explain everything that is wrong.
//!
//! Fields are never marked optional by hand. A field may be left out exactly
//! when its validator accepts `null`, so `Schema::string().nullable()`,
//! `Schema::any()` and `Schema::nullable(...)` all make a field optional.
//!
//! ## Core Types
//!
//! - [`Schema`]: entry point for building validators
//! - [`Validator`]: the contract every schema node implements
//! - [`FieldSpec`]: ordered field declarations of an object
//! - [`ErrorList`] / [`SchemaError`]: collected violations and their messages
//! - [`JsonPath`]: bracket-notation locations such as `[users][0][id]`
//! - [`Matcher`]: predicate-style interop with assertion frameworks
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{Schema, Validator};
//! use serde_json::json;
//!
//! let schema = Schema::object(
//!     Schema::fields()
//!         .field("id", Schema::integer())
//!         .field("name", Schema::string())
//!         .field("email", Schema::string().nullable()),
//! )
//! .strict(true);
//!
//! assert!(schema.is_valid(&json!({"id": 1, "name": "Alice"})));
//!
//! let errors = schema.errors(&json!({"id": "1", "role": "admin"}));
//! assert_eq!(
//!     errors.messages(),
//!     vec![
//!         "Field [id] has invalid type (expected Integer, received String)",
//!         "Field [name] is required",
//!         "Field [role] is not expected",
//!     ]
//! );
//! ```

pub mod assert;
pub mod batch;
pub mod error;
pub mod matcher;
pub mod path;
pub mod schema;

pub use error::{ErrorList, SchemaError, SchemaErrors};
pub use matcher::{Matcher, PredicateValidator, ValidatorMatcher};
pub use path::{JsonPath, PathSegment};
pub use schema::{
    ArrayValidator, FieldSpec, FnValidator, Kind, NullableValidator, ObjectArrayValidator,
    ObjectValidator, Schema, TypeValidator, Validator,
};

/// Type alias for validation results using SchemaErrors
pub type ValidationResult<T> = stillwater::Validation<T, SchemaErrors>;
