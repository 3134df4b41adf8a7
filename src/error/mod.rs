//! Error types for validation failures.
//!
//! This module provides the typed violation [`SchemaError`], the caller-owned
//! [`ErrorList`] validators append to, and the non-empty [`SchemaErrors`].

mod schema_error;

pub use schema_error::{ErrorList, SchemaError, SchemaErrors};
