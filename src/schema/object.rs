//! Object schema validation.
//!
//! This module provides [`FieldSpec`], the ordered declaration of an object's
//! fields, and [`ObjectValidator`], which checks a mapping against it.
//!
//! Whether a field may be omitted is never declared. It is derived by probing
//! the field's own validator with `null`: a validator that appends nothing for
//! `null` makes its field optional.

use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ErrorList, SchemaError};
use crate::path::JsonPath;

use super::kind::{value_type_name, Kind};
use super::traits::Validator;

/// Path handed to a field validator while probing it with `null`.
///
/// Errors produced by the probe land in a scratch list and are discarded, so
/// this path never reaches a report.
const PROBE_SEGMENT: &str = "$optional-probe";

/// The ordered mapping from field name to the validator responsible for it.
///
/// Iteration follows insertion order, which fixes the order of "required"
/// errors. Declaring a name twice replaces its validator in place.
///
/// # Example
///
/// ```rust
/// use shapecheck::Schema;
///
/// let fields = Schema::fields()
///     .field("id", Schema::integer())
///     .field("email", Schema::string().nullable());
///
/// let names: Vec<_> = fields.names().collect();
/// assert_eq!(names, vec!["id", "email"]);
/// ```
#[derive(Clone, Default)]
pub struct FieldSpec {
    fields: IndexMap<String, Arc<dyn Validator>>,
}

impl FieldSpec {
    /// Creates an empty field specification.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field validated by `validator`.
    pub fn field<V>(mut self, name: impl Into<String>, validator: V) -> Self
    where
        V: Validator + 'static,
    {
        self.fields.insert(name.into(), Arc::new(validator));
        self
    }

    /// Declares a field whose validator is already shared with other schemas.
    pub fn shared_field(mut self, name: impl Into<String>, validator: Arc<dyn Validator>) -> Self {
        self.fields.insert(name.into(), validator);
        self
    }

    /// Returns the validator declared for `name`.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Validator>> {
        self.fields.get(name)
    }

    /// Returns true if `name` is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the declared names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the number of declared fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if no field is declared.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns true if the field `name` may be left out of a mapping.
    ///
    /// Undeclared names are reported as not optional.
    pub fn is_optional(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .is_some_and(|validator| tolerates_null(validator.as_ref()))
    }

    /// Validates the entries of `obj`, located at `path`, against these fields.
    ///
    /// Declared fields are visited in order; undeclared keys are reported
    /// afterwards, in the mapping's own order, when `strict` is set.
    pub(crate) fn check_entries(
        &self,
        obj: &Map<String, Value>,
        path: &JsonPath,
        strict: bool,
        errors: &mut ErrorList,
    ) {
        for (name, validator) in &self.fields {
            match obj.get(name) {
                Some(field_value) => validator.check(field_value, &path.push_field(name), errors),
                None if tolerates_null(validator.as_ref()) => {}
                None => errors.push(SchemaError::Required {
                    path: path.push_field(name),
                }),
            }
        }

        if strict {
            for key in obj.keys().filter(|key| !self.fields.contains_key(*key)) {
                tracing::trace!(path = %path, key = %key, "undeclared field in strict object");
                errors.push(SchemaError::NotExpected {
                    path: path.push_field(key),
                });
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FieldSpec
where
    K: Into<String>,
    V: Validator + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(FieldSpec::new(), |spec, (name, validator)| spec.field(name, validator))
    }
}

/// Probes `validator` with `null` against a scratch list.
///
/// Returns true when the probe produced no errors, meaning a missing field
/// guarded by this validator is acceptable.
pub(crate) fn tolerates_null(validator: &dyn Validator) -> bool {
    let mut scratch = ErrorList::new();
    validator.check(&Value::Null, &JsonPath::from_field(PROBE_SEGMENT), &mut scratch);
    tracing::trace!(optional = scratch.is_empty(), "probed field validator with null");
    scratch.is_empty()
}

/// A validator for mappings with declared fields.
///
/// The value must be a mapping. Every declared field that is present is
/// validated in place; every declared field that is absent is required unless
/// its validator accepts `null`. With `strict(true)`, keys that are not
/// declared are reported as well.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let schema = Schema::object(
///     Schema::fields()
///         .field("name", Schema::string())
///         .field("nickname", Schema::string().nullable()),
/// )
/// .strict(true);
///
/// assert!(schema.is_valid(&json!({"name": "A"})));
/// assert_eq!(
///     schema.errors(&json!({"name": "A", "extra": 1})).messages(),
///     vec!["Field [extra] is not expected"]
/// );
/// ```
#[derive(Clone)]
pub struct ObjectValidator {
    fields: FieldSpec,
    strict: bool,
}

impl ObjectValidator {
    /// Creates a non-strict validator for `fields`.
    pub fn new(fields: FieldSpec) -> Self {
        Self {
            fields,
            strict: false,
        }
    }

    /// Sets whether undeclared keys are reported.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if undeclared keys are reported.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the declared fields.
    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }
}

impl Validator for ObjectValidator {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        match value.as_object() {
            Some(obj) => self.fields.check_entries(obj, path, self.strict, errors),
            None => errors.push(SchemaError::InvalidType {
                path: path.clone(),
                expected: Kind::Map,
                received: value_type_name(value),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeValidator;
    use serde_json::json;

    fn string() -> TypeValidator {
        TypeValidator::new(Kind::String, false)
    }

    fn integer() -> TypeValidator {
        TypeValidator::new(Kind::Integer, false)
    }

    fn messages(validator: &ObjectValidator, value: Value) -> Vec<String> {
        validator.errors(&value).messages()
    }

    #[test]
    fn test_empty_object_schema() {
        let schema = ObjectValidator::new(FieldSpec::new());
        assert!(messages(&schema, json!({})).is_empty());
        assert!(messages(&schema, json!({"anything": 1})).is_empty());
    }

    #[test]
    fn test_rejects_non_object_without_probing_fields() {
        let schema = ObjectValidator::new(FieldSpec::new().field("id", integer()));

        assert_eq!(
            messages(&schema, json!("not an object")),
            vec!["Field  has invalid type (expected Map, received String)"]
        );
        assert_eq!(messages(&schema, json!(null)).len(), 1);
        assert_eq!(messages(&schema, json!([1, 2])).len(), 1);
    }

    #[test]
    fn test_required_field() {
        let schema = ObjectValidator::new(FieldSpec::new().field("name", string()));

        assert!(messages(&schema, json!({"name": "Alice"})).is_empty());
        assert_eq!(
            messages(&schema, json!({})),
            vec!["Field [name] is required"]
        );
    }

    #[test]
    fn test_nullable_field_is_optional() {
        let schema = ObjectValidator::new(FieldSpec::new().field("nickname", string().nullable()));

        assert!(messages(&schema, json!({})).is_empty());
        assert!(messages(&schema, json!({"nickname": null})).is_empty());
        assert_eq!(
            messages(&schema, json!({"nickname": 3})),
            vec!["Field [nickname] has invalid type (expected String, received Integer)"]
        );
    }

    #[test]
    fn test_any_field_is_optional() {
        let fields = FieldSpec::new().field("meta", TypeValidator::new(Kind::Any, false));
        assert!(fields.is_optional("meta"));
        assert!(messages(&ObjectValidator::new(fields), json!({})).is_empty());
    }

    #[test]
    fn test_present_null_for_required_field_is_type_error() {
        let schema = ObjectValidator::new(FieldSpec::new().field("id", integer()));
        assert_eq!(
            messages(&schema, json!({"id": null})),
            vec!["Field [id] has invalid type (expected Integer, received Null)"]
        );
    }

    #[test]
    fn test_required_errors_follow_declaration_order() {
        let schema = ObjectValidator::new(
            FieldSpec::new()
                .field("z", string())
                .field("a", string())
                .field("m", string()),
        );

        assert_eq!(
            messages(&schema, json!({})),
            vec![
                "Field [z] is required",
                "Field [a] is required",
                "Field [m] is required"
            ]
        );
    }

    #[test]
    fn test_redeclaring_replaces_in_place() {
        let fields = FieldSpec::new()
            .field("a", string())
            .field("b", string())
            .field("a", integer());

        assert_eq!(fields.names().collect::<Vec<_>>(), vec!["a", "b"]);
        let schema = ObjectValidator::new(fields);
        assert!(messages(&schema, json!({"a": 1, "b": "x"})).is_empty());
    }

    #[test]
    fn test_strict_reports_extra_keys_in_value_order() {
        let schema = ObjectValidator::new(FieldSpec::new().field("name", string())).strict(true);
        assert!(schema.is_strict());

        assert_eq!(
            messages(&schema, json!({"zeta": 1, "name": "A", "alpha": 2})),
            vec!["Field [zeta] is not expected", "Field [alpha] is not expected"]
        );
    }

    #[test]
    fn test_non_strict_ignores_extra_keys() {
        let schema = ObjectValidator::new(FieldSpec::new().field("name", string()));
        assert!(messages(&schema, json!({"name": "A", "extra": 1})).is_empty());
    }

    #[test]
    fn test_error_accumulation() {
        let schema = ObjectValidator::new(
            FieldSpec::new()
                .field("name", string())
                .field("age", integer())
                .field("email", string()),
        )
        .strict(true);

        let errors = schema.errors(&json!({"name": 1, "age": "old", "x": true}));
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.with_code("invalid_type").len(), 2);
        assert_eq!(errors.with_code("required").len(), 1);
        assert_eq!(errors.with_code("not_expected").len(), 1);
    }

    #[test]
    fn test_nested_object_paths() {
        let inner = ObjectValidator::new(FieldSpec::new().field("value", integer()));
        let middle = ObjectValidator::new(FieldSpec::new().field("inner", inner));
        let outer = ObjectValidator::new(FieldSpec::new().field("middle", middle));

        assert_eq!(
            messages(&outer, json!({"middle": {"inner": {"value": "x"}}})),
            vec!["Field [middle][inner][value] has invalid type (expected Integer, received String)"]
        );
        assert_eq!(
            messages(&outer, json!({"middle": {"inner": {}}})),
            vec!["Field [middle][inner][value] is required"]
        );
    }

    #[test]
    fn test_nested_object_field_is_required() {
        let inner = ObjectValidator::new(FieldSpec::new());
        let outer = ObjectValidator::new(FieldSpec::new().field("inner", inner));

        assert_eq!(messages(&outer, json!({})), vec!["Field [inner] is required"]);
    }

    #[test]
    fn test_strict_does_not_propagate_to_nested_objects() {
        let inner = ObjectValidator::new(FieldSpec::new().field("a", integer()));
        let outer = ObjectValidator::new(FieldSpec::new().field("inner", inner)).strict(true);

        assert!(messages(&outer, json!({"inner": {"a": 1, "b": 2}})).is_empty());
    }

    #[test]
    fn test_unicode_field_names() {
        let schema = ObjectValidator::new(
            FieldSpec::new()
                .field("名前", string())
                .field("年齢", integer()),
        );

        assert!(messages(&schema, json!({"名前": "太郎", "年齢": 25})).is_empty());
        assert_eq!(
            messages(&schema, json!({})),
            vec!["Field [名前] is required", "Field [年齢] is required"]
        );
    }

    #[test]
    fn test_field_spec_from_iterator() {
        let fields: FieldSpec = vec![("a", string()), ("b", string().nullable())]
            .into_iter()
            .collect();

        assert_eq!(fields.len(), 2);
        assert!(!fields.is_optional("a"));
        assert!(fields.is_optional("b"));
        assert!(!fields.is_optional("missing"));
    }

    #[test]
    fn test_shared_field_validator() {
        let shared: Arc<dyn Validator> = Arc::new(integer());
        let left = FieldSpec::new().shared_field("id", Arc::clone(&shared));
        let right = FieldSpec::new().shared_field("owner", shared);

        assert!(left.contains("id"));
        assert!(right.get("owner").is_some());
    }
}
