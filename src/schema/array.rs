//! Array schema validation.
//!
//! This module provides [`ObjectArrayValidator`] for sequences of mappings that
//! share one field declaration, and [`ArrayValidator`] for sequences whose
//! elements are checked by a single item validator. Every element is checked;
//! a bad element never hides problems in the others.

use serde_json::Value;

use crate::error::{ErrorList, SchemaError};
use crate::path::JsonPath;

use super::kind::{value_type_name, Kind};
use super::object::FieldSpec;
use super::traits::Validator;

fn list_type_error(value: &Value, path: &JsonPath) -> SchemaError {
    SchemaError::InvalidType {
        path: path.clone(),
        expected: Kind::List,
        received: value_type_name(value),
    }
}

/// A validator for a sequence of mappings sharing one [`FieldSpec`].
///
/// Each element is validated like an [`ObjectValidator`](super::ObjectValidator)
/// would validate it, at path `[i]`. Elements that are not mappings are
/// reported as `Item [i] has invalid type (...)` and skipped.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let users = Schema::object_array(Schema::fields().field("id", Schema::integer()));
///
/// let errors = users.errors(&json!([{"id": 1}, {"id": "bad"}, 7]));
/// assert_eq!(
///     errors.messages(),
///     vec![
///         "Field [1][id] has invalid type (expected Integer, received String)",
///         "Item [2] has invalid type (expected Map, received Integer)",
///     ]
/// );
/// ```
#[derive(Clone)]
pub struct ObjectArrayValidator {
    fields: FieldSpec,
    strict: bool,
}

impl ObjectArrayValidator {
    /// Creates a non-strict validator applying `fields` to every element.
    pub fn new(fields: FieldSpec) -> Self {
        Self {
            fields,
            strict: false,
        }
    }

    /// Sets whether undeclared keys of each element are reported.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns true if undeclared keys are reported.
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the fields declared for each element.
    pub fn fields(&self) -> &FieldSpec {
        &self.fields
    }
}

impl Validator for ObjectArrayValidator {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        let Some(items) = value.as_array() else {
            errors.push(list_type_error(value, path));
            return;
        };

        for (index, item) in items.iter().enumerate() {
            let item_path = path.push_index(index);
            match item.as_object() {
                Some(obj) => self
                    .fields
                    .check_entries(obj, &item_path, self.strict, errors),
                None => errors.push(SchemaError::InvalidItemType {
                    path: item_path,
                    expected: Kind::Map,
                    received: value_type_name(item),
                }),
            }
        }
    }
}

/// A validator applying one item validator to every element of a sequence.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Schema, Validator};
/// use serde_json::json;
///
/// let tags = Schema::array(Schema::string().nullable());
/// assert!(tags.is_valid(&json!(["a", null, "b"])));
///
/// let strict_tags = Schema::array(Schema::string());
/// assert_eq!(
///     strict_tags.errors(&json!(["a", null, "b"])).messages(),
///     vec!["Field [1] has invalid type (expected String, received Null)"]
/// );
/// ```
#[derive(Clone)]
pub struct ArrayValidator<V> {
    item: V,
}

impl<V: Validator> ArrayValidator<V> {
    /// Creates a validator checking every element with `item`.
    pub fn new(item: V) -> Self {
        Self { item }
    }

    /// Returns the item validator.
    pub fn item(&self) -> &V {
        &self.item
    }
}

impl<V: Validator> Validator for ArrayValidator<V> {
    fn check(&self, value: &Value, path: &JsonPath, errors: &mut ErrorList) {
        let Some(items) = value.as_array() else {
            errors.push(list_type_error(value, path));
            return;
        };

        for (index, item) in items.iter().enumerate() {
            self.item.check(item, &path.push_index(index), errors);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ObjectValidator, TypeValidator};
    use serde_json::json;

    fn integer() -> TypeValidator {
        TypeValidator::new(Kind::Integer, false)
    }

    fn string() -> TypeValidator {
        TypeValidator::new(Kind::String, false)
    }

    #[test]
    fn test_object_array_valid() {
        let schema = ObjectArrayValidator::new(FieldSpec::new().field("id", integer()));
        assert!(schema.is_valid(&json!([{"id": 1}, {"id": 2}])));
        assert!(schema.is_valid(&json!([])));
    }

    #[test]
    fn test_object_array_rejects_non_list() {
        let schema = ObjectArrayValidator::new(FieldSpec::new().field("id", integer()));
        assert_eq!(
            schema.errors(&json!({"id": 1})).messages(),
            vec!["Field  has invalid type (expected List, received Map)"]
        );
    }

    #[test]
    fn test_object_array_reports_every_index() {
        let schema = ObjectArrayValidator::new(
            FieldSpec::new()
                .field("id", integer())
                .field("name", string()),
        );

        let errors = schema.errors(&json!([
            {"id": "a", "name": "x"},
            "oops",
            {"name": "z"},
            {"id": 4, "name": 5}
        ]));

        assert_eq!(
            errors.messages(),
            vec![
                "Field [0][id] has invalid type (expected Integer, received String)",
                "Item [1] has invalid type (expected Map, received String)",
                "Field [2][id] is required",
                "Field [3][name] has invalid type (expected String, received Integer)",
            ]
        );
    }

    #[test]
    fn test_object_array_null_item_is_item_error() {
        let schema = ObjectArrayValidator::new(FieldSpec::new());
        assert_eq!(
            schema.errors(&json!([null])).messages(),
            vec!["Item [0] has invalid type (expected Map, received Null)"]
        );
    }

    #[test]
    fn test_object_array_strict() {
        let schema = ObjectArrayValidator::new(FieldSpec::new().field("id", integer())).strict(true);
        assert!(schema.is_strict());
        assert_eq!(
            schema.errors(&json!([{"id": 1}, {"id": 2, "x": 0}])).messages(),
            vec!["Field [1][x] is not expected"]
        );
    }

    #[test]
    fn test_object_array_matches_object_validator_per_element() {
        let fields = FieldSpec::new().field("id", integer()).field("tag", string().nullable());
        let array = ObjectArrayValidator::new(fields.clone()).strict(true);
        let object = ObjectValidator::new(fields).strict(true);

        let element = json!({"tag": 3, "extra": true});
        let mut expected = ErrorList::new();
        object.check(&element, &JsonPath::from_index(0), &mut expected);

        assert_eq!(array.errors(&json!([element])), expected);
    }

    #[test]
    fn test_primitive_array() {
        let schema = ArrayValidator::new(integer());
        assert!(schema.is_valid(&json!([1, 2, 3])));
        assert_eq!(
            schema.errors(&json!([1, "two", 3, null])).messages(),
            vec![
                "Field [1] has invalid type (expected Integer, received String)",
                "Field [3] has invalid type (expected Integer, received Null)",
            ]
        );
    }

    #[test]
    fn test_primitive_array_rejects_non_list() {
        let schema = ArrayValidator::new(integer());
        assert_eq!(
            schema.errors(&json!("1,2")).messages(),
            vec!["Field  has invalid type (expected List, received String)"]
        );
        assert_eq!(schema.errors(&json!(null)).len(), 1);
    }

    #[test]
    fn test_nested_arrays() {
        let schema = ArrayValidator::new(ArrayValidator::new(integer()));
        assert_eq!(
            schema.errors(&json!([[1], [2, "x"], 3])).messages(),
            vec![
                "Field [1][1] has invalid type (expected Integer, received String)",
                "Field [2] has invalid type (expected List, received Integer)",
            ]
        );
    }
}
