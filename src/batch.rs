//! Validating many values with one schema.
//!
//! A schema tree holds no mutable state, so independent values can be checked
//! at the same time against the same tree. With the `parallel` feature (on by
//! default) the work is spread over rayon's thread pool; without it the values
//! are checked one after another. Either way results come back in input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::Value;

use crate::error::ErrorList;
use crate::path::JsonPath;
use crate::schema::Validator;

/// Validates every value from the root, each into its own fresh list.
///
/// # Example
///
/// ```rust
/// use shapecheck::batch::validate_batch;
/// use shapecheck::Schema;
/// use serde_json::json;
///
/// let schema = Schema::object(Schema::fields().field("id", Schema::integer()));
/// let results = validate_batch(&schema, &[json!({"id": 1}), json!({})]);
///
/// assert!(results[0].is_empty());
/// assert_eq!(results[1].messages(), vec!["Field [id] is required"]);
/// ```
pub fn validate_batch<V>(validator: &V, values: &[Value]) -> Vec<ErrorList>
where
    V: Validator + ?Sized,
{
    let check = |value: &Value| {
        let mut errors = ErrorList::new();
        validator.check(value, &JsonPath::root(), &mut errors);
        errors
    };

    #[cfg(feature = "parallel")]
    let results: Vec<ErrorList> = values.par_iter().map(check).collect();
    #[cfg(not(feature = "parallel"))]
    let results: Vec<ErrorList> = values.iter().map(check).collect();

    tracing::debug!(
        values = values.len(),
        failed = results.iter().filter(|errors| !errors.is_empty()).count(),
        "batch validation finished"
    );
    results
}

/// Returns the indices of the values that failed, paired with their errors.
pub fn failures<V>(validator: &V, values: &[Value]) -> Vec<(usize, ErrorList)>
where
    V: Validator + ?Sized,
{
    validate_batch(validator, values)
        .into_iter()
        .enumerate()
        .filter(|(_, errors)| !errors.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;
    use serde_json::json;

    #[test]
    fn test_results_follow_input_order() {
        let schema = Schema::array(Schema::integer());
        let values: Vec<Value> = (0..64)
            .map(|i| if i % 3 == 0 { json!([i, "x"]) } else { json!([i]) })
            .collect();

        let results = validate_batch(&schema, &values);
        assert_eq!(results.len(), 64);
        for (i, errors) in results.iter().enumerate() {
            assert_eq!(errors.is_empty(), i % 3 != 0, "index {}", i);
        }
    }

    #[test]
    fn test_failures_reports_indices() {
        let schema = Schema::string();
        let failed = failures(&schema, &[json!("a"), json!(1), json!("b"), json!(null)]);

        let indices: Vec<usize> = failed.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![1, 3]);
    }

    #[test]
    fn test_empty_batch() {
        assert!(validate_batch(&Schema::any(), &[]).is_empty());
    }
}
