//! Tests for sharing one schema tree across concurrent validations.

use serde_json::json;
use shapecheck::batch::{failures, validate_batch};
use shapecheck::{Schema, Validator};
use std::sync::Arc;
use std::thread;

fn user_schema() -> impl Validator {
    Schema::object(
        Schema::fields()
            .field("name", Schema::string())
            .field("age", Schema::integer())
            .field("tags", Schema::array(Schema::string())),
    )
    .strict(true)
}

#[test]
fn test_concurrent_validation_with_shared_tree() {
    let schema = Arc::new(user_schema());

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let valid = json!({"name": format!("User{}", i), "age": i, "tags": []});
                assert!(schema.errors(&valid).is_empty());

                let invalid = json!({"name": i, "tags": ["a", i]});
                assert_eq!(
                    schema.errors(&invalid).messages(),
                    vec![
                        "Field [name] has invalid type (expected String, received Integer)",
                        "Field [age] is required",
                        "Field [tags][1] has invalid type (expected String, received Integer)",
                    ]
                );
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_batch_matches_sequential_runs() {
    let schema = user_schema();
    let values: Vec<_> = (0..200)
        .map(|i| match i % 4 {
            0 => json!({"name": "a", "age": i, "tags": []}),
            1 => json!({"name": "a", "tags": [i]}),
            2 => json!({"name": "a", "age": i, "tags": [], "extra": true}),
            _ => json!([i]),
        })
        .collect();

    let batch = validate_batch(&schema, &values);
    let sequential: Vec<_> = values.iter().map(|v| schema.errors(v)).collect();
    assert_eq!(batch, sequential);

    let failed = failures(&schema, &values);
    assert_eq!(failed.len(), 150);
    assert!(failed.iter().all(|(i, _)| i % 4 != 0));
}

#[test]
fn test_batch_through_trait_object() {
    let schema: Arc<dyn Validator> = Arc::new(Schema::array(Schema::number()));
    let results = validate_batch(schema.as_ref(), &[json!([1, 2.5]), json!("no")]);

    assert!(results[0].is_empty());
    assert_eq!(results[1].len(), 1);
}
