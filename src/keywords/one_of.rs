//! Validator for the `oneOf` keyword.
use super::{validate_schema, Scope};
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::Value;

pub(crate) fn validate<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    value: &'a Value,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let items = match value {
        Value::Array(items) => items,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'oneOf' must be an array".to_string(),
            ));
            return;
        }
    };
    let keyword_path = schema_path.append("oneOf");
    let mut valid_indices = Vec::new();
    let mut failures = ErrorBag::new();
    for (index, subschema) in items.iter().enumerate() {
        let errors = validate_schema(
            scope,
            instance,
            subschema,
            instance_path,
            &keyword_path.append_index(index),
        );
        if errors.is_empty() {
            valid_indices.push(index);
        } else {
            failures.merge(errors);
        }
    }
    match valid_indices.len() {
        1 => {}
        0 => bag.add(ValidationError::one_of_not_valid(
            instance,
            instance_path.clone(),
            failures,
        )),
        _ => bag.add(ValidationError::one_of_multiple_valid(
            instance,
            instance_path.clone(),
            valid_indices,
        )),
    }
}
