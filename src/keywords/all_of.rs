//! Validator for the `allOf` keyword.
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
                "'allOf' must be an array".to_string(),
            ));
            return;
        }
    };
    let keyword_path = schema_path.append("allOf");
    let mut failures = ErrorBag::new();
    for (index, subschema) in items.iter().enumerate() {
        failures.merge(validate_schema(
            scope,
            instance,
            subschema,
            instance_path,
            &keyword_path.append_index(index),
        ));
    }
    if !failures.is_empty() {
        bag.add(ValidationError::all_of(
            instance,
            instance_path.clone(),
            failures,
        ));
    }
}
