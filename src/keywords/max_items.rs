//! Validator for the `maxItems` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::Value;

pub(crate) fn validate<'a>(
    instance: &'a Value,
    array: &'a [Value],
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    match value.as_u64() {
        Some(limit) => {
            if (array.len() as u64) > limit {
                bag.add(ValidationError::max_items(
                    instance,
                    instance_path.clone(),
                    limit,
                ));
            }
        }
        None => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'maxItems' must be a non-negative integer".to_string(),
        )),
    }
}
