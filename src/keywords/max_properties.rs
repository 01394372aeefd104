//! Validator for the `maxProperties` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::{Map, Value};

pub(crate) fn validate<'a>(
    instance: &'a Value,
    instance_map: &'a Map<String, Value>,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    match value.as_u64() {
        Some(limit) => {
            if (instance_map.len() as u64) > limit {
                bag.add(ValidationError::max_properties(
                    instance,
                    instance_path.clone(),
                    limit,
                ));
            }
        }
        None => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'maxProperties' must be a non-negative integer".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxProperties": 1}), &json!({"a": 1}), true)]
    #[test_case(&json!({"maxProperties": 1}), &json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!({"maxProperties": 0}), &json!({}), true)]
    fn upper_bound(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }
}
