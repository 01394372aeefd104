//! Validator for the `maxLength` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::Value;

pub(crate) fn validate<'a>(
    instance: &'a Value,
    string: &str,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    match value.as_u64() {
        Some(limit) => {
            // Unicode code points, not bytes
            if (string.chars().count() as u64) > limit {
                bag.add(ValidationError::max_length(
                    instance,
                    instance_path.clone(),
                    limit,
                ));
            }
        }
        None => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'maxLength' must be a non-negative integer".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maxLength": 3}), &json!("foo"), true)]
    #[test_case(&json!({"maxLength": 3}), &json!("fooo"), false)]
    #[test_case(&json!({"maxLength": 2}), &json!("日本"), true; "code points not bytes")]
    fn upper_bound(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }
}
