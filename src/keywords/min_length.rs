//! Validator for the `minLength` keyword.
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
            if (string.chars().count() as u64) < limit {
                bag.add(ValidationError::min_length(
                    instance,
                    instance_path.clone(),
                    limit,
                ));
            }
        }
        None => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'minLength' must be a non-negative integer".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"minLength": 3}), &json!("foo"), true)]
    #[test_case(&json!({"minLength": 3}), &json!("fo"), false)]
    #[test_case(&json!({"minLength": 2}), &json!("日本"), true; "code points not bytes")]
    #[test_case(&json!({"minLength": 3}), &json!("日本"), false)]
    fn lower_bound(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }
}
