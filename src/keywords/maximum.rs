//! Validator for the `maximum` keyword, together with its Draft 4
//! `exclusiveMaximum` modifier.
use crate::{
    error::{ErrorBag, ValidationError},
    helpers,
    paths::JSONPointer,
};
use serde_json::{Map, Number, Value};

pub(crate) fn validate<'a>(
    instance: &'a Value,
    number: &Number,
    value: &'a Value,
    schema: &'a Map<String, Value>,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let limit = match value.as_f64() {
        Some(limit) => limit,
        None => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'maximum' must be a number".to_string(),
            ));
            return;
        }
    };
    let exclusive = match schema.get("exclusiveMaximum") {
        None => false,
        Some(Value::Bool(exclusive)) => *exclusive,
        Some(_) => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'exclusiveMaximum' must be a boolean".to_string(),
            ));
            return;
        }
    };
    let observed = helpers::as_f64(number);
    if exclusive {
        if observed >= limit || helpers::almost_equals(observed, limit) {
            bag.add(ValidationError::exclusive_maximum(
                instance,
                instance_path.clone(),
                limit,
            ));
        }
    } else if observed > limit && !helpers::almost_equals(observed, limit) {
        bag.add(ValidationError::maximum(
            instance,
            instance_path.clone(),
            limit,
        ));
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"maximum": 5}), &json!(4), true)]
    #[test_case(&json!({"maximum": 5}), &json!(5), true)]
    #[test_case(&json!({"maximum": 5}), &json!(6), false)]
    #[test_case(&json!({"maximum": 5, "exclusiveMaximum": true}), &json!(4), true)]
    #[test_case(&json!({"maximum": 5, "exclusiveMaximum": true}), &json!(5), false)]
    #[test_case(&json!({"maximum": 5, "exclusiveMaximum": false}), &json!(5), true)]
    #[test_case(&json!({"maximum": 5.5, "exclusiveMaximum": true}), &json!(5.5), false)]
    #[test_case(&json!({"maximum": 5.5}), &json!(5.5), true)]
    #[test_case(&json!({"maximum": 5}), &json!(true), true; "booleans are not numbers")]
    fn upper_bound(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }
}
