//! The array container pass: `items` together with `additionalItems`.
use super::{validate_schema, Scope};
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::{Map, Value};

pub(crate) fn validate<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    array: &'a [Value],
    schema: &'a Map<String, Value>,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let items = &schema["items"];
    let additional = schema.get("additionalItems");
    match items {
        // a single schema constrains every element; additionalItems is
        // ignored in this form
        Value::Object(_) => {
            let items_path = schema_path.append("items");
            for (index, element) in array.iter().enumerate() {
                let element_path = instance_path.append_index(index);
                let errors = validate_schema(scope, element, items, &element_path, &items_path);
                if !errors.is_empty() {
                    bag.add(ValidationError::items_mismatch(element, element_path, errors));
                }
            }
        }
        Value::Array(subschemas) => {
            if let Some(Value::Bool(false)) = additional {
                if array.len() > subschemas.len() {
                    bag.add(ValidationError::additional_items(
                        instance,
                        instance_path.clone(),
                        subschemas.len(),
                    ));
                    return;
                }
            }
            let items_path = schema_path.append("items");
            for (index, element) in array.iter().enumerate() {
                let element_path = instance_path.append_index(index);
                let errors = if index < subschemas.len() {
                    validate_schema(
                        scope,
                        element,
                        &subschemas[index],
                        &element_path,
                        &items_path.append_index(index),
                    )
                } else {
                    match additional {
                        Some(extra @ Value::Object(_)) => validate_schema(
                            scope,
                            element,
                            extra,
                            &element_path,
                            &schema_path.append("additionalItems"),
                        ),
                        // `true`, absent, or `false` with a short enough
                        // array: unconstrained
                        _ => ErrorBag::new(),
                    }
                };
                if !errors.is_empty() {
                    bag.add(ValidationError::items_mismatch(element, element_path, errors));
                }
            }
        }
        _ => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'items' must be an object or an array of objects".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"items": {"type": "integer"}}), &json!([1, 2, 3]), true)]
    #[test_case(&json!({"items": {"type": "integer"}}), &json!([1, "x"]), false)]
    #[test_case(&json!({"items": {"type": "integer"}}), &json!([]), true)]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "string"}]}), &json!([1, "x"]), true)]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "string"}]}), &json!(["x", 1]), false)]
    #[test_case(&json!({"items": [{"type": "integer"}]}), &json!([1, "anything"]), true; "beyond the list is unconstrained")]
    #[test_case(&json!({"items": [{"type": "integer"}], "additionalItems": true}), &json!([1, "anything"]), true)]
    #[test_case(&json!({"items": [{"type": "integer"}], "additionalItems": {"type": "string"}}), &json!([1, "x", "y"]), true)]
    #[test_case(&json!({"items": [{"type": "integer"}], "additionalItems": {"type": "string"}}), &json!([1, "x", 2]), false)]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "integer"}], "additionalItems": false}), &json!([1, 2]), true)]
    #[test_case(&json!({"items": [{"type": "integer"}, {"type": "integer"}], "additionalItems": false}), &json!([1, 2, 3]), false; "array too long")]
    #[test_case(&json!({"items": {"type": "integer"}, "additionalItems": false}), &json!([1, 2, 3]), true; "additionalItems ignored for single schema")]
    fn container(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }

    #[test]
    fn element_errors_are_located() {
        let schema = json!({"items": {"type": "integer"}});
        let errors = tests_util::validate(&schema, &json!([1, "x"]));
        assert!(errors.get("/1").is_some());
        assert!(errors.get("/0").is_none());
    }
}
