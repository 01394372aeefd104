//! Validator for the `anyOf` keyword.
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
                "'anyOf' must be an array".to_string(),
            ));
            return;
        }
    };
    let keyword_path = schema_path.append("anyOf");
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
            return;
        }
        failures.merge(errors);
    }
    bag.add(ValidationError::any_of(
        instance,
        instance_path.clone(),
        failures,
    ));
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"type": "string"}]}), &json!(1), true)]
    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"type": "string"}]}), &json!("x"), true)]
    #[test_case(&json!({"anyOf": [{"type": "integer"}, {"type": "string"}]}), &json!(null), false)]
    #[test_case(&json!({"anyOf": [{"minimum": 2}, {"maximum": 1}]}), &json!(1.5), false)]
    #[test_case(&json!({"anyOf": []}), &json!(1), false; "no branch can match")]
    fn disjunction(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }

    #[test]
    fn all_branch_failures_are_reported() {
        let schema = json!({"anyOf": [{"type": "string"}, {"minimum": 5}]});
        let errors = tests_util::validate(&schema, &json!(1));
        let top = errors.get("").unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].sub_errors.len(), 2);
    }
}
