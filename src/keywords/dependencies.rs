//! Validator for the `dependencies` keyword.
use super::{validate_schema, Scope};
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::{Map, Value};

pub(crate) fn validate<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    instance_map: &'a Map<String, Value>,
    value: &'a Value,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let dependencies = match value {
        Value::Object(map) => map,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'dependencies' must be an object".to_string(),
            ));
            return;
        }
    };
    for (property, dependency) in dependencies {
        if !instance_map.contains_key(property) {
            continue;
        }
        match dependency {
            Value::Array(names) => {
                for name in names {
                    match name {
                        Value::String(name) => {
                            if !instance_map.contains_key(name) {
                                bag.add(ValidationError::dependency(
                                    instance,
                                    instance_path.clone(),
                                    property.clone(),
                                    name.clone(),
                                ));
                            }
                        }
                        _ => bag.add(ValidationError::invalid_schema(
                            instance,
                            instance_path.clone(),
                            "a dependency list must contain strings".to_string(),
                        )),
                    }
                }
            }
            Value::Object(_) => {
                // the whole instance must hold under the dependency schema
                let errors = validate_schema(
                    scope,
                    instance,
                    dependency,
                    instance_path,
                    &schema_path.append("dependencies").append(property),
                );
                if !errors.is_empty() {
                    bag.add(ValidationError::dependency_schema(
                        instance,
                        instance_path.clone(),
                        property.clone(),
                        errors,
                    ));
                }
            }
            _ => bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "a dependency must be an array of names or a schema".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"dependencies": {"a": ["b"]}}), &json!({"a": 1, "b": 2}), true)]
    #[test_case(&json!({"dependencies": {"a": ["b"]}}), &json!({"a": 1}), false)]
    #[test_case(&json!({"dependencies": {"a": ["b"]}}), &json!({"c": 1}), true; "absent trigger")]
    #[test_case(&json!({"dependencies": {"a": {"required": ["b"]}}}), &json!({"a": 1, "b": 2}), true)]
    #[test_case(&json!({"dependencies": {"a": {"required": ["b"]}}}), &json!({"a": 1}), false)]
    #[test_case(&json!({"dependencies": {"a": {"minProperties": 2}}}), &json!({"a": 1, "b": 2}), true; "schema applies to the whole instance")]
    fn dependencies(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }
}
