//! The object container pass: `properties`, `patternProperties` and
//! `additionalProperties`.
use super::{validate_schema, Scope};
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use fancy_regex::Regex;
use serde_json::{Map, Value};

pub(crate) fn validate<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    instance_map: &'a Map<String, Value>,
    schema: &'a Map<String, Value>,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let properties = match schema.get("properties") {
        None => None,
        Some(Value::Object(map)) => Some(map),
        Some(_) => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'properties' must be an object".to_string(),
            ));
            return;
        }
    };
    let mut patterns: Vec<(&'a str, Regex, &'a Value)> = Vec::new();
    match schema.get("patternProperties") {
        None => {}
        Some(Value::Object(map)) => {
            for (pattern, subschema) in map {
                match Regex::new(pattern) {
                    Ok(regex) => patterns.push((pattern.as_str(), regex, subschema)),
                    Err(_) => bag.add(ValidationError::invalid_schema(
                        instance,
                        instance_path.clone(),
                        format!("'{}' is not a valid pattern", pattern),
                    )),
                }
            }
        }
        Some(_) => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'patternProperties' must be an object".to_string(),
            ));
            return;
        }
    }
    let additional = schema.get("additionalProperties");

    for (key, child) in instance_map {
        let child_path = instance_path.append(key);
        let mut collected: Vec<(&'a Value, JSONPointer)> = Vec::new();
        if let Some(subschema) = properties.and_then(|map| map.get(key)) {
            collected.push((subschema, schema_path.append("properties").append(key)));
        }
        for (pattern, regex, subschema) in &patterns {
            if regex.is_match(key).unwrap_or(false) {
                collected.push((
                    subschema,
                    schema_path.append("patternProperties").append(pattern),
                ));
            }
        }
        if collected.is_empty() {
            match additional {
                Some(Value::Bool(false)) => {
                    bag.add(ValidationError::additional_properties(
                        child,
                        child_path,
                        key.clone(),
                    ));
                    continue;
                }
                Some(subschema @ Value::Object(_)) => {
                    collected.push((subschema, schema_path.append("additionalProperties")));
                }
                Some(Value::Bool(true)) | None => continue,
                Some(_) => {
                    bag.add(ValidationError::invalid_schema(
                        child,
                        child_path,
                        "'additionalProperties' must be a boolean or an object".to_string(),
                    ));
                    continue;
                }
            }
        }
        // the value must hold under every collected schema
        let mut failures = ErrorBag::new();
        for (subschema, subschema_path) in collected {
            failures.merge(validate_schema(
                scope,
                child,
                subschema,
                &child_path,
                &subschema_path,
            ));
        }
        if !failures.is_empty() {
            bag.add(ValidationError::property_mismatch(
                child,
                child_path,
                key.clone(),
                failures,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::{json, Value};
    use test_case::test_case;

    #[test_case(&json!({"properties": {"a": {"type": "integer"}}}), &json!({"a": 1}), true)]
    #[test_case(&json!({"properties": {"a": {"type": "integer"}}}), &json!({"a": "x"}), false)]
    #[test_case(&json!({"properties": {"a": {"type": "integer"}}}), &json!({"b": "x"}), true; "unlisted keys are unconstrained")]
    #[test_case(&json!({"patternProperties": {"^x": {"type": "integer"}}}), &json!({"xenon": 1}), true)]
    #[test_case(&json!({"patternProperties": {"^x": {"type": "integer"}}}), &json!({"xenon": "x"}), false)]
    #[test_case(&json!({"patternProperties": {"^x": {"type": "integer"}}}), &json!({"argon": "x"}), true)]
    #[test_case(&json!({"additionalProperties": false}), &json!({}), true)]
    #[test_case(&json!({"additionalProperties": false}), &json!({"a": 1}), false)]
    #[test_case(&json!({"properties": {"a": {}}, "additionalProperties": false}), &json!({"a": 1}), true)]
    #[test_case(&json!({"properties": {"a": {}}, "additionalProperties": false}), &json!({"a": 1, "b": 2}), false)]
    #[test_case(&json!({"additionalProperties": {"type": "integer"}}), &json!({"a": 1}), true)]
    #[test_case(&json!({"additionalProperties": {"type": "integer"}}), &json!({"a": "x"}), false)]
    #[test_case(
        &json!({"properties": {"a": {"type": "integer"}}, "patternProperties": {"^a": {"minimum": 5}}}),
        &json!({"a": 7}),
        true;
        "both collected schemas hold"
    )]
    #[test_case(
        &json!({"properties": {"a": {"type": "integer"}}, "patternProperties": {"^a": {"minimum": 5}}}),
        &json!({"a": 3}),
        false;
        "one collected schema fails"
    )]
    fn container(schema: &Value, instance: &Value, expected: bool) {
        assert_eq!(tests_util::is_valid(schema, instance), expected);
    }

    #[test]
    fn member_errors_are_located() {
        let schema = json!({"properties": {"a": {"type": "integer"}}});
        let errors = tests_util::validate(&schema, &json!({"a": "x", "b": 1}));
        assert!(errors.get("/a").is_some());
        assert!(errors.get("/b").is_none());
    }

    #[test]
    fn forbidden_key_is_reported_at_its_location() {
        let schema = json!({"additionalProperties": false});
        let errors = tests_util::validate(&schema, &json!({"bar": false}));
        assert!(errors.get("/bar").is_some());
    }
}
