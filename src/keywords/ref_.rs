//! Run-time handling of references the resolver left in place.
//!
//! A `$ref` surviving resolution is part of a reference cycle. It is
//! followed through the resolved document here instead; recursion is
//! bounded because every recursive step descends into the instance, and a
//! chain revisiting a position without consuming instance depth holds
//! vacuously.
use super::{validate_schema, Scope};
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
    resolver::{classify_ref, RefTarget},
};
use ahash::AHashSet;
use serde_json::Value;

pub(crate) fn validate<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    reference: &str,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
) -> ErrorBag<'a> {
    let mut bag = ErrorBag::new();
    let mut visited: AHashSet<String> = AHashSet::new();
    visited.insert(schema_path.to_string());
    let mut position = schema_path.clone();
    let mut reference = reference.to_string();
    loop {
        let target = match classify_ref(
            &position,
            &reference,
            scope.scan,
            scope.absolute_ids,
            None,
        ) {
            Ok(RefTarget::Local(target)) => target,
            Ok(RefTarget::Remote { .. }) | Err(_) => {
                bag.add(ValidationError::unresolved_reference(
                    instance,
                    instance_path.clone(),
                    reference,
                ));
                return bag;
            }
        };
        if !visited.insert(target.to_string()) {
            // a pure reference cycle constrains nothing
            return bag;
        }
        let schema = match target.follow(scope.root) {
            Some(schema) => schema,
            None => {
                bag.add(ValidationError::unresolved_reference(
                    instance,
                    instance_path.clone(),
                    reference,
                ));
                return bag;
            }
        };
        match schema {
            Value::Object(object) => {
                if let Some(Value::String(next)) = object.get(scope.ref_key) {
                    position = target;
                    reference = next.clone();
                    continue;
                }
                return validate_schema(scope, instance, schema, instance_path, &target);
            }
            _ => {
                bag.add(ValidationError::invalid_schema(
                    instance,
                    instance_path.clone(),
                    format!("reference '{}' points to a non-schema value", reference),
                ));
                return bag;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_util;
    use serde_json::json;

    #[test]
    fn recursive_schema() {
        let schema = json!({
            "properties": {"foo": {"$ref": "#"}},
            "additionalProperties": false
        });
        tests_util::expect_valid(&schema, &json!({"foo": {"foo": {}}}));
        tests_util::expect_not_valid(&schema, &json!({"foo": {"bar": false}}));
    }

    #[test]
    fn mutual_recursion_holds_vacuously() {
        let schema = json!({
            "definitions": {
                "a": {"$ref": "#/definitions/b"},
                "b": {"$ref": "#/definitions/a"}
            },
            "properties": {"foo": {"$ref": "#/definitions/a"}}
        });
        tests_util::expect_valid(&schema, &json!({"foo": 1}));
        tests_util::expect_valid(&schema, &json!({"foo": "anything"}));
    }

    #[test]
    fn recursion_through_constraints() {
        let schema = json!({
            "properties": {"p": {"$ref": "#/definitions/x"}},
            "definitions": {
                "x": {
                    "type": "array",
                    "items": {"$ref": "#/definitions/x"}
                }
            }
        });
        tests_util::expect_valid(&schema, &json!({"p": [[], [[], []]]}));
        tests_util::expect_not_valid(&schema, &json!({"p": [[], [1]]}));
    }
}
