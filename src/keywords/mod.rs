//! The validation engine: keyword-by-keyword interpretation of a resolved
//! schema document. Only keywords present in a subschema are evaluated;
//! unknown keywords are ignored.
pub(crate) mod all_of;
pub(crate) mod any_of;
pub(crate) mod dependencies;
pub(crate) mod enum_;
pub(crate) mod format;
pub(crate) mod items;
pub(crate) mod max_items;
pub(crate) mod max_length;
pub(crate) mod max_properties;
pub(crate) mod maximum;
pub(crate) mod min_items;
pub(crate) mod min_length;
pub(crate) mod min_properties;
pub(crate) mod minimum;
pub(crate) mod multiple_of;
pub(crate) mod not;
pub(crate) mod one_of;
pub(crate) mod pattern;
pub(crate) mod properties;
pub(crate) mod ref_;
pub(crate) mod required;
pub(crate) mod type_;
pub(crate) mod unique_items;

use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
    schemas::SchemaScan,
};
use serde_json::Value;

/// Everything the engine needs besides the instance fragment at hand: the
/// resolved document and the id maps used to follow leftover references at
/// run time.
pub(crate) struct Scope<'a> {
    pub(crate) root: &'a Value,
    pub(crate) scan: &'a SchemaScan,
    pub(crate) absolute_ids: &'a [(JSONPointer, String)],
    pub(crate) ref_key: &'a str,
}

/// Validate `instance` against the subschema sitting at `schema_path`
/// within the resolved document.
pub(crate) fn validate_schema<'a>(
    scope: &Scope<'a>,
    instance: &'a Value,
    schema: &'a Value,
    instance_path: &JSONPointer,
    schema_path: &JSONPointer,
) -> ErrorBag<'a> {
    let mut bag = ErrorBag::new();
    let object = match schema {
        Value::Object(object) => object,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                format!("subschema at '{}' is not an object", schema_path),
            ));
            return bag;
        }
    };
    if let Some(Value::String(reference)) = object.get(scope.ref_key) {
        // a reference the resolver left in place: part of a reference cycle
        return ref_::validate(scope, instance, reference, instance_path, schema_path);
    }

    if let Some(value) = object.get("type") {
        type_::validate(instance, value, instance_path, &mut bag);
    }
    if let Some(value) = object.get("enum") {
        enum_::validate(instance, value, instance_path, &mut bag);
    }
    if let Some(value) = object.get("allOf") {
        all_of::validate(scope, instance, value, instance_path, schema_path, &mut bag);
    }
    if let Some(value) = object.get("anyOf") {
        any_of::validate(scope, instance, value, instance_path, schema_path, &mut bag);
    }
    if let Some(value) = object.get("oneOf") {
        one_of::validate(scope, instance, value, instance_path, schema_path, &mut bag);
    }
    if let Some(value) = object.get("not") {
        not::validate(scope, instance, value, instance_path, schema_path, &mut bag);
    }

    match instance {
        Value::Object(map) => {
            if let Some(value) = object.get("maxProperties") {
                max_properties::validate(instance, map, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("minProperties") {
                min_properties::validate(instance, map, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("required") {
                required::validate(instance, map, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("dependencies") {
                dependencies::validate(
                    scope,
                    instance,
                    map,
                    value,
                    instance_path,
                    schema_path,
                    &mut bag,
                );
            }
            if object.contains_key("properties")
                || object.contains_key("patternProperties")
                || object.contains_key("additionalProperties")
            {
                properties::validate(
                    scope,
                    instance,
                    map,
                    object,
                    instance_path,
                    schema_path,
                    &mut bag,
                );
            }
        }
        Value::Array(array) => {
            if object.contains_key("items") {
                items::validate(
                    scope,
                    instance,
                    array,
                    object,
                    instance_path,
                    schema_path,
                    &mut bag,
                );
            }
            if let Some(value) = object.get("uniqueItems") {
                unique_items::validate(instance, array, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("minItems") {
                min_items::validate(instance, array, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("maxItems") {
                max_items::validate(instance, array, value, instance_path, &mut bag);
            }
        }
        Value::String(string) => {
            if let Some(value) = object.get("maxLength") {
                max_length::validate(instance, string, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("minLength") {
                min_length::validate(instance, string, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("pattern") {
                pattern::validate(instance, string, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("format") {
                format::validate(instance, string, value, instance_path, &mut bag);
            }
        }
        Value::Number(number) => {
            if let Some(value) = object.get("multipleOf") {
                multiple_of::validate(instance, number, value, instance_path, &mut bag);
            }
            if let Some(value) = object.get("maximum") {
                maximum::validate(instance, number, value, object, instance_path, &mut bag);
            }
            if let Some(value) = object.get("minimum") {
                minimum::validate(instance, number, value, object, instance_path, &mut bag);
            }
        }
        _ => {}
    }
    bag
}
