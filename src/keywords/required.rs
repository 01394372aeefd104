//! Validator for the `required` keyword.
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
    let names = match value {
        Value::Array(names) => names,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'required' must be an array of strings".to_string(),
            ));
            return;
        }
    };
    for name in names {
        match name {
            Value::String(name) => {
                if !instance_map.contains_key(name) {
                    bag.add(ValidationError::required(
                        instance,
                        instance_path.clone(),
                        name.clone(),
                    ));
                }
            }
            _ => bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'required' must be an array of strings".to_string(),
            )),
        }
    }
}
