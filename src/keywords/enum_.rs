//! Validator for the `enum` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    helpers,
    paths::JSONPointer,
};
use serde_json::Value;

pub(crate) fn validate<'a>(
    instance: &'a Value,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    match value {
        Value::Array(options) => {
            if !options.iter().any(|option| helpers::equal(instance, option)) {
                bag.add(ValidationError::enumeration(
                    instance,
                    instance_path.clone(),
                    value,
                ));
            }
        }
        _ => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'enum' must be an array".to_string(),
        )),
    }
}
