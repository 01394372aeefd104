//! Validator for the `uniqueItems` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use serde_json::Value;

pub(crate) fn validate<'a>(
    instance: &'a Value,
    array: &'a [Value],
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    if value != &Value::Bool(true) {
        return;
    }
    // quadratic, but structural comparison cannot be hashed cheaply and
    // arrays under uniqueItems are small in practice
    for (index, item) in array.iter().enumerate() {
        if array[..index].iter().any(|other| other == item) {
            bag.add(ValidationError::unique_items(
                instance,
                instance_path.clone(),
            ));
            return;
        }
    }
}
