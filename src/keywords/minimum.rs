//! Validator for the `minimum` keyword, together with its Draft 4
//! `exclusiveMinimum` modifier.
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
                "'minimum' must be a number".to_string(),
            ));
            return;
        }
    };
    let exclusive = match schema.get("exclusiveMinimum") {
        None => false,
        Some(Value::Bool(exclusive)) => *exclusive,
        Some(_) => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'exclusiveMinimum' must be a boolean".to_string(),
            ));
            return;
        }
    };
    let observed = helpers::as_f64(number);
    if exclusive {
        if observed <= limit || helpers::almost_equals(observed, limit) {
            bag.add(ValidationError::exclusive_minimum(
                instance,
                instance_path.clone(),
                limit,
            ));
        }
    } else if observed < limit && !helpers::almost_equals(observed, limit) {
        bag.add(ValidationError::minimum(
            instance,
            instance_path.clone(),
            limit,
        ));
    }
}
