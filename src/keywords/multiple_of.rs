//! Validator for the `multipleOf` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    helpers,
    paths::JSONPointer,
};
use serde_json::{Number, Value};

pub(crate) fn validate<'a>(
    instance: &'a Value,
    number: &Number,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let multiple_of = match value.as_f64() {
        Some(multiple_of) if multiple_of > 0.0 => multiple_of,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'multipleOf' must be a number greater than 0".to_string(),
            ));
            return;
        }
    };
    // the quotient must sit within tolerance of an integer
    let remainder = (helpers::as_f64(number) / multiple_of).rem_euclid(1.0);
    if !helpers::almost_equals(remainder, 0.0) && !helpers::almost_equals(remainder, 1.0) {
        bag.add(ValidationError::multiple_of(
            instance,
            instance_path.clone(),
            multiple_of,
        ));
    }
}
