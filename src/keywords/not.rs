//! Validator for the `not` keyword.
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
    if !value.is_object() {
        bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'not' must be an object".to_string(),
        ));
        return;
    }
    let errors = validate_schema(
        scope,
        instance,
        value,
        instance_path,
        &schema_path.append("not"),
    );
    if errors.is_empty() {
        bag.add(ValidationError::not(instance, instance_path.clone(), value));
    }
}
