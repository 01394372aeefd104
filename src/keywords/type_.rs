//! Validator for the `type` keyword.
use crate::{
    error::{ErrorBag, ValidationError},
    helpers,
    paths::JSONPointer,
    primitive_type::PrimitiveType,
};
use serde_json::Value;
use std::convert::TryFrom;

fn matches(type_: PrimitiveType, instance: &Value) -> bool {
    match type_ {
        PrimitiveType::Array => instance.is_array(),
        PrimitiveType::Boolean => instance.is_boolean(),
        // booleans are never numeric, and a float with a zero fractional
        // part is still not an integer under Draft 4
        PrimitiveType::Integer => match instance {
            Value::Number(number) => helpers::is_integer(number),
            _ => false,
        },
        PrimitiveType::Null => instance.is_null(),
        PrimitiveType::Number => instance.is_number(),
        PrimitiveType::Object => instance.is_object(),
        PrimitiveType::String => instance.is_string(),
    }
}

pub(crate) fn validate<'a>(
    instance: &'a Value,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    match value {
        Value::String(name) => match PrimitiveType::try_from(name.as_str()) {
            Ok(type_) => {
                if !matches(type_, instance) {
                    bag.add(ValidationError::single_type_error(
                        instance,
                        instance_path.clone(),
                        type_,
                    ));
                }
            }
            Err(()) => bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                format!("'{}' is not a known type", name),
            )),
        },
        Value::Array(names) => {
            let mut types = Vec::with_capacity(names.len());
            for name in names {
                match name.as_str().map(PrimitiveType::try_from) {
                    Some(Ok(type_)) => types.push(type_),
                    _ => {
                        bag.add(ValidationError::invalid_schema(
                            instance,
                            instance_path.clone(),
                            format!("'{}' is not a known type", name),
                        ));
                        return;
                    }
                }
            }
            if !types.iter().any(|type_| matches(*type_, instance)) {
                bag.add(ValidationError::multiple_type_error(
                    instance,
                    instance_path.clone(),
                    types,
                ));
            }
        }
        _ => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            "'type' must be a string or an array of strings".to_string(),
        )),
    }
}
