//! Validator for the `pattern` keyword.
//!
//! Patterns are matched with `fancy-regex`, which covers the lookaround the
//! ECMA 262 dialect allows. Known divergences: possessive quantifiers are
//! rejected, octal escapes are rejected, and `\d`/`\w` are Unicode-aware.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use fancy_regex::Regex;
use serde_json::Value;

pub(crate) fn validate<'a>(
    instance: &'a Value,
    string: &str,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let pattern = match value {
        Value::String(pattern) => pattern,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'pattern' must be a string".to_string(),
            ));
            return;
        }
    };
    match Regex::new(pattern) {
        Ok(regex) => {
            // a partial match suffices; patterns are not anchored
            if !regex.is_match(string).unwrap_or(false) {
                bag.add(ValidationError::pattern(
                    instance,
                    instance_path.clone(),
                    pattern.clone(),
                ));
            }
        }
        Err(_) => bag.add(ValidationError::invalid_schema(
            instance,
            instance_path.clone(),
            format!("'{}' is not a valid pattern", pattern),
        )),
    }
}
