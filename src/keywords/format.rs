//! Validator for the `format` keyword.
//!
//! Draft 4 defines `date-time`, `email`, `hostname`, `ipv4`, `ipv6`, `uri`
//! and `regex`. Failures are regular validation errors; unknown format
//! names are ignored.
use crate::{
    error::{ErrorBag, ValidationError},
    paths::JSONPointer,
};
use chrono::DateTime;
use serde_json::Value;
use std::{net::IpAddr, str::FromStr};
use url::Url;

fn is_valid_date_time(instance: &str) -> bool {
    DateTime::parse_from_rfc3339(instance).is_ok()
}

fn is_valid_email(instance: &str) -> bool {
    instance.contains('@')
}

fn is_valid_hostname(instance: &str) -> bool {
    !(instance.ends_with('-')
        || instance.starts_with('-')
        || instance.is_empty()
        || instance.chars().count() > 255
        || instance
            .chars()
            .any(|c| !(c.is_alphanumeric() || c == '-' || c == '.'))
        || instance.split('.').any(|part| part.chars().count() > 63))
}

fn is_valid_ipv4(instance: &str) -> bool {
    // octets with leading zeros are rejected even though the address parses
    if instance
        .split('.')
        .any(|octet| octet.len() > 1 && octet.starts_with('0'))
    {
        return false;
    }
    match IpAddr::from_str(instance) {
        Ok(address) => address.is_ipv4(),
        Err(_) => false,
    }
}

fn is_valid_ipv6(instance: &str) -> bool {
    match IpAddr::from_str(instance) {
        Ok(address) => address.is_ipv6(),
        Err(_) => false,
    }
}

fn is_valid_uri(instance: &str) -> bool {
    Url::parse(instance).is_ok()
}

fn is_valid_regex(instance: &str) -> bool {
    fancy_regex::Regex::new(instance).is_ok()
}

fn checker(format: &str) -> Option<fn(&str) -> bool> {
    match format {
        "date-time" => Some(is_valid_date_time),
        "email" => Some(is_valid_email),
        "hostname" => Some(is_valid_hostname),
        "ipv4" => Some(is_valid_ipv4),
        "ipv6" => Some(is_valid_ipv6),
        "uri" => Some(is_valid_uri),
        "regex" => Some(is_valid_regex),
        _ => None,
    }
}

pub(crate) fn validate<'a>(
    instance: &'a Value,
    string: &str,
    value: &'a Value,
    instance_path: &JSONPointer,
    bag: &mut ErrorBag<'a>,
) {
    let format = match value {
        Value::String(format) => format,
        _ => {
            bag.add(ValidationError::invalid_schema(
                instance,
                instance_path.clone(),
                "'format' must be a string".to_string(),
            ));
            return;
        }
    };
    if let Some(check) = checker(format) {
        if !check(string) {
            bag.add(ValidationError::format(
                instance,
                instance_path.clone(),
                format,
            ));
        }
    }
}
