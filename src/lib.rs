//! # jsonschema-draft4
//!
//! A crate for performing JSON Schema Draft 4 validation. A schema is
//! compiled once — parsing it and expanding every `$ref` in place, loading
//! remote documents via HTTP(S) or the filesystem where needed — and can
//! then validate any number of instances, returning the violations grouped
//! by their location within the instance.
//!
//! ## Example:
//!
//! ```rust
//! use jsonschema_draft4::{JSONSchema, SchemaError};
//! use serde_json::json;
//!
//! fn main() -> Result<(), SchemaError> {
//!     let schema = json!({"maxLength": 5});
//!     let instance = json!("foo bar");
//!     let compiled = JSONSchema::compile(&schema)?;
//!     let errors = compiled.validate(&instance);
//!     for (location, violations) in errors.iter() {
//!         for violation in violations {
//!             println!("Validation error at '{}': {}", location, violation)
//!         }
//!     }
//!     Ok(())
//! }
//! ```
#![warn(
    clippy::cast_possible_truncation,
    clippy::doc_markdown,
    clippy::explicit_iter_loop,
    clippy::map_unwrap_or,
    clippy::match_same_arms,
    clippy::needless_borrow,
    clippy::print_stdout,
    clippy::redundant_closure,
    clippy::trivially_copy_pass_by_ref,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_qualifications,
    variant_size_differences
)]
#![allow(clippy::upper_case_acronyms)]
mod error;
mod helpers;
mod keywords;
pub mod metaschema;
mod options;
mod paths;
mod primitive_type;
mod resolver;
mod schemas;
mod uri;
mod validator;

pub use error::{ErrorBag, SchemaError, TypeKind, ValidationError, ValidationErrorKind};
pub use options::ResolveOptions;
pub use paths::JSONPointer;
pub use primitive_type::PrimitiveType;
pub use resolver::{resolve, DefaultFetcher, Fetcher};
pub use validator::JSONSchema;

use serde_json::Value;

/// A shortcut for validating `instance` against `schema`.
/// ```rust
/// use jsonschema_draft4::is_valid;
/// use serde_json::json;
///
/// let schema = json!({"maxLength": 5});
/// let instance = json!("foo");
/// assert!(is_valid(&schema, &instance));
/// ```
///
/// This function panics if an invalid schema is passed.
#[must_use]
#[inline]
pub fn is_valid(schema: &Value, instance: &Value) -> bool {
    let compiled = JSONSchema::compile(schema).expect("Invalid schema");
    compiled.is_valid(instance)
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_valid() {
        let schema = json!({"minLength": 5});
        let valid = json!("foobar");
        let invalid = json!("foo");
        assert!(is_valid(&schema, &valid));
        assert!(!is_valid(&schema, &invalid));
    }
}
