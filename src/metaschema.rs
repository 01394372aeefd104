//! The bundled Draft 4 metaschema, for checking schema documents before
//! they are used for validation.
use crate::{error::ErrorBag, validator::JSONSchema};
use serde_json::Value;

lazy_static::lazy_static! {
    static ref META_SCHEMA: JSONSchema = {
        let document: Value =
            serde_json::from_str(include_str!("draft4.json")).expect("Is valid JSON");
        JSONSchema::compile(&document).expect("Is a valid schema")
    };
}

/// Validate a schema document against the Draft 4 metaschema. An empty bag
/// means the document is a well-formed Draft 4 schema.
///
/// ```rust
/// # use jsonschema_draft4::metaschema;
/// # use serde_json::json;
/// assert!(metaschema::check_schema(&json!({"type": "integer"})).is_empty());
/// assert!(!metaschema::check_schema(&json!({"type": 12})).is_empty());
/// ```
pub fn check_schema(schema: &Value) -> ErrorBag<'_> {
    META_SCHEMA.validate(schema)
}
