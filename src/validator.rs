//! The compiled form of a schema: parsed, with every reference expanded in
//! place, ready to validate instances.
use crate::{
    error::{ErrorBag, SchemaError},
    keywords::{self, Scope},
    options::ResolveOptions,
    paths::JSONPointer,
    resolver,
    schemas::{self, SchemaScan},
};
use serde_json::Value;

/// A schema document after the resolve phase.
///
/// The document is mutated only while [`JSONSchema::compile`] runs; after
/// that it is read-only and the value can be reused for any number of
/// validation calls.
#[derive(Debug)]
pub struct JSONSchema {
    document: Value,
    scan: SchemaScan,
    absolute_ids: Vec<(JSONPointer, String)>,
    options: ResolveOptions,
}

impl JSONSchema {
    /// Return a default [`ResolveOptions`] that can configure the resolve
    /// phase, e.g. disable downloads or inject a custom fetcher.
    #[must_use]
    pub fn options() -> ResolveOptions {
        ResolveOptions::default()
    }

    /// Parse `schema` and expand its references with default options.
    pub fn compile(schema: &Value) -> Result<JSONSchema, SchemaError> {
        Self::compile_with(schema, &ResolveOptions::default())
    }

    pub(crate) fn compile_with(
        schema: &Value,
        options: &ResolveOptions,
    ) -> Result<JSONSchema, SchemaError> {
        if !schema.is_object() {
            return Err(SchemaError::SchemaParse {
                reason: "the top-level schema must be a JSON object".to_string(),
            });
        }
        let mut document = schema.clone();
        resolver::resolve(&mut document, options)?;
        // references surviving resolution are followed at run time through
        // these maps
        let scan = schemas::scan(
            &document,
            &options.id_key,
            &options.ref_key,
            &options.excluded_data_keys,
        );
        let absolute_ids = resolver::absolute_id_map(&scan, None);
        Ok(JSONSchema {
            document,
            scan,
            absolute_ids,
            options: options.clone(),
        })
    }

    /// Validate `instance` and collect every violation into an error bag,
    /// keyed by the location of the offending value within the instance.
    /// An empty bag means the instance is valid.
    #[must_use]
    pub fn validate<'a>(&'a self, instance: &'a Value) -> ErrorBag<'a> {
        let scope = Scope {
            root: &self.document,
            scan: &self.scan,
            absolute_ids: &self.absolute_ids,
            ref_key: &self.options.ref_key,
        };
        keywords::validate_schema(
            &scope,
            instance,
            &self.document,
            &JSONPointer::default(),
            &JSONPointer::default(),
        )
    }

    /// Boolean shortcut over [`JSONSchema::validate`].
    #[must_use]
    pub fn is_valid(&self, instance: &Value) -> bool {
        self.validate(instance).is_empty()
    }

    /// The schema document after reference expansion.
    #[must_use]
    pub fn resolved_document(&self) -> &Value {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::JSONSchema;
    use serde_json::json;

    #[test]
    fn wrong_schema_type() {
        let schema = json!([1]);
        assert!(JSONSchema::compile(&schema).is_err());
    }

    #[test]
    fn empty_schema_accepts_everything() {
        let compiled = JSONSchema::compile(&json!({})).unwrap();
        for instance in [json!(null), json!(1), json!("x"), json!([1]), json!({"a": 1})].iter() {
            assert!(compiled.is_valid(instance));
        }
    }

    #[test]
    fn multiple_errors_are_collected() {
        let schema = json!({"minProperties": 2, "required": ["a", "b"]});
        let compiled = JSONSchema::compile(&schema).unwrap();
        let instance = json!({"c": 3});
        let errors = compiled.validate(&instance);
        assert_eq!(errors.get("").map(<[_]>::len), Some(3));
    }

    #[test]
    fn errors_do_not_interrupt_each_other() {
        let schema = json!({
            "properties": {
                "a": {"type": "integer"},
                "b": {"type": "string"}
            }
        });
        let compiled = JSONSchema::compile(&schema).unwrap();
        let instance = json!({"a": "x", "b": 1});
        let errors = compiled.validate(&instance);
        assert!(errors.get("/a").is_some());
        assert!(errors.get("/b").is_some());
    }

    #[test]
    fn sequential_reuse() {
        let compiled = JSONSchema::compile(&json!({"type": "integer"})).unwrap();
        assert!(compiled.is_valid(&json!(1)));
        assert!(!compiled.is_valid(&json!("x")));
        assert!(compiled.is_valid(&json!(2)));
    }
}
