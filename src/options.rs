//! Configuration of the resolve phase.
use crate::{
    error::SchemaError,
    resolver::{DefaultFetcher, Fetcher},
    validator::JSONSchema,
};
use serde_json::Value;
use std::{fmt, sync::Arc};

/// Full configuration of the resolve phase.
///
/// Built via [`JSONSchema::options`]:
///
/// ```rust
/// # use jsonschema_draft4::JSONSchema;
/// # use serde_json::json;
/// let schema = JSONSchema::options()
///     .with_download(false)
///     .compile(&json!({"type": "integer"}))
///     .unwrap();
/// assert!(schema.is_valid(&json!(1)));
/// ```
#[derive(Clone)]
pub struct ResolveOptions {
    pub(crate) download: bool,
    pub(crate) id_key: String,
    pub(crate) ref_key: String,
    pub(crate) excluded_data_keys: Vec<String>,
    pub(crate) fetcher: Arc<dyn Fetcher>,
}

impl Default for ResolveOptions {
    fn default() -> ResolveOptions {
        ResolveOptions {
            download: true,
            id_key: "id".to_string(),
            ref_key: "$ref".to_string(),
            excluded_data_keys: vec!["default".to_string(), "enum".to_string()],
            fetcher: Arc::new(DefaultFetcher::default()),
        }
    }
}

impl fmt::Debug for ResolveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolveOptions")
            .field("download", &self.download)
            .field("id_key", &self.id_key)
            .field("ref_key", &self.ref_key)
            .field("excluded_data_keys", &self.excluded_data_keys)
            .finish()
    }
}

impl ResolveOptions {
    /// Whether remote `http(s)` documents may be downloaded. When disabled,
    /// remote references resolve to the accept-all schema.
    #[must_use]
    pub fn with_download(mut self, download: bool) -> Self {
        self.download = download;
        self
    }

    /// The keyword naming subschemas, `id` by default.
    #[must_use]
    pub fn with_id_key(mut self, id_key: &str) -> Self {
        self.id_key = id_key.to_string();
        self
    }

    /// The reference keyword, `$ref` by default.
    #[must_use]
    pub fn with_ref_key(mut self, ref_key: &str) -> Self {
        self.ref_key = ref_key.to_string();
        self
    }

    /// Keys whose values are data rather than schema. References below them
    /// are inert. `default` and `enum` by default.
    #[must_use]
    pub fn with_excluded_data_keys(mut self, keys: &[&str]) -> Self {
        self.excluded_data_keys = keys.iter().map(|key| (*key).to_string()).collect();
        self
    }

    /// Use a custom [`Fetcher`] for external documents.
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Arc<dyn Fetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Parse and resolve `schema` with this configuration.
    pub fn compile(&self, schema: &Value) -> Result<JSONSchema, SchemaError> {
        JSONSchema::compile_with(schema, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = ResolveOptions::default();
        assert!(options.download);
        assert_eq!(options.id_key, "id");
        assert_eq!(options.ref_key, "$ref");
        assert_eq!(options.excluded_data_keys, vec!["default", "enum"]);
    }

    #[test]
    fn builder() {
        let options = ResolveOptions::default()
            .with_download(false)
            .with_id_key("$id")
            .with_ref_key("reference")
            .with_excluded_data_keys(&["examples"]);
        assert!(!options.download);
        assert_eq!(options.id_key, "$id");
        assert_eq!(options.ref_key, "reference");
        assert_eq!(options.excluded_data_keys, vec!["examples"]);
    }
}
