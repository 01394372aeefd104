//! Locating subschemas inside a schema document.
//!
//! A pointer syntactically denotes a subschema when its token path matches
//! the Draft 4 applicator grammar: the filter is purely syntactic, so the
//! walker needs no semantic knowledge of every keyword.
use crate::paths::JSONPointer;
use serde_json::Value;

lazy_static::lazy_static! {
    static ref SCHEMA_POSITION: regex::Regex = regex::Regex::new(
        r"(?x)
        ^
        (?:
            (?:
                /(?:additionalItems|items|additionalProperties|not)      # direct subschema locations
              | /(?:items|allOf|anyOf|oneOf)/[0-9]+                      # subschemas in an array
              | /(?:definitions|properties|patternProperties|dependencies)/[^/]+  # subschemas under a key
            )+
          | /+
        )?
        $"
    ).expect("Is a valid regex");
}

/// `true` iff the rendered token path denotes a subschema position.
/// The root pointer always does.
pub(crate) fn is_schema_position(pointer: &JSONPointer) -> bool {
    SCHEMA_POSITION.is_match(&pointer.to_string())
}

/// The `id` and `$ref` occurrences of one document, in depth-first order.
#[derive(Debug, Default)]
pub(crate) struct SchemaScan {
    /// Schema positions carrying an `id` key with a non-empty string value.
    pub(crate) ids: Vec<(JSONPointer, String)>,
    /// Schema positions carrying a `$ref` key with a string value.
    pub(crate) refs: Vec<(JSONPointer, String)>,
}

/// Walk `document` and record every `id` and `$ref` sitting at a schema
/// position. Values under the excluded keys (`enum` and `default` by
/// default) are data, not schema, and are not descended into.
pub(crate) fn scan(
    document: &Value,
    id_key: &str,
    ref_key: &str,
    excluded_keys: &[String],
) -> SchemaScan {
    let mut result = SchemaScan::default();
    collect(
        document,
        &JSONPointer::default(),
        id_key,
        ref_key,
        excluded_keys,
        &mut result,
    );
    result
}

fn collect(
    value: &Value,
    pointer: &JSONPointer,
    id_key: &str,
    ref_key: &str,
    excluded_keys: &[String],
    result: &mut SchemaScan,
) {
    match value {
        Value::Object(object) => {
            if is_schema_position(pointer) {
                if let Some(Value::String(id)) = object.get(id_key) {
                    if !id.is_empty() {
                        result.ids.push((pointer.clone(), id.clone()));
                    }
                }
                if let Some(Value::String(reference)) = object.get(ref_key) {
                    result.refs.push((pointer.clone(), reference.clone()));
                }
            }
            for (key, subvalue) in object {
                if excluded_keys.iter().any(|excluded| excluded == key) {
                    continue;
                }
                collect(
                    subvalue,
                    &pointer.append(key),
                    id_key,
                    ref_key,
                    excluded_keys,
                    result,
                );
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                collect(
                    item,
                    &pointer.append_index(index),
                    id_key,
                    ref_key,
                    excluded_keys,
                    result,
                );
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn excluded() -> Vec<String> {
        vec!["default".to_string(), "enum".to_string()]
    }

    #[test_case(""; "root")]
    #[test_case("/not")]
    #[test_case("/items")]
    #[test_case("/additionalItems")]
    #[test_case("/additionalProperties")]
    #[test_case("/items/0")]
    #[test_case("/allOf/12")]
    #[test_case("/anyOf/0")]
    #[test_case("/oneOf/3")]
    #[test_case("/definitions/somekey")]
    #[test_case("/properties/somekey")]
    #[test_case("/patternProperties/^x")]
    #[test_case("/dependencies/somekey")]
    #[test_case("/definitions/1"; "object slot key may be numeric")]
    #[test_case("/definitions/somekey/anyOf/123/not"; "positions nest")]
    fn schema_positions(pointer: &str) {
        assert!(is_schema_position(&JSONPointer::parse(pointer)));
    }

    #[test_case("/something/not"; "direct parent is not a schema")]
    #[test_case("/items/key"; "array slot with a key")]
    #[test_case("/allOf"; "array applicator without index")]
    #[test_case("/definitions"; "object applicator without key")]
    #[test_case("/title")]
    fn non_schema_positions(pointer: &str) {
        assert!(!is_schema_position(&JSONPointer::parse(pointer)));
    }

    #[test]
    fn scan_records_ids_and_refs() {
        let schema = json!({
            "id": "http://localhost:1234/tree",
            "allOf": [{"$ref": "#/definitions/node"}],
            "definitions": {
                "node": {
                    "id": "node.json",
                    "properties": {
                        "subtree": {"$ref": "tree"}
                    }
                }
            }
        });
        let scan = scan(&schema, "id", "$ref", &excluded());
        assert_eq!(
            scan.ids,
            vec![
                (JSONPointer::default(), "http://localhost:1234/tree".to_string()),
                (JSONPointer::parse("/definitions/node"), "node.json".to_string()),
            ]
        );
        assert_eq!(
            scan.refs,
            vec![
                (JSONPointer::parse("/allOf/0"), "#/definitions/node".to_string()),
                (
                    JSONPointer::parse("/definitions/node/properties/subtree"),
                    "tree".to_string()
                ),
            ]
        );
    }

    #[test]
    fn scan_skips_data_keys() {
        // Refs inside example data are inert
        let schema = json!({
            "properties": {
                "a": {"enum": [{"$ref": "#/definitions/x"}]},
                "b": {"default": {"$ref": "#/definitions/x"}},
                "c": {"$ref": "#/definitions/x"}
            }
        });
        let scan = scan(&schema, "id", "$ref", &excluded());
        assert_eq!(
            scan.refs,
            vec![(JSONPointer::parse("/properties/c"), "#/definitions/x".to_string())]
        );
    }

    #[test]
    fn scan_ignores_non_positions() {
        let schema = json!({
            "unknown": {"$ref": "#/definitions/x"},
            "id": "",
            "not": {"$ref": "#/definitions/x"}
        });
        let scan = scan(&schema, "id", "$ref", &excluded());
        // Empty ids are not recorded, refs outside schema positions neither
        assert!(scan.ids.is_empty());
        assert_eq!(
            scan.refs,
            vec![(JSONPointer::parse("/not"), "#/definitions/x".to_string())]
        );
    }

    #[test]
    fn scan_output_is_schema_positions_only() {
        let schema = json!({
            "definitions": {
                "a": {"id": "a.json", "items": [{"$ref": "#"}]},
                "b": [{"id": "inside-array", "$ref": "#"}]
            },
            "properties": {
                "nested": {"oneOf": [{"not": {"$ref": "#/definitions/a"}}]}
            }
        });
        let scan = scan(&schema, "id", "$ref", &excluded());
        for (pointer, _) in scan.ids.iter().chain(scan.refs.iter()) {
            assert!(is_schema_position(pointer), "{} is not a schema position", pointer);
        }
        // /definitions/b/0 fails the grammar, so its id and ref are dropped
        assert_eq!(scan.ids.len(), 1);
        assert_eq!(scan.refs.len(), 2);
    }
}
