use jsonschema_draft4::{metaschema, resolve, JSONSchema, ResolveOptions, SchemaError};
use serde_json::json;

#[test]
fn integer_type() {
    let compiled = JSONSchema::compile(&json!({"type": "integer"})).unwrap();
    assert!(compiled.is_valid(&json!(1)));
    let instance = json!(1.5);
    let errors = compiled.validate(&instance);
    assert_eq!(errors.get("").map(<[_]>::len), Some(1));
}

#[test]
fn tuple_items_with_closed_tail() {
    let schema = json!({
        "items": [{"type": "integer"}, {"type": "integer"}],
        "additionalItems": false
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!([1, 2])));
    assert!(!compiled.is_valid(&json!([1, 2, 3])));
}

#[test]
fn recursive_schema() {
    let schema = json!({
        "properties": {"foo": {"$ref": "#"}},
        "additionalProperties": false
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"foo": {"foo": {}}})));
    assert!(!compiled.is_valid(&json!({"foo": {"bar": false}})));
}

#[test]
fn inline_id_reference() {
    let schema = json!({
        "definitions": {"a": {"id": "inline_id", "type": "integer"}},
        "$ref": "inline_id"
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(7)));
    assert!(!compiled.is_valid(&json!("x")));
}

#[test]
fn file_reference() {
    let directory = std::env::temp_dir().join("jsonschema-draft4-test-remotes");
    std::fs::create_dir_all(&directory).unwrap();
    let path = directory.join("integer.json");
    std::fs::write(&path, r#"{"type": "integer"}"#).unwrap();

    let schema = json!({ "$ref": format!("file://{}", path.display()) });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(3)));
    assert!(!compiled.is_valid(&json!(3.5)));
}

#[test]
fn missing_file_reference() {
    let schema = json!({"$ref": "file:///definitely/not/here/schema.json"});
    let error = JSONSchema::compile(&schema).unwrap_err();
    assert!(matches!(error, SchemaError::File { .. }));
}

#[test]
fn one_of_with_multiple_matches() {
    let schema = json!({"oneOf": [{"type": "integer"}, {"type": "number"}]});
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(!compiled.is_valid(&json!(1)));
    assert!(compiled.is_valid(&json!(1.5)));
}

#[test]
fn http_reference() {
    let mock = mockito::mock("GET", "/integer.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "integer"}"#)
        .create();

    let schema = json!({ "$ref": format!("{}/integer.json", mockito::server_url()) });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!(3)));
    assert!(!compiled.is_valid(&json!(3.5)));
    mock.assert();
}

#[test]
fn http_reference_with_fragment() {
    let _mock = mockito::mock("GET", "/definitions.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"definitions": {"count": {"type": "integer", "minimum": 0}}}"#)
        .create();

    let schema = json!({
        "properties": {
            "count": {
                "$ref": format!("{}/definitions.json#/definitions/count", mockito::server_url())
            }
        }
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"count": 2})));
    assert!(!compiled.is_valid(&json!({"count": -2})));
}

#[test]
fn http_reference_not_found() {
    let _mock = mockito::mock("GET", "/missing.json")
        .with_status(404)
        .create();

    let schema = json!({ "$ref": format!("{}/missing.json", mockito::server_url()) });
    let error = JSONSchema::compile(&schema).unwrap_err();
    assert!(matches!(error, SchemaError::Http { .. }));
}

#[test]
fn offline_compilation() {
    let schema = json!({
        "properties": {
            "foo": {"$ref": "http://localhost:1/unreachable.json"}
        }
    });
    let compiled = JSONSchema::options()
        .with_download(false)
        .compile(&schema)
        .unwrap();
    // the remote target degraded to the accept-all schema
    assert!(compiled.is_valid(&json!({"foo": "anything"})));
}

#[test]
fn relative_remote_reference() {
    let _sibling = mockito::mock("GET", "/schemas/sibling.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"type": "string"}"#)
        .create();

    // the relative reference is joined against the enclosing id
    let schema = json!({
        "id": format!("{}/schemas/root.json", mockito::server_url()),
        "properties": {
            "name": {"$ref": "sibling.json"}
        }
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    assert!(compiled.is_valid(&json!({"name": "x"})));
    assert!(!compiled.is_valid(&json!({"name": 1})));
}

#[test]
fn resolve_is_exposed_for_documents() {
    let mut document = json!({
        "properties": {"foo": {"$ref": "#/definitions/a", "title": "X"}},
        "definitions": {"a": {"type": "integer"}}
    });
    resolve(&mut document, &ResolveOptions::default()).unwrap();
    assert_eq!(
        document.pointer("/properties/foo").unwrap(),
        &json!({"type": "integer"})
    );
    let again = document.clone();
    let mut twice = document.clone();
    resolve(&mut twice, &ResolveOptions::default()).unwrap();
    assert_eq!(twice, again);
}

#[test]
fn metaschema_round_trip() {
    assert!(metaschema::check_schema(&json!({"type": "integer"})).is_empty());
    assert!(!metaschema::check_schema(&json!({"type": "nonsense"})).is_empty());
}

#[test]
fn nested_error_locations() {
    let schema = json!({
        "properties": {
            "tags": {
                "items": {"type": "string"},
                "type": "array"
            }
        }
    });
    let compiled = JSONSchema::compile(&schema).unwrap();
    let instance = json!({"tags": ["ok", 3]});
    let errors = compiled.validate(&instance);
    // the failing element is reported under its own location
    let tags_errors = errors.get("/tags").expect("errors for /tags");
    assert_eq!(tags_errors.len(), 1);
    assert!(tags_errors[0].sub_errors.get("/tags/1").is_some());
}
