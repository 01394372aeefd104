//! Facilities for working with RFC 6901 JSON Pointers, both as locations of
//! subschemas inside a schema document and as locations of values inside a
//! validated instance.
use percent_encoding::percent_decode_str;
use serde_json::Value;
use std::fmt::{self, Write};

/// JSON Pointer as a wrapper around individual, already decoded tokens.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct JSONPointer(Vec<String>);

impl JSONPointer {
    /// Parse a pointer from its string form.
    ///
    /// Tokens may be URL-percent-encoded when the pointer comes from a URI
    /// fragment; decoding happens before tokens are split. `~1` and `~0`
    /// escapes are decoded per token.
    pub fn parse(pointer: &str) -> JSONPointer {
        let decoded = percent_decode_str(pointer).decode_utf8_lossy();
        JSONPointer(
            decoded
                .split('/')
                .filter(|token| !token.is_empty())
                .map(unescape)
                .collect(),
        )
    }

    /// Pointer tokens, decoded.
    pub fn tokens(&self) -> &[String] {
        &self.0
    }

    /// The number of tokens. The empty pointer denotes the document root.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` for the document root.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new pointer with `token` appended.
    #[must_use]
    pub fn append(&self, token: &str) -> JSONPointer {
        let mut tokens = self.0.clone();
        tokens.push(token.to_string());
        JSONPointer(tokens)
    }

    /// A new pointer with an array index appended.
    #[must_use]
    pub fn append_index(&self, index: usize) -> JSONPointer {
        let mut tokens = self.0.clone();
        tokens.push(index.to_string());
        JSONPointer(tokens)
    }

    /// The parent location. `None` for the document root.
    pub fn parent(&self) -> Option<JSONPointer> {
        if self.0.is_empty() {
            None
        } else {
            Some(JSONPointer(self.0[..self.0.len() - 1].to_vec()))
        }
    }

    /// The last token. `None` for the document root.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// `true` iff `self` is a strict descendant of `other`.
    pub fn is_child_of(&self, other: &JSONPointer) -> bool {
        self.0.len() > other.0.len() && self.0[..other.0.len()] == other.0[..]
    }

    /// `true` iff `self` is a strict ancestor of `other`.
    pub fn is_parent_of(&self, other: &JSONPointer) -> bool {
        other.is_child_of(self)
    }

    /// Descend into `document` following this pointer.
    pub fn follow<'a>(&self, document: &'a Value) -> Option<&'a Value> {
        let mut target = document;
        for token in &self.0 {
            target = match target {
                Value::Object(map) => map.get(token)?,
                Value::Array(items) => items.get(parse_index(token)?)?,
                _ => return None,
            };
        }
        Some(target)
    }

    /// Mutable variant of [`JSONPointer::follow`].
    pub(crate) fn follow_mut<'a>(&self, document: &'a mut Value) -> Option<&'a mut Value> {
        let mut target = document;
        for token in &self.0 {
            target = match target {
                Value::Object(map) => map.get_mut(token)?,
                Value::Array(items) => {
                    let index = parse_index(token)?;
                    items.get_mut(index)?
                }
                _ => return None,
            };
        }
        Some(target)
    }
}

impl fmt::Display for JSONPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.0 {
            f.write_char('/')?;
            f.write_str(&escape(token))?;
        }
        Ok(())
    }
}

impl From<&[&str]> for JSONPointer {
    #[inline]
    fn from(tokens: &[&str]) -> Self {
        JSONPointer(tokens.iter().map(|token| (*token).to_string()).collect())
    }
}

/// `~` is escaped as `~0` and `/` as `~1`.
fn escape(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}

/// Array index tokens are non-negative decimals with no leading zeros.
pub(crate) fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.starts_with('0') && token.len() != 1) {
        None
    } else {
        token.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    #[test]
    fn parse() {
        let pointer = JSONPointer::parse("/path/to/object");
        assert_eq!(pointer.tokens(), &["path", "to", "object"]);
    }

    #[test]
    fn root() {
        let pointer = JSONPointer::parse("");
        assert!(pointer.is_empty());
        assert_eq!(pointer.to_string(), "");
        assert_eq!(pointer.parent(), None);
    }

    #[test]
    fn display_escaped() {
        let pointer = JSONPointer::from(&["path", "to", "slash/token"][..]);
        assert_eq!(pointer.to_string(), "/path/to/slash~1token");
    }

    #[test_case("/a~1b/c~0d")]
    #[test_case("/foo/0/bar")]
    #[test_case(""; "empty pointer")]
    fn round_trip(input: &str) {
        assert_eq!(JSONPointer::parse(input).to_string(), input);
    }

    #[test]
    fn percent_decoding() {
        let pointer = JSONPointer::parse("/some%20place%2Ffrom%23url");
        assert_eq!(pointer.to_string(), "/some place/from#url");
    }

    #[test]
    fn follow() {
        let document = json!({"path": {"to": ["nope", {"object": "target"}]}});
        let pointer = JSONPointer::parse("/path/to/1/object");
        assert_eq!(pointer.follow(&document), Some(&json!("target")));
    }

    #[test_case("/path/to/3/object"; "index out of bounds")]
    #[test_case("/path/to/one/object"; "non numeric index")]
    #[test_case("/path/to/01"; "leading zero index")]
    #[test_case("/path/to/1/missing"; "missing key")]
    #[test_case("/path/missing/deeper"; "descend into scalar")]
    fn follow_failures(pointer: &str) {
        let document = json!({"path": {"to": ["nope", {"object": "target"}], "missing": 1}});
        assert_eq!(JSONPointer::parse(pointer).follow(&document), None);
    }

    #[test]
    fn follow_every_subtree() {
        // Every reachable subtree is found again by parsing the rendered
        // pointer that leads to it
        let document = json!({
            "a~b": {"c/d": [1, {"e": null}]},
            "f": [true, "g"]
        });
        fn walk(value: &Value, pointer: JSONPointer, document: &Value) {
            let rendered = pointer.to_string();
            let reparsed = JSONPointer::parse(&rendered);
            assert_eq!(reparsed.follow(document), Some(value));
            match value {
                Value::Object(map) => {
                    for (key, child) in map {
                        walk(child, pointer.append(key), document);
                    }
                }
                Value::Array(items) => {
                    for (index, child) in items.iter().enumerate() {
                        walk(child, pointer.append_index(index), document);
                    }
                }
                _ => {}
            }
        }
        walk(&document, JSONPointer::default(), &document);
    }

    #[test]
    fn ancestry() {
        let root = JSONPointer::default();
        let child = JSONPointer::parse("/definitions/a");
        let grandchild = JSONPointer::parse("/definitions/a/items");
        assert!(child.is_child_of(&root));
        assert!(grandchild.is_child_of(&child));
        assert!(root.is_parent_of(&grandchild));
        assert!(!child.is_child_of(&child));
        assert!(!JSONPointer::parse("/definitions/ab").is_child_of(&child));
    }

    #[test]
    fn append() {
        let pointer = JSONPointer::parse("/some/pointer").append("added");
        let document = json!({"some": {"pointer": {"added": "target"}}});
        assert_eq!(pointer.follow(&document), Some(&json!("target")));
        assert_eq!(pointer.parent(), Some(JSONPointer::parse("/some/pointer")));
        assert_eq!(pointer.last(), Some("added"));
    }
}
