// ABOUTME: Explicit adapter between the Node catalog and mdast-flavored JSON values.
// ABOUTME: Unrecognized type tags survive as Unknown nodes with their extra fields kept verbatim.

use serde_json::{json, Map, Value};

use crate::error::AstError;
use crate::node::Node;

/// Convert an mdast-flavored JSON value into a [`Node`].
///
/// Recognized `type` tags map to their catalog variants; anything else
/// becomes [`Node::Unknown`] with `value`/`children` lifted when present
/// and every other field retained in `attrs`, so an unrecognized node
/// round-trips losslessly.
pub fn node_from_value(value: &Value) -> Result<Node, AstError> {
    let obj = value
        .as_object()
        .ok_or_else(|| AstError::unexpected(format!("expected object, got {}", json_kind(value))))?;
    let tag = obj
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| AstError::unexpected("missing \"type\" tag"))?;

    match tag {
        "text" => Ok(Node::Text {
            value: req_str(obj, tag, "value")?,
        }),
        "inlineCode" => Ok(Node::InlineCode {
            value: req_str(obj, tag, "value")?,
        }),
        "code" => Ok(Node::Code {
            value: req_str(obj, tag, "value")?,
            lang: opt_str(obj, tag, "lang")?,
            meta: opt_str(obj, tag, "meta")?,
        }),
        "emphasis" => Ok(Node::Emphasis {
            children: req_children(obj, tag)?,
        }),
        "strong" => Ok(Node::Strong {
            children: req_children(obj, tag)?,
        }),
        "delete" => Ok(Node::Delete {
            children: req_children(obj, tag)?,
        }),
        "link" => Ok(Node::Link {
            url: req_str(obj, tag, "url")?,
            title: opt_str(obj, tag, "title")?,
            children: req_children(obj, tag)?,
        }),
        "image" => Ok(Node::Image {
            url: req_str(obj, tag, "url")?,
            title: opt_str(obj, tag, "title")?,
            alt: opt_str(obj, tag, "alt")?,
        }),
        "root" => Ok(Node::Root {
            children: req_children(obj, tag)?,
        }),
        "paragraph" => Ok(Node::Paragraph {
            children: req_children(obj, tag)?,
        }),
        "heading" => {
            let depth = obj
                .get("depth")
                .and_then(Value::as_u64)
                .ok_or_else(|| AstError::malformed(tag, "missing or non-integer \"depth\""))?;
            Ok(Node::Heading {
                depth: u8::try_from(depth)
                    .map_err(|_| AstError::malformed(tag, "\"depth\" out of range"))?,
                children: req_children(obj, tag)?,
            })
        }
        "blockquote" => Ok(Node::Blockquote {
            children: req_children(obj, tag)?,
        }),
        "list" => {
            let start = match obj.get("start") {
                None | Some(Value::Null) => None,
                Some(v) => Some(
                    v.as_u64()
                        .and_then(|n| u32::try_from(n).ok())
                        .ok_or_else(|| AstError::malformed(tag, "non-integer \"start\""))?,
                ),
            };
            Ok(Node::List {
                ordered: obj.get("ordered").and_then(Value::as_bool).unwrap_or(false),
                start,
                children: req_children(obj, tag)?,
            })
        }
        "listItem" => Ok(Node::ListItem {
            checked: obj.get("checked").and_then(Value::as_bool),
            children: req_children(obj, tag)?,
        }),
        "break" => Ok(Node::Break),
        "thematicBreak" => Ok(Node::ThematicBreak),
        _ => unknown_from_object(tag, obj),
    }
}

fn unknown_from_object(tag: &str, obj: &Map<String, Value>) -> Result<Node, AstError> {
    let children = match obj.get("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(
            items
                .iter()
                .map(node_from_value)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Some(_) => return Err(AstError::malformed(tag, "\"children\" is not an array")),
    };
    let value = match obj.get("value") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => return Err(AstError::malformed(tag, "\"value\" is not a string")),
    };

    let mut attrs = Map::new();
    for (key, val) in obj {
        if key != "type" && key != "value" && key != "children" {
            attrs.insert(key.clone(), val.clone());
        }
    }

    Ok(Node::Unknown {
        kind: tag.to_string(),
        value,
        children,
        attrs,
    })
}

/// Convert a [`Node`] back to its mdast-flavored JSON value.
pub fn node_to_value(node: &Node) -> Value {
    match node {
        Node::Text { value } => json!({ "type": "text", "value": value }),
        Node::InlineCode { value } => json!({ "type": "inlineCode", "value": value }),
        Node::Code { value, lang, meta } => {
            let mut obj = Map::new();
            obj.insert("type".into(), "code".into());
            obj.insert("value".into(), value.as_str().into());
            insert_opt_str(&mut obj, "lang", lang);
            insert_opt_str(&mut obj, "meta", meta);
            Value::Object(obj)
        }
        Node::Emphasis { children } => tagged_container("emphasis", children),
        Node::Strong { children } => tagged_container("strong", children),
        Node::Delete { children } => tagged_container("delete", children),
        Node::Link {
            url,
            title,
            children,
        } => {
            let mut obj = Map::new();
            obj.insert("type".into(), "link".into());
            obj.insert("url".into(), url.as_str().into());
            insert_opt_str(&mut obj, "title", title);
            obj.insert("children".into(), children_to_value(children));
            Value::Object(obj)
        }
        Node::Image { url, title, alt } => {
            let mut obj = Map::new();
            obj.insert("type".into(), "image".into());
            obj.insert("url".into(), url.as_str().into());
            insert_opt_str(&mut obj, "title", title);
            insert_opt_str(&mut obj, "alt", alt);
            Value::Object(obj)
        }
        Node::Root { children } => tagged_container("root", children),
        Node::Paragraph { children } => tagged_container("paragraph", children),
        Node::Heading { depth, children } => json!({
            "type": "heading",
            "depth": depth,
            "children": children_to_value(children),
        }),
        Node::Blockquote { children } => tagged_container("blockquote", children),
        Node::List {
            ordered,
            start,
            children,
        } => {
            let mut obj = Map::new();
            obj.insert("type".into(), "list".into());
            obj.insert("ordered".into(), (*ordered).into());
            if let Some(start) = start {
                obj.insert("start".into(), (*start).into());
            }
            obj.insert("children".into(), children_to_value(children));
            Value::Object(obj)
        }
        Node::ListItem { checked, children } => {
            let mut obj = Map::new();
            obj.insert("type".into(), "listItem".into());
            if let Some(checked) = checked {
                obj.insert("checked".into(), (*checked).into());
            }
            obj.insert("children".into(), children_to_value(children));
            Value::Object(obj)
        }
        Node::Break => json!({ "type": "break" }),
        Node::ThematicBreak => json!({ "type": "thematicBreak" }),
        Node::Unknown {
            kind,
            value,
            children,
            attrs,
        } => {
            let mut obj = attrs.clone();
            obj.insert("type".into(), kind.as_str().into());
            if let Some(value) = value {
                obj.insert("value".into(), value.as_str().into());
            }
            if let Some(children) = children {
                obj.insert("children".into(), children_to_value(children));
            }
            Value::Object(obj)
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn req_str(obj: &Map<String, Value>, kind: &str, key: &str) -> Result<String, AstError> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .ok_or_else(|| AstError::malformed(kind, format!("missing or non-string \"{}\"", key)))
}

fn opt_str(obj: &Map<String, Value>, kind: &str, key: &str) -> Result<Option<String>, AstError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(AstError::malformed(
            kind,
            format!("\"{}\" is not a string", key),
        )),
    }
}

fn req_children(obj: &Map<String, Value>, kind: &str) -> Result<Vec<Node>, AstError> {
    let items = obj
        .get("children")
        .and_then(Value::as_array)
        .ok_or_else(|| AstError::malformed(kind, "missing or non-array \"children\""))?;
    items.iter().map(node_from_value).collect()
}

fn children_to_value(children: &[Node]) -> Value {
    Value::Array(children.iter().map(node_to_value).collect())
}

fn tagged_container(tag: &str, children: &[Node]) -> Value {
    json!({ "type": tag, "children": children_to_value(children) })
}

fn insert_opt_str(obj: &mut Map<String, Value>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        obj.insert(key.into(), value.as_str().into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_round_trip_basic_document() {
        let tree = Node::root(vec![
            Node::heading(1, vec![Node::text("Title")]),
            Node::paragraph(vec![
                Node::text("Hello "),
                Node::emphasis(vec![Node::text("world")]),
                Node::link("https://example.com", vec![Node::text("here")]),
            ]),
            Node::list(
                true,
                vec![Node::list_item(vec![Node::paragraph(vec![Node::text(
                    "item",
                )])])],
            ),
            Node::code("fn main() {}", Some("rust")),
            Node::ThematicBreak,
        ]);

        let value = node_to_value(&tree);
        let back = node_from_value(&value).unwrap();
        assert_eq!(back, tree);
    }

    #[test]
    fn test_from_value_parses_mdast_json() {
        let value: Value = serde_json::from_str(
            r#"{
                "type": "paragraph",
                "children": [
                    { "type": "text", "value": "a " },
                    { "type": "strong", "children": [{ "type": "text", "value": "b" }] }
                ]
            }"#,
        )
        .unwrap();

        let node = node_from_value(&value).unwrap();
        assert_eq!(
            node,
            Node::paragraph(vec![
                Node::text("a "),
                Node::strong(vec![Node::text("b")]),
            ])
        );
    }

    #[test]
    fn test_unknown_type_keeps_extra_fields() {
        let value: Value = serde_json::from_str(
            r#"{
                "type": "footnoteDefinition",
                "identifier": "1",
                "label": "1",
                "children": [{ "type": "text", "value": "note" }]
            }"#,
        )
        .unwrap();

        let node = node_from_value(&value).unwrap();
        match &node {
            Node::Unknown {
                kind,
                children,
                attrs,
                ..
            } => {
                assert_eq!(kind, "footnoteDefinition");
                assert_eq!(children.as_deref(), Some(&[Node::text("note")][..]));
                assert_eq!(attrs.get("identifier"), Some(&Value::from("1")));
                assert_eq!(attrs.get("label"), Some(&Value::from("1")));
            }
            other => panic!("expected unknown node, got {:?}", other),
        }

        // lossless round-trip
        assert_eq!(node_from_value(&node_to_value(&node)).unwrap(), node);
    }

    #[test]
    fn test_missing_type_is_unexpected_shape() {
        let value = json!({ "value": "orphan" });
        let err = node_from_value(&value).unwrap_err();
        assert!(matches!(err, AstError::UnexpectedShape(_)));
    }

    #[test]
    fn test_non_object_is_unexpected_shape() {
        let err = node_from_value(&json!("just a string")).unwrap_err();
        assert!(matches!(err, AstError::UnexpectedShape(_)));
    }

    #[test]
    fn test_text_without_value_is_malformed() {
        let err = node_from_value(&json!({ "type": "text" })).unwrap_err();
        assert!(matches!(err, AstError::Malformed { .. }));
    }

    #[test]
    fn test_heading_without_depth_is_malformed() {
        let err =
            node_from_value(&json!({ "type": "heading", "children": [] })).unwrap_err();
        assert!(matches!(err, AstError::Malformed { .. }));
    }

    #[test]
    fn test_list_defaults() {
        let node = node_from_value(&json!({ "type": "list", "children": [] })).unwrap();
        assert_eq!(
            node,
            Node::List {
                ordered: false,
                start: None,
                children: vec![],
            }
        );
    }

    #[test]
    fn test_optional_fields_omitted_on_serialize() {
        let value = node_to_value(&Node::code("x", None));
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("lang"));
        assert!(!obj.contains_key("meta"));
    }
}
