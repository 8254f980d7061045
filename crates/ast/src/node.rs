// ABOUTME: The mdast-style Node enum and its constructors and clone-and-patch helpers.
// ABOUTME: All pass-through attributes (urls, titles, language tags, flags) are copied verbatim, never interpreted.

use serde_json::{Map, Value};

/// A node in the document tree.
///
/// The catalog follows mdast: character-bearing leaves carry a `value`,
/// containers carry an ordered `children` list, and everything else
/// (`url`, `title`, `alt`, `lang`, `depth`, `ordered`, ...) is a
/// pass-through attribute that transformations copy untouched.
///
/// Node types outside the catalog are represented by [`Node::Unknown`],
/// which keeps the original type tag and any unconsumed fields so they
/// survive a round-trip through the slicer.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Plain text. Character-bearing.
    Text { value: String },
    /// Inline code span. Character-bearing.
    InlineCode { value: String },
    /// Fenced or indented code block. Character-bearing.
    Code {
        value: String,
        lang: Option<String>,
        meta: Option<String>,
    },
    /// Emphasis wrapper around inline content.
    Emphasis { children: Vec<Node> },
    /// Strong wrapper around inline content.
    Strong { children: Vec<Node> },
    /// Strikethrough wrapper around inline content.
    Delete { children: Vec<Node> },
    /// Hyperlink. Wraps inline content; the url and title pass through.
    Link {
        url: String,
        title: Option<String>,
        children: Vec<Node>,
    },
    /// Image reference. No children; contributes zero length.
    Image {
        url: String,
        title: Option<String>,
        alt: Option<String>,
    },
    /// Document root.
    Root { children: Vec<Node> },
    /// Paragraph block.
    Paragraph { children: Vec<Node> },
    /// Heading block with its level.
    Heading { depth: u8, children: Vec<Node> },
    /// Block quote.
    Blockquote { children: Vec<Node> },
    /// List container. Empty lists are pruned by the slicer as a unit.
    List {
        ordered: bool,
        start: Option<u32>,
        children: Vec<Node>,
    },
    /// A single list item.
    ListItem {
        checked: Option<bool>,
        children: Vec<Node>,
    },
    /// Hard line break. Zero-width positional marker.
    Break,
    /// Thematic break (horizontal rule). Zero-width positional marker.
    ThematicBreak,
    /// A node type the catalog does not name. `attrs` holds every field
    /// that is not `type`, `value`, or `children`, copied verbatim.
    Unknown {
        kind: String,
        value: Option<String>,
        children: Option<Vec<Node>>,
        attrs: Map<String, Value>,
    },
}

impl Node {
    /// Create a plain text leaf.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Create an inline code leaf.
    pub fn inline_code(value: impl Into<String>) -> Self {
        Node::InlineCode {
            value: value.into(),
        }
    }

    /// Create a code block leaf with an optional language tag.
    pub fn code(value: impl Into<String>, lang: Option<&str>) -> Self {
        Node::Code {
            value: value.into(),
            lang: lang.map(String::from),
            meta: None,
        }
    }

    /// Create an emphasis wrapper.
    pub fn emphasis(children: Vec<Node>) -> Self {
        Node::Emphasis { children }
    }

    /// Create a strong wrapper.
    pub fn strong(children: Vec<Node>) -> Self {
        Node::Strong { children }
    }

    /// Create a strikethrough wrapper.
    pub fn delete(children: Vec<Node>) -> Self {
        Node::Delete { children }
    }

    /// Create a link wrapping inline content.
    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.into(),
            title: None,
            children,
        }
    }

    /// Create an image reference.
    pub fn image(url: impl Into<String>, alt: Option<&str>) -> Self {
        Node::Image {
            url: url.into(),
            title: None,
            alt: alt.map(String::from),
        }
    }

    /// Create a document root.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root { children }
    }

    /// Create a paragraph.
    pub fn paragraph(children: Vec<Node>) -> Self {
        Node::Paragraph { children }
    }

    /// Create a heading at the given level.
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading { depth, children }
    }

    /// Create a block quote.
    pub fn blockquote(children: Vec<Node>) -> Self {
        Node::Blockquote { children }
    }

    /// Create a list container.
    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List {
            ordered,
            start: None,
            children,
        }
    }

    /// Create a list item.
    pub fn list_item(children: Vec<Node>) -> Self {
        Node::ListItem {
            checked: None,
            children,
        }
    }

    /// The mdast type tag for this node (`"text"`, `"inlineCode"`, ...).
    /// Unknown nodes report their original tag.
    pub fn type_tag(&self) -> &str {
        match self {
            Node::Text { .. } => "text",
            Node::InlineCode { .. } => "inlineCode",
            Node::Code { .. } => "code",
            Node::Emphasis { .. } => "emphasis",
            Node::Strong { .. } => "strong",
            Node::Delete { .. } => "delete",
            Node::Link { .. } => "link",
            Node::Image { .. } => "image",
            Node::Root { .. } => "root",
            Node::Paragraph { .. } => "paragraph",
            Node::Heading { .. } => "heading",
            Node::Blockquote { .. } => "blockquote",
            Node::List { .. } => "list",
            Node::ListItem { .. } => "listItem",
            Node::Break => "break",
            Node::ThematicBreak => "thematicBreak",
            Node::Unknown { kind, .. } => kind,
        }
    }

    /// The node's children, if it has a child list.
    ///
    /// Unknown nodes report `Some` only when the original carried a
    /// `children` field; a childless unknown is an atomic marker.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Emphasis { children }
            | Node::Strong { children }
            | Node::Delete { children }
            | Node::Link { children, .. }
            | Node::Root { children }
            | Node::Paragraph { children }
            | Node::Heading { children, .. }
            | Node::Blockquote { children }
            | Node::List { children, .. }
            | Node::ListItem { children, .. } => Some(children),
            Node::Unknown { children, .. } => children.as_deref(),
            _ => None,
        }
    }

    /// The node's literal text value, if it carries one.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Text { value } | Node::InlineCode { value } | Node::Code { value, .. } => {
                Some(value)
            }
            Node::Unknown { value, .. } => value.as_deref(),
            _ => None,
        }
    }

    /// Clone this node with its child list replaced.
    ///
    /// Every pass-through attribute is copied from `self`; only `children`
    /// changes. Calling this on a node without a child list returns an
    /// unchanged clone.
    pub fn with_children(&self, children: Vec<Node>) -> Node {
        match self {
            Node::Emphasis { .. } => Node::Emphasis { children },
            Node::Strong { .. } => Node::Strong { children },
            Node::Delete { .. } => Node::Delete { children },
            Node::Link { url, title, .. } => Node::Link {
                url: url.clone(),
                title: title.clone(),
                children,
            },
            Node::Root { .. } => Node::Root { children },
            Node::Paragraph { .. } => Node::Paragraph { children },
            Node::Heading { depth, .. } => Node::Heading {
                depth: *depth,
                children,
            },
            Node::Blockquote { .. } => Node::Blockquote { children },
            Node::List { ordered, start, .. } => Node::List {
                ordered: *ordered,
                start: *start,
                children,
            },
            Node::ListItem { checked, .. } => Node::ListItem {
                checked: *checked,
                children,
            },
            Node::Unknown {
                kind,
                value,
                attrs,
                children: Some(_),
            } => Node::Unknown {
                kind: kind.clone(),
                value: value.clone(),
                children: Some(children),
                attrs: attrs.clone(),
            },
            other => other.clone(),
        }
    }

    /// Clone this node with its text value replaced.
    ///
    /// Only meaningful for value-carrying nodes; others return an unchanged
    /// clone.
    pub fn with_value(&self, value: impl Into<String>) -> Node {
        let value = value.into();
        match self {
            Node::Text { .. } => Node::Text { value },
            Node::InlineCode { .. } => Node::InlineCode { value },
            Node::Code { lang, meta, .. } => Node::Code {
                value,
                lang: lang.clone(),
                meta: meta.clone(),
            },
            Node::Unknown {
                kind,
                children,
                attrs,
                value: Some(_),
            } => Node::Unknown {
                kind: kind.clone(),
                value: Some(value),
                children: children.clone(),
                attrs: attrs.clone(),
            },
            other => other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_type_tags() {
        assert_eq!(Node::text("x").type_tag(), "text");
        assert_eq!(Node::inline_code("x").type_tag(), "inlineCode");
        assert_eq!(Node::code("x", Some("rust")).type_tag(), "code");
        assert_eq!(Node::heading(2, vec![]).type_tag(), "heading");
        assert_eq!(Node::Break.type_tag(), "break");

        let unknown = Node::Unknown {
            kind: "footnoteReference".to_string(),
            value: None,
            children: None,
            attrs: Map::new(),
        };
        assert_eq!(unknown.type_tag(), "footnoteReference");
    }

    #[test]
    fn test_with_children_preserves_attributes() {
        let heading = Node::heading(3, vec![Node::text("old")]);
        let patched = heading.with_children(vec![Node::text("new")]);

        match patched {
            Node::Heading { depth, children } => {
                assert_eq!(depth, 3);
                assert_eq!(children, vec![Node::text("new")]);
            }
            other => panic!("expected heading, got {:?}", other),
        }
    }

    #[test]
    fn test_with_children_preserves_link_url() {
        let link = Node::link("https://example.com", vec![Node::text("here")]);
        let patched = link.with_children(vec![]);

        match patched {
            Node::Link { url, children, .. } => {
                assert_eq!(url, "https://example.com");
                assert!(children.is_empty());
            }
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_with_value_preserves_code_lang() {
        let code = Node::code("let x = 1;", Some("rust"));
        let patched = code.with_value("let x");

        match patched {
            Node::Code { value, lang, .. } => {
                assert_eq!(value, "let x");
                assert_eq!(lang.as_deref(), Some("rust"));
            }
            other => panic!("expected code, got {:?}", other),
        }
    }

    #[test]
    fn test_with_value_on_container_is_noop() {
        let para = Node::paragraph(vec![Node::text("body")]);
        assert_eq!(para.with_value("ignored"), para);
    }

    #[test]
    fn test_childless_unknown_has_no_children() {
        let unknown = Node::Unknown {
            kind: "html".to_string(),
            value: Some("<br>".to_string()),
            children: None,
            attrs: Map::new(),
        };
        assert!(unknown.children().is_none());
        assert_eq!(unknown.value(), Some("<br>"));
    }
}
