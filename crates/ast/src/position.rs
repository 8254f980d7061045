// ABOUTME: Span type and node-identity position lookup within a document tree.
// ABOUTME: Spans are derived per call by a pre-order walk; they are never stored on nodes.

use serde::{Deserialize, Serialize};

use crate::length::{content_length, LengthCache};
use crate::node::Node;

/// A node's `[start, end)` character range within the whole-document
/// leaf-text concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Construct a span from its bounds.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Character count covered by this span.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Whether the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Locate a specific node instance within a tree and return its span.
///
/// The target is matched by identity (the same allocation), not by value
/// equality: a tree containing two structurally equal `text("a")` leaves
/// resolves each to its own position. Returns `None` when the target is
/// not reachable from `tree`.
pub fn position_of(tree: &Node, target: &Node) -> Option<Span> {
    let mut cache = LengthCache::new();
    locate(tree, 0, target, &mut cache)
}

fn locate(node: &Node, at: usize, target: &Node, cache: &mut LengthCache) -> Option<Span> {
    if std::ptr::eq(node, target) {
        return Some(Span::new(at, at + content_length(node, cache)));
    }

    let children = node.children()?;
    let mut offset = at;
    for child in children {
        if let Some(span) = locate(child, offset, target, cache) {
            return Some(span);
        }
        offset += content_length(child, cache);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_position_of_nested_leaf() {
        let tree = Node::paragraph(vec![
            Node::text("Hello "),
            Node::emphasis(vec![Node::text("world")]),
            Node::text(" test"),
        ]);

        let emphasis = &tree.children().unwrap()[1];
        assert_eq!(position_of(&tree, emphasis), Some(Span::new(6, 11)));

        let inner = &emphasis.children().unwrap()[0];
        assert_eq!(position_of(&tree, inner), Some(Span::new(6, 11)));

        let trailing = &tree.children().unwrap()[2];
        assert_eq!(position_of(&tree, trailing), Some(Span::new(11, 16)));
    }

    #[test]
    fn test_position_of_root_is_full_span() {
        let tree = Node::paragraph(vec![Node::text("abcdef")]);
        assert_eq!(position_of(&tree, &tree), Some(Span::new(0, 6)));
    }

    #[test]
    fn test_position_of_matches_identity_not_value() {
        let tree = Node::paragraph(vec![Node::text("aa"), Node::text("aa")]);
        let first = &tree.children().unwrap()[0];
        let second = &tree.children().unwrap()[1];

        assert_eq!(position_of(&tree, first), Some(Span::new(0, 2)));
        assert_eq!(position_of(&tree, second), Some(Span::new(2, 4)));
    }

    #[test]
    fn test_position_of_foreign_node_is_none() {
        let tree = Node::paragraph(vec![Node::text("aa")]);
        let foreign = Node::text("aa");
        assert_eq!(position_of(&tree, &foreign), None);
    }

    #[test]
    fn test_zero_width_node_has_empty_span() {
        let tree = Node::paragraph(vec![Node::text("ab"), Node::Break, Node::text("cd")]);
        let brk = &tree.children().unwrap()[1];
        assert_eq!(position_of(&tree, brk), Some(Span::new(2, 2)));
    }
}
