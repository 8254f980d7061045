// ABOUTME: Result types for slicing: the sliced tree plus boundary and modification metadata.
// ABOUTME: Mirrors the reference result shape: node, boundaries, info.

use serde::{Deserialize, Serialize};

use mdslice_ast::{text_content, Node, Span};

/// The result of a slicing call.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOutcome {
    /// The rebuilt tree, or `None` when nothing fell inside the range.
    pub node: Option<Node>,
    /// The effective `[start, end)` the slice was taken over; `end` is
    /// always the clamped effective end, even when the request reached
    /// past the content.
    pub boundaries: Span,
    /// Accounting metadata for the call.
    pub info: SliceInfo,
}

/// Accounting metadata attached to every slice outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SliceInfo {
    /// Character length of the input tree.
    pub original_length: usize,
    /// Character length of the returned tree (0 when `node` is `None`).
    pub sliced_length: usize,
    /// Whether any node's span straddled a range boundary.
    pub has_partial_nodes: bool,
    /// Type tags of nodes a partial policy altered (truncated, stripped,
    /// unwrapped, force-included or force-excluded), in first-encounter
    /// order, without duplicates. Wrappers kept intact around truncated
    /// children do not appear here; the children do.
    pub modified_node_types: Vec<String>,
}

impl SliceOutcome {
    /// An outcome carrying no content, for ranges that clamp to nothing.
    pub(crate) fn empty(original_length: usize, boundaries: Span) -> Self {
        Self {
            node: None,
            boundaries,
            info: SliceInfo {
                original_length,
                ..SliceInfo::default()
            },
        }
    }

    /// Returns true when the slice produced no content.
    pub fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// The flattened text of the returned tree; empty when `node` is
    /// `None`.
    pub fn text(&self) -> String {
        self.node.as_ref().map(text_content).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_outcome() {
        let outcome = SliceOutcome::empty(42, Span::new(42, 42));
        assert!(outcome.is_empty());
        assert_eq!(outcome.text(), "");
        assert_eq!(outcome.info.original_length, 42);
        assert_eq!(outcome.info.sliced_length, 0);
        assert!(!outcome.info.has_partial_nodes);
        assert!(outcome.info.modified_node_types.is_empty());
    }

    #[test]
    fn test_text_flattens_node() {
        let outcome = SliceOutcome {
            node: Some(Node::paragraph(vec![
                Node::text("a"),
                Node::emphasis(vec![Node::text("b")]),
            ])),
            boundaries: Span::new(0, 2),
            info: SliceInfo::default(),
        };
        assert_eq!(outcome.text(), "ab");
    }
}
