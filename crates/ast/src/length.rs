// ABOUTME: The length oracle: character-length accounting for nodes, with an injectable identity-keyed cache.
// ABOUTME: Only character-bearing leaves contribute length; containers sum their children in order.

use std::collections::HashMap;

use crate::category::classify;
use crate::node::Node;

/// An injectable memo for [`content_length`], keyed by node identity.
///
/// Entries are valid only while the keyed tree is alive and unmutated.
/// Slicing never mutates input trees, so a cache can be reused across
/// repeated slices of the same tree; once the tree is dropped or rebuilt
/// the cache must be discarded (addresses may be reused by new nodes).
/// The cache is deliberately not shared process-wide: each call site owns
/// one, which keeps lookups testable and free of hidden state. Concurrent
/// callers use one cache per call.
#[derive(Debug, Default)]
pub struct LengthCache {
    lengths: HashMap<usize, usize>,
}

impl LengthCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoized nodes.
    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    /// Drop all entries. Call this when the tree the cache was built
    /// against goes away.
    pub fn clear(&mut self) {
        self.lengths.clear();
    }

    fn get(&self, key: usize) -> Option<usize> {
        self.lengths.get(&key).copied()
    }

    fn insert(&mut self, key: usize, len: usize) {
        self.lengths.insert(key, len);
    }
}

fn node_key(node: &Node) -> usize {
    node as *const Node as usize
}

/// The character length of a node: the sum of its descendant leaf text
/// lengths, counted in Unicode scalar values.
///
/// Character-bearing leaves report their value's character count;
/// containers sum their children in order; media without children, breaks,
/// and childless unknowns report 0. Memoized by node identity, so repeated
/// walks over the same tree pay for each subtree once.
pub fn content_length(node: &Node, cache: &mut LengthCache) -> usize {
    let key = node_key(node);
    if let Some(len) = cache.get(key) {
        return len;
    }

    let len = match node.children() {
        Some(children) => children
            .iter()
            .map(|child| content_length(child, cache))
            .sum(),
        None => leaf_length(node),
    };

    cache.insert(key, len);
    len
}

/// Length of a node without a child list. Only designated
/// character-bearing leaf types contribute; everything else is a
/// zero-width positional marker.
fn leaf_length(node: &Node) -> usize {
    if !classify(node).is_character_bearing() {
        return 0;
    }
    node.value().map_or(0, |v| v.chars().count())
}

impl Node {
    /// The character length of this node, computed without a shared cache.
    ///
    /// Convenience for one-off measurements; use [`content_length`] with a
    /// caller-owned [`LengthCache`] when walking a tree repeatedly.
    pub fn char_len(&self) -> usize {
        content_length(self, &mut LengthCache::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_leaf_lengths() {
        assert_eq!(Node::text("Hello").char_len(), 5);
        assert_eq!(Node::inline_code("x + y").char_len(), 5);
        assert_eq!(Node::code("fn main() {}", Some("rust")).char_len(), 12);
        assert_eq!(Node::text("").char_len(), 0);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "héllo" is 6 bytes but 5 scalar values
        assert_eq!(Node::text("héllo").char_len(), 5);
        assert_eq!(Node::text("日本語").char_len(), 3);
    }

    #[test]
    fn test_zero_width_nodes() {
        assert_eq!(Node::Break.char_len(), 0);
        assert_eq!(Node::ThematicBreak.char_len(), 0);
        assert_eq!(Node::image("u.png", Some("alt text ignored")).char_len(), 0);
    }

    #[test]
    fn test_unknown_value_does_not_count() {
        let unknown = Node::Unknown {
            kind: "html".to_string(),
            value: Some("<div>".to_string()),
            children: None,
            attrs: serde_json::Map::new(),
        };
        assert_eq!(unknown.char_len(), 0);
    }

    #[test]
    fn test_container_sums_children() {
        let para = Node::paragraph(vec![
            Node::text("Hello "),
            Node::emphasis(vec![Node::text("world")]),
            Node::text(" test"),
        ]);
        assert_eq!(para.char_len(), 16);
    }

    #[test]
    fn test_unknown_container_sums_children() {
        let unknown = Node::Unknown {
            kind: "customBlock".to_string(),
            value: None,
            children: Some(vec![Node::text("abc"), Node::text("de")]),
            attrs: serde_json::Map::new(),
        };
        assert_eq!(unknown.char_len(), 5);
    }

    #[test]
    fn test_cache_memoizes_subtrees() {
        let tree = Node::root(vec![
            Node::paragraph(vec![Node::text("one")]),
            Node::paragraph(vec![Node::text("two")]),
        ]);
        let mut cache = LengthCache::new();

        assert_eq!(content_length(&tree, &mut cache), 6);
        // root + 2 paragraphs + 2 text leaves
        assert_eq!(cache.len(), 5);

        // second walk answers from the memo
        assert_eq!(content_length(&tree, &mut cache), 6);
        assert_eq!(cache.len(), 5);
    }

    #[test]
    fn test_clear_empties_cache() {
        let tree = Node::text("abc");
        let mut cache = LengthCache::new();
        content_length(&tree, &mut cache);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }
}
