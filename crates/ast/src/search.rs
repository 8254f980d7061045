// ABOUTME: Document-order text flattening and literal substring search over a tree's leaf text.
// ABOUTME: Single-needle search is overlapping; multi-needle search goes through Aho-Corasick.

use aho_corasick::AhoCorasick;

use crate::category::classify;
use crate::node::Node;
use crate::position::Span;

/// Flatten a tree's character-bearing leaf text into one string, in
/// document order. This is the string all spans and offsets refer to.
pub fn text_content(tree: &Node) -> String {
    let mut out = String::new();
    collect_text(tree, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    if classify(node).is_character_bearing() {
        if let Some(value) = node.value() {
            out.push_str(value);
        }
        return;
    }
    if let Some(children) = node.children() {
        for child in children {
            collect_text(child, out);
        }
    }
}

/// Whitespace-split word count of the flattened document text.
pub fn word_count(tree: &Node) -> usize {
    text_content(tree).split_whitespace().count()
}

/// All starting character offsets of literal, case-sensitive occurrences
/// of `needle` in the flattened document text, in document order.
///
/// Matches are overlapping: the scan advances one character past each hit,
/// so `find_text(text("aaaa"), "aa")` yields `[0, 1, 2]`. An empty needle
/// yields no matches.
pub fn find_text(tree: &Node, needle: &str) -> Vec<usize> {
    let mut hits = Vec::new();
    if needle.is_empty() {
        return hits;
    }

    let text = text_content(tree);
    let mut byte = 0;
    let mut chars = 0;
    while let Some(found) = text[byte..].find(needle) {
        chars += text[byte..byte + found].chars().count();
        byte += found;
        hits.push(chars);

        // step one character, not the needle length, to allow overlap
        match text[byte..].chars().next() {
            Some(c) => {
                byte += c.len_utf8();
                chars += 1;
            }
            None => break,
        }
    }
    hits
}

/// A multi-needle search hit: which pattern matched and where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    /// Index into the caller's needle slice.
    pub pattern: usize,
    /// Character span of the occurrence in the flattened text.
    pub span: Span,
}

/// All literal, case-sensitive occurrences of any of `needles` in the
/// flattened document text, overlapping, ordered by start offset.
///
/// Empty needles never match. Offsets count characters, consistent with
/// [`find_text`] and the slicer's spans.
pub fn find_any<S: AsRef<str>>(tree: &Node, needles: &[S]) -> Vec<Match> {
    let patterns: Vec<(usize, &str)> = needles
        .iter()
        .enumerate()
        .map(|(i, n)| (i, n.as_ref()))
        .filter(|(_, n)| !n.is_empty())
        .collect();
    if patterns.is_empty() {
        return Vec::new();
    }

    let ac = match AhoCorasick::new(patterns.iter().map(|(_, n)| n)) {
        Ok(ac) => ac,
        Err(_) => return Vec::new(),
    };
    let pattern_char_lens: Vec<usize> = patterns.iter().map(|(_, n)| n.chars().count()).collect();

    let text = text_content(tree);
    let mut raw: Vec<(usize, usize)> = ac
        .find_overlapping_iter(&text)
        .map(|m| (m.start(), m.pattern().as_usize()))
        .collect();
    raw.sort_unstable();

    // one forward pass converts sorted byte offsets to character offsets
    let mut byte = 0;
    let mut chars = 0;
    raw.into_iter()
        .map(|(start_byte, pat)| {
            chars += text[byte..start_byte].chars().count();
            byte = start_byte;
            Match {
                pattern: patterns[pat].0,
                span: Span::new(chars, chars + pattern_char_lens[pat]),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_tree() -> Node {
        Node::root(vec![
            Node::paragraph(vec![
                Node::text("Hello "),
                Node::emphasis(vec![Node::text("world")]),
            ]),
            Node::paragraph(vec![Node::text("Hello again")]),
        ])
    }

    #[test]
    fn test_text_content_document_order() {
        assert_eq!(text_content(&sample_tree()), "Hello worldHello again");
    }

    #[test]
    fn test_text_content_skips_non_bearing_nodes() {
        let tree = Node::paragraph(vec![
            Node::text("a"),
            Node::Break,
            Node::image("u.png", Some("alt")),
            Node::text("b"),
        ]);
        assert_eq!(text_content(&tree), "ab");
    }

    #[test]
    fn test_find_text_overlapping() {
        assert_eq!(find_text(&Node::text("aaaa"), "aa"), vec![0, 1, 2]);
    }

    #[test]
    fn test_find_text_across_node_boundaries() {
        // "Hello worldHello again": "Hello" at 0 and 11
        assert_eq!(find_text(&sample_tree(), "Hello"), vec![0, 11]);
        // the second hit spans the emphasis/paragraph seam
        assert_eq!(find_text(&sample_tree(), "worldHello"), vec![6]);
    }

    #[test]
    fn test_find_text_empty_needle() {
        assert_eq!(find_text(&sample_tree(), ""), Vec::<usize>::new());
    }

    #[test]
    fn test_find_text_no_match() {
        assert_eq!(find_text(&sample_tree(), "absent"), Vec::<usize>::new());
    }

    #[test]
    fn test_find_text_reports_char_offsets() {
        let tree = Node::text("héllo héllo");
        assert_eq!(find_text(&tree, "héllo"), vec![0, 6]);
    }

    #[test]
    fn test_find_any_orders_by_start() {
        let tree = Node::text("abcabc");
        let hits = find_any(&tree, &["bc", "abc"]);
        assert_eq!(
            hits,
            vec![
                Match {
                    pattern: 1,
                    span: Span::new(0, 3)
                },
                Match {
                    pattern: 0,
                    span: Span::new(1, 3)
                },
                Match {
                    pattern: 1,
                    span: Span::new(3, 6)
                },
                Match {
                    pattern: 0,
                    span: Span::new(4, 6)
                },
            ]
        );
    }

    #[test]
    fn test_find_any_skips_empty_needles() {
        let tree = Node::text("abc");
        let hits = find_any(&tree, &["", "b"]);
        assert_eq!(
            hits,
            vec![Match {
                pattern: 1,
                span: Span::new(1, 2)
            }]
        );
    }

    #[test]
    fn test_word_count() {
        assert_eq!(word_count(&sample_tree()), 3);
        assert_eq!(word_count(&Node::text("  ")), 0);
    }
}
