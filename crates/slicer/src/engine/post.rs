// ABOUTME: Post-processing passes over rebuilt children: boundary whitespace cleanup and adjacent-text merging.
// ABOUTME: Merging only joins plain-text leaves; inline code and other leaves are never coalesced.

use once_cell::sync::Lazy;
use regex::Regex;

use mdslice_ast::Node;

use crate::config::WhitespacePolicy;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Apply the boundary whitespace policy to a truncated plain-text value.
///
/// `cut_start`/`cut_end` say which sides were actually cut by the slice;
/// `Trim` only touches those sides, leaving the edge that coincides with
/// the true node boundary alone.
pub(crate) fn apply_boundary_whitespace(
    value: &str,
    policy: WhitespacePolicy,
    cut_start: bool,
    cut_end: bool,
) -> String {
    match policy {
        WhitespacePolicy::Preserve => value.to_string(),
        WhitespacePolicy::Normalize => WHITESPACE_RUN.replace_all(value, " ").into_owned(),
        WhitespacePolicy::Trim => {
            let mut out = value;
            if cut_start {
                out = out.trim_start();
            }
            if cut_end {
                out = out.trim_end();
            }
            out.to_string()
        }
    }
}

/// Coalesce consecutive plain-text leaves into one, left to right.
///
/// Runs per container, bottom-up, after all policy decisions; merging
/// never crosses a container boundary.
pub(crate) fn merge_adjacent_text(children: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(children.len());
    for child in children {
        let merged = match (&child, out.last_mut()) {
            (Node::Text { value }, Some(Node::Text { value: prev })) => {
                prev.push_str(value);
                true
            }
            _ => false,
        };
        if !merged {
            out.push(child);
        }
    }
    out
}
