// ABOUTME: The slicing engine entry point: range validation, clamping, and orchestration of the resolver.
// ABOUTME: Submodules hold the boundary resolver, the tree rebuilder, and the post-processing passes.

pub(crate) mod post;
pub(crate) mod rebuild;
pub(crate) mod resolver;

use std::ops::{Bound, RangeBounds};

use mdslice_ast::{content_length, LengthCache, Node, Span};

use crate::config::SliceConfig;
use crate::error::SliceError;
use crate::outcome::{SliceInfo, SliceOutcome};
use self::rebuild::assemble_container;
use self::resolver::{resolve, Resolved};

/// Per-call state threaded through the recursive descent: the effective
/// range, the policy record, and the modification accounting.
pub(crate) struct SliceContext<'a> {
    pub cfg: &'a SliceConfig,
    pub range: Span,
    pub stats: SliceStats,
}

/// Accumulates the `info` metadata while the resolver runs.
#[derive(Debug, Default)]
pub(crate) struct SliceStats {
    pub has_partial_nodes: bool,
    pub modified: Vec<String>,
}

impl SliceStats {
    /// Note that a node's span straddled a boundary.
    pub fn saw_partial(&mut self) {
        self.has_partial_nodes = true;
    }

    /// Note that a partial policy altered a node of the given type.
    pub fn record_modified(&mut self, tag: &str) {
        self.has_partial_nodes = true;
        if !self.modified.iter().any(|t| t == tag) {
            self.modified.push(tag.to_string());
        }
    }
}

/// Extract the character range `range` from `tree` as a new tree.
///
/// The input is never mutated; every returned node is a fresh clone with
/// pass-through attributes copied verbatim. Offsets count Unicode scalar
/// values over the document's leaf-text concatenation in pre-order.
///
/// An unbounded end (`start..`) defaults to the full content length, and
/// an end past the content is clamped silently. An explicitly empty or
/// inverted range (`end <= start`) is rejected with
/// [`SliceError::InvalidRange`] before any traversal; a range that merely
/// clamps to nothing resolves to an outcome with `node: None`.
pub fn slice(
    tree: &Node,
    range: impl RangeBounds<usize>,
    config: &SliceConfig,
) -> Result<SliceOutcome, SliceError> {
    slice_with_cache(tree, range, config, &mut LengthCache::new())
}

/// [`slice`] with a caller-owned length cache.
///
/// Lets a caller slicing the same tree repeatedly pay for each subtree
/// measurement once. The cache is keyed by node identity and must be
/// discarded when the tree it was built against goes away; output nodes
/// are never entered into it.
pub fn slice_with_cache(
    tree: &Node,
    range: impl RangeBounds<usize>,
    config: &SliceConfig,
    cache: &mut LengthCache,
) -> Result<SliceOutcome, SliceError> {
    let original_length = content_length(tree, cache);

    let start = match range.start_bound() {
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let requested_end = match range.end_bound() {
        Bound::Included(&e) => Some(e.saturating_add(1)),
        Bound::Excluded(&e) => Some(e),
        Bound::Unbounded => None,
    };

    // strict posture: an explicitly empty or inverted range is a caller
    // bug, rejected before clamping
    if let Some(end) = requested_end {
        if end <= start {
            return Err(SliceError::invalid_range(start, end, original_length));
        }
    }

    let end = requested_end.unwrap_or(original_length).min(original_length);
    if start >= end {
        // start at or beyond the content: a normal empty outcome
        return Ok(SliceOutcome::empty(original_length, Span::new(end, end)));
    }

    let mut ctx = SliceContext {
        cfg: config,
        range: Span::new(start, end),
        stats: SliceStats::default(),
    };

    let node = match resolve(tree, 0, &mut ctx, cache) {
        Resolved::None => None,
        Resolved::One(node) => Some(node),
        // the outermost node has no parent to splice into; reassemble its
        // wrapper around the unwrapped children
        Resolved::Many(children) => match assemble_container(tree, children, &mut ctx) {
            Resolved::One(node) => Some(node),
            _ => None,
        },
    };

    let sliced_length = node.as_ref().map_or(0, Node::char_len);
    Ok(SliceOutcome {
        node,
        boundaries: Span::new(start, end),
        info: SliceInfo {
            original_length,
            sliced_length,
            has_partial_nodes: ctx.stats.has_partial_nodes,
            modified_node_types: ctx.stats.modified,
        },
    })
}
