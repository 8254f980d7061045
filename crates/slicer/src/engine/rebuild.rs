// ABOUTME: The tree rebuilder: walks a container's children with running offsets and reassembles the survivors.
// ABOUTME: Offsets always advance by the child's original length, so geometry is measured against the input tree.

use mdslice_ast::{classify, content_length, Category, LengthCache, Node};

use crate::engine::post::merge_adjacent_text;
use crate::engine::resolver::{resolve, Resolved};
use crate::engine::SliceContext;

/// Resolve each child of `parent` in order and collect the survivors,
/// splicing unwrapped children flat into the result.
///
/// Each child's start offset is the running sum of its prior siblings'
/// lengths in the *original* tree; the offset advances by the child's full
/// length no matter how much of it was retained.
pub(crate) fn rebuild_children(
    parent: &Node,
    parent_start: usize,
    ctx: &mut SliceContext,
    cache: &mut LengthCache,
) -> Vec<Node> {
    let mut out = Vec::new();
    let Some(children) = parent.children() else {
        return out;
    };

    let mut offset = parent_start;
    for child in children {
        let child_len = content_length(child, cache);
        match resolve(child, offset, ctx, cache) {
            Resolved::None => {}
            Resolved::One(node) => out.push(node),
            Resolved::Many(nodes) => out.extend(nodes),
        }
        offset += child_len;
    }
    out
}

/// Reassemble a container around its rebuilt children: merge adjacent
/// plain-text leaves, then decide whether an emptied container survives.
///
/// Lists prune unconditionally; other containers keep an empty child list
/// unless `preserve_empty_blocks` is off.
pub(crate) fn assemble_container(
    node: &Node,
    children: Vec<Node>,
    ctx: &mut SliceContext,
) -> Resolved {
    let children = if ctx.cfg.merge_adjacent_text {
        merge_adjacent_text(children)
    } else {
        children
    };

    if children.is_empty() {
        if classify(node) == Category::List {
            return Resolved::None;
        }
        if !ctx.cfg.preserve_empty_blocks {
            return Resolved::None;
        }
    }
    Resolved::One(node.with_children(children))
}
