// ABOUTME: The boundary resolver: per-category decisions for nodes against the requested range.
// ABOUTME: Fully-outside nodes vanish, fully-inside nodes clone, partial nodes go through their category's policy.

use mdslice_ast::{classify, content_length, Category, LengthCache, Node, Span};

use crate::config::{BlockPolicy, FormattingPolicy, MediaPolicy, TextPolicy};
use crate::engine::post::apply_boundary_whitespace;
use crate::engine::rebuild::{assemble_container, rebuild_children};
use crate::engine::SliceContext;

/// What resolving one node produced. Modeling the one/many/none split
/// explicitly keeps wrapper-splicing unambiguous for the rebuilder.
pub(crate) enum Resolved {
    /// Nothing of the node falls in range.
    None,
    /// A single replacement node.
    One(Node),
    /// The node unwrapped; its surviving children splice into the parent.
    Many(Vec<Node>),
}

/// Resolve a node whose span starts at `node_start` against the context's
/// range.
pub(crate) fn resolve(
    node: &Node,
    node_start: usize,
    ctx: &mut SliceContext,
    cache: &mut LengthCache,
) -> Resolved {
    let len = content_length(node, cache);
    let node_end = node_start + len;
    let Span { start, end } = ctx.range;

    // fully outside; zero-width markers sitting exactly on a boundary
    // land here as well
    if node_end <= start || node_start >= end {
        return Resolved::None;
    }

    let fully_inside = node_start >= start && node_end <= end;
    if !fully_inside {
        ctx.stats.saw_partial();
    }

    let category = classify(node);
    match category {
        Category::Text | Category::InlineCode | Category::CodeBlock => {
            if fully_inside {
                // a fully-inside leaf is cloned with its value untouched,
                // including a leaf that was already empty
                return Resolved::One(node.clone());
            }
            let policy = match category {
                Category::Text => ctx.cfg.text,
                Category::InlineCode => ctx.cfg.inline_code,
                _ => ctx.cfg.code_block,
            };
            match policy {
                TextPolicy::Truncate => truncate_leaf(node, node_start, len, category, ctx),
                TextPolicy::IncludeFull => {
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::One(node.clone())
                }
                TextPolicy::ExcludeFull => {
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::None
                }
            }
        }

        // zero-width markers are included whole on any overlap, never cut
        Category::Atomic => Resolved::One(node.clone()),

        Category::Formatting => {
            if fully_inside {
                let children = rebuild_children(node, node_start, ctx, cache);
                return assemble_container(node, children, ctx);
            }
            match ctx.cfg.formatting {
                FormattingPolicy::Preserve => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    assemble_container(node, children, ctx)
                }
                FormattingPolicy::Strip => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::Many(children)
                }
                FormattingPolicy::Exclude => {
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::None
                }
                FormattingPolicy::Extend => {
                    // keeps the wrapper like Preserve; the wrapper is
                    // reported as modified so callers can widen context
                    // themselves
                    let children = rebuild_children(node, node_start, ctx, cache);
                    ctx.stats.record_modified(node.type_tag());
                    assemble_container(node, children, ctx)
                }
            }
        }

        Category::Media => {
            if node.children().is_none() {
                // childless media (images) are zero-width markers; an
                // overlap means the whole node is in range
                return Resolved::One(node.clone());
            }
            if fully_inside {
                let children = rebuild_children(node, node_start, ctx, cache);
                return assemble_container(node, children, ctx);
            }
            match ctx.cfg.media {
                MediaPolicy::Preserve => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    assemble_container(node, children, ctx)
                }
                MediaPolicy::Strip => {
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::None
                }
                MediaPolicy::ContentOnly => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::Many(children)
                }
            }
        }

        Category::Block => {
            if fully_inside {
                let children = rebuild_children(node, node_start, ctx, cache);
                return assemble_container(node, children, ctx);
            }
            match ctx.cfg.block {
                BlockPolicy::Include => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    assemble_container(node, children, ctx)
                }
                BlockPolicy::Exclude => {
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::None
                }
                BlockPolicy::Unwrap => {
                    let children = rebuild_children(node, node_start, ctx, cache);
                    ctx.stats.record_modified(node.type_tag());
                    Resolved::Many(children)
                }
            }
        }

        // lists have no partial policy of their own; assembly prunes an
        // emptied list unconditionally
        Category::List => {
            let children = rebuild_children(node, node_start, ctx, cache);
            assemble_container(node, children, ctx)
        }

        Category::Unknown => {
            if node.children().is_some() {
                // generic container: always recurse, no partial policy
                let children = rebuild_children(node, node_start, ctx, cache);
                assemble_container(node, children, ctx)
            } else {
                // atomic pass-through, included verbatim on any overlap
                Resolved::One(node.clone())
            }
        }
    }
}

/// Slice a partial character-bearing leaf to the overlapping substring and
/// apply the boundary whitespace policy (plain text only).
fn truncate_leaf(
    node: &Node,
    node_start: usize,
    len: usize,
    category: Category,
    ctx: &mut SliceContext,
) -> Resolved {
    let Span { start, end } = ctx.range;
    let slice_start = start.saturating_sub(node_start);
    let slice_end = (end - node_start).min(len);

    let value = node.value().unwrap_or("");
    let sliced: String = value
        .chars()
        .skip(slice_start)
        .take(slice_end - slice_start)
        .collect();

    let cleaned = if category == Category::Text {
        apply_boundary_whitespace(
            &sliced,
            ctx.cfg.boundary_whitespace,
            slice_start > 0,
            slice_end < len,
        )
    } else {
        sliced
    };

    ctx.stats.record_modified(node.type_tag());
    if cleaned.is_empty() {
        // a truncation that leaves nothing emits nothing, not an empty
        // leaf
        return Resolved::None;
    }
    Resolved::One(node.with_value(cleaned))
}
