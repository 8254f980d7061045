// ABOUTME: Convenience operations built on slice: leading excerpts and context windows around a search hit.
// ABOUTME: Both reuse the full policy machinery; neither widens or special-cases the underlying range math.

use mdslice_ast::{find_text, Node};

use crate::config::SliceConfig;
use crate::engine::slice;
use crate::error::SliceError;
use crate::outcome::SliceOutcome;

/// Take the leading `max_len` characters of a document as a new tree.
///
/// Equivalent to `slice(tree, ..max_len, config)`: the end clamps to the
/// content, the leading edge is never a cut boundary so it is never
/// trimmed. A `max_len` of zero is an invalid (empty) range and is
/// rejected like any other.
pub fn excerpt(
    tree: &Node,
    max_len: usize,
    config: &SliceConfig,
) -> Result<SliceOutcome, SliceError> {
    slice(tree, ..max_len, config)
}

/// Slice a context window around the first occurrence of `needle`.
///
/// The window spans `context` characters on each side of the hit, clamped
/// to the document. Returns `Ok(None)` when the needle does not occur
/// (or is empty); search is literal and case-sensitive, consistent with
/// [`find_text`].
pub fn slice_around(
    tree: &Node,
    needle: &str,
    context: usize,
    config: &SliceConfig,
) -> Result<Option<SliceOutcome>, SliceError> {
    let hits = find_text(tree, needle);
    let Some(&hit) = hits.first() else {
        return Ok(None);
    };

    let needle_len = needle.chars().count();
    let start = hit.saturating_sub(context);
    let end = hit.saturating_add(needle_len).saturating_add(context);
    slice(tree, start..end, config).map(Some)
}
