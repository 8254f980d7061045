// ABOUTME: Slicing policy configuration: per-category partial-node behaviors and text cleanup options.
// ABOUTME: SliceConfigBuilder provides a fluent API for assembling a SliceConfig from the defaults.

/// What happens to a character-bearing leaf whose span straddles a range
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPolicy {
    /// Slice the value to the overlapping substring.
    #[default]
    Truncate,
    /// Clone the whole leaf unchanged.
    IncludeFull,
    /// Emit nothing.
    ExcludeFull,
}

/// What happens to a formatting wrapper (emphasis, strong, strikethrough)
/// whose span straddles a range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormattingPolicy {
    /// Recurse into children and keep the wrapper.
    #[default]
    Preserve,
    /// Recurse into children and splice them into the parent, dropping the
    /// wrapper.
    Strip,
    /// Drop the wrapper and its content entirely.
    Exclude,
    /// Keep the wrapper and recurse, marking the wrapper as covering its
    /// full span information-wise. Structurally identical to `Preserve`;
    /// the request range itself is never widened.
    Extend,
}

/// What happens to a media wrapper (link, image) whose span straddles a
/// range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaPolicy {
    /// Recurse into children and keep the wrapper with its attributes
    /// (url, title, alt) intact.
    #[default]
    Preserve,
    /// Emit nothing.
    Strip,
    /// Recurse into children and splice them into the parent, discarding
    /// the wrapper and its attributes.
    ContentOnly,
}

/// What happens to a block container (paragraph, heading, quote, list
/// item) whose span straddles a range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockPolicy {
    /// Recurse into children and keep the wrapper.
    #[default]
    Include,
    /// Emit nothing.
    Exclude,
    /// Recurse into children and splice them into the parent.
    Unwrap,
}

/// How boundary whitespace is handled on a truncated plain-text leaf.
/// Never applied to inline code or code blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhitespacePolicy {
    /// Remove whitespace on the side(s) that were actually cut. The edge
    /// that coincides with the true node boundary is left alone.
    #[default]
    Trim,
    /// Collapse whitespace runs in the sliced value to single spaces.
    Normalize,
    /// Leave the sliced value as-is.
    Preserve,
}

/// Immutable policy record for a slicing call.
///
/// Unset fields fall back to the documented defaults: truncate leaves,
/// preserve wrappers, include blocks, trim cut boundaries, merge adjacent
/// text, keep empty blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliceConfig {
    /// Partial-node policy for plain text leaves.
    pub text: TextPolicy,
    /// Partial-node policy for inline code leaves.
    pub inline_code: TextPolicy,
    /// Partial-node policy for code block leaves.
    pub code_block: TextPolicy,
    /// Partial-node policy for formatting wrappers.
    pub formatting: FormattingPolicy,
    /// Partial-node policy for media wrappers.
    pub media: MediaPolicy,
    /// Partial-node policy for block containers.
    pub block: BlockPolicy,
    /// Boundary whitespace handling for truncated plain text.
    pub boundary_whitespace: WhitespacePolicy,
    /// Merge adjacent plain-text leaves after structural edits.
    pub merge_adjacent_text: bool,
    /// Keep containers whose rebuilt child list is empty. Lists are pruned
    /// unconditionally regardless of this flag.
    pub preserve_empty_blocks: bool,
    /// Carry auxiliary definition nodes through collaborator passes. The
    /// slicer itself never encounters them; declared for callers that do.
    pub include_definitions: bool,
    /// Carry footnote nodes through collaborator passes. Same status as
    /// `include_definitions`.
    pub include_footnotes: bool,
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            text: TextPolicy::Truncate,
            inline_code: TextPolicy::Truncate,
            code_block: TextPolicy::Truncate,
            formatting: FormattingPolicy::Preserve,
            media: MediaPolicy::Preserve,
            block: BlockPolicy::Include,
            boundary_whitespace: WhitespacePolicy::Trim,
            merge_adjacent_text: true,
            preserve_empty_blocks: true,
            include_definitions: true,
            include_footnotes: true,
        }
    }
}

impl SliceConfig {
    /// Start a builder from the defaults.
    pub fn builder() -> SliceConfigBuilder {
        SliceConfigBuilder::new()
    }
}

/// Builder for assembling a [`SliceConfig`] field by field.
#[derive(Debug, Clone, Default)]
pub struct SliceConfigBuilder {
    cfg: SliceConfig,
}

impl SliceConfigBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            cfg: SliceConfig::default(),
        }
    }

    /// Set the partial-node policy for plain text leaves.
    pub fn text(mut self, policy: TextPolicy) -> Self {
        self.cfg.text = policy;
        self
    }

    /// Set the partial-node policy for inline code leaves.
    pub fn inline_code(mut self, policy: TextPolicy) -> Self {
        self.cfg.inline_code = policy;
        self
    }

    /// Set the partial-node policy for code block leaves.
    pub fn code_block(mut self, policy: TextPolicy) -> Self {
        self.cfg.code_block = policy;
        self
    }

    /// Set the partial-node policy for formatting wrappers.
    pub fn formatting(mut self, policy: FormattingPolicy) -> Self {
        self.cfg.formatting = policy;
        self
    }

    /// Set the partial-node policy for media wrappers.
    pub fn media(mut self, policy: MediaPolicy) -> Self {
        self.cfg.media = policy;
        self
    }

    /// Set the partial-node policy for block containers.
    pub fn block(mut self, policy: BlockPolicy) -> Self {
        self.cfg.block = policy;
        self
    }

    /// Set the boundary whitespace handling for truncated plain text.
    pub fn boundary_whitespace(mut self, policy: WhitespacePolicy) -> Self {
        self.cfg.boundary_whitespace = policy;
        self
    }

    /// Enable or disable merging of adjacent plain-text leaves.
    pub fn merge_adjacent_text(mut self, merge: bool) -> Self {
        self.cfg.merge_adjacent_text = merge;
        self
    }

    /// Keep or drop containers whose rebuilt child list is empty.
    pub fn preserve_empty_blocks(mut self, preserve: bool) -> Self {
        self.cfg.preserve_empty_blocks = preserve;
        self
    }

    /// Carry auxiliary definition nodes through collaborator passes.
    pub fn include_definitions(mut self, include: bool) -> Self {
        self.cfg.include_definitions = include;
        self
    }

    /// Carry footnote nodes through collaborator passes.
    pub fn include_footnotes(mut self, include: bool) -> Self {
        self.cfg.include_footnotes = include;
        self
    }

    /// Finish the builder.
    pub fn build(self) -> SliceConfig {
        self.cfg
    }
}
