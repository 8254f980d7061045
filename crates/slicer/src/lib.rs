// ABOUTME: Main library entry point for the mdslice slicing engine.
// ABOUTME: Re-exports the public API: slice, slice_with_cache, SliceConfig, policies, SliceError, SliceOutcome.

//! mdslice-slicer - character-range slicing for markdown document trees.
//!
//! This crate extracts a `[start, end)` character range from an
//! mdast-style tree (see [`mdslice_ast`]) and returns a new, valid tree
//! containing only the content that falls within the range. Nodes that
//! straddle a boundary are handled per category through a configurable
//! policy record: leaves truncate, wrappers preserve/strip/unwrap, blocks
//! include or drop, emptied lists prune.
//!
//! The input tree is never mutated; every emitted node is a fresh clone
//! with its pass-through attributes copied verbatim. Offsets count
//! Unicode scalar values (see the counting-unit note in `mdslice-ast`).
//!
//! # Example
//!
//! ```
//! use mdslice_ast::Node;
//! use mdslice_slicer::{slice, SliceConfig};
//!
//! let doc = Node::paragraph(vec![
//!     Node::text("Hello "),
//!     Node::emphasis(vec![Node::text("world")]),
//! ]);
//!
//! let outcome = slice(&doc, 0..5, &SliceConfig::default()).unwrap();
//! assert_eq!(outcome.text(), "Hello");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod excerpt;
pub mod outcome;

pub use crate::config::{
    BlockPolicy, FormattingPolicy, MediaPolicy, SliceConfig, SliceConfigBuilder, TextPolicy,
    WhitespacePolicy,
};
pub use crate::engine::{slice, slice_with_cache};
pub use crate::error::SliceError;
pub use crate::excerpt::{excerpt, slice_around};
pub use crate::outcome::{SliceInfo, SliceOutcome};

pub use mdslice_ast::{LengthCache, Node, Span};
