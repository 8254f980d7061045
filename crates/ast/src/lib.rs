// ABOUTME: Core document tree library for mdslice.
// ABOUTME: Provides the node model, category classification, length accounting, search, and the mdast JSON adapter.

//! Document tree model for the mdslice workspace.
//!
//! This crate defines the mdast-style [`Node`] tree that the slicing engine
//! operates on, together with everything derivable from the tree without a
//! slicing policy: category classification, character-length accounting with
//! an injectable cache, document-order text flattening and literal substring
//! search, node-identity position lookup, and an explicit adapter to and
//! from mdast-flavored JSON.
//!
//! # Counting unit
//!
//! All offsets and lengths in this workspace count Unicode scalar values
//! (Rust `char`s). The JavaScript implementations this library mirrors count
//! UTF-16 code units instead, so lengths diverge for astral-plane characters
//! (emoji, some CJK extensions). This is a deliberate, documented choice:
//! `char` is the native unit for Rust strings, and byte offsets would make
//! multi-byte text unsliceable at sensible boundaries.

pub mod category;
pub mod error;
pub mod json;
pub mod length;
pub mod node;
pub mod position;
pub mod search;

pub use category::{classify, Category};
pub use error::AstError;
pub use json::{node_from_value, node_to_value};
pub use length::{content_length, LengthCache};
pub use node::Node;
pub use position::{position_of, Span};
pub use search::{find_any, find_text, text_content, word_count, Match};
