//! Markup scanning and error-tolerant tree construction.
//!
//! [`parse`] always returns a tree rooted at an `html` element, whatever the input looks like.
pub mod dom_snapshot;
pub mod perf_fixtures;
pub mod traverse;

mod dom_builder;
mod tokenizer;
mod types;

pub use crate::dom_builder::{
    HEAD_ELEMENTS, TreeBuilder, VOID_ELEMENTS, is_head_element, is_void_element, parse, parse_tag,
};
pub use crate::tokenizer::{Tokenizer, strip_tags, tokenize};
pub use crate::types::{Attributes, Document, Element, Node, NodeId, Token};
