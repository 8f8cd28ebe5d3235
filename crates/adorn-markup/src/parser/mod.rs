//! Parser for inline style-tag markup.
//!
//! This module contains the scanner, the attribute-list parser, and the
//! tag tree builder.

mod scanner;
mod tag;
mod tree;

pub use scanner::{BODY_CLOSE, BODY_OPEN, Scanner, TAG_OPEN, Token, scan};
pub use tag::{AttrSpec, parse_attr_list};
pub use tree::{Binding, Document, Node, TagNode};
