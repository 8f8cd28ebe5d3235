//! Tag tree construction.
//!
//! Consumes the scanner's token sequence and produces a [`Document`]: a
//! tree of literal leaves and tag nodes rooted at an implicit top-level
//! node. The builder keeps an explicit stack of open tags rather than
//! recursing, and every failure points at a concrete source offset.

use crate::config::Options;
use crate::error::MarkupError;

use super::scanner::{Token, scan};
use super::tag::{AttrSpec, parse_attr_list};

/// Value attached to a tag by the argument binder.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Binding {
    /// Not yet bound, or purely stylistic.
    #[default]
    Unbound,
    /// Bound to a consumed positional argument.
    Argument(String),
    /// The tag's own written body is its content (`+` marker).
    Phrase,
}

/// A markup span applying attributes to its enclosed content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TagNode {
    /// Attribute specifiers in source order.
    pub attrs: Vec<AttrSpec>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
    /// Byte offset of the tag-open marker.
    pub offset: usize,
    /// Filled in by [`Document::bind`](crate::Document::bind).
    pub binding: Binding,
}

impl TagNode {
    /// True if binding this tag consumes a positional argument.
    pub fn consumes(&self) -> bool {
        self.attrs
            .iter()
            .any(|a| matches!(a, AttrSpec::Positional | AttrSpec::Override))
    }

    /// True if this tag carries the phrase marker.
    pub fn is_phrase(&self) -> bool {
        self.attrs.contains(&AttrSpec::Phrase)
    }

    /// The tag's named attributes in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attrs.iter().filter_map(|a| match a {
            AttrSpec::Named(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// A node in the tag tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    /// Literal text run; escape sequences already resolved.
    Text(String),
    /// A nested tag.
    Tag(TagNode),
}

/// A parsed markup document: the children of the implicit root node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    pub(crate) roots: Vec<Node>,
}

impl Document {
    /// Parse markup text into a tag tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use adorn_markup::{Document, Options};
    ///
    /// let doc = Document::parse("`bold{hi} there", &Options::default()).unwrap();
    /// assert_eq!(doc.roots().len(), 2);
    /// ```
    pub fn parse(input: &str, options: &Options) -> Result<Self, MarkupError> {
        let tokens = scan(input, options)?;
        build(tokens, options)
    }

    /// Top-level nodes in source order.
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }
}

/// Append literal text, coalescing with a preceding text leaf.
fn push_text(target: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = target.last_mut() {
        last.push_str(text);
    } else {
        target.push(Node::Text(text.to_string()));
    }
}

fn build(tokens: Vec<Token<'_>>, options: &Options) -> Result<Document, MarkupError> {
    let mut roots: Vec<Node> = Vec::new();
    let mut stack: Vec<TagNode> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => {
                let target = stack.last_mut().map_or(&mut roots, |t| &mut t.children);
                push_text(target, text);
            }
            Token::Escaped(c) => {
                let target = stack.last_mut().map_or(&mut roots, |t| &mut t.children);
                push_text(target, c.encode_utf8(&mut [0; 4]));
            }
            Token::Open { attrs, offset } => {
                let attrs = parse_attr_list(attrs, options.attribute_separator, offset)?;
                stack.push(TagNode {
                    attrs,
                    children: Vec::new(),
                    offset,
                    binding: Binding::Unbound,
                });
            }
            Token::Close { offset } => match stack.pop() {
                Some(node) => {
                    let target = stack.last_mut().map_or(&mut roots, |t| &mut t.children);
                    target.push(Node::Tag(node));
                }
                None => return Err(MarkupError::UnmatchedClose { offset }),
            },
        }
    }

    if let Some(open) = stack.last() {
        return Err(MarkupError::UnclosedTag {
            offset: open.offset,
        });
    }

    Ok(Document { roots })
}
