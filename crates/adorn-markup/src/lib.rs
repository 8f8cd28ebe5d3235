//! Inline style-tag markup parser and renderer for terminal text.
//!
//! This crate turns strings with embedded style tags like
//! `` `red:bold{important} `` into strings carrying ANSI escape sequences,
//! handling nested tags, literal escaping, and substitution of positional
//! arguments into tag bodies.
//!
//! # Syntax
//!
//! A tag is a backtick, an attribute list, and a brace-delimited body:
//!
//! ```text
//! document  := (literal | tag | escaped)*
//! tag       := "`" attr_list "{" document "}"
//! attr_list := attr (":" attr)*
//! attr      := name | "$" | "+" | "!"
//! escaped   := "\" marker_char
//! ```
//!
//! - `` `red{text} `` - apply the `red` style to `text`
//! - `` `red:bold{text} `` - combined styling; later attributes override
//!   earlier ones of the same category
//! - `` `${} `` - substitute the next positional argument
//! - `` `red:+{text} `` - phrase marker: the body is the content, never an
//!   argument
//! - `` `red:!{} `` - override marker: force a stylistic tag to consume an
//!   argument
//! - `` \` `` - escaped marker (literal backtick); `\` also escapes `{`,
//!   `}`, and itself
//!
//! The attribute separator (`:`) and the escape character (`\`) are
//! configurable through [`Options`]; the tag delimiters are fixed.
//!
//! # Pipeline
//!
//! Rendering runs in discrete stages, each pure and fully materialized
//! before the next: scan, build, bind, render. The staged API exposes each
//! step:
//!
//! ```
//! use adorn_markup::{AnsiResolver, Document, Options};
//!
//! let options = Options::default();
//! let bound = Document::parse("`green{ok}: `${}", &options)
//!     .unwrap()
//!     .bind(&["all tests passed"], &options)
//!     .unwrap();
//!
//! assert_eq!(
//!     bound.render(&AnsiResolver),
//!     "\x1b[32mok\x1b[0m: all tests passed"
//! );
//! assert_eq!(bound.render_plain(), "ok: all tests passed");
//! ```
//!
//! Argument binding order is global: tags consume arguments in the order
//! they appear in the source, regardless of nesting depth.
//!
//! # Resolvers
//!
//! The pipeline does not know what `red` means. Attribute names are
//! resolved through a [`StyleResolver`], injected at render time.
//! [`AnsiResolver`] provides the standard 16-color palette and text
//! modifiers; [`MapResolver`] lets callers supply their own table.

pub mod bind;
pub mod config;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod style;

mod render;

pub use bind::BoundDocument;
pub use config::Options;
pub use error::{Location, MarkupError, MarkupWarning};
pub use parser::{AttrSpec, Binding, Document, Node, Scanner, TagNode, Token};
pub use resolver::{AnsiResolver, MapResolver, StyleResolver};
pub use style::{Color, Style, TextStyle};
