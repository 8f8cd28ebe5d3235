//! Rendering of bound tag trees.
//!
//! A depth-first walk that emits SGR sequences around each scope. Entering
//! a scope emits the codes of the tag's own composed style; leaving it
//! emits a full reset followed by the ancestor's effective style, so a
//! scope's formatting can never leak into a sibling. Scopes whose own
//! style is empty emit nothing.

use crate::bind::BoundDocument;
use crate::parser::{Binding, Node, TagNode};
use crate::resolver::StyleResolver;
use crate::style::{RESET, Style};

impl BoundDocument {
    /// Render the tree with ANSI escape sequences.
    ///
    /// Cannot fail: the tree was validated during parsing and binding, and
    /// unknown attribute names are the resolver's to report.
    ///
    /// # Examples
    ///
    /// ```
    /// use adorn_markup::{AnsiResolver, Document, Options};
    ///
    /// let options = Options::default();
    /// let bound = Document::parse("`bold{hi}", &options)
    ///     .unwrap()
    ///     .bind(&[], &options)
    ///     .unwrap();
    /// assert_eq!(bound.render(&AnsiResolver), "\x1b[1mhi\x1b[0m");
    /// ```
    pub fn render(&self, resolver: &dyn StyleResolver) -> String {
        let mut out = String::new();
        render_nodes(&self.roots, &Style::EMPTY, resolver, &mut out);
        out
    }

    /// Render the tree with all markup stripped.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        plain_nodes(&self.roots, &mut out);
        out
    }
}

fn render_nodes(
    nodes: &[Node],
    ancestor: &Style,
    resolver: &dyn StyleResolver,
    out: &mut String,
) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Tag(tag) => render_tag(tag, ancestor, resolver, out),
        }
    }
}

fn render_tag(tag: &TagNode, ancestor: &Style, resolver: &dyn StyleResolver, out: &mut String) {
    // Later attributes override earlier ones of the same category.
    let own = tag
        .names()
        .filter_map(|name| resolver.resolve(name))
        .fold(Style::EMPTY, |acc, style| acc.apply(&style));
    let styled = !own.is_empty();

    if styled {
        out.push_str(&own.sgr());
    }
    if let Binding::Argument(value) = &tag.binding {
        out.push_str(value);
    }

    let effective = ancestor.apply(&own);
    render_nodes(&tag.children, &effective, resolver, out);

    if styled {
        out.push_str(RESET);
        if !ancestor.is_empty() {
            out.push_str(&ancestor.sgr());
        }
    }
}

fn plain_nodes(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Tag(tag) => {
                if let Binding::Argument(value) = &tag.binding {
                    out.push_str(value);
                }
                plain_nodes(&tag.children, out);
            }
        }
    }
}
