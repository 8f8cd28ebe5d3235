//! Inline style-tag rendering for terminal output.
//!
//! `adorn` renders strings with embedded style tags into strings carrying
//! ANSI escape sequences:
//!
//! ```
//! let out = adorn::render("`red:bold{error}: `${}", &["file not found"]).unwrap();
//! assert_eq!(out, "\x1b[1;31merror\x1b[0m: file not found");
//! ```
//!
//! The one-call helpers below use the default [`Options`] and the built-in
//! [`AnsiResolver`]. For custom escape characters, strict argument
//! checking, or your own style table, use [`render_with`] or the staged
//! pipeline re-exported from [`adorn_markup`]:
//! [`Document::parse`] → [`Document::bind`] → [`BoundDocument::render`].

pub use adorn_markup::{
    AnsiResolver, AttrSpec, Binding, BoundDocument, Color, Document, Location, MapResolver,
    MarkupError, MarkupWarning, Node, Options, Style, StyleResolver, TagNode, TextStyle,
};

/// The result of a [`render_with`] call: the output text plus any warnings
/// collected while binding arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    /// The rendered output.
    pub text: String,
    /// Non-fatal conditions, e.g. unused positional arguments.
    pub warnings: Vec<MarkupWarning>,
}

/// Render markup with explicit options and resolver.
///
/// Warnings are returned, not logged; callers decide how to surface them.
///
/// # Examples
///
/// ```
/// use adorn::{AnsiResolver, Options};
///
/// let rendered =
///     adorn::render_with("plain", &["extra"], &Options::default(), &AnsiResolver).unwrap();
/// assert_eq!(rendered.text, "plain");
/// assert_eq!(rendered.warnings.len(), 1);
/// ```
pub fn render_with(
    input: &str,
    arguments: &[&str],
    options: &Options,
    resolver: &dyn StyleResolver,
) -> Result<Rendered, MarkupError> {
    let bound = Document::parse(input, options)?.bind(arguments, options)?;
    let text = bound.render(resolver);
    Ok(Rendered {
        text,
        warnings: bound.warnings().to_vec(),
    })
}

/// Render markup to an ANSI-styled string with the default options and the
/// built-in resolver.
///
/// Warnings are forwarded to [`log::warn!`].
///
/// # Examples
///
/// ```
/// assert_eq!(adorn::render("`bold{hi}", &[]).unwrap(), "\x1b[1mhi\x1b[0m");
/// ```
pub fn render(input: &str, arguments: &[&str]) -> Result<String, MarkupError> {
    let rendered = render_with(input, arguments, &Options::default(), &AnsiResolver)?;
    for warning in &rendered.warnings {
        log::warn!("{warning}");
    }
    Ok(rendered.text)
}

/// Render markup with all styling stripped.
///
/// Tag structure and arguments are still validated and bound exactly as in
/// [`render`]; only the escape sequences are omitted.
///
/// # Examples
///
/// ```
/// let out = adorn::render_plain("`red{A`blue{B}C}", &[]).unwrap();
/// assert_eq!(out, "ABC");
/// ```
pub fn render_plain(input: &str, arguments: &[&str]) -> Result<String, MarkupError> {
    let options = Options::default();
    let bound = Document::parse(input, &options)?.bind(arguments, &options)?;
    for warning in bound.warnings() {
        log::warn!("{warning}");
    }
    Ok(bound.render_plain())
}
