//! Argument binding.
//!
//! Binding walks the parsed tree once and attaches a concrete value to
//! every consuming tag. The argument cursor is global: it advances in the
//! left-to-right, depth-first order tags appear in the source, and is
//! never reset when nesting opens or closes. Nesting affects rendering
//! scope only.

use crate::config::Options;
use crate::error::{MarkupError, MarkupWarning};
use crate::parser::{Binding, Document, Node};

/// A tag tree with every consuming tag bound to a value.
///
/// Produced by [`Document::bind`]; immutable from here on. Rendering
/// cannot fail once a `BoundDocument` exists.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundDocument {
    pub(crate) roots: Vec<Node>,
    warnings: Vec<MarkupWarning>,
}

impl BoundDocument {
    /// Non-fatal conditions collected while binding.
    pub fn warnings(&self) -> &[MarkupWarning] {
        &self.warnings
    }
}

impl Document {
    /// Bind positional arguments to the tree's consuming tags.
    ///
    /// Leftover arguments are a warning by default and the hard error
    /// [`MarkupError::UnusedArguments`] under
    /// [`Options::strict_unused_arguments`]; too few arguments are always
    /// [`MarkupError::MissingArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use adorn_markup::{Document, Options};
    ///
    /// let options = Options::default();
    /// let bound = Document::parse("`${}, `${}!", &options)
    ///     .unwrap()
    ///     .bind(&["one", "two"], &options)
    ///     .unwrap();
    /// assert!(bound.warnings().is_empty());
    /// ```
    pub fn bind(
        self,
        arguments: &[&str],
        options: &Options,
    ) -> Result<BoundDocument, MarkupError> {
        let mut roots = self.roots;
        let mut cursor = 0usize;
        bind_nodes(&mut roots, arguments, &mut cursor)?;

        let mut warnings = Vec::new();
        if cursor < arguments.len() {
            if options.strict_unused_arguments {
                return Err(MarkupError::UnusedArguments {
                    supplied: arguments.len(),
                    consumed: cursor,
                });
            }
            warnings.push(MarkupWarning::UnusedArguments {
                supplied: arguments.len(),
                consumed: cursor,
            });
        }

        Ok(BoundDocument { roots, warnings })
    }
}

fn bind_nodes(
    nodes: &mut [Node],
    arguments: &[&str],
    cursor: &mut usize,
) -> Result<(), MarkupError> {
    for node in nodes {
        let Node::Tag(tag) = node else { continue };

        tag.binding = if tag.consumes() {
            match arguments.get(*cursor) {
                Some(value) => {
                    *cursor += 1;
                    Binding::Argument((*value).to_string())
                }
                None => {
                    return Err(MarkupError::MissingArgument {
                        offset: tag.offset,
                        requested: *cursor + 1,
                        supplied: arguments.len(),
                    });
                }
            }
        } else if tag.is_phrase() {
            Binding::Phrase
        } else {
            Binding::Unbound
        };

        bind_nodes(&mut tag.children, arguments, cursor)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::TagNode;

    fn bind(input: &str, arguments: &[&str]) -> Result<BoundDocument, MarkupError> {
        let options = Options::default();
        Document::parse(input, &options)?.bind(arguments, &options)
    }

    fn tag_bindings(bound: &BoundDocument) -> Vec<Binding> {
        fn collect(nodes: &[Node], out: &mut Vec<Binding>) {
            for node in nodes {
                if let Node::Tag(TagNode {
                    binding, children, ..
                }) = node
                {
                    out.push(binding.clone());
                    collect(children, out);
                }
            }
        }
        let mut out = Vec::new();
        collect(&bound.roots, &mut out);
        out
    }

    #[test]
    fn positional_tags_bind_in_source_order() {
        let bound = bind("`${} and `${}", &["first", "second"]).unwrap();
        assert_eq!(
            tag_bindings(&bound),
            vec![
                Binding::Argument("first".into()),
                Binding::Argument("second".into()),
            ]
        );
    }

    #[test]
    fn cursor_is_shared_across_nesting_levels() {
        // Depth-first source order: outer, inner, then the sibling.
        let bound = bind("`${`${}}`${}", &["a", "b", "c"]).unwrap();
        assert_eq!(
            tag_bindings(&bound),
            vec![
                Binding::Argument("a".into()),
                Binding::Argument("b".into()),
                Binding::Argument("c".into()),
            ]
        );
    }

    #[test]
    fn named_only_tags_do_not_consume() {
        let bound = bind("`red{x}`${}", &["only"]).unwrap();
        assert_eq!(
            tag_bindings(&bound),
            vec![Binding::Unbound, Binding::Argument("only".into())]
        );
    }

    #[test]
    fn phrase_tags_never_touch_the_cursor() {
        let bound = bind("`red:+{alert}`${}", &["only"]).unwrap();
        assert_eq!(
            tag_bindings(&bound),
            vec![Binding::Phrase, Binding::Argument("only".into())]
        );
    }

    #[test]
    fn override_forces_consumption() {
        let bound = bind("`red:!{}", &["boom"]).unwrap();
        assert_eq!(tag_bindings(&bound), vec![Binding::Argument("boom".into())]);
    }

    #[test]
    fn positional_with_override_consumes_once() {
        let bound = bind("`$:!{}`${}", &["a", "b"]).unwrap();
        assert_eq!(
            tag_bindings(&bound),
            vec![Binding::Argument("a".into()), Binding::Argument("b".into())]
        );
    }

    #[test]
    fn missing_argument_reports_tag_offset_and_counts() {
        let err = bind("x `${}", &[]).unwrap_err();
        assert_eq!(
            err,
            MarkupError::MissingArgument {
                offset: 2,
                requested: 1,
                supplied: 0
            }
        );
    }

    #[test]
    fn missing_argument_mid_list() {
        let err = bind("`${}`${}`${}", &["a", "b"]).unwrap_err();
        assert_eq!(
            err,
            MarkupError::MissingArgument {
                offset: 8,
                requested: 3,
                supplied: 2
            }
        );
    }

    #[test]
    fn unused_arguments_warn_by_default() {
        let bound = bind("plain text", &["unused"]).unwrap();
        assert_eq!(
            bound.warnings(),
            &[MarkupWarning::UnusedArguments {
                supplied: 1,
                consumed: 0
            }]
        );
    }

    #[test]
    fn unused_arguments_error_in_strict_mode() {
        let options = Options::new().with_strict_unused_arguments(true);
        let err = Document::parse("plain text", &options)
            .unwrap()
            .bind(&["unused"], &options)
            .unwrap_err();
        assert_eq!(
            err,
            MarkupError::UnusedArguments {
                supplied: 1,
                consumed: 0
            }
        );
    }

    #[test]
    fn exact_argument_count_has_no_warnings() {
        let bound = bind("`${}", &["just right"]).unwrap();
        assert!(bound.warnings().is_empty());
    }
}
