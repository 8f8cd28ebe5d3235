//! Attribute list parsing.
//!
//! The scanner hands over a tag's raw attribute list; this module splits it
//! into [`AttrSpec`]s and rejects conflicting combinations.

use crate::error::MarkupError;

/// One directive inside a tag's attribute list.
///
/// Order within the list matters: later attributes of the same style
/// category override earlier ones when the tag's style is composed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrSpec {
    /// A named style attribute, resolved through the
    /// [`StyleResolver`](crate::StyleResolver) at render time.
    Named(String),
    /// `$` - bind the next positional argument as the tag's content.
    Positional,
    /// `+` - the tag's content is its own written body; never consumes an
    /// argument.
    Phrase,
    /// `!` - force argument consumption for a tag that would otherwise be
    /// purely stylistic.
    Override,
}

impl AttrSpec {
    /// True for the three marker attributes.
    pub fn is_marker(&self) -> bool {
        !matches!(self, AttrSpec::Named(_))
    }
}

fn classify(piece: &str, offset: usize) -> Result<AttrSpec, MarkupError> {
    match piece {
        "$" => Ok(AttrSpec::Positional),
        "+" => Ok(AttrSpec::Phrase),
        "!" => Ok(AttrSpec::Override),
        name => {
            let valid = name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
            if valid {
                Ok(AttrSpec::Named(name.to_string()))
            } else {
                Err(MarkupError::MalformedTag { offset })
            }
        }
    }
}

/// Parse a raw attribute list into specs.
///
/// `offset` is the source position of the owning tag, used in errors.
/// Attributes are unique as a set: a repeated marker or a repeated name is
/// an [`AttributeConflict`](MarkupError::AttributeConflict), as is the
/// contradictory combination of the phrase marker with a consuming marker.
pub fn parse_attr_list(
    raw: &str,
    separator: char,
    offset: usize,
) -> Result<Vec<AttrSpec>, MarkupError> {
    let mut specs: Vec<AttrSpec> = Vec::new();

    for piece in raw.split(separator) {
        let piece = piece.trim();
        if piece.is_empty() {
            return Err(MarkupError::MalformedTag { offset });
        }

        let spec = classify(piece, offset)?;
        if specs.contains(&spec) {
            return Err(MarkupError::AttributeConflict {
                offset,
                attr: piece.to_string(),
            });
        }
        specs.push(spec);
    }

    let has_phrase = specs.contains(&AttrSpec::Phrase);
    let consumes = specs
        .iter()
        .any(|s| matches!(s, AttrSpec::Positional | AttrSpec::Override));
    if has_phrase && consumes {
        return Err(MarkupError::AttributeConflict {
            offset,
            attr: "+".to_string(),
        });
    }

    Ok(specs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Result<Vec<AttrSpec>, MarkupError> {
        parse_attr_list(raw, ':', 0)
    }

    #[test]
    fn single_named() {
        assert_eq!(parse("red").unwrap(), vec![AttrSpec::Named("red".into())]);
    }

    #[test]
    fn markers() {
        assert_eq!(parse("$").unwrap(), vec![AttrSpec::Positional]);
        assert_eq!(parse("+").unwrap(), vec![AttrSpec::Phrase]);
        assert_eq!(parse("!").unwrap(), vec![AttrSpec::Override]);
    }

    #[test]
    fn mixed_list_preserves_order() {
        assert_eq!(
            parse("red:bold:$").unwrap(),
            vec![
                AttrSpec::Named("red".into()),
                AttrSpec::Named("bold".into()),
                AttrSpec::Positional,
            ]
        );
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(
            parse(" red : bold ").unwrap(),
            vec![AttrSpec::Named("red".into()), AttrSpec::Named("bold".into())]
        );
    }

    #[test]
    fn custom_separator() {
        assert_eq!(
            parse_attr_list("red,bold", ',', 0).unwrap(),
            vec![AttrSpec::Named("red".into()), AttrSpec::Named("bold".into())]
        );
    }

    #[test]
    fn names_allow_underscore_and_hyphen() {
        assert!(parse("bright_red").is_ok());
        assert!(parse("my-style").is_ok());
    }

    #[test]
    fn invalid_name_chars() {
        assert_eq!(
            parse("bo ld").unwrap_err(),
            MarkupError::MalformedTag { offset: 0 }
        );
        assert!(parse("a.b").is_err());
    }

    #[test]
    fn empty_piece_is_malformed() {
        assert_eq!(
            parse("red::bold").unwrap_err(),
            MarkupError::MalformedTag { offset: 0 }
        );
        assert!(parse("red:").is_err());
    }

    #[test]
    fn duplicate_marker_conflicts() {
        assert_eq!(
            parse("+:+").unwrap_err(),
            MarkupError::AttributeConflict {
                offset: 0,
                attr: "+".into()
            }
        );
        assert!(parse("$:$").is_err());
        assert!(parse("!:!").is_err());
    }

    #[test]
    fn duplicate_name_conflicts() {
        assert_eq!(
            parse("red:red").unwrap_err(),
            MarkupError::AttributeConflict {
                offset: 0,
                attr: "red".into()
            }
        );
    }

    #[test]
    fn phrase_with_consuming_marker_conflicts() {
        assert_eq!(
            parse("+:$").unwrap_err(),
            MarkupError::AttributeConflict {
                offset: 0,
                attr: "+".into()
            }
        );
        assert!(parse("!:+").is_err());
    }

    #[test]
    fn positional_with_override_is_allowed() {
        // Redundant but not contradictory: one argument is consumed.
        assert!(parse("$:!").is_ok());
    }

    #[test]
    fn conflict_carries_tag_offset() {
        let err = parse_attr_list("red:red", ':', 42).unwrap_err();
        assert_eq!(err.offset(), Some(42));
    }
}
