//! Error and warning types for markup parsing and rendering.

use std::fmt;

use thiserror::Error;

/// Errors that can occur while parsing or binding markup.
///
/// Every syntax error carries the byte offset of the offending construct in
/// the original input. Use [`Location::of`] to turn an offset into a
/// 1-indexed `line:column` pair for diagnostics.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// A tag-open marker was not followed by a well-formed attribute list
    /// and body-open brace.
    #[error("malformed tag at offset {offset}")]
    MalformedTag { offset: usize },

    /// A body-close brace with no matching open tag.
    #[error("unmatched closing brace at offset {offset}")]
    UnmatchedClose { offset: usize },

    /// Input ended while a tag was still open.
    #[error("unclosed tag opened at offset {offset}")]
    UnclosedTag { offset: usize },

    /// Duplicate or contradictory attribute within a single tag.
    #[error("conflicting attribute {attr:?} in tag at offset {offset}")]
    AttributeConflict { offset: usize, attr: String },

    /// A consuming tag had no positional argument left to bind.
    #[error("tag at offset {offset} requested argument {requested} but only {supplied} supplied")]
    MissingArgument {
        offset: usize,
        requested: usize,
        supplied: usize,
    },

    /// Arguments were left over after binding. Only raised under
    /// [`Options::strict_unused_arguments`](crate::Options); the default is
    /// the non-fatal [`MarkupWarning::UnusedArguments`].
    #[error("{supplied} arguments supplied but only {consumed} consumed")]
    UnusedArguments { supplied: usize, consumed: usize },
}

impl MarkupError {
    /// Byte offset of the offending syntax, where the error has one.
    pub fn offset(&self) -> Option<usize> {
        match self {
            MarkupError::MalformedTag { offset }
            | MarkupError::UnmatchedClose { offset }
            | MarkupError::UnclosedTag { offset }
            | MarkupError::AttributeConflict { offset, .. }
            | MarkupError::MissingArgument { offset, .. } => Some(*offset),
            MarkupError::UnusedArguments { .. } => None,
        }
    }
}

/// Non-fatal conditions reported alongside a successful bind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkupWarning {
    /// More positional arguments were supplied than the markup consumed.
    UnusedArguments { supplied: usize, consumed: usize },
}

impl fmt::Display for MarkupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarkupWarning::UnusedArguments { supplied, consumed } => {
                write!(f, "{supplied} arguments supplied but only {consumed} consumed")
            }
        }
    }
}

/// A 1-indexed line and column position within an input string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Resolve a byte offset to its line and column.
    ///
    /// Columns count characters, not bytes. Offsets past the end of the
    /// input resolve to the position just after the last character.
    ///
    /// # Examples
    ///
    /// ```
    /// use adorn_markup::Location;
    ///
    /// let loc = Location::of("ab\ncd", 4);
    /// assert_eq!(loc, Location { line: 2, column: 2 });
    /// assert_eq!(loc.to_string(), "2:2");
    /// ```
    pub fn of(input: &str, offset: usize) -> Location {
        let offset = offset.min(input.len());
        let before = &input[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        Location { line, column }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_offsets() {
        assert_eq!(MarkupError::MalformedTag { offset: 3 }.offset(), Some(3));
        assert_eq!(
            MarkupError::UnusedArguments {
                supplied: 2,
                consumed: 1
            }
            .offset(),
            None
        );
    }

    #[test]
    fn error_messages() {
        let err = MarkupError::MissingArgument {
            offset: 7,
            requested: 2,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "tag at offset 7 requested argument 2 but only 1 supplied"
        );
    }

    #[test]
    fn location_single_line() {
        assert_eq!(Location::of("hello", 0), Location { line: 1, column: 1 });
        assert_eq!(Location::of("hello", 4), Location { line: 1, column: 5 });
    }

    #[test]
    fn location_multi_line() {
        let input = "one\ntwo\nthree";
        assert_eq!(Location::of(input, 0), Location { line: 1, column: 1 });
        assert_eq!(Location::of(input, 4), Location { line: 2, column: 1 });
        assert_eq!(Location::of(input, 6), Location { line: 2, column: 3 });
        assert_eq!(Location::of(input, 8), Location { line: 3, column: 1 });
    }

    #[test]
    fn location_counts_chars_not_bytes() {
        // 'é' is two bytes but one column
        let input = "é`x";
        assert_eq!(Location::of(input, 2), Location { line: 1, column: 2 });
    }

    #[test]
    fn location_clamps_past_end() {
        assert_eq!(Location::of("ab", 99), Location { line: 1, column: 3 });
    }

    #[test]
    fn warning_display() {
        let warning = MarkupWarning::UnusedArguments {
            supplied: 3,
            consumed: 1,
        };
        assert_eq!(
            warning.to_string(),
            "3 arguments supplied but only 1 consumed"
        );
    }
}
