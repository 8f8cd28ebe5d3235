//! Rendering options.

/// Configuration for a single render call.
///
/// The tag delimiters themselves (backtick, braces) are fixed; the escape
/// character and the separator between attributes are configurable. The
/// escape character must not collide with a tag delimiter or the attribute
/// separator.
///
/// # Examples
///
/// ```
/// use adorn_markup::Options;
///
/// let options = Options::new()
///     .with_escape_char('%')
///     .with_strict_unused_arguments(true);
/// assert_eq!(options.escape_char, '%');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Options {
    /// Character that suppresses the syntactic meaning of the marker that
    /// follows it. Defaults to `\`.
    pub escape_char: char,
    /// Treat leftover positional arguments as a hard error instead of a
    /// warning. Defaults to `false`.
    pub strict_unused_arguments: bool,
    /// Separator between attributes in a tag's attribute list. Defaults
    /// to `:`.
    pub attribute_separator: char,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_char: '\\',
            strict_unused_arguments: false,
            attribute_separator: ':',
        }
    }
}

impl Options {
    /// Create options with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the escape character.
    pub fn with_escape_char(mut self, escape_char: char) -> Self {
        self.escape_char = escape_char;
        self
    }

    /// Turn leftover-argument warnings into hard errors.
    pub fn with_strict_unused_arguments(mut self, strict: bool) -> Self {
        self.strict_unused_arguments = strict;
        self
    }

    /// Set the attribute separator.
    pub fn with_attribute_separator(mut self, separator: char) -> Self {
        self.attribute_separator = separator;
        self
    }
}
