//! Style types and SGR sequence generation.
//!
//! A [`Style`] combines colors and text modifiers into a single
//! specification. Styles are layered during rendering: a nested scope's
//! style is applied on top of its ancestor's, overriding colors of the same
//! category and OR-ing the modifier set.

/// Full attribute reset.
pub const RESET: &str = "\x1b[0m";

/// A terminal color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// Palette index 0-15 (8 standard + 8 bright).
    Ansi(u8),
    /// 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    fn fg_params(&self, params: &mut Vec<String>) {
        match *self {
            Color::Ansi(n) if n < 8 => params.push((30 + n).to_string()),
            Color::Ansi(n) => params.push((90 + (n - 8) % 8).to_string()),
            Color::Rgb(r, g, b) => params.push(format!("38;2;{r};{g};{b}")),
        }
    }

    fn bg_params(&self, params: &mut Vec<String>) {
        match *self {
            Color::Ansi(n) if n < 8 => params.push((40 + n).to_string()),
            Color::Ansi(n) => params.push((100 + (n - 8) % 8).to_string()),
            Color::Rgb(r, g, b) => params.push(format!("48;2;{r};{g};{b}")),
        }
    }
}

/// Text styling attributes (modifiers).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextStyle {
    /// Bold/increased intensity.
    pub bold: bool,
    /// Dim/decreased intensity.
    pub dim: bool,
    /// Italic text.
    pub italic: bool,
    /// Underlined text.
    pub underline: bool,
    /// Blinking text.
    pub blink: bool,
    /// Reverse video (swap fg/bg).
    pub reverse: bool,
    /// Strikethrough text.
    pub strike: bool,
}

impl TextStyle {
    /// No modifiers set.
    pub const NONE: TextStyle = TextStyle {
        bold: false,
        dim: false,
        italic: false,
        underline: false,
        blink: false,
        reverse: false,
        strike: false,
    };

    /// Returns true if no modifiers are set.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Merge another TextStyle on top of this one (OR'd together).
    pub fn apply(&self, other: &TextStyle) -> TextStyle {
        TextStyle {
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            blink: self.blink || other.blink,
            reverse: self.reverse || other.reverse,
            strike: self.strike || other.strike,
        }
    }
}

/// Complete style specification including colors and modifiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Text style modifiers.
    pub text: TextStyle,
}

impl Style {
    /// The empty style.
    pub const EMPTY: Style = Style {
        fg: None,
        bg: None,
        text: TextStyle::NONE,
    };

    /// Bold only.
    pub const BOLD: Style = Style::with_modifier(TextStyle {
        bold: true,
        ..TextStyle::NONE
    });
    /// Dim only.
    pub const DIM: Style = Style::with_modifier(TextStyle {
        dim: true,
        ..TextStyle::NONE
    });
    /// Italic only.
    pub const ITALIC: Style = Style::with_modifier(TextStyle {
        italic: true,
        ..TextStyle::NONE
    });
    /// Underline only.
    pub const UNDERLINE: Style = Style::with_modifier(TextStyle {
        underline: true,
        ..TextStyle::NONE
    });
    /// Blink only.
    pub const BLINK: Style = Style::with_modifier(TextStyle {
        blink: true,
        ..TextStyle::NONE
    });
    /// Reverse video only.
    pub const REVERSE: Style = Style::with_modifier(TextStyle {
        reverse: true,
        ..TextStyle::NONE
    });
    /// Strikethrough only.
    pub const STRIKE: Style = Style::with_modifier(TextStyle {
        strike: true,
        ..TextStyle::NONE
    });

    /// Create a new empty style.
    pub fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a style with the specified foreground color.
    pub const fn with_fg(fg: Color) -> Self {
        Style {
            fg: Some(fg),
            bg: None,
            text: TextStyle::NONE,
        }
    }

    /// Creates a style with the specified background color.
    pub const fn with_bg(bg: Color) -> Self {
        Style {
            fg: None,
            bg: Some(bg),
            text: TextStyle::NONE,
        }
    }

    /// Creates a style with the specified modifiers.
    pub const fn with_modifier(text: TextStyle) -> Self {
        Style {
            fg: None,
            bg: None,
            text,
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.text.is_empty()
    }

    /// Apply another style on top of this one.
    ///
    /// Colors in `other` override colors in `self` of the same category;
    /// categories `other` leaves unset are inherited. Modifiers are OR'd.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            text: self.text.apply(&other.text),
        }
    }

    /// SGR parameters for this style: modifiers, then foreground, then
    /// background.
    pub fn sgr_params(&self) -> Vec<String> {
        let mut params = Vec::new();
        if self.text.bold {
            params.push("1".to_string());
        }
        if self.text.dim {
            params.push("2".to_string());
        }
        if self.text.italic {
            params.push("3".to_string());
        }
        if self.text.underline {
            params.push("4".to_string());
        }
        if self.text.blink {
            params.push("5".to_string());
        }
        if self.text.reverse {
            params.push("7".to_string());
        }
        if self.text.strike {
            params.push("9".to_string());
        }
        if let Some(fg) = &self.fg {
            fg.fg_params(&mut params);
        }
        if let Some(bg) = &self.bg {
            bg.bg_params(&mut params);
        }
        params
    }

    /// The complete SGR escape sequence for this style, or an empty string
    /// for the empty style.
    ///
    /// # Examples
    ///
    /// ```
    /// use adorn_markup::{Color, Style};
    ///
    /// let style = Style::BOLD.apply(&Style::with_fg(Color::Ansi(1)));
    /// assert_eq!(style.sgr(), "\x1b[1;31m");
    /// assert_eq!(Style::EMPTY.sgr(), "");
    /// ```
    pub fn sgr(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        format!("\x1b[{}m", self.sgr_params().join(";"))
    }
}
