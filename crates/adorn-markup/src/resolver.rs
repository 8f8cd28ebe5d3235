//! Attribute resolution.
//!
//! The renderer does not know what "red" means; it asks a [`StyleResolver`].
//! The resolver is a read-only collaborator injected per call; the pipeline
//! itself holds no style table.

use std::collections::HashMap;

use phf::phf_map;

use crate::style::{Color, Style};

/// Maps attribute names to styles.
///
/// Implementations must be read-only after construction; the pipeline may
/// share one resolver across concurrent calls.
///
/// Returning `None` means the name is unknown. Reporting unknown names is
/// the resolver's responsibility (the renderer has no failure path); the
/// built-in [`AnsiResolver`] logs a warning and renders the attribute as
/// no style at all.
pub trait StyleResolver: Sync {
    /// Resolve an attribute name to a style.
    fn resolve(&self, name: &str) -> Option<Style>;
}

/// Attribute names understood by [`AnsiResolver`].
///
/// Foreground colors use their bare name (`red`), backgrounds the `on_`
/// prefix (`on_red`), bright variants the `bright_` prefix. Modifiers have
/// single-letter shorthands except `blink`.
static STYLE_TABLE: phf::Map<&'static str, Style> = phf_map! {
    // Modifiers
    "bold" => Style::BOLD,
    "b" => Style::BOLD,
    "dim" => Style::DIM,
    "d" => Style::DIM,
    "italic" => Style::ITALIC,
    "i" => Style::ITALIC,
    "underline" => Style::UNDERLINE,
    "u" => Style::UNDERLINE,
    "blink" => Style::BLINK,
    "reverse" => Style::REVERSE,
    "r" => Style::REVERSE,
    "strike" => Style::STRIKE,
    "s" => Style::STRIKE,

    // Standard foreground colors
    "black" => Style::with_fg(Color::Ansi(0)),
    "red" => Style::with_fg(Color::Ansi(1)),
    "green" => Style::with_fg(Color::Ansi(2)),
    "yellow" => Style::with_fg(Color::Ansi(3)),
    "blue" => Style::with_fg(Color::Ansi(4)),
    "magenta" => Style::with_fg(Color::Ansi(5)),
    "cyan" => Style::with_fg(Color::Ansi(6)),
    "white" => Style::with_fg(Color::Ansi(7)),

    // Bright foreground colors
    "bright_black" => Style::with_fg(Color::Ansi(8)),
    "grey" => Style::with_fg(Color::Ansi(8)),
    "gray" => Style::with_fg(Color::Ansi(8)),
    "bright_red" => Style::with_fg(Color::Ansi(9)),
    "bright_green" => Style::with_fg(Color::Ansi(10)),
    "bright_yellow" => Style::with_fg(Color::Ansi(11)),
    "bright_blue" => Style::with_fg(Color::Ansi(12)),
    "bright_magenta" => Style::with_fg(Color::Ansi(13)),
    "bright_cyan" => Style::with_fg(Color::Ansi(14)),
    "bright_white" => Style::with_fg(Color::Ansi(15)),

    // Background colors
    "on_black" => Style::with_bg(Color::Ansi(0)),
    "on_red" => Style::with_bg(Color::Ansi(1)),
    "on_green" => Style::with_bg(Color::Ansi(2)),
    "on_yellow" => Style::with_bg(Color::Ansi(3)),
    "on_blue" => Style::with_bg(Color::Ansi(4)),
    "on_magenta" => Style::with_bg(Color::Ansi(5)),
    "on_cyan" => Style::with_bg(Color::Ansi(6)),
    "on_white" => Style::with_bg(Color::Ansi(7)),
    "on_bright_black" => Style::with_bg(Color::Ansi(8)),
    "on_bright_red" => Style::with_bg(Color::Ansi(9)),
    "on_bright_green" => Style::with_bg(Color::Ansi(10)),
    "on_bright_yellow" => Style::with_bg(Color::Ansi(11)),
    "on_bright_blue" => Style::with_bg(Color::Ansi(12)),
    "on_bright_magenta" => Style::with_bg(Color::Ansi(13)),
    "on_bright_cyan" => Style::with_bg(Color::Ansi(14)),
    "on_bright_white" => Style::with_bg(Color::Ansi(15)),
};

/// The built-in resolver: 16-color palette plus text modifiers.
///
/// # Examples
///
/// ```
/// use adorn_markup::{AnsiResolver, Color, Style, StyleResolver};
///
/// let resolver = AnsiResolver;
/// assert_eq!(resolver.resolve("red"), Some(Style::with_fg(Color::Ansi(1))));
/// assert_eq!(resolver.resolve("lavender"), None);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiResolver;

impl StyleResolver for AnsiResolver {
    fn resolve(&self, name: &str) -> Option<Style> {
        let style = STYLE_TABLE.get(name).copied();
        if style.is_none() {
            log::warn!("unknown style attribute: {name:?}");
        }
        style
    }
}

/// A resolver backed by a caller-supplied map.
///
/// Useful for custom palettes and for tests that need full control over
/// attribute resolution.
#[derive(Clone, Debug, Default)]
pub struct MapResolver {
    styles: HashMap<String, Style>,
}

impl MapResolver {
    /// Create an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a named style, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, style: Style) -> Self {
        self.insert(name, style);
        self
    }
}

impl From<HashMap<String, Style>> for MapResolver {
    fn from(styles: HashMap<String, Style>) -> Self {
        Self { styles }
    }
}

impl StyleResolver for MapResolver {
    fn resolve(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }
}
