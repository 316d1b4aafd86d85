//! Style identifiers and styled spans
//!
//! The host renderer maps style ids to colors by ordinal, so the discriminants
//! of [`StyleId`] are part of the public contract and must never be reordered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of style ids the lexer emits
pub const STYLE_COUNT: usize = 10;

/// Semantic category assigned to a run of script bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[repr(u8)]
pub enum StyleId {
    /// Plain text that matched nothing else
    #[default]
    Default = 0,
    /// Command keyword (`bg`, `fg`, `goto`, ...)
    Command = 1,
    /// Engine variable, logic operator, `$` reference or conditional `?`
    SpecialVariableOrOperator = 2,
    /// Bare parameter, named parameter prefix or macro call braces
    Parameter = 3,
    /// `//` or `#` line comment
    Comment = 4,
    /// Double-quoted string text
    String = 5,
    /// Integer or float literal
    Number = 6,
    /// Macro shipped with the engine
    BuiltinMacro = 7,
    /// Macro defined by the current game
    GameMacro = 8,
    /// `{...}` marker inside a string
    StringToken = 9,
}

impl StyleId {
    /// All style ids in ordinal order
    pub const ALL: [StyleId; STYLE_COUNT] = [
        StyleId::Default,
        StyleId::Command,
        StyleId::SpecialVariableOrOperator,
        StyleId::Parameter,
        StyleId::Comment,
        StyleId::String,
        StyleId::Number,
        StyleId::BuiltinMacro,
        StyleId::GameMacro,
        StyleId::StringToken,
    ];

    /// Ordinal the host uses to index its color table
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a style by ordinal
    pub fn from_index(index: usize) -> Option<StyleId> {
        Self::ALL.get(index).copied()
    }

    /// Identifier string used by theming tools
    pub fn description(self) -> &'static str {
        match self {
            StyleId::Default => "default_style",
            StyleId::Command => "commands_style",
            StyleId::SpecialVariableOrOperator => "special_variables_style",
            StyleId::Parameter => "parameters_style",
            StyleId::Comment => "line_comments_style",
            StyleId::String => "double_quoted_strings_style",
            StyleId::Number => "numbers_style",
            StyleId::BuiltinMacro => "builtin_macros_style",
            StyleId::GameMacro => "game_macros_style",
            StyleId::StringToken => "stringtokens",
        }
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Describe a style by raw ordinal, returning an empty string for unknown ids
pub fn describe_style(index: usize) -> &'static str {
    StyleId::from_index(index).map_or("", StyleId::description)
}

/// A run of `len` consecutive bytes painted with one style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Length in UTF-8 bytes
    pub len: usize,
    /// Style applied to the whole run
    pub style: StyleId,
}

impl Span {
    pub fn new(len: usize, style: StyleId) -> Self {
        Self { len, style }
    }
}

/// Total number of bytes covered by a span sequence
pub fn covered_len(spans: &[Span]) -> usize {
    spans.iter().map(|s| s.len).sum()
}
