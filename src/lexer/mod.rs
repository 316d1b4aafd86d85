//! PyWright script lexer
//!
//! Turns script text into `(byte length, style)` spans for a highlighting
//! editor. The work is split in three stages:
//!
//! - [`tokenizer`] cuts the text into raw tokens covering every byte
//! - [`classifier`] assigns styles to each token, splitting compound ones
//! - [`string_literal`] styles the `{...}` markers inside dialogue strings
//!
//! # Line position
//!
//! Some keywords (`fade`, `script`) are commands at the start of a line and
//! parameters elsewhere. A token is first on its line when the previous token
//! contained a line break, or was whitespace following a line start. The first
//! token of every lexed range counts as first on its line, so hosts should
//! restyle from a line start.
//!
//! # Example
//!
//! ```
//! use pywright_lexer::{ScriptLexer, Span, StyleId};
//!
//! let lexer = ScriptLexer::new();
//! let spans = lexer.style_text("bg x=5");
//! assert_eq!(
//!     spans,
//!     vec![
//!         Span::new(2, StyleId::Command),
//!         Span::new(1, StyleId::Default),
//!         Span::new(2, StyleId::Parameter),
//!         Span::new(1, StyleId::Number),
//!     ]
//! );
//! ```

pub mod classifier;
pub mod sink;
pub mod string_literal;
pub mod tokenizer;

pub use classifier::Classifier;
pub use sink::{CursorSink, StyleSink};
pub use tokenizer::{Token, Tokenizer};

use crate::error::{LexerError, Result};
use crate::style::{describe_style, Span};
use crate::symbols::{SharedSymbols, SymbolSnapshot, SymbolTable};
use std::sync::Arc;

/// Name reported to the host editor
pub const LANGUAGE_NAME: &str = "PyWright Script";

/// Syntax lexer holding the current symbol snapshot
#[derive(Debug)]
pub struct ScriptLexer {
    symbols: SharedSymbols,
    skip_empty_spans: bool,
}

impl Default for ScriptLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptLexer {
    /// Lexer with the PyWright vocabulary and no macros
    pub fn new() -> Self {
        Self::with_symbols(SymbolTable::default())
    }

    pub fn with_symbols(symbols: SymbolTable) -> Self {
        Self {
            symbols: SharedSymbols::new(symbols),
            skip_empty_spans: true,
        }
    }

    /// Forward zero-length spans instead of dropping them
    ///
    /// Only useful for hosts whose styling API tolerates empty runs.
    pub fn emit_empty_spans(mut self, emit: bool) -> Self {
        self.skip_empty_spans = !emit;
        self
    }

    pub fn language(&self) -> &'static str {
        LANGUAGE_NAME
    }

    /// Theme identifier for a style ordinal; empty for unknown ordinals
    pub fn description(&self, style: usize) -> &'static str {
        describe_style(style)
    }

    /// Current symbol snapshot
    pub fn snapshot(&self) -> Arc<SymbolSnapshot> {
        self.symbols.snapshot()
    }

    /// Shared symbol store, for hosts that update macros from another thread
    pub fn symbols(&self) -> &SharedSymbols {
        &self.symbols
    }

    /// Replace the builtin macro names
    pub fn set_builtin_macros<I, S>(&self, macros: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols
            .update(|table| table.clone().with_builtin_macros(macros));
        tracing::debug!(
            "Builtin macros updated: {}",
            self.snapshot().symbols.builtin_macro_count()
        );
    }

    /// Replace the per-game macro names
    pub fn set_game_macros<I, S>(&self, macros: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.update(|table| table.clone().with_game_macros(macros));
        tracing::debug!(
            "Game macros updated: {}",
            self.snapshot().symbols.game_macro_count()
        );
    }

    /// Completion candidates for a typed prefix
    pub fn suggestions(&self, prefix: &str) -> Vec<String> {
        self.snapshot()
            .completions
            .suggestions(prefix)
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Style a whole text, collecting the spans
    pub fn style_text(&self, text: &str) -> Vec<Span> {
        let mut spans = Vec::new();
        self.style_text_into(text, &mut spans);
        spans
    }

    /// Style a whole text, streaming spans into `sink`
    pub fn style_text_into<S: StyleSink + ?Sized>(&self, text: &str, sink: &mut S) {
        let snapshot = self.snapshot();
        let classifier =
            Classifier::new(&snapshot.symbols).skip_empty_spans(self.skip_empty_spans);

        let mut first_of_line = true;
        for token in Tokenizer::new(text) {
            classifier.classify(token.text, first_of_line, sink);
            first_of_line =
                token.contains_line_break() || (first_of_line && token.is_whitespace());
        }
    }

    /// Style the `start..end` byte range of `document`
    pub fn style_range(&self, document: &str, start: usize, end: usize) -> Result<Vec<Span>> {
        let mut spans = Vec::new();
        self.style_range_into(document, start, end, &mut spans)?;
        Ok(spans)
    }

    /// Style the `start..end` byte range of `document`, streaming spans into `sink`
    ///
    /// The range must lie inside the document and on character boundaries;
    /// anything else is a host bug and is reported without styling anything.
    pub fn style_range_into<S: StyleSink + ?Sized>(
        &self,
        document: &str,
        start: usize,
        end: usize,
        sink: &mut S,
    ) -> Result<()> {
        let text = checked_range(document, start, end)?;

        let mut cursor = CursorSink::new(sink, start);
        self.style_text_into(text, &mut cursor);
        tracing::trace!("Styled bytes {}..{}", start, cursor.cursor());
        Ok(())
    }
}

/// Validate a byte range and return the text it covers
pub fn checked_range(document: &str, start: usize, end: usize) -> Result<&str> {
    if start > end {
        return Err(LexerError::InvertedRange { start, end });
    }
    if end > document.len() {
        return Err(LexerError::RangeOutOfBounds {
            start,
            end,
            len: document.len(),
        });
    }
    for offset in [start, end] {
        if !document.is_char_boundary(offset) {
            return Err(LexerError::NotCharBoundary { offset });
        }
    }
    Ok(&document[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{covered_len, StyleId};

    fn styles(lexer: &ScriptLexer, text: &str) -> Vec<(usize, StyleId)> {
        lexer
            .style_text(text)
            .into_iter()
            .map(|s| (s.len, s.style))
            .collect()
    }

    #[test]
    fn test_collision_at_line_start() {
        let lexer = ScriptLexer::new();
        assert_eq!(
            styles(&lexer, "script\n"),
            vec![(6, StyleId::Command), (1, StyleId::Default)]
        );
        assert_eq!(
            styles(&lexer, "fade script\n"),
            vec![
                (4, StyleId::Command),
                (1, StyleId::Default),
                (6, StyleId::Parameter),
                (1, StyleId::Default),
            ]
        );
    }

    #[test]
    fn test_indentation_keeps_line_start() {
        let lexer = ScriptLexer::new();
        assert_eq!(
            styles(&lexer, "bg\n    fade"),
            vec![
                (2, StyleId::Command),
                (5, StyleId::Default),
                (4, StyleId::Command),
            ]
        );
        assert_eq!(styles(&lexer, "bg fade")[2], (4, StyleId::Parameter));
    }

    #[test]
    fn test_carriage_return_breaks_line() {
        let lexer = ScriptLexer::new();
        assert_eq!(styles(&lexer, "bg\rscript")[2], (6, StyleId::Command));
    }

    #[test]
    fn test_full_line() {
        let lexer = ScriptLexer::new();
        let spans = styles(&lexer, "char phoenix x=-10 fade nowait\n");
        assert_eq!(
            spans,
            vec![
                (4, StyleId::Command),
                (1, StyleId::Default),
                (7, StyleId::Default),
                (1, StyleId::Default),
                (2, StyleId::Parameter),
                (3, StyleId::Number),
                (1, StyleId::Default),
                (4, StyleId::Parameter),
                (1, StyleId::Default),
                (6, StyleId::Parameter),
                (1, StyleId::Default),
            ]
        );
    }

    #[test]
    fn test_macro_updates_take_effect() {
        let lexer = ScriptLexer::new();
        assert_eq!(styles(&lexer, "intro"), vec![(5, StyleId::Default)]);

        lexer.set_game_macros(["intro"]);
        assert_eq!(styles(&lexer, "intro"), vec![(5, StyleId::GameMacro)]);
        assert!(lexer.suggestions("intr").contains(&"intro".to_string()));

        lexer.set_builtin_macros(vec!["intro".to_string()]);
        assert_eq!(styles(&lexer, "intro"), vec![(5, StyleId::BuiltinMacro)]);

        lexer.set_game_macros(Vec::<String>::new());
        assert_eq!(lexer.snapshot().symbols.game_macro_count(), 0);
    }

    #[test]
    fn test_style_range() {
        let lexer = ScriptLexer::new();
        let doc = "bg court\nfg x=5\n";
        let spans = lexer.style_range(doc, 9, doc.len()).unwrap();
        assert_eq!(covered_len(&spans), doc.len() - 9);
        assert_eq!(spans[0], Span::new(2, StyleId::Command));
    }

    #[test]
    fn test_style_range_rejects_bad_offsets() {
        let lexer = ScriptLexer::new();
        let doc = "bg é";
        assert!(matches!(
            lexer.style_range(doc, 0, 99),
            Err(LexerError::RangeOutOfBounds { len: 5, .. })
        ));
        assert!(matches!(
            lexer.style_range(doc, 3, 1),
            Err(LexerError::InvertedRange { .. })
        ));
        assert!(matches!(
            lexer.style_range(doc, 0, 4),
            Err(LexerError::NotCharBoundary { offset: 4 })
        ));
        assert!(lexer.style_range(doc, 2, 2).unwrap().is_empty());
    }

    #[test]
    fn test_language_and_descriptions() {
        let lexer = ScriptLexer::new();
        assert_eq!(lexer.language(), "PyWright Script");
        assert_eq!(lexer.description(2), "special_variables_style");
        assert_eq!(lexer.description(42), "");
    }

    #[test]
    fn test_emit_empty_spans() {
        let lexer = ScriptLexer::new().emit_empty_spans(true);
        assert_eq!(
            styles(&lexer, "x="),
            vec![(2, StyleId::Parameter), (0, StyleId::Default)]
        );
        let lexer = ScriptLexer::new();
        assert_eq!(styles(&lexer, "x="), vec![(2, StyleId::Parameter)]);
    }
}
