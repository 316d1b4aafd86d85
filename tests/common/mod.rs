//! Common test utilities and helpers

#![allow(dead_code)] // Test utilities may not all be used in every test file

pub mod builders;
pub mod sink_helpers;

use pywright_lexer::{ScriptLexer, Span, StyleId};

/// Lex `text` and return `(text, style)` pairs for readable assertions
pub fn styled<'a>(lexer: &ScriptLexer, text: &'a str) -> Vec<(&'a str, StyleId)> {
    let mut offset = 0;
    lexer
        .style_text(text)
        .into_iter()
        .map(|span| {
            let piece = &text[offset..offset + span.len];
            offset += span.len;
            (piece, span.style)
        })
        .collect()
}

/// Same as [`styled`] but drops whitespace-only spans
pub fn styled_words<'a>(lexer: &ScriptLexer, text: &'a str) -> Vec<(&'a str, StyleId)> {
    styled(lexer, text)
        .into_iter()
        .filter(|(piece, _)| !piece.trim().is_empty())
        .collect()
}

/// Assert that spans cover exactly `len` bytes
pub fn assert_covers(spans: &[Span], len: usize) {
    let total: usize = spans.iter().map(|s| s.len).sum();
    assert_eq!(
        total, len,
        "Spans cover {} bytes but the input has {} bytes",
        total, len
    );
}
