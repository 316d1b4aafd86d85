//! Styling for the inside of double-quoted strings
//!
//! Dialogue strings embed text markers such as `{n}`, `{c5}` or `{delay 10}`.
//! Each `{...}` pair gets [`StyleId::StringToken`]; everything else, unpaired
//! braces included, stays [`StyleId::String`].

use super::sink::StyleSink;
use crate::style::StyleId;

fn is_brace(c: char) -> bool {
    c == '{' || c == '}'
}

/// Emit spans for a string token (expected to start and end with `"`)
///
/// Never emits a zero-length span: every piece starts at the opening quote or
/// at the brace found on the previous step, so it is at least one byte long.
pub fn style_string<S: StyleSink + ?Sized>(text: &str, sink: &mut S) {
    let mut rest = text;

    while let Some(first) = rest.chars().next() {
        // Skip the first character: it is the opening quote or the brace that
        // ended the previous piece.
        let skip = first.len_utf8();
        let Some(found) = rest[skip..].find(is_brace).map(|i| i + skip) else {
            sink.set_styling(rest.len(), StyleId::String);
            return;
        };

        let (piece, tail) = rest.split_at(found);
        if piece.starts_with('{') && tail.starts_with('}') {
            sink.set_styling(piece.len() + 1, StyleId::StringToken);
            rest = &tail[1..];
        } else {
            sink.set_styling(piece.len(), StyleId::String);
            rest = tail;
        }
    }
}
