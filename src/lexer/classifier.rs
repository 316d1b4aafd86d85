//! Token classification
//!
//! Maps one raw token (plus whether it opens its line) to styled spans. Some
//! tokens are split and their parts classified recursively: `flag?`, `x=5`
//! and macro calls such as `{sound blip.ogg}`.
//!
//! The order of the checks in [`Classifier::classify`] is the language's
//! disambiguation policy, so it must not be rearranged.

use super::sink::StyleSink;
use super::string_literal::style_string;
use crate::style::{Span, StyleId};
use crate::symbols::SymbolTable;

/// Classifies tokens against one symbol table snapshot
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    symbols: &'a SymbolTable,
    skip_empty_spans: bool,
}

impl<'a> Classifier<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self {
            symbols,
            skip_empty_spans: true,
        }
    }

    /// Whether zero-length spans produced by splitting are dropped (default) or forwarded
    pub fn skip_empty_spans(mut self, skip: bool) -> Self {
        self.skip_empty_spans = skip;
        self
    }

    fn emit<S: StyleSink + ?Sized>(&self, sink: &mut S, len: usize, style: StyleId) {
        if len == 0 && self.skip_empty_spans {
            return;
        }
        sink.set_styling(len, style);
    }

    /// Emit the spans for `token`
    pub fn classify<S: StyleSink + ?Sized>(&self, token: &str, first_of_line: bool, sink: &mut S) {
        let symbols = self.symbols;
        let len = token.len();

        if self.split_conditional(token, first_of_line, sink) {
            return;
        }

        if symbols.is_command(token) {
            // `fade` and `script` are also parameters: commands only at line start
            let style = if symbols.is_parameter(token) && !first_of_line {
                StyleId::Parameter
            } else {
                StyleId::Command
            };
            self.emit(sink, len, style);
        } else if symbols.is_logic_operator(token)
            || symbols.is_special_variable(token)
            || symbols.is_case_variable(token)
            || self.is_dollar_reference(token)
        {
            self.emit(sink, len, StyleId::SpecialVariableOrOperator);
        } else if symbols.named_parameter_prefix(token).is_some() {
            self.split_named_parameter(token, sink);
        } else if symbols.is_parameter(token) {
            self.emit(sink, len, StyleId::Parameter);
        } else if token.starts_with('{') && token.contains('}') && token.contains(' ') {
            self.split_macro_call(token, sink);
        } else if token == "}" || (token.starts_with('{') && token.ends_with('}')) {
            self.emit(sink, len, StyleId::Parameter);
        } else if is_comment(token) {
            self.emit(sink, len, StyleId::Comment);
        } else if token.starts_with('"') && token.ends_with('"') {
            style_string(token, sink);
        } else if is_number(token) {
            self.emit(sink, len, StyleId::Number);
        } else if symbols.is_builtin_macro(token) {
            self.emit(sink, len, StyleId::BuiltinMacro);
        } else if symbols.is_game_macro(token) {
            self.emit(sink, len, StyleId::GameMacro);
        } else {
            self.emit(sink, len, StyleId::Default);
        }
    }

    /// Convenience wrapper collecting the spans of one token
    pub fn classify_to_vec(&self, token: &str, first_of_line: bool) -> Vec<Span> {
        let mut spans = Vec::new();
        self.classify(token, first_of_line, &mut spans);
        spans
    }

    /// `flag?` styles `flag` normally and the `?` as an operator
    ///
    /// Only a single trailing `?` is split; `flag??` is classified whole.
    fn split_conditional<S: StyleSink + ?Sized>(
        &self,
        token: &str,
        first_of_line: bool,
        sink: &mut S,
    ) -> bool {
        if !token.ends_with('?') || token.len() <= 1 || is_comment(token) {
            return false;
        }

        let trailing = token.len() - token.trim_end_matches('?').len();
        if trailing != 1 {
            return false;
        }

        self.classify(&token[..token.len() - 1], first_of_line, sink);
        self.emit(sink, 1, StyleId::SpecialVariableOrOperator);
        true
    }

    /// `$name` where name is an engine variable, a parameter or a macro argument index
    fn is_dollar_reference(&self, token: &str) -> bool {
        let Some(name) = token.strip_prefix('$') else {
            return false;
        };

        self.symbols.is_special_variable(name)
            || self.symbols.is_parameter(name)
            || (!name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()))
    }

    /// `key=value`: the `key=` part is a parameter, the value is classified on its own
    ///
    /// Chained prefixes (`x=y=5`) are peeled off in a loop. A value that still
    /// starts with a prefix contains `=`, so no command, variable or operator
    /// rule can match it, and it shares the token's end, so the `?` split has
    /// already been decided by the caller.
    fn split_named_parameter<S: StyleSink + ?Sized>(&self, token: &str, sink: &mut S) {
        let mut value = token;
        loop {
            let Some(eq) = value.find('=') else {
                self.emit(sink, value.len(), StyleId::Parameter);
                return;
            };
            self.emit(sink, eq + 1, StyleId::Parameter);
            value = &value[eq + 1..];

            if self.symbols.named_parameter_prefix(value).is_none() {
                break;
            }
        }

        self.classify(value, false, sink);
    }

    /// `{name arg ...}` macro call written inline
    fn split_macro_call<S: StyleSink + ?Sized>(&self, token: &str, sink: &mut S) {
        // Several calls glued together by the tokenizer: `{a 1}{b 2}` or `{a 1} {b 2}`
        let segments: Vec<&str> = token.split_inclusive('}').collect();
        if segments.len() > 1 {
            for segment in segments {
                let body = segment.trim_start();
                self.emit(sink, segment.len() - body.len(), StyleId::Default);
                if !body.is_empty() {
                    self.classify(body, false, sink);
                }
            }
            return;
        }

        // A single call: the only `}` is the last byte
        let pieces: Vec<&str> = token.split(' ').collect();
        let Some((name, args)) = pieces.split_first() else {
            return;
        };
        self.emit(sink, name.len() + 1, StyleId::Parameter);

        let Some((last, middle)) = args.split_last() else {
            return;
        };

        for piece in middle {
            // The separating space takes the style of the piece's last span
            let mut spans = self.classify_to_vec(piece, false);
            match spans.last_mut() {
                Some(span) => span.len += 1,
                None => spans.push(Span::new(1, StyleId::Default)),
            }
            for span in spans {
                sink.set_styling(span.len, span.style);
            }
        }

        let value = last.strip_suffix('}').unwrap_or(*last);
        self.classify(value, false, sink);
        if value.len() < last.len() {
            self.emit(sink, 1, StyleId::Parameter);
        }
    }
}

fn is_comment(token: &str) -> bool {
    token.starts_with("//") || token.starts_with('#')
}

/// Integer or float literal, optionally preceded by `-` signs
///
/// Underscores are accepted between digits (`1_000`).
pub fn is_number(token: &str) -> bool {
    let token = token.trim_start_matches('-');
    if (!token.is_empty() && token.chars().all(char::is_numeric)) || token.parse::<f64>().is_ok() {
        return true;
    }

    token.contains('_')
        && strip_digit_separators(token).is_some_and(|digits| digits.parse::<f64>().is_ok())
}

/// `token` without its `_` separators, or `None` if one is not between two digits
fn strip_digit_separators(token: &str) -> Option<String> {
    let bytes = token.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).map(|j| bytes[j]);
        let after = bytes.get(i + 1).copied();
        if !before.is_some_and(|c| c.is_ascii_digit()) || !after.is_some_and(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    Some(token.replace('_', ""))
}
