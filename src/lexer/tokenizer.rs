//! Raw token splitting
//!
//! Splits script text into tokens that cover every byte. At each position the
//! first matching class wins:
//!
//! 1. `//` or `#` comment up to the end of the line
//! 2. `{` up to the last `}` on the line (or the end of the line)
//! 3. `"` up to the last `"` on the line (or the end of the line)
//! 4. a run of non-whitespace characters
//! 5. a run of whitespace characters, line breaks included
//!
//! Whitespace is a token like any other, since the styling cursor has to
//! advance over it.

/// A slice of the source produced by [`Tokenizer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token text
    pub text: &'a str,
    /// Byte offset of the token within the tokenized text
    pub offset: usize,
}

impl<'a> Token<'a> {
    /// Length in UTF-8 bytes
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token is made only of whitespace
    pub fn is_whitespace(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }

    /// Whether the token contains a `\n` or `\r`
    pub fn contains_line_break(&self) -> bool {
        self.text.contains(is_line_break)
    }
}

fn is_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Iterator over the tokens of a script
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Length of the token starting at the beginning of `rest`
    fn token_len(rest: &str) -> usize {
        let line_end = rest.find(is_line_break).unwrap_or(rest.len());

        if rest.starts_with("//") || rest.starts_with('#') {
            return line_end;
        }

        if rest.starts_with('{') {
            return Self::delimited_len(rest, line_end, '}');
        }

        if rest.starts_with('"') {
            return Self::delimited_len(rest, line_end, '"');
        }

        let first_is_space = rest.starts_with(char::is_whitespace);
        rest.char_indices()
            .find(|(_, c)| c.is_whitespace() != first_is_space)
            .map(|(i, _)| i)
            .unwrap_or(rest.len())
    }

    /// Opening delimiter through the last `close` on the line, or the whole line
    fn delimited_len(rest: &str, line_end: usize, close: char) -> usize {
        rest[1..line_end]
            .rfind(close)
            .map(|i| i + 1 + close.len_utf8())
            .unwrap_or(line_end)
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let rest = &self.source[self.pos..];
        if rest.is_empty() {
            return None;
        }

        let len = Self::token_len(rest);
        let token = Token {
            text: &rest[..len],
            offset: self.pos,
        };
        self.pos += len;
        Some(token)
    }
}

/// Convenience wrapper returning all token texts
pub fn tokenize(source: &str) -> Vec<&str> {
    Tokenizer::new(source).map(|t| t.text).collect()
}
