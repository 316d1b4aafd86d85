//! Autocompletion word table
//!
//! The editor popup itself lives in the host. This module only keeps the
//! sorted candidate list that the popup filters, and is rebuilt together with
//! the symbol table whenever the macro sets change.

use crate::symbols::SymbolTable;

/// Sorted, deduplicated completion candidates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionIndex {
    words: Vec<String>,
}

impl CompletionIndex {
    /// Build the index from every vocabulary list in a symbol table
    pub fn build(symbols: &SymbolTable) -> Self {
        Self::from_words(symbols.vocabulary())
    }

    /// Build an index from arbitrary words
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        words.sort();
        words.dedup();
        Self { words }
    }

    /// Candidates whose name starts with `prefix`, ignoring case
    pub fn suggestions(&self, prefix: &str) -> Vec<&str> {
        let prefix_lower = prefix.to_lowercase();

        self.words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&prefix_lower))
            .map(String::as_str)
            .collect()
    }

    /// Exact membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.binary_search_by(|w| w.as_str().cmp(word)).is_ok()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All candidates in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Extract the word being typed before a byte cursor
///
/// A word is the run of non-whitespace characters ending at the cursor, which
/// matches how the tokenizer splits script text. Cursors past the end or inside
/// a multi-byte character are clamped back to the nearest valid boundary.
pub fn word_before_cursor(text: &str, cursor: usize) -> &str {
    let mut end = cursor.min(text.len());
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let head = &text[..end];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);

    &head[start..]
}
