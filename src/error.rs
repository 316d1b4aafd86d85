//! Error handling for the PyWright lexer
//!
//! Lexing itself never fails: malformed scripts degrade to "token runs to the
//! end of the line". The errors here cover host integration mistakes (bad byte
//! ranges) and configuration I/O.

use thiserror::Error;

/// Main error type for lexer operations
#[derive(Error, Debug)]
pub enum LexerError {
    /// A requested byte range reaches past the end of the document
    #[error("Byte range {start}..{end} is out of bounds for a document of {len} bytes")]
    RangeOutOfBounds { start: usize, end: usize, len: usize },

    /// A requested byte range ends before it starts
    #[error("Byte range {start}..{end} is inverted")]
    InvertedRange { start: usize, end: usize },

    /// A requested byte offset splits a multi-byte UTF-8 character
    #[error("Byte offset {offset} is not on a UTF-8 character boundary")]
    NotCharBoundary { offset: usize },

    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<LexerError>,
    },
}

impl LexerError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        LexerError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error comes from a caller passing an invalid byte range
    pub fn is_range_error(&self) -> bool {
        match self {
            LexerError::RangeOutOfBounds { .. }
            | LexerError::InvertedRange { .. }
            | LexerError::NotCharBoundary { .. } => true,
            LexerError::WithContext { source, .. } => source.is_range_error(),
            _ => false,
        }
    }
}

/// Result type alias for lexer operations
pub type Result<T> = std::result::Result<T, LexerError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| LexerError::Io(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| LexerError::Io(e).with_context(f()))
    }
}
