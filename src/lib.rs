//! # pywright-lexer: Syntax classification for PyWright scripts
//!
//! A lexer for the PyWright visual-novel scripting language, built to drive
//! syntax highlighting and autocompletion in an editor. It turns script text
//! into an ordered list of `(byte length, style)` spans that covers every
//! byte of the input, whitespace included.
//!
//! ## Architecture
//!
//! - **Lexer**: tokenizer, token classifier and string sub-lexer ([`lexer`])
//! - **Symbols**: keyword tables and the swappable macro snapshot ([`symbols`])
//! - **Completion**: candidate list rebuilt with every macro update ([`completion`])
//! - **Config**: macro lists and macro files supplied by the host ([`config`])
//!
//! ## Example
//!
//! ```
//! use pywright_lexer::{ScriptLexer, StyleId};
//!
//! let lexer = ScriptLexer::new();
//! lexer.set_game_macros(["show_witness"]);
//!
//! let spans = lexer.style_text("show_witness\n");
//! assert_eq!(spans[0].style, StyleId::GameMacro);
//! assert_eq!(spans.iter().map(|s| s.len).sum::<usize>(), 13);
//! ```

pub mod completion;
pub mod config;
pub mod error;
pub mod lexer;
pub mod style;
pub mod symbols;

// Re-export commonly used types
pub use completion::{word_before_cursor, CompletionIndex};
pub use config::LexerConfig;
pub use error::{LexerError, Result};
pub use lexer::{ScriptLexer, StyleSink, LANGUAGE_NAME};
pub use style::{Span, StyleId, STYLE_COUNT};
pub use symbols::{SharedSymbols, SymbolTable};
