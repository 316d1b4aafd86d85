//! Symbol tables for the PyWright lexer
//!
//! A [`SymbolTable`] is an immutable snapshot of everything the classifier
//! looks tokens up in: the fixed language vocabulary from [`keywords`] plus the
//! two macro sets supplied by the host project.
//!
//! # Updates
//!
//! Macro sets change when a project is loaded or a macro file is saved. The
//! host never mutates a table in place. Instead [`SharedSymbols`] builds a new
//! [`SymbolSnapshot`] (table and completion index together) and swaps the
//! `Arc` under a write lock, so a lex pass that already cloned the old snapshot
//! keeps a consistent view until it finishes.

pub mod keywords;

use crate::completion::CompletionIndex;
use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

/// Lookup sets used by the classifier
#[derive(Debug, Clone)]
pub struct SymbolTable {
    commands: HashSet<&'static str>,
    special_variables: HashSet<&'static str>,
    case_variables: HashSet<String>,
    named_parameters: &'static [&'static str],
    parameters: HashSet<&'static str>,
    string_tokens: &'static [&'static str],
    logic_operators: HashSet<&'static str>,
    builtin_macros: HashSet<String>,
    game_macros: HashSet<String>,
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self {
            commands: keywords::COMMANDS.iter().copied().collect(),
            special_variables: keywords::SPECIAL_VARIABLES.iter().copied().collect(),
            case_variables: (0..keywords::CASE_VARIABLE_COUNT)
                .map(keywords::case_variable)
                .collect(),
            named_parameters: keywords::NAMED_PARAMETERS,
            parameters: keywords::PARAMETERS.iter().copied().collect(),
            string_tokens: keywords::STRING_TOKENS,
            logic_operators: keywords::LOGIC_OPERATORS.iter().copied().collect(),
            builtin_macros: HashSet::new(),
            game_macros: HashSet::new(),
        }
    }
}

impl SymbolTable {
    /// Table seeded with the PyWright vocabulary and no macros
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the builtin macro set
    pub fn with_builtin_macros<I, S>(mut self, macros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtin_macros = macros.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the per-game macro set
    pub fn with_game_macros<I, S>(mut self, macros: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.game_macros = macros.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_command(&self, token: &str) -> bool {
        self.commands.contains(token)
    }

    pub fn is_parameter(&self, token: &str) -> bool {
        self.parameters.contains(token)
    }

    pub fn is_logic_operator(&self, token: &str) -> bool {
        self.logic_operators.contains(token)
    }

    /// Variable the engine reads or sets itself
    pub fn is_special_variable(&self, token: &str) -> bool {
        self.special_variables.contains(token)
    }

    /// One of the synthesized `_case_0` .. `_case_99` names
    pub fn is_case_variable(&self, token: &str) -> bool {
        self.case_variables.contains(token)
    }

    /// The configured `key=` prefix the token starts with, if any
    pub fn named_parameter_prefix(&self, token: &str) -> Option<&'static str> {
        self.named_parameters
            .iter()
            .copied()
            .find(|prefix| token.starts_with(*prefix))
    }

    pub fn is_builtin_macro(&self, token: &str) -> bool {
        self.builtin_macros.contains(token)
    }

    pub fn is_game_macro(&self, token: &str) -> bool {
        self.game_macros.contains(token)
    }

    pub fn builtin_macro_count(&self) -> usize {
        self.builtin_macros.len()
    }

    pub fn game_macro_count(&self) -> usize {
        self.game_macros.len()
    }

    /// Every word the autocompletion table should offer
    pub fn vocabulary(&self) -> impl Iterator<Item = &str> + '_ {
        self.commands
            .iter()
            .chain(self.special_variables.iter())
            .chain(self.named_parameters.iter())
            .chain(self.parameters.iter())
            .chain(self.string_tokens.iter())
            .chain(self.logic_operators.iter())
            .map(static_str)
            .chain(self.case_variables.iter().map(String::as_str))
            .chain(self.builtin_macros.iter().map(String::as_str))
            .chain(self.game_macros.iter().map(String::as_str))
    }
}

fn static_str<'a>(word: &'a &'static str) -> &'a str {
    word
}

/// A symbol table paired with the completion index built from it
#[derive(Debug, Clone)]
pub struct SymbolSnapshot {
    pub symbols: SymbolTable,
    pub completions: CompletionIndex,
}

impl SymbolSnapshot {
    pub fn new(symbols: SymbolTable) -> Self {
        let completions = CompletionIndex::build(&symbols);
        Self {
            symbols,
            completions,
        }
    }
}

/// Atomically replaceable symbol snapshot shared between the lexer and its host
#[derive(Debug)]
pub struct SharedSymbols {
    current: RwLock<Arc<SymbolSnapshot>>,
}

impl Default for SharedSymbols {
    fn default() -> Self {
        Self::new(SymbolTable::default())
    }
}

impl SharedSymbols {
    pub fn new(symbols: SymbolTable) -> Self {
        Self {
            current: RwLock::new(Arc::new(SymbolSnapshot::new(symbols))),
        }
    }

    /// Current snapshot; stays valid after later updates
    pub fn snapshot(&self) -> Arc<SymbolSnapshot> {
        // The guarded value is a single Arc, so a poisoned lock still holds a whole snapshot.
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Derive a new table from the current one and publish it
    ///
    /// The completion index is rebuilt before the swap, so readers see the old
    /// table with the old index or the new table with the new index.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&SymbolTable) -> SymbolTable,
    {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = SymbolSnapshot::new(f(&current.symbols));
        *current = Arc::new(next);
    }

    /// Replace the whole table
    pub fn replace(&self, symbols: SymbolTable) {
        self.update(|_| symbols);
    }
}
