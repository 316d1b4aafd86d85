//! Macro name discovery
//!
//! PyWright games declare macros inline:
//!
//! ```text
//! macro show_witness
//! char $1 fade
//! endmacro
//! ```
//!
//! The lexer only needs the names, so scanning is a line-oriented pass that
//! picks up the word after each leading `macro` keyword.

use crate::error::{Result, ResultExt};
use std::collections::HashSet;
use std::path::Path;

/// Names declared with `macro <name>`, in first-seen order without duplicates
pub fn collect_macro_names(script: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for line in script.lines() {
        let mut words = line.split_whitespace();
        if words.next() != Some("macro") {
            continue;
        }
        if let Some(name) = words.next() {
            if seen.insert(name) {
                names.push(name.to_string());
            }
        }
    }

    names
}

/// Scan a script file for macro declarations
pub fn scan_macro_file(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read macro file {:?}", path))?;

    let names = collect_macro_names(&content);
    tracing::debug!("Found {} macros in {:?}", names.len(), path);
    Ok(names)
}

/// Scan several files, merging their names in order
pub fn scan_macro_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for path in paths {
        for name in scan_macro_file(path)? {
            if seen.insert(name.clone()) {
                names.push(name);
            }
        }
    }

    Ok(names)
}
