//! Test data builders for scripts and lexers

use pywright_lexer::{ScriptLexer, SymbolTable};

/// Builder for multi-line test scripts
pub struct ScriptBuilder {
    lines: Vec<String>,
    line_ending: &'static str,
}

impl ScriptBuilder {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            line_ending: "\n",
        }
    }

    pub fn line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Use `\r\n` line endings
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    pub fn build(self) -> String {
        let mut script = String::new();
        for line in &self.lines {
            script.push_str(line);
            script.push_str(self.line_ending);
        }
        script
    }
}

/// Builder for lexers with macro sets
#[derive(Default)]
pub struct LexerBuilder {
    builtin_macros: Vec<String>,
    game_macros: Vec<String>,
}

impl LexerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtin_macro(mut self, name: &str) -> Self {
        self.builtin_macros.push(name.to_string());
        self
    }

    pub fn game_macro(mut self, name: &str) -> Self {
        self.game_macros.push(name.to_string());
        self
    }

    pub fn build(self) -> ScriptLexer {
        ScriptLexer::with_symbols(
            SymbolTable::new()
                .with_builtin_macros(self.builtin_macros)
                .with_game_macros(self.game_macros),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_builder() {
        let script = ScriptBuilder::new().line("bg court").line("fg x").build();
        assert_eq!(script, "bg court\nfg x\n");

        let script = ScriptBuilder::new().line("a").crlf().build();
        assert_eq!(script, "a\r\n");
    }
}
