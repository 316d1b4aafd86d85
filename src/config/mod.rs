//! Configuration for the PyWright lexer
//!
//! This module handles the host-supplied side of the symbol table:
//! - Builtin and per-game macro names
//! - Script files scanned for `macro <name>` declarations
//! - Styling output options
//!
//! # Config Location
//!
//! The default config file lives in the platform config directory:
//! - **Linux**: `~/.config/pywright-lexer/lexer.json`
//! - **macOS**: `~/Library/Application Support/pywright-lexer/lexer.json`
//! - **Windows**: `%APPDATA%\pywright-lexer\lexer.json`
//!
//! Files ending in `.toml` are read and written as TOML, anything else as JSON.
//!
//! # Example
//!
//! ```ignore
//! use pywright_lexer::{config::LexerConfig, ScriptLexer};
//!
//! let config = LexerConfig::load_or_default();
//! let lexer = ScriptLexer::new();
//! config.apply(&lexer)?;
//! ```

pub mod macros;

pub use macros::{collect_macro_names, scan_macro_file, scan_macro_files};

use crate::error::{LexerError, Result, ResultExt};
use crate::lexer::ScriptLexer;
use crate::symbols::SymbolTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application identifier for config directories
pub const APP_ID: &str = "pywright-lexer";

/// Default config filename
pub const CONFIG_FILE: &str = "lexer.json";

// ==================== Config Directory ====================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Get the path to the default config file
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join(CONFIG_FILE))
}

/// On-disk format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

// ==================== Lexer Config ====================

/// Host-provided lexer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerConfig {
    /// Macros shipped with the engine
    pub builtin_macros: Vec<String>,

    /// Macros defined by the current game
    pub game_macros: Vec<String>,

    /// Script files whose `macro` declarations count as game macros
    pub macro_files: Vec<PathBuf>,

    /// Drop zero-length spans instead of forwarding them to the host
    pub skip_empty_spans: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            builtin_macros: Vec::new(),
            game_macros: Vec::new(),
            macro_files: Vec::new(),
            skip_empty_spans: true,
        }
    }
}

impl LexerConfig {
    /// Load a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;

        let config = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::from_str(&content).map_err(|e| {
                LexerError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?,
            ConfigFormat::Json => serde_json::from_str(&content).map_err(|e| {
                LexerError::Config(format!("Failed to parse config file {:?}: {}", path, e))
            })?,
        };

        tracing::debug!("Loaded lexer config from {:?}", path);
        Ok(config)
    }

    /// Load the config from the default location, returning defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = default_config_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }

        Self::load(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load lexer config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Save the config to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LexerError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = match ConfigFormat::from_path(path) {
            ConfigFormat::Toml => toml::to_string_pretty(self)
                .map_err(|e| LexerError::Serialization(e.to_string()))?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)
                .map_err(|e| LexerError::Serialization(e.to_string()))?,
        };

        std::fs::write(path, content).map_err(|e| {
            LexerError::Config(format!("Failed to write config file {:?}: {}", path, e))
        })
    }

    /// Game macros listed in the config plus those declared in `macro_files`
    pub fn resolve_game_macros(&self) -> Result<Vec<String>> {
        let mut names = self.game_macros.clone();
        for name in scan_macro_files(self.macro_files.as_slice())? {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    /// Push the configured macro sets into a lexer
    ///
    /// Both sets are published in a single swap.
    pub fn apply(&self, lexer: &ScriptLexer) -> Result<()> {
        let game_macros = self.resolve_game_macros()?;
        let symbols = SymbolTable::new()
            .with_builtin_macros(self.builtin_macros.iter().cloned())
            .with_game_macros(game_macros);

        tracing::debug!(
            "Applying {} builtin and {} game macros",
            symbols.builtin_macro_count(),
            symbols.game_macro_count()
        );
        lexer.symbols().replace(symbols);
        Ok(())
    }

    /// Build a lexer configured from this config
    pub fn build_lexer(&self) -> Result<ScriptLexer> {
        let lexer = ScriptLexer::new().emit_empty_spans(!self.skip_empty_spans);
        self.apply(&lexer)?;
        Ok(lexer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleId;

    #[test]
    fn test_config_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")), ConfigFormat::Json);
        assert_eq!(ConfigFormat::from_path(Path::new("lexer")), ConfigFormat::Json);
    }

    #[test]
    fn test_default_config() {
        let config = LexerConfig::default();
        assert!(config.skip_empty_spans);
        assert!(config.builtin_macros.is_empty());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LexerConfig = serde_json::from_str(r#"{"game_macros": ["intro"]}"#).unwrap();
        assert_eq!(config.game_macros, vec!["intro"]);
        assert!(config.skip_empty_spans);
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lexer.json");
        let config = LexerConfig {
            builtin_macros: vec!["cross_exam".into()],
            skip_empty_spans: false,
            ..Default::default()
        };

        config.save(&path).unwrap();
        assert_eq!(LexerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_save_and_load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexer.toml");
        let config = LexerConfig {
            game_macros: vec!["intro".into(), "outro".into()],
            ..Default::default()
        };

        config.save(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("game_macros"));
        assert_eq!(LexerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexer.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(LexerConfig::load(&path), Err(LexerError::Config(_))));
    }

    #[test]
    fn test_load_missing_file_keeps_io_source() {
        let dir = tempfile::tempdir().unwrap();
        let err = LexerConfig::load(dir.path().join("absent.json")).unwrap_err();
        assert!(err.to_string().contains("absent.json"));
        assert!(matches!(
            err,
            LexerError::WithContext { ref source, .. } if matches!(**source, LexerError::Io(_))
        ));
    }

    #[test]
    fn test_apply_replaces_previous_macros() {
        let lexer = ScriptLexer::new();
        lexer.set_game_macros(["stale"]);
        let before = lexer.snapshot();

        let config = LexerConfig {
            game_macros: vec!["fresh".into()],
            ..Default::default()
        };
        config.apply(&lexer).unwrap();

        let after = lexer.snapshot();
        assert!(after.symbols.is_game_macro("fresh"));
        assert!(!after.symbols.is_game_macro("stale"));
        assert!(after.completions.contains("fresh"));
        // snapshots taken before the swap are unaffected
        assert!(before.symbols.is_game_macro("stale"));
    }

    #[test]
    fn test_apply_merges_macro_files() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("macros.txt");
        std::fs::write(&script, "macro witness\nendmacro\nmacro intro\n").unwrap();

        let config = LexerConfig {
            builtin_macros: vec!["cross_exam".into()],
            game_macros: vec!["intro".into()],
            macro_files: vec![script],
            ..Default::default()
        };
        assert_eq!(config.resolve_game_macros().unwrap(), vec!["intro", "witness"]);

        let lexer = config.build_lexer().unwrap();
        let spans = lexer.style_text("witness");
        assert_eq!(spans[0].style, StyleId::GameMacro);
        let spans = lexer.style_text("cross_exam");
        assert_eq!(spans[0].style, StyleId::BuiltinMacro);
    }
}
