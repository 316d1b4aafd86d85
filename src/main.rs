//! pwlex - PyWright script lexer CLI
//!
//! Usage: pwlex <COMMAND>
//!
//! Prints the styled spans of a script, completion candidates, or the style table.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pywright_lexer::config::LexerConfig;
use pywright_lexer::{ScriptLexer, StyleId};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Syntax classification for PyWright scripts
#[derive(Parser, Debug)]
#[command(name = "pwlex")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the styled spans of a script file
    Lex {
        /// Script to lex
        file: PathBuf,

        /// Byte range to restyle, as START..END
        #[arg(long)]
        range: Option<String>,

        /// Extra script files to scan for macro declarations
        #[arg(long = "macros")]
        macro_files: Vec<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print completion candidates for a prefix
    Complete {
        /// Typed prefix
        prefix: String,
    },
    /// Print the style table
    Styles,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,pwlex=info,pywright_lexer=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => LexerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => LexerConfig::load_or_default(),
    };

    match cli.command {
        Commands::Lex {
            file,
            range,
            macro_files,
            format,
        } => run_lex(&config, &file, range.as_deref(), &macro_files, format),
        Commands::Complete { prefix } => {
            let lexer = config.build_lexer()?;
            for word in lexer.suggestions(&prefix) {
                println!("{}", word);
            }
            Ok(())
        }
        Commands::Styles => {
            for style in StyleId::ALL {
                println!("{}\t{}", style.index(), style.description());
            }
            Ok(())
        }
    }
}

fn run_lex(
    config: &LexerConfig,
    file: &Path,
    range: Option<&str>,
    macro_files: &[PathBuf],
    format: OutputFormat,
) -> Result<()> {
    let source = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;

    // Command line macro files are scanned alongside the configured ones
    let mut config = config.clone();
    config.macro_files.extend(macro_files.iter().cloned());
    let lexer = config.build_lexer()?;

    let (start, end) = match range {
        Some(range) => parse_range(range)?,
        None => (0, source.len()),
    };
    let spans = lexer.style_range(&source, start, end)?;
    tracing::info!("{} spans for {} bytes", spans.len(), end - start);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&spans)?),
        OutputFormat::Text => print_spans(&lexer, &source, start, &spans),
    }
    Ok(())
}

fn print_spans(lexer: &ScriptLexer, source: &str, start: usize, spans: &[pywright_lexer::Span]) {
    let mut offset = start;
    for span in spans {
        let text = source.get(offset..offset + span.len).unwrap_or("");
        println!(
            "{:>6} {:>4} {:<28} {:?}",
            offset,
            span.len,
            lexer.description(span.style.index() as usize),
            text
        );
        offset += span.len;
    }
}

fn parse_range(range: &str) -> Result<(usize, usize)> {
    let Some((start, end)) = range.split_once("..") else {
        bail!("Range must look like START..END, got {:?}", range);
    };
    let start = start.trim().parse().context("Invalid range start")?;
    let end = end.trim().parse().context("Invalid range end")?;
    Ok((start, end))
}
