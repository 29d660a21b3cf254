//! Command line argument parsing for the litrisk CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::engine::config::{DEFAULT_CONTEXT_CHARS, DEFAULT_MAX_SNIPPET_CHARS};

/// litrisk - Flag litigation risk language in email correspondence
#[derive(Parser, Debug, Clone)]
#[command(name = "litrisk")]
#[command(about = "Flag litigation risk language in email correspondence")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LitriskArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// JSON catalog file with extra risk categories
    #[arg(long, value_name = "CATALOG_FILE", env = "LITRISK_PATTERNS", global = true)]
    pub patterns: Option<PathBuf>,

    /// Use only the categories from --patterns
    #[arg(long, requires = "patterns", global = true)]
    pub no_builtin: bool,

    /// Characters of context on each side of a match
    #[arg(
        long,
        env = "LITRISK_CONTEXT_CHARS",
        default_value_t = DEFAULT_CONTEXT_CHARS,
        global = true
    )]
    pub context_chars: usize,

    /// Maximum snippet length before truncation
    #[arg(
        long,
        env = "LITRISK_MAX_SNIPPET_CHARS",
        default_value_t = DEFAULT_MAX_SNIPPET_CHARS,
        global = true
    )]
    pub max_snippet_chars: usize,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LitriskArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Analyze a single email
    Analyze(AnalyzeArgs),

    /// Analyze a JSON Lines file of emails
    Batch(BatchArgs),

    /// List the risk categories in the catalog
    Categories,
}

/// Arguments for analyzing one email
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Subject line
    #[arg(short, long, conflicts_with = "input")]
    pub subject: Option<String>,

    /// Body text
    #[arg(short, long, conflicts_with = "input")]
    pub body: Option<String>,

    /// JSON file holding one email object ("-" reads stdin)
    #[arg(short, long, value_name = "EMAIL_FILE")]
    pub input: Option<PathBuf>,
}

impl AnalyzeArgs {
    /// Check if the email is given inline with --subject/--body
    pub fn has_inline_text(&self) -> bool {
        self.subject.is_some() || self.body.is_some()
    }
}

/// Arguments for batch analysis
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// JSON Lines file, one email object per line
    #[arg(value_name = "JSONL_FILE")]
    pub input: PathBuf,

    /// Number of worker threads (default: one per core)
    #[arg(short, long)]
    pub threads: Option<usize>,

    /// Skip malformed lines instead of failing
    #[arg(long)]
    pub skip_invalid: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// CSV output (one row per email)
    Csv,
}
