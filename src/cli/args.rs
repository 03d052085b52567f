//! CLI argument definitions.
//!
//! All Clap derive structs for `docpane` command-line parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Fetch-and-render page assembler for markdown over HTTP.
#[derive(Parser, Debug)]
#[command(name = "docpane", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "DOCPANE_COLOR")]
    pub color: ColorChoice,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a page URL and write the assembled HTML document.
    Render(RenderArgs),

    /// Print the table of contents of a local markdown file.
    Toc(TocArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Render Command
// ============================================================================

/// Arguments for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Page URL. The `file` query parameter selects the markdown document;
    /// the directory fragment is always fetched relative to this URL.
    pub url: String,

    /// Write the assembled HTML here instead of stdout.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Path to YAML configuration file.
    #[arg(short, long, env = "DOCPANE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Per-request timeout (e.g. "30s"). Overrides the config file.
    #[arg(long, value_parser = humantime::parse_duration)]
    pub timeout: Option<Duration>,

    /// Directory fragment path relative to the page URL. Overrides the
    /// config file.
    #[arg(long)]
    pub fragment: Option<String>,
}

// ============================================================================
// Toc Command
// ============================================================================

/// Arguments for `toc`.
#[derive(Args, Debug)]
pub struct TocArgs {
    /// Markdown file to scan.
    pub file: PathBuf,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// Version Command
// ============================================================================

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
