//! CLI argument definitions for the robust CSV viewer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use rcsv_ingest::DEFAULT_CHUNK_SIZE;

#[derive(Parser)]
#[command(
    name = "rcsv",
    version,
    about = "Robust CSV viewer - fetch, clean, and preview shared CSV files",
    long_about = "Fetch a CSV file from a public share link, skip rows that fail\n\
                  structural parsing, preview the surviving table, and write it\n\
                  back out as a cleaned CSV."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Fetch a shared CSV file, skipping problematic rows automatically.
    Fetch(FetchArgs),

    /// Print the direct-download link derived from a share link.
    Resolve(ResolveArgs),
}

#[derive(Parser)]
pub struct FetchArgs {
    /// Share link containing a /d/<id>/view segment.
    #[arg(value_name = "SHARE_URL")]
    pub share_url: String,

    /// Maximum rows per parsed chunk.
    #[arg(long = "chunk-size", value_name = "ROWS", default_value_t = DEFAULT_CHUNK_SIZE)]
    pub chunk_size: usize,

    /// Fetch timeout in seconds, covering the full body read.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Comma-separated columns to keep for the preview and any written output.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Vec<String>,

    /// Number of rows to show in the preview table.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 10)]
    pub preview: usize,

    /// Table layout variant.
    #[arg(long = "layout", value_enum, default_value = "compact")]
    pub layout: LayoutArg,

    /// Print the load report as JSON instead of the rendered summary.
    #[arg(long = "json")]
    pub json: bool,

    /// Write the cleaned CSV to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// Share link containing a /d/<id>/view segment.
    #[arg(value_name = "SHARE_URL")]
    pub share_url: String,
}

/// Preview layout choices, mirroring the compact and full-width variants of
/// the dashboard this tool replaces.
#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    Compact,
    Wide,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
