//! CLI argument parsing for the exalt tools
//!
//! Both binaries share the same conventions: positional operands, a
//! `--debug` switch that turns on tracing output on stderr, and (for the
//! summary) a `--format` selector.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output format for the bpc summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

/// Generalized Fibonacci sequence generator
#[derive(Parser, Debug)]
#[command(name = "fibseq")]
#[command(version)]
#[command(
    about = "Print the first COUNT numbers of the Fibonacci sequence of the given ORDER",
    long_about = None
)]
pub struct FibCli {
    /// Number of terms to print
    #[arg(value_name = "COUNT")]
    pub count: Option<u64>,

    /// Number of preceding terms summed into the next one (2 = classic Fibonacci)
    #[arg(value_name = "ORDER")]
    pub order: Option<usize>,

    /// Start the output at the first seed instead of the last two seeds
    #[arg(long = "include-seeds")]
    pub include_seeds: bool,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Bits-per-character summary over groups of compressed files
#[derive(Parser, Debug)]
#[command(name = "bpc-summary")]
#[command(version)]
#[command(
    about = "Compare sizes of files sharing a base name across suffixes (first suffix is the baseline)",
    long_about = None
)]
pub struct SummaryCli {
    /// File suffixes to compare, without the leading dot (e.g. xml gz bz2)
    #[arg(value_name = "SUFFIX")]
    pub suffixes: Vec<String>,

    /// Directory to scan
    #[arg(short = 'd', long = "dir", value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file with table layout settings
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug tracing on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Initialize tracing subscriber for debug output
pub fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}
