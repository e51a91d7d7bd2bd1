//! CLI parse: clap types for fsbaseline. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// fsbaseline - sealed SHA-256 baselines of a directory tree
#[derive(Parser)]
#[command(name = "fsbaseline")]
#[command(about = "Record path, name and SHA-256 of every file under a directory in a sealed CSV")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory and write a sealed baseline CSV
    Scan {
        /// Root directory to scan (prompted for when omitted)
        root: Option<PathBuf>,
        /// Output CSV path, including file name (prompted for when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Follow symbolic links while walking
        #[arg(long)]
        follow_symlinks: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check a sealed baseline against its name, and optionally against the files it lists
    Verify {
        /// Sealed snapshot file (name ends in _<8 hex>.csv)
        snapshot: PathBuf,
        /// Re-digest every recorded file and report drift
        #[arg(long)]
        recheck: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
