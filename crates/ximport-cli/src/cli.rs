//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ximport",
    version,
    about = "Map imported field values to canonical codes",
    long_about = "Resolve free-text values from an import feed against a mapping table.\n\n\
                  Supports exact matching and soft (substring) matching with\n\
                  case-sensitive (strpos) or case-insensitive (stripos) comparison."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow imported values to appear in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve values against a mapping configuration.
    Resolve(ResolveArgs),

    /// Map one column of a JSON record file.
    Map(MapArgs),
}

#[derive(Parser)]
pub struct ResolveArgs {
    /// JSON mapping configuration (valueMap, matchMethod, matchSymmetric, ...).
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Values to resolve.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

#[derive(Parser)]
pub struct MapArgs {
    /// JSON mapping configuration (valueMap, matchMethod, matchSymmetric, ...).
    #[arg(long = "config", short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Column of each record to map.
    #[arg(long = "column", value_name = "NAME")]
    pub column: String,

    /// JSON array of records (objects of column name to string value).
    #[arg(value_name = "RECORDS")]
    pub records: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
