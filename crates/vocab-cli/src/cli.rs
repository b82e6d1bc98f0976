//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "vocab-import",
    version,
    about = "Vocabulary importer - normalize loose spreadsheets into canonical records",
    long_about = "Normalize loosely-structured vocabulary spreadsheets into a canonical,\n\
                  level-organized record set.\n\n\
                  Finds the header row per sheet, maps free-text column labels (English\n\
                  and Vietnamese) to the fixed schema, infers proficiency levels, and\n\
                  reports every rejected row with its reason and raw content."
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
    /// Parse a workbook, preview the batch, optionally submit it.
    Import(ImportArgs),

    /// List the canonical fields and their accepted header aliases.
    Fields,
}

#[derive(Parser)]
pub struct ImportArgs {
    /// Workbook path: a CSV file, a directory of CSVs, or a JSON workbook.
    #[arg(value_name = "WORKBOOK")]
    pub workbook: PathBuf,

    /// Submit accepted records to the store after parsing.
    #[arg(long)]
    pub submit: bool,

    /// Owner id to attribute submitted records to.
    #[arg(long, value_name = "ID", default_value = "local-admin")]
    pub owner: String,

    /// JSON-lines store file submissions are appended to.
    #[arg(long, value_name = "PATH", default_value = "vocabulary.jsonl")]
    pub store: PathBuf,

    /// Print the full parse report as JSON instead of tables.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
