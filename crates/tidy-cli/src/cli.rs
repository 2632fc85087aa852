//! CLI argument definitions for datatidy.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "datatidy",
    version,
    about = "datatidy - paste, clean, and chart small data columns",
    long_about = "Manage projects of typed data columns from the terminal.\n\n\
                  Paste raw text into categorical or numeric columns, merge\n\
                  categorical aliases, inspect term frequencies, and derive\n\
                  auto-suggested charts. State lives in a JSON workspace file."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON workspace file.
    #[arg(
        long = "store",
        value_name = "PATH",
        default_value = "datatidy.json",
        global = true
    )]
    pub store: PathBuf,

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
    /// Manage projects.
    #[command(subcommand)]
    Project(ProjectCommand),

    /// Manage columns within a project.
    #[command(subcommand)]
    Column(ColumnCommand),

    /// Replace a column's data from raw pasted text.
    Ingest(IngestArgs),

    /// Merge categorical aliases into one canonical term.
    Merge(MergeArgs),

    /// Show the term-frequency distribution of a categorical column.
    Freq(FreqArgs),

    /// Show auto-suggested charts for a project.
    Charts(ChartsArgs),
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    /// Create a project.
    New(ProjectNewArgs),

    /// List all projects, newest first.
    List,

    /// Delete a project and all of its columns.
    Delete(ProjectSelectorArgs),
}

#[derive(Subcommand)]
pub enum ColumnCommand {
    /// Add an empty column to a project.
    Add(ColumnAddArgs),

    /// Delete a column.
    Delete(ColumnSelectorArgs),
}

#[derive(Args)]
pub struct ProjectNewArgs {
    /// Project name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Optional project description.
    #[arg(long = "description", value_name = "TEXT")]
    pub description: Option<String>,
}

#[derive(Args)]
pub struct ProjectSelectorArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,
}

#[derive(Args)]
pub struct ColumnAddArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Column type.
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub column_type: ColumnTypeArg,
}

#[derive(Args)]
pub struct ColumnSelectorArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column id or unique name within the project.
    #[arg(value_name = "COLUMN")]
    pub column: String,
}

#[derive(Args)]
pub struct IngestArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column id or unique name within the project.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Read raw text from a file instead of stdin.
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Args)]
pub struct MergeArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column id or unique name within the project.
    #[arg(value_name = "COLUMN")]
    pub column: String,

    /// Terms to merge (at least two distinct values).
    #[arg(value_name = "TERM", required = true, num_args = 1..)]
    pub terms: Vec<String>,

    /// Canonical term the aliases collapse into.
    #[arg(long = "into", value_name = "TARGET")]
    pub target: String,
}

#[derive(Args)]
pub struct FreqArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column id or unique name within the project.
    #[arg(value_name = "COLUMN")]
    pub column: String,
}

#[derive(Args)]
pub struct ChartsArgs {
    /// Project id or unique name.
    #[arg(value_name = "PROJECT")]
    pub project: String,

    /// Column to treat as active for the single-column chart rules.
    #[arg(long = "active", value_name = "COLUMN")]
    pub active: Option<String>,

    /// Emit suggestions as JSON instead of a summary.
    #[arg(long = "json")]
    pub json: bool,
}

/// CLI column type choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ColumnTypeArg {
    Categorical,
    Numeric,
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
