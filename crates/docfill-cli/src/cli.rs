//! CLI argument definitions for the docfill planner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "docfill",
    version,
    about = "Plan how spreadsheet columns render into document templates",
    long_about = "Plan how spreadsheet columns render into document templates.\n\n\
                  Reads column/selection pairs, picks a rendering strategy for each,\n\
                  and emits the placeholder syntax with quality and time estimates."
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
    /// Build a mapping batch from a JSON request file.
    Plan(PlanArgs),

    /// List the rendering strategies and their placeholder shapes.
    Strategies,
}

#[derive(Parser)]
pub struct PlanArgs {
    /// Path to the batch request JSON (`{"pairs": [...], "options": {...}}`).
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Skip the batch consistency pass.
    #[arg(long = "no-consistency")]
    pub no_consistency: bool,

    /// Run the optimization pass on every mapping.
    #[arg(long = "optimize")]
    pub optimize: bool,

    /// Output format for the plan.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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
