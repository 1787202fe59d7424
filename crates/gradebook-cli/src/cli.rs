//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "gradebook",
    version,
    about = "Load course and grade CSV exports into SQLite and derive statistics",
    long_about = "Load delimited course-catalog or grade-sheet exports into a SQLite\n\
                  database and derive one row of descriptive statistics per run.\n\
                  Both tables are rebuilt from scratch on every invocation."
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

    /// Log output format (pretty for humans, json for machine parsing).
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
    /// Load a course catalog (curso;carga_horaria;preco) and derive statistics.
    Courses(RunArgs),

    /// Load a grade sheet (nome;n1..n5) and derive statistics.
    Grades(RunArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Path to the input CSV file.
    #[arg(value_name = "CSV")]
    pub csv_path: PathBuf,

    /// SQLite database file (created if absent).
    #[arg(long = "db", value_name = "PATH", default_value = "db.sqlite3")]
    pub db_path: PathBuf,

    /// Field delimiter used by the input file.
    #[arg(long = "delimiter", value_name = "CHAR", default_value = ";")]
    pub delimiter: char,

    /// Print the run result as JSON instead of the table report.
    #[arg(long = "json")]
    pub json: bool,
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
