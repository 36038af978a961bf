//! CLI argument definitions for the OpenAPI auditor.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "openapi-auditor",
    version,
    about = "Audit OpenAPI documents for style and consistency issues",
    long_about = "Audit an OpenAPI 3.x or Swagger 2.0 document (YAML or JSON).\n\n\
                  Runs a fixed catalog of independent rules, prints findings grouped\n\
                  per rule, and writes a Markdown or JSON report."
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Audit an OpenAPI document and write a report.
    Audit(AuditArgs),

    /// List the audit rules.
    Rules,
}

#[derive(Parser)]
pub struct AuditArgs {
    /// Path to the OpenAPI document (.yaml, .yml or .json).
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Report file to write.
    #[arg(long = "out", value_name = "PATH", default_value = "audit_report.md")]
    pub out: PathBuf,

    /// Report file format.
    #[arg(long = "format", value_enum, default_value = "markdown")]
    pub format: ReportFormatArg,

    /// Config file (default: .openapi-auditor.toml next to SPEC).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run only these rules (repeatable).
    #[arg(long = "only", value_name = "RULE")]
    pub only: Vec<String>,

    /// Skip these rules (repeatable).
    #[arg(long = "skip", value_name = "RULE")]
    pub skip: Vec<String>,

    /// Exit with status 1 when a finding at or above this severity exists.
    #[arg(long = "fail-on", value_enum, default_value = "error")]
    pub fail_on: FailOnArg,

    /// Print findings without writing a report file.
    #[arg(long = "no-report")]
    pub no_report: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormatArg {
    Markdown,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FailOnArg {
    Error,
    Warning,
    Never,
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
