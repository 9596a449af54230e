//! CLI argument parsing for runner option synthesis.
//!
//! Every command is a pure function of the descriptor and the run scope; the
//! caller decides how and where the printed argument vectors are executed.
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "courgette",
    version,
    about = "Synthesize runner arguments for parallel feature runs",
    after_help = "Examples:\n  courgette args --config runner.json --session S1\n  courgette args --config runner.json --session S1 --unit-path features/login.feature --unit-id F1\n  courgette rerun --config runner.json --session S1 --scenario features/login.feature:12\n  courgette reports --config runner.json --session S1 --unit-path features/login.feature --unit-id F1 --json",
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct RootArgs {
    /// Emit debug logging on stderr (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    Args(ArgsArgs),
    Rerun(RerunArgs),
    Reports(ReportsArgs),
    RerunFile(RerunFileArgs),
}

/// Descriptor and scope shared by every command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// JSON runner descriptor
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// Session id namespacing temp artifacts for this invocation
    #[arg(long, value_name = "ID")]
    pub session: String,

    /// Feature path of the execution unit (scopes the run to one unit)
    #[arg(long, value_name = "PATH", requires = "unit_id")]
    pub unit_path: Option<String>,

    /// Identifier of the execution unit, unique within the session
    #[arg(long, value_name = "ID", requires = "unit_path")]
    pub unit_id: Option<String>,

    /// Directory for per-unit artifacts (defaults to the system temp dir)
    #[arg(long, value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,
}

/// Print the argument vector for a full run.
#[derive(Parser, Debug)]
#[command(about = "Print runner arguments for a full run")]
pub struct ArgsArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Runner program to prefix the printed command line with
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Emit the argument vector as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Print argument vectors for rerunning failed scenarios.
#[derive(Parser, Debug)]
#[command(about = "Print runner arguments for rerunning failed scenarios")]
pub struct RerunArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Scenario to rerun (<path>:<line>[:<line>...]); repeatable
    #[arg(long, value_name = "REF", conflicts_with = "rerun_file")]
    pub scenario: Vec<String>,

    /// Rerun file to read scenarios from (defaults to the scope's rerun file)
    #[arg(long, value_name = "PATH")]
    pub rerun_file: Option<PathBuf>,

    /// Runner program to prefix each printed command line with
    #[arg(long, value_name = "PROGRAM")]
    pub program: Option<String>,

    /// Emit one JSON array of argument vectors
    #[arg(long)]
    pub json: bool,
}

/// Print report files produced by a run.
#[derive(Parser, Debug)]
#[command(about = "List report files a run produces")]
pub struct ReportsArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Emit the list as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Print the rerun file a run writes failed scenarios to.
#[derive(Parser, Debug)]
#[command(about = "Print the rerun file location for a run")]
pub struct RerunFileArgs {
    #[command(flatten)]
    pub run: RunArgs,
}
