use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::fs;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod error;
mod options;
mod util;

use cli::{ArgsArgs, Command, ReportsArgs, RerunArgs, RerunFileArgs, RootArgs, RunArgs};
use config::{load_config, ExecutionUnit, SessionId};
use options::features::ScenarioRef;
use options::rerun::parse_rerun_file;
use options::{RunScope, RuntimeOptions};
use util::format_command_line;

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Args(args) => cmd_args(args),
        Command::Rerun(args) => cmd_rerun(args),
        Command::Reports(args) => cmd_reports(args),
        Command::RerunFile(args) => cmd_rerun_file(args),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn cmd_args(args: ArgsArgs) -> Result<()> {
    let options = build_options(&args.run)?;
    let argv = options.argv();
    if args.json {
        print_json(&argv)?;
    } else {
        println!("{}", format_command_line(args.program.as_deref(), &argv));
    }
    Ok(())
}

fn cmd_rerun(args: RerunArgs) -> Result<()> {
    let options = build_options(&args.run)?;

    let scenarios = if args.scenario.is_empty() {
        let path = args
            .rerun_file
            .clone()
            .unwrap_or_else(|| options.rerun_file().into());
        let content = fs::read_to_string(&path)
            .with_context(|| format!("read rerun file {}", path.display()))?;
        parse_rerun_file(&content).with_context(|| format!("parse {}", path.display()))?
    } else {
        args.scenario
            .iter()
            .map(|raw| ScenarioRef::parse(raw))
            .collect::<Result<Vec<_>, _>>()?
    };
    tracing::info!(count = scenarios.len(), "scenarios to rerun");

    let argvs: Vec<Vec<String>> = scenarios
        .iter()
        .map(|scenario| {
            tracing::debug!(path = %scenario.path, lines = ?scenario.lines, "rerun scenario");
            options.rerun_argv(scenario.as_str())
        })
        .collect();
    if args.json {
        print_json(&argvs)?;
    } else {
        for argv in &argvs {
            println!("{}", format_command_line(args.program.as_deref(), argv));
        }
    }
    Ok(())
}

fn cmd_reports(args: ReportsArgs) -> Result<()> {
    let reports = build_options(&args.run)?.report_files();
    if args.json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            println!("{report}");
        }
    }
    Ok(())
}

fn cmd_rerun_file(args: RerunFileArgs) -> Result<()> {
    let options = build_options(&args.run)?;
    println!("{}", options.rerun_file());
    Ok(())
}

fn build_options(args: &RunArgs) -> Result<RuntimeOptions> {
    let config = load_config(&args.config)?;
    let session = SessionId::new(args.session.as_str())?;

    let scope = match (&args.unit_path, &args.unit_id) {
        (Some(path), Some(id)) => RunScope::unit(session, ExecutionUnit::new(path, id)?),
        _ => RunScope::single_process(session),
    };
    let scope = match &args.temp_dir {
        Some(dir) => scope.with_temp_dir(dir.clone()),
        None => scope,
    };

    let options = RuntimeOptions::build(&config, &scope)
        .with_context(|| format!("build runner options from {}", args.config.display()))?;
    if let Some(declared) = config.declared_rerun_file() {
        if declared != options.rerun_file() {
            tracing::info!(
                declared = %declared,
                rerun_file = %options.rerun_file(),
                "declared rerun plugin replaced for unit run"
            );
        }
    }
    tracing::debug!(argv = ?options.argv(), "runner options");
    Ok(options)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize output")?;
    println!("{text}");
    Ok(())
}
