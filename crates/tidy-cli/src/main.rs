//! datatidy CLI entry point.

use clap::{ColorChoice, Parser};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use tidy_cli::logging::{LogConfig, LogFormat, init_logging};
use tidy_cli::workspace::{load_store, save_store};

mod cli;
mod commands;
mod summary;

use crate::cli::{Cli, ColumnCommand, Command, LogFormatArg, LogLevelArg, ProjectCommand};
use crate::commands::{
    run_charts, run_column_add, run_column_delete, run_freq, run_ingest, run_merge,
    run_project_delete, run_project_list, run_project_new,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut store = load_store(&cli.store)?;
    // Read-only commands skip the write-back.
    match &cli.command {
        Command::Project(ProjectCommand::New(args)) => {
            run_project_new(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Project(ProjectCommand::List) => {
            run_project_list(&store);
            Ok(())
        }
        Command::Project(ProjectCommand::Delete(args)) => {
            run_project_delete(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Column(ColumnCommand::Add(args)) => {
            run_column_add(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Column(ColumnCommand::Delete(args)) => {
            run_column_delete(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Ingest(args) => {
            run_ingest(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Merge(args) => {
            run_merge(&mut store, args)?;
            save_store(&cli.store, &store)
        }
        Command::Freq(args) => run_freq(&store, args),
        Command::Charts(args) => run_charts(&store, args),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
