//! Specimen tracker CLI.

use clap::{ColorChoice, Parser};
use specimen_cli::logging::{LogConfig, LogFormat, init_logging};
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;
mod commands;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::commands::{
    run_decode_location, run_decode_type, run_encode_location, run_encode_type, run_filter,
    run_validate,
};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let result = match cli.command {
        Command::Filter(args) => run_filter(&args).map(|()| 0),
        Command::DecodeType { encoded } => run_decode_type(&encoded).map(|()| 0),
        Command::EncodeType { levels } => run_encode_type(&levels).map(|()| 0),
        Command::DecodeLocation { encoded, json } => {
            run_decode_location(&encoded, json).map(|()| 0)
        }
        Command::EncodeLocation {
            fridge,
            shelf,
            rack,
            box_,
            axis1,
            axis2,
        } => run_encode_location([
            fridge.as_str(),
            shelf.as_str(),
            rack.as_str(),
            box_.as_str(),
            axis1.as_str(),
            axis2.as_str(),
        ])
        .map(|()| 0),
        Command::Validate { records } => {
            run_validate(&records).map(|issues| if issues > 0 { 1 } else { 0 })
        }
    };
    let exit_code = match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
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
