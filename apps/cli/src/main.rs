//! `lomake`: form validation and Finnish identifier checks from the shell.

mod cli;
mod commands;
mod config;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::{AppConfig, Overrides};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            lomake_log::log_error!(format!("{error:#}"));
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let overrides = Overrides {
        log_level: cli.log_level.clone(),
        log_format: cli.log_format.map(Into::into),
    };
    let config = AppConfig::load(cli.config.as_deref(), &overrides)?;
    let _guard = lomake_log::init_with(config.logger()).context("failed to initialize logging")?;
    tracing::debug!(?config, "configuration loaded");

    let cancel = commands::cancel_on_ctrl_c();
    match &cli.command {
        Command::Validate(args) => {
            lomake_log::measure!(
                "validate",
                commands::run_validate(args, &config.validation, &cancel)
            )
        }
        Command::Hetu(args) => commands::run_hetu(args),
        Command::Check(args) => Ok(commands::run_check(args)),
        Command::Generate(args) => Ok(commands::run_generate(args)),
        Command::Number(args) => Ok(commands::run_number(args)),
        Command::Prefill(args) => {
            lomake_log::measure!("prefill", commands::run_prefill(args, &cancel))
        }
    }
}
