//! skillbook - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;
use tracing::debug;

use skillbook::cli::{self, Args, Verbosity};
use skillbook::{logging, Config, GuideError};

fn run(args: Args) -> Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    args.apply_to(&mut config);

    let verbosity = args.verbosity(Verbosity::from_config(&config.output.default_verbosity));
    if !config.output.color_output {
        colored::control::set_override(false);
    }
    logging::init(verbosity, config.output.color_output);
    debug!(verbosity = verbosity.as_str(), command = ?args.command, "Starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut notices = std::io::stderr();
    cli::execute(&args.command, &config, verbosity, &mut out, &mut notices)?;
    out.flush()?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<GuideError>()
        .map(cli::exit_code)
        .unwrap_or(cli::EXIT_FAILURE);
    ExitCode::from(code)
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            exit_code(&err)
        }
    }
}
