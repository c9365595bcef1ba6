// src/bin/notifygen.rs

use anyhow::{Context, Result};
use clap::Parser;
use notifygen::{
    cli::{
        Cli, handler,
        reporter::{ConsoleReporter, Reporter},
    },
    system::prompter::InteractivePrompter,
};
use std::env;

/// The main entry point of the `notifygen` application.
/// It sets up logging, parses arguments, runs the generator and exits with
/// the code the run produced.
fn main() {
    env_logger::init();

    let mut reporter = ConsoleReporter;
    let code = match run_cli(Cli::parse(), &mut reporter) {
        Ok(code) => code,
        Err(e) => {
            reporter.error(&format!("{:#}", e));
            handler::EXIT_FAILURE
        }
    };
    std::process::exit(code);
}

fn run_cli(cli: Cli, reporter: &mut ConsoleReporter) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);

    let cwd = env::current_dir().context("Could not read the current directory")?;
    let mut prompter = InteractivePrompter;
    Ok(handler::handle(&cli.args, &cwd, &mut prompter, reporter))
}
