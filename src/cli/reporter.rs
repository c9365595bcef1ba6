// src/cli/reporter.rs

use crate::{
    core::generator::GenError,
    system::copier::{CopyOutcome, CopyStatus},
};
use colored::Colorize;

/// Where the handler sends everything the user should see.
pub trait Reporter {
    /// One line per written, skipped or unchanged file.
    fn status(&mut self, outcome: &CopyOutcome);
    fn info(&mut self, message: &str);
    fn warn(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Reporter that writes to the terminal: statuses and info to stdout,
/// warnings and errors to stderr.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn status(&mut self, outcome: &CopyOutcome) {
        let label = status_label(outcome.status);
        let label = match outcome.status {
            CopyStatus::Created => label.green(),
            CopyStatus::Overwritten => label.yellow(),
            CopyStatus::Identical => label.cyan(),
            CopyStatus::Skipped => label.dimmed(),
        };
        println!("* {} {}", label, outcome.destination.display());
    }

    fn info(&mut self, message: &str) {
        println!("{}", message);
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", message.yellow());
    }

    fn error(&mut self, message: &str) {
        eprintln!("\n{}: {}", t!("common.error").red().bold(), message);
    }
}

fn status_label(status: CopyStatus) -> &'static str {
    match status {
        CopyStatus::Created => t!("copy.creating"),
        CopyStatus::Overwritten => t!("copy.overwriting"),
        CopyStatus::Identical => t!("copy.identical"),
        CopyStatus::Skipped => t!("copy.skipping"),
    }
}

/// Plain status line, as printed without colors.
pub fn status_line(outcome: &CopyOutcome) -> String {
    format!("* {} {}", status_label(outcome.status), outcome.destination.display())
}

/// Message shown for a failed run. Argument errors carry the usage text.
pub fn render_error(err: &GenError) -> String {
    if err.is_usage_error() {
        format!("{}\n\n{}", err, t!("cli.usage").trim_end())
    } else {
        err.to_string()
    }
}
