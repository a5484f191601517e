//! Bisecta - find a root of a function on an interval by bisection.

use std::process::ExitCode;

use anyhow::Context;
use bisecta_cli::{Cli, Formatter, Settings};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    settings.apply(cli);

    let formatter = Formatter::new(settings.format, settings.color);
    let request = settings.request();

    match bisecta_cli::run(&request) {
        Ok(report) => {
            println!("{}", formatter.format_report(&request, &report)?);
            Ok(if report.outcome.is_success() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Err(err) => {
            println!("{}", formatter.format_parse_error(&err)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Logs go to stderr. Stdout carries only the report.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
