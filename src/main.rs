//! Sieve driver CLI entry point

use std::io::{self, Write};
use std::process;

use clap::Parser;
use sieve_driver::{drive, Cli, DriverError};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let mut runner = cli.runner();
    let report = drive(runner.as_mut(), &config)?;

    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", report)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    // Logs go to stderr; stdout carries only the report
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        // A failing sieve hands its own exit status through
        let code = err.downcast_ref::<DriverError>().map_or(1, DriverError::exit_code);
        error!("{:#}", err);
        process::exit(code);
    }
}
