//! Timed benchmark loop
//!
//! Passes run back to back until the time budget is spent. The budget is
//! only checked between passes, so every run completes at least one.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::BenchConfig;
use crate::decode::decode;
use crate::error::{DriverError, RunError};
use crate::reference::{expected_count, validate};
use crate::report::Report;
use crate::runner::SieveRunner;

/// Outcome of the timing loop, before decoding.
#[derive(Debug, Clone)]
pub struct RunRecord {
    pub passes: u64,
    pub duration: Duration,
    /// Raw output of the final pass; earlier outputs are dropped.
    pub output: String,
}

/// Invoke `runner` until `budget` has elapsed.
///
/// The first failing invocation ends the loop and its error is returned
/// as is.
pub fn run_passes<R>(runner: &mut R, limit: u64, budget: Duration) -> Result<RunRecord, RunError>
where
    R: SieveRunner + ?Sized,
{
    let start = Instant::now();
    let mut passes = 0u64;

    loop {
        let output = runner.run(limit)?;
        passes += 1;
        let duration = start.elapsed();
        debug!(pass = passes, elapsed = ?duration, "pass complete");

        if duration >= budget {
            return Ok(RunRecord { passes, duration, output });
        }
    }
}

/// Run the full benchmark: timed passes, then decode and validate the
/// last result.
pub fn drive<R>(runner: &mut R, config: &BenchConfig) -> Result<Report, DriverError>
where
    R: SieveRunner + ?Sized,
{
    info!(
        limit = config.limit,
        bits_per_word = config.bits_per_word.get(),
        budget = ?config.budget,
        "starting benchmark"
    );

    let record = run_passes(runner, config.limit, config.budget)?;
    info!(passes = record.passes, elapsed = ?record.duration, "benchmark finished");

    let decoded = decode(&record.output, config.bits_per_word, config.limit, config.show)?;
    let valid = validate(config.limit, decoded.count);
    if !valid {
        warn!(
            limit = config.limit,
            count = decoded.count,
            expected = ?expected_count(config.limit),
            "prime count does not match reference"
        );
    }

    Ok(Report {
        label: config.label.clone(),
        passes: record.passes,
        duration: record.duration,
        count: decoded.count,
        valid,
        primes: decoded.primes,
    })
}
