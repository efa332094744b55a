//! Benchmark report
//!
//! Rendered as the optional prime listing, the human-readable summary line,
//! and the `;`-separated line the drag-race tooling parses.

use std::fmt;
use std::time::Duration;

/// Threads the driver uses; always one.
pub const THREADS: u32 = 1;

/// Fixed tags closing the machine-readable line.
pub const TAGS: &str = "algorithm=base,faithful=no,bits=1";

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub label: String,
    pub passes: u64,
    pub duration: Duration,
    pub count: u64,
    pub valid: bool,
    pub primes: Option<Vec<u64>>,
}

impl Report {
    /// Passes per second.
    pub fn average(&self) -> f64 {
        self.passes as f64 / self.duration.as_secs_f64()
    }

    /// `Passes: …, Time: …, Avg: …, Count: …, Valid: …`
    pub fn summary_line(&self) -> String {
        format!(
            "Passes: {}, Time: {:?}, Avg: {:?}, Count: {}, Valid: {}",
            self.passes,
            self.duration.as_secs_f64(),
            self.average(),
            self.count,
            self.valid
        )
    }

    /// `<label>;<passes>;<duration>;1;algorithm=base,faithful=no,bits=1`
    pub fn result_line(&self) -> String {
        format!(
            "{};{};{:?};{};{}",
            self.label,
            self.passes,
            self.duration.as_secs_f64(),
            THREADS,
            TAGS
        )
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(primes) = &self.primes {
            for p in primes {
                write!(f, "{}, ", p)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "{}", self.summary_line())?;
        writeln!(f, "{}", self.result_line())
    }
}
