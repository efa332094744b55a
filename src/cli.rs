//! Command-line surface
//!
//! Flags map one-to-one onto [`BenchConfig`]; each can also come from a
//! `SIEVE_*` environment variable.

use std::time::Duration;

use clap::Parser;

use crate::bitmap::WordWidth;
use crate::config::{BenchConfig, DEFAULT_INTERPRETER};
use crate::error::ConfigError;
use crate::runner::{InProcessRunner, ProcessRunner, SieveRunner};

/// Benchmark an external bit-packed prime sieve
#[derive(Parser, Debug)]
#[command(name = "sieve-driver", version, about, long_about = None)]
pub struct Cli {
    /// Bits per word, 1 to 64 (each word must fit in a u64)
    #[arg(short, long, default_value = "32", value_parser = parse_bits, env = "SIEVE_BITS_PER_WORD")]
    pub bits_per_word: WordWidth,

    /// Upper limit for calculating prime numbers
    #[arg(short, long, default_value_t = 100_000, env = "SIEVE_LIMIT")]
    pub limit: u64,

    /// Time limit in seconds
    #[arg(short, long, default_value = "5", value_parser = parse_budget, env = "SIEVE_TIME")]
    pub time: Duration,

    /// Print found prime numbers
    #[arg(short, long)]
    pub show: bool,

    /// Interpreter that runs the sieve program
    #[arg(long, default_value = DEFAULT_INTERPRETER, env = "SIEVE_INTERPRETER")]
    pub interpreter: String,

    /// Sieve program [default: primes-<bits>bit.ws]
    #[arg(long, env = "SIEVE_PROGRAM")]
    pub program: Option<String>,

    /// Label for the result line [default: rzuckerm-whitespace-<bits>bit]
    #[arg(long, env = "SIEVE_LABEL")]
    pub label: Option<String>,

    /// Use the built-in sieve; overrides --interpreter and --program
    #[arg(long)]
    pub in_process: bool,
}

fn parse_bits(s: &str) -> Result<WordWidth, ConfigError> {
    let bits = s.trim().parse::<u32>().map_err(|_| ConfigError::BitsPerWord(s.to_string()))?;
    WordWidth::new(bits)
}

fn parse_budget(s: &str) -> Result<Duration, ConfigError> {
    s.trim()
        .parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| ConfigError::TimeBudget(s.to_string()))
}

impl Cli {
    pub fn config(&self) -> BenchConfig {
        BenchConfig {
            bits_per_word: self.bits_per_word,
            limit: self.limit,
            budget: self.time,
            show: self.show,
            label: self
                .label
                .clone()
                .unwrap_or_else(|| BenchConfig::default_label(self.bits_per_word)),
        }
    }

    pub fn runner(&self) -> Box<dyn SieveRunner> {
        if self.in_process {
            return Box::new(InProcessRunner::new(self.bits_per_word));
        }
        let program = self
            .program
            .clone()
            .unwrap_or_else(|| BenchConfig::default_program(self.bits_per_word));
        Box::new(ProcessRunner::new(self.interpreter.clone()).arg(program))
    }
}
