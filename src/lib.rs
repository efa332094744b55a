//! Sieve Driver
//!
//! Benchmarks an external prime sieve: runs it repeatedly for a time
//! budget, decodes the bit-packed output of the final pass, validates the
//! prime count, and reports throughput.
//!
//! ## Modules
//! - `bitmap` / `decode`: odd-only bitmap parsing and prime counting
//! - `reference`: known π(n) values
//! - `runner`: subprocess and in-process sieve invocation
//! - `bench`: the timed pass loop
//! - `report`: output formatting
//! - `cli` / `config`: command line and benchmark settings
//! - `sieve`: bit-packed reference sieve that emits the same format

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod bench;
pub mod bitmap;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod reference;
pub mod report;
pub mod runner;
pub mod sieve;

pub use bench::{drive, run_passes, RunRecord};
pub use bitmap::{SieveBitmap, WordWidth};
pub use cli::Cli;
pub use config::BenchConfig;
pub use decode::{decode, Decoded};
pub use error::{ConfigError, DecodeError, DriverError, RunError};
pub use reference::{expected_count, validate, PRIME_COUNTS};
pub use report::Report;
pub use runner::{InProcessRunner, ProcessRunner, SieveRunner};
