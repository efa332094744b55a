//! Error types for the driver
//!
//! Every failure is either fatal for the run or surfaces as `Valid: false`
//! in the report; nothing here is retried.

use std::io;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Invalid benchmark configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("bits per word must be between 1 and 64, got `{0}`")]
    BitsPerWord(String),

    #[error("time budget must be a non-negative number of seconds, got `{0}`")]
    TimeBudget(String),
}

/// Failure of a single sieve invocation.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error while talking to the sieve: {0}")]
    Io(#[from] io::Error),

    #[error("sieve exited with status {status}")]
    Failed { status: i32 },

    #[error("sieve output is not valid UTF-8: {0}")]
    Output(#[from] FromUtf8Error),
}

impl RunError {
    /// Process exit status the driver should terminate with.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::Failed { status } => *status,
            _ => 1,
        }
    }
}

/// Failure turning sieve output into a prime count.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("word {index} of the sieve output is not an unsigned integer: `{token}`")]
    Parse { index: usize, token: String },

    #[error("bitmap holds {available} bits but the limit needs {needed}")]
    TooShort { needed: u64, available: u64 },
}

/// Anything that ends a benchmark run early.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

impl DriverError {
    pub fn exit_code(&self) -> i32 {
        match self {
            DriverError::Run(err) => err.exit_code(),
            DriverError::Decode(_) => 1,
        }
    }
}
