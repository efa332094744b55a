//! Sieve invocation
//!
//! A runner takes a limit and hands back the raw bitmap text for one pass.
//! The benchmark loop only sees [`SieveRunner`], so a subprocess, the
//! built-in sieve, or a test closure all plug in the same way.

use std::io::{self, Write};
use std::process::{Command, ExitStatus, Stdio};

use tracing::trace;

use crate::bitmap::WordWidth;
use crate::error::RunError;
use crate::sieve::sieve_bitmap;

/// One blocking sieve invocation per call.
pub trait SieveRunner {
    fn run(&mut self, limit: u64) -> Result<String, RunError>;
}

impl<F> SieveRunner for F
where
    F: FnMut(u64) -> Result<String, RunError>,
{
    fn run(&mut self, limit: u64) -> Result<String, RunError> {
        self(limit)
    }
}

// ─── Subprocess ────────────────────────────────────────────────────────────

/// Runs an external program, feeding the limit on stdin and reading the
/// bitmap from stdout.
#[derive(Debug, Clone)]
pub struct ProcessRunner {
    program: String,
    args: Vec<String>,
}

impl ProcessRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), args: Vec::new() }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }
}

impl SieveRunner for ProcessRunner {
    fn run(&mut self, limit: u64) -> Result<String, RunError> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| RunError::Spawn { program: self.program.clone(), source })?;

        // Dropping stdin closes the pipe so the sieve sees EOF.
        if let Some(mut stdin) = child.stdin.take() {
            match writeln!(stdin, "{}", limit) {
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(RunError::Failed { status: failure_status(output.status) });
        }

        trace!(bytes = output.stdout.len(), "sieve output received");
        Ok(String::from_utf8(output.stdout)?)
    }
}

/// Exit status to mirror for a failed sieve.
///
/// A child killed by signal `n` maps to `256 - n` (SIGKILL → 247), the
/// status a Python driver gets from `sys.exit(-n)`. Anything without a code
/// or signal maps to 1.
fn failure_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return (-signal) & 0xff;
        }
    }
    1
}

// ─── In-process ────────────────────────────────────────────────────────────

/// Runs the built-in bit-packed sieve and renders it in the wire format.
#[derive(Debug, Clone, Copy, Default)]
pub struct InProcessRunner {
    width: WordWidth,
}

impl InProcessRunner {
    pub fn new(width: WordWidth) -> Self {
        Self { width }
    }
}

impl SieveRunner for InProcessRunner {
    fn run(&mut self, limit: u64) -> Result<String, RunError> {
        let mut text = sieve_bitmap(limit, self.width).to_string();
        text.push('\n');
        Ok(text)
    }
}
