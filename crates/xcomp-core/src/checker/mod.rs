//! External compliance checker invocation.
//!
//! The checker evaluates a DOAP descriptor against the compliance suite and
//! prints one JSON object on stdout. Its result is surfaced as a
//! [`CheckOutcome`] so callers decide whether a failure skips the unit of work
//! or aborts the run.

mod external;

pub use external::ExternalChecker;

use anyhow::Result;
use std::fmt;
use std::path::Path;

/// Result of one checker run that actually started.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Exit status zero and stdout parsed as JSON.
    Success(serde_json::Value),
    /// Non-zero exit (or killed by a signal, `code == None`).
    ToolFailure { code: Option<i32>, stderr: String },
    /// Exit status zero but stdout is not JSON.
    ParseFailure { raw: String, error: String },
}

impl CheckOutcome {
    /// Classify a finished process from its exit code and captured output.
    pub fn from_output(success: bool, code: Option<i32>, stdout: &[u8], stderr: &[u8]) -> Self {
        if !success {
            return CheckOutcome::ToolFailure {
                code,
                stderr: String::from_utf8_lossy(stderr).trim().to_string(),
            };
        }
        match serde_json::from_slice(stdout) {
            Ok(value) => CheckOutcome::Success(value),
            Err(e) => CheckOutcome::ParseFailure {
                raw: String::from_utf8_lossy(stdout).into_owned(),
                error: e.to_string(),
            },
        }
    }
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckOutcome::Success(_) => write!(f, "ok"),
            CheckOutcome::ToolFailure { code: Some(c), stderr } => {
                write!(f, "checker exited with status {}", c)?;
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr)?;
                }
                Ok(())
            }
            CheckOutcome::ToolFailure { code: None, .. } => {
                write!(f, "checker terminated by signal")
            }
            CheckOutcome::ParseFailure { error, .. } => {
                write!(f, "checker output is not JSON: {}", error)
            }
        }
    }
}

/// Runs the compliance checker. `subject` is the descriptor file to evaluate;
/// `None` asks for the suite summary itself.
///
/// `Err` means the checker could not be started at all.
pub trait Checker {
    fn check(&self, subject: Option<&Path>) -> Result<CheckOutcome>;
}
