//! Checker launched as a child process.

use super::{CheckOutcome, Checker};
use crate::config::CheckerConfig;
use crate::layout::Layout;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Runs `[interpreter] <tool> [-v] <suite> [subject]` and waits for it.
/// No timeout is applied; a hung checker blocks the caller.
#[derive(Debug, Clone)]
pub struct ExternalChecker {
    interpreter: Option<String>,
    tool: PathBuf,
    suite: PathBuf,
    verbose: bool,
}

impl ExternalChecker {
    pub fn new(interpreter: Option<String>, tool: PathBuf, suite: PathBuf) -> Self {
        Self {
            interpreter,
            tool,
            suite,
            verbose: true,
        }
    }

    /// Checker and suite from the staging directory, launched as configured.
    pub fn from_layout(layout: &Layout, cfg: &CheckerConfig) -> Self {
        Self::new(cfg.interpreter.clone(), layout.checker_path(), layout.suite_path())
            .verbose(cfg.verbose)
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn command(&self, subject: Option<&Path>) -> Command {
        let mut cmd = match &self.interpreter {
            Some(program) => {
                let mut c = Command::new(program);
                c.arg(&self.tool);
                c
            }
            None => Command::new(&self.tool),
        };
        if self.verbose {
            cmd.arg("-v");
        }
        cmd.arg(&self.suite);
        if let Some(subject) = subject {
            cmd.arg(subject);
        }
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        cmd
    }

    /// Program and arguments as they will be passed to the OS.
    pub fn argv(&self, subject: Option<&Path>) -> Vec<String> {
        let cmd = self.command(subject);
        std::iter::once(cmd.get_program())
            .chain(cmd.get_args())
            .map(|s| s.to_string_lossy().into_owned())
            .collect()
    }
}

impl Checker for ExternalChecker {
    fn check(&self, subject: Option<&Path>) -> Result<CheckOutcome> {
        let output = self
            .command(subject)
            .output()
            .with_context(|| format!("failed to start checker {}", self.argv(subject).join(" ")))?;
        let outcome = CheckOutcome::from_output(
            output.status.success(),
            output.status.code(),
            &output.stdout,
            &output.stderr,
        );
        tracing::debug!(
            subject = %subject.map(|p| p.display().to_string()).unwrap_or_default(),
            "checker finished: {}",
            outcome
        );
        Ok(outcome)
    }
}
