//! Persist the checker's summary of the compliance suite.

use crate::checker::{CheckOutcome, Checker};
use crate::storage;
use anyhow::Result;
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    Written,
    /// The checker exited non-zero; nothing was written.
    Skipped { reason: String },
}

/// Run the checker against the suite alone and write its JSON to `out_path`.
///
/// A failing checker is logged and leaves any previous file untouched;
/// output that is not JSON is an error.
pub fn generate_compliance_suite(checker: &dyn Checker, out_path: &Path) -> Result<GenerateOutcome> {
    match checker.check(None)? {
        CheckOutcome::Success(value) => {
            storage::write_json_pretty(out_path, &value)?;
            tracing::info!("wrote {}", out_path.display());
            Ok(GenerateOutcome::Written)
        }
        failure @ CheckOutcome::ToolFailure { .. } => {
            tracing::warn!("compliance suite summary not generated: {}", failure);
            Ok(GenerateOutcome::Skipped {
                reason: failure.to_string(),
            })
        }
        CheckOutcome::ParseFailure { raw, error } => {
            anyhow::bail!("checker suite output is not JSON ({}): {}", error, raw.trim())
        }
    }
}
