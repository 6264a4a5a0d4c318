//! Build the name → record index by running the checker over every descriptor.

use super::record::ComplianceRecord;
use crate::checker::{CheckOutcome, Checker};
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Compliance records keyed by the package name the checker reported.
#[derive(Debug, Clone, Default)]
pub struct ComplianceIndex {
    records: HashMap<String, ComplianceRecord>,
}

impl ComplianceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert keyed by `record.name`; returns the record it replaced, if any.
    pub fn insert(&mut self, record: ComplianceRecord) -> Option<ComplianceRecord> {
        self.records.insert(record.name.clone(), record)
    }

    /// Exact, case-sensitive lookup.
    pub fn get(&self, name: &str) -> Option<&ComplianceRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<ComplianceRecord> for ComplianceIndex {
    fn from_iter<I: IntoIterator<Item = ComplianceRecord>>(iter: I) -> Self {
        let mut index = Self::new();
        for record in iter {
            index.insert(record);
        }
        index
    }
}

/// A descriptor whose checker run failed and was left out of the index.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedDescriptor {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndexReport {
    /// Descriptors that produced a record.
    pub checked: usize,
    pub skipped: Vec<SkippedDescriptor>,
    /// Records that replaced an earlier one with the same name.
    pub collisions: usize,
}

/// Run `checker` on every regular file below `descriptor_dir` and index the
/// results by name.
///
/// Files are visited in lexicographic order at each directory level, so when
/// two descriptors report the same name the one visited last wins. Checker
/// exit failures skip that file; output that is not a JSON record aborts.
pub fn build_index(
    checker: &dyn Checker,
    descriptor_dir: &Path,
) -> Result<(ComplianceIndex, IndexReport)> {
    if !descriptor_dir.is_dir() {
        anyhow::bail!("descriptor directory {} not found", descriptor_dir.display());
    }

    let mut index = ComplianceIndex::new();
    let mut report = IndexReport::default();

    for entry in WalkDir::new(descriptor_dir).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("failed to walk {}", descriptor_dir.display()))?;
        // Symlinked descriptors count; symlinked directories are not descended.
        if !entry.path().is_file() {
            continue;
        }
        let path = entry.path();
        match checker.check(Some(path))? {
            CheckOutcome::Success(value) => {
                let record = ComplianceRecord::from_value(value).with_context(|| {
                    format!("checker output for {} is not a compliance record", path.display())
                })?;
                tracing::debug!(path = %path.display(), name = %record.name, "indexed descriptor");
                if let Some(previous) = index.insert(record) {
                    tracing::warn!(
                        name = %previous.name,
                        path = %path.display(),
                        "duplicate package name, keeping the later descriptor"
                    );
                    report.collisions += 1;
                }
                report.checked += 1;
            }
            failure @ CheckOutcome::ToolFailure { .. } => {
                tracing::warn!(path = %path.display(), "skipping descriptor: {}", failure);
                report.skipped.push(SkippedDescriptor {
                    path: path.to_path_buf(),
                    reason: failure.to_string(),
                });
            }
            CheckOutcome::ParseFailure { raw, error } => {
                anyhow::bail!(
                    "checker output for {} is not JSON ({}): {}",
                    path.display(),
                    error,
                    raw.trim()
                );
            }
        }
    }

    tracing::info!(
        records = index.len(),
        skipped = report.skipped.len(),
        "compliance index built from {}",
        descriptor_dir.display()
    );
    Ok((index, report))
}
