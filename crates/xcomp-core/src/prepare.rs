//! The full preparation run: download, summarize the suite, index
//! descriptors and enrich listings.

use crate::checker::{Checker, ExternalChecker};
use crate::compliance::{self, GenerateOutcome, IndexReport, ListingSummary};
use crate::config::XcompConfig;
use crate::downloader::{self, DownloadOptions, Downloaded};
use crate::layout::Layout;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct PrepareReport {
    pub downloads: Vec<Downloaded>,
    pub generate: GenerateOutcome,
    pub index: IndexReport,
    pub records: usize,
    pub listings: Vec<ListingSummary>,
}

/// Fetch the suite and the checker into the staging directory. Either
/// download failing is fatal: the checker must never run against a missing
/// or truncated file.
pub fn fetch_inputs(cfg: &XcompConfig, layout: &Layout) -> Result<Vec<Downloaded>> {
    fs::create_dir_all(layout.download_dir())
        .with_context(|| format!("failed to create {}", layout.download_dir().display()))?;
    let opts = DownloadOptions::from_config(cfg);
    let sources = [
        (&cfg.compliance_suite_url, layout.suite_path()),
        (&cfg.checker_url, layout.checker_path()),
    ];
    let mut done = Vec::with_capacity(sources.len());
    for (url, dest) in sources {
        let d = downloader::fetch(url, &dest, &opts)
            .with_context(|| format!("download of {} failed", url))?;
        tracing::info!(url = %url, bytes = d.bytes, sha256 = %d.sha256, "fetched {}", dest.display());
        done.push(d);
    }
    if cfg.checker.interpreter.is_none() {
        mark_executable(&layout.checker_path())?;
    }
    Ok(done)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)
        .with_context(|| format!("failed to stat {}", path.display()))?
        .permissions();
    perms.set_mode(perms.mode() | 0o755);
    fs::set_permissions(path, perms)
        .with_context(|| format!("failed to mark {} executable", path.display()))
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<()> {
    Ok(())
}

/// Regenerate `compliance_suite.json` with the given checker.
pub fn generate(checker: &dyn Checker, layout: &Layout) -> Result<GenerateOutcome> {
    fs::create_dir_all(layout.data_dir())
        .with_context(|| format!("failed to create {}", layout.data_dir().display()))?;
    compliance::generate_compliance_suite(checker, &layout.compliance_suite_json())
}

/// Index every descriptor and enrich each configured listing.
pub fn merge(
    checker: &dyn Checker,
    layout: &Layout,
    categories: &[String],
) -> Result<(IndexReport, usize, Vec<ListingSummary>)> {
    let (index, report) = compliance::build_index(checker, &layout.descriptor_dir())?;
    let listings = compliance::merge_listings(layout, categories, &index)?;
    Ok((report, index.len(), listings))
}

/// Run every step in order with the checker downloaded into the staging directory.
pub fn run_prepare(cfg: &XcompConfig) -> Result<PrepareReport> {
    cfg.validate()?;
    let layout = Layout::from_config(cfg);

    let downloads = fetch_inputs(cfg, &layout)?;
    let checker = ExternalChecker::from_layout(&layout, &cfg.checker);
    let generated = generate(&checker, &layout)?;
    let (index, records, listings) = merge(&checker, &layout, &cfg.listing_categories)?;

    Ok(PrepareReport {
        downloads,
        generate: generated,
        index,
        records,
        listings,
    })
}
