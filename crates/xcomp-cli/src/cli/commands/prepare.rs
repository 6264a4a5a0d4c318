//! `xcomp prepare` – the full download, generate and merge run.

use anyhow::Result;
use xcomp_core::config::XcompConfig;
use xcomp_core::prepare;

use super::summary;

pub fn run_prepare(cfg: &XcompConfig) -> Result<()> {
    let report = prepare::run_prepare(cfg)?;
    for d in &report.downloads {
        summary::print_download(d);
    }
    summary::print_generate(&report.generate);
    summary::print_merge(&report.index, report.records, &report.listings);
    tracing::info!("prepare completed");
    Ok(())
}
