//! `xcomp merge` – index DOAP files and enrich listings.

use anyhow::Result;
use xcomp_core::checker::ExternalChecker;
use xcomp_core::config::XcompConfig;
use xcomp_core::layout::Layout;
use xcomp_core::prepare;

use super::generate::ensure_inputs;
use super::summary;

pub fn run_merge(cfg: &XcompConfig) -> Result<()> {
    let layout = Layout::from_config(cfg);
    ensure_inputs(&layout)?;
    let checker = ExternalChecker::from_layout(&layout, &cfg.checker);
    let (report, records, listings) = prepare::merge(&checker, &layout, &cfg.listing_categories)?;
    summary::print_merge(&report, records, &listings);
    Ok(())
}
