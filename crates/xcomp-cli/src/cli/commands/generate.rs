//! `xcomp generate` – rebuild compliance_suite.json.

use anyhow::Result;
use xcomp_core::checker::ExternalChecker;
use xcomp_core::config::XcompConfig;
use xcomp_core::layout::Layout;
use xcomp_core::prepare;

use super::summary;

pub fn run_generate(cfg: &XcompConfig) -> Result<()> {
    let layout = Layout::from_config(cfg);
    ensure_inputs(&layout)?;
    let checker = ExternalChecker::from_layout(&layout, &cfg.checker);
    let outcome = prepare::generate(&checker, &layout)?;
    summary::print_generate(&outcome);
    Ok(())
}

/// The checker and suite come from `xcomp prepare`; fail early if they are missing.
pub(super) fn ensure_inputs(layout: &Layout) -> Result<()> {
    for path in [layout.checker_path(), layout.suite_path()] {
        if !path.is_file() {
            anyhow::bail!("{} not found; run `xcomp prepare` first", path.display());
        }
    }
    Ok(())
}
