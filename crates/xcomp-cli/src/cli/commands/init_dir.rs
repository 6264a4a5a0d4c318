//! `xcomp init-dir` – reset a directory to empty.

use anyhow::Result;
use std::path::Path;
use xcomp_core::storage;

pub fn run_init_dir(path: &Path) -> Result<()> {
    storage::initialize_directory(path)?;
    println!("initialized {}", path.display());
    Ok(())
}
