//! On-disk layout of the staging and data directories.

use crate::config::XcompConfig;
use std::path::{Path, PathBuf};

pub const SUITE_FILE: &str = "compliance-suite.xml";
pub const CHECKER_FILE: &str = "compliancer";
pub const DESCRIPTOR_DIR: &str = "doap_files";
pub const COMPLIANCE_SUITE_JSON: &str = "compliance_suite.json";

/// Resolves every file the preparation run reads or writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    download_dir: PathBuf,
    data_dir: PathBuf,
}

impl Layout {
    pub fn new(download_dir: impl Into<PathBuf>, data_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(cfg: &XcompConfig) -> Self {
        Self::new(&cfg.download_dir, &cfg.data_dir)
    }

    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn suite_path(&self) -> PathBuf {
        self.download_dir.join(SUITE_FILE)
    }

    pub fn checker_path(&self) -> PathBuf {
        self.download_dir.join(CHECKER_FILE)
    }

    /// Directory of DOAP descriptor files, walked recursively.
    pub fn descriptor_dir(&self) -> PathBuf {
        self.download_dir.join(DESCRIPTOR_DIR)
    }

    pub fn compliance_suite_json(&self) -> PathBuf {
        self.data_dir.join(COMPLIANCE_SUITE_JSON)
    }

    /// Listing file for a category, e.g. `clients` → `data/clients_list_doap.json`.
    pub fn listing_path(&self, category: &str) -> PathBuf {
        self.data_dir.join(format!("{}_list_doap.json", category))
    }
}
