//! `xcomp download` – one bounded download.

use anyhow::{Context, Result};
use std::path::Path;
use xcomp_core::config::XcompConfig;
use xcomp_core::downloader::{self, DownloadOptions};

use super::summary;

pub fn run_download(cfg: &XcompConfig, url: &str, dest: &Path) -> Result<()> {
    cfg.validate()?;
    let opts = DownloadOptions::from_config(cfg);
    match downloader::fetch(url, dest, &opts) {
        Ok(done) => {
            summary::print_download(&done);
            Ok(())
        }
        Err(e) if e.is_remote() => {
            Err(e).with_context(|| format!("{} was reached but rejected the download", url))
        }
        Err(e) => Err(e).with_context(|| format!("could not download {}", url)),
    }
}
