//! Bounded single-stream HTTP downloader.
//!
//! Streams a response body to a local file, aborting once the payload exceeds
//! a fixed cap or when the server answers outside 200..400. Partial files are
//! left on disk on failure.

mod error;
mod single;

pub use error::DownloadError;
pub use single::fetch;

use crate::config::XcompConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Preferred chunk size handed to the write callback.
pub const CHUNK_SIZE: usize = 8 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOptions {
    /// Abort once more than this many body bytes arrived.
    pub max_bytes: u64,
    /// Connect timeout; also the stall window for an established transfer.
    pub connect_timeout: Duration,
}

impl Default for DownloadOptions {
    fn default() -> Self {
        Self {
            max_bytes: crate::config::DEFAULT_MAX_DOWNLOAD_BYTES,
            connect_timeout: Duration::from_secs(crate::config::DEFAULT_CONNECT_TIMEOUT_SECS),
        }
    }
}

impl DownloadOptions {
    pub fn from_config(cfg: &XcompConfig) -> Self {
        Self {
            max_bytes: cfg.max_download_bytes,
            connect_timeout: cfg.connect_timeout(),
        }
    }
}

/// A completed download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub bytes: u64,
    /// Final HTTP status (after redirects).
    pub status: u32,
    /// Lowercase hex SHA-256 of the payload.
    pub sha256: String,
}

/// True for the statuses a download accepts: 200 through 399.
pub fn is_success_status(code: u32) -> bool {
    (200..400).contains(&code)
}

/// Download `url` into `dest`, logging any failure. Returns whether the file
/// is complete; callers that need the reason use [`fetch`].
pub fn download_file(url: &str, dest: &Path, opts: &DownloadOptions) -> bool {
    match fetch(url, dest, opts) {
        Ok(done) => {
            tracing::info!(
                url,
                path = %done.path.display(),
                bytes = done.bytes,
                sha256 = %done.sha256,
                "download complete"
            );
            true
        }
        Err(e) => {
            tracing::warn!(url, path = %dest.display(), "download failed: {}", e);
            false
        }
    }
}
