//! Download failure kinds.

use thiserror::Error;

/// Why a bounded download did not produce a complete file.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Curl reported an error (DNS, refused connection, timeout, ...).
    #[error("network: {0}")]
    Network(#[from] curl::Error),
    /// Final response status was outside 200..400.
    #[error("HTTP {code}")]
    Status { code: u32 },
    /// Body exceeded the configured cap; the destination may hold a partial file.
    #[error("response exceeds {limit} bytes (received {received})")]
    TooLarge { limit: u64, received: u64 },
    /// Destination could not be created or written.
    #[error("storage: {0}")]
    Io(#[from] std::io::Error),
}

impl DownloadError {
    /// True when the server was reached but refused or over-delivered.
    pub fn is_remote(&self) -> bool {
        matches!(self, DownloadError::Status { .. } | DownloadError::TooLarge { .. })
    }
}
