//! Single-stream HTTP GET with a payload cap.
//!
//! The body is written sequentially to the destination, which is only created
//! once the first chunk of an accepted (200..400) response arrives.

use super::{is_success_status, DownloadError, DownloadOptions, Downloaded, CHUNK_SIZE};
use sha2::{Digest, Sha256};
use std::cell::{Cell, RefCell};
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::str;

/// Downloads `url` into `dest` with a single GET, following redirects.
/// Returns the byte count and digest on success.
pub fn fetch(url: &str, dest: &Path, opts: &DownloadOptions) -> Result<Downloaded, DownloadError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.connect_timeout(opts.connect_timeout)?;
    // Stalled transfers fail after the same window as the connect timeout.
    easy.low_speed_limit(1)?;
    easy.low_speed_time(opts.connect_timeout)?;
    easy.buffer_size(CHUNK_SIZE)?;

    let status = Cell::new(0u32);
    let received = Cell::new(0u64);
    let sink: RefCell<Option<File>> = RefCell::new(None);
    let hasher = RefCell::new(Sha256::new());
    let aborted: RefCell<Option<DownloadError>> = RefCell::new(None);

    let performed = {
        let mut transfer = easy.transfer();
        // Every response in a redirect chain starts with a status line; the
        // last one seen before the body is the final status.
        transfer.header_function(|line| {
            if let Some(code) = parse_status_line(line) {
                status.set(code);
            }
            true
        })?;
        transfer.write_function(|data| {
            let code = status.get();
            if !is_success_status(code) {
                aborted.replace(Some(DownloadError::Status { code }));
                return Ok(0);
            }
            if let Err(e) = store_chunk(&mut sink.borrow_mut(), dest, data) {
                aborted.replace(Some(DownloadError::Io(e)));
                return Ok(0);
            }
            hasher.borrow_mut().update(data);
            let total = received.get() + data.len() as u64;
            received.set(total);
            if total > opts.max_bytes {
                aborted.replace(Some(DownloadError::TooLarge {
                    limit: opts.max_bytes,
                    received: total,
                }));
                return Ok(0);
            }
            Ok(data.len())
        })?;
        transfer.perform()
    };

    // A callback abort surfaces from curl as a write error; report the cause instead.
    if let Some(e) = aborted.into_inner() {
        return Err(e);
    }
    performed?;

    let code = easy.response_code()?;
    if !is_success_status(code) {
        return Err(DownloadError::Status { code });
    }

    let mut file = match sink.into_inner() {
        Some(f) => f,
        None => File::create(dest)?,
    };
    file.flush()?;

    Ok(Downloaded {
        path: dest.to_path_buf(),
        bytes: received.get(),
        status: code,
        sha256: hex::encode(hasher.into_inner().finalize()),
    })
}

fn store_chunk(sink: &mut Option<File>, dest: &Path, data: &[u8]) -> io::Result<()> {
    if sink.is_none() {
        *sink = Some(File::create(dest)?);
    }
    if let Some(file) = sink.as_mut() {
        file.write_all(data)?;
    }
    Ok(())
}

/// Parse `HTTP/1.1 200 OK` (or `HTTP/2 302`) into its status code.
fn parse_status_line(line: &[u8]) -> Option<u32> {
    let line = str::from_utf8(line).ok()?;
    if !line.starts_with("HTTP/") {
        return None;
    }
    line.split_whitespace().nth(1)?.parse().ok()
}
