//! Directory lifecycle and JSON file I/O.
//!
//! JSON files are written to a `.part` sibling and renamed into place so an
//! interrupted run never leaves a truncated listing behind.

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `clients.json` → `clients.json.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Ensure `path` exists and is empty: an existing directory is removed
/// recursively and recreated. Fails if `path` exists but is not a directory.
///
/// Not safe against concurrent callers on the same path.
pub fn initialize_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        fs::remove_dir_all(path)
            .with_context(|| format!("failed to remove {}", path.display()))?;
    } else if path.exists() {
        anyhow::bail!("{} exists and is not a directory", path.display());
    }
    fs::create_dir_all(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(())
}

pub fn read_json(path: &Path) -> Result<serde_json::Value> {
    let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_slice(&data).with_context(|| format!("invalid JSON in {}", path.display()))
}

/// Serialize with a 4-space indent and trailing newline.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser).context("JSON serialization failed")?;
    buf.push(b'\n');
    Ok(buf)
}

/// Write `value` pretty-printed to `path`, replacing it atomically.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = to_pretty_json(value)?;
    let tp = temp_path(path);
    fs::write(&tp, &bytes).with_context(|| format!("failed to write {}", tp.display()))?;
    fs::rename(&tp, path)
        .with_context(|| format!("failed to rename {} to {}", tp.display(), path.display()))?;
    Ok(())
}
