//! Enrich listing files with compliance badges.
//!
//! A listing maps a platform key to an array of entry objects. Every entry's
//! `badges` field is overwritten: the matching record's badges, or `{}`.

use super::index::ComplianceIndex;
use crate::layout::Layout;
use crate::storage;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingSummary {
    pub path: PathBuf,
    pub entries: usize,
    /// Entries whose name was found in the index.
    pub matched: usize,
}

/// Set `badges` on every entry of every platform group in `listing`.
pub fn enrich_listing(listing: &mut Value, index: &ComplianceIndex) -> Result<ListingSummary> {
    let platforms = listing
        .as_object_mut()
        .context("listing must be a JSON object keyed by platform")?;

    let mut summary = ListingSummary::default();
    for (platform, group) in platforms.iter_mut() {
        let entries = group
            .as_array_mut()
            .with_context(|| format!("platform {:?} must hold an array of entries", platform))?;
        for entry in entries.iter_mut() {
            let entry = entry
                .as_object_mut()
                .with_context(|| format!("platform {:?} contains a non-object entry", platform))?;
            let record = match entry.get("name").and_then(Value::as_str) {
                Some(name) => index.get(name),
                None => {
                    tracing::warn!(platform = %platform, "listing entry without a name");
                    None
                }
            };
            let badges = match record {
                Some(record) => {
                    summary.matched += 1;
                    record.badges_value()
                }
                None => Value::Object(Map::new()),
            };
            entry.insert("badges".to_string(), badges);
            summary.entries += 1;
        }
    }
    Ok(summary)
}

/// Load the listing at `path`, enrich it and write it back in place.
pub fn merge_listing_file(path: &Path, index: &ComplianceIndex) -> Result<ListingSummary> {
    let mut listing = storage::read_json(path)?;
    let mut summary = enrich_listing(&mut listing, index)
        .with_context(|| format!("malformed listing {}", path.display()))?;
    storage::write_json_pretty(path, &listing)?;
    summary.path = path.to_path_buf();
    tracing::info!(
        path = %path.display(),
        entries = summary.entries,
        matched = summary.matched,
        "listing enriched"
    );
    Ok(summary)
}

/// Enrich `{category}_list_doap.json` for each category, in order.
pub fn merge_listings(
    layout: &Layout,
    categories: &[String],
    index: &ComplianceIndex,
) -> Result<Vec<ListingSummary>> {
    categories
        .iter()
        .map(|category| merge_listing_file(&layout.listing_path(category), index))
        .collect()
}
