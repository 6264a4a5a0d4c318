//! Human-readable run summaries printed to stdout.

use xcomp_core::compliance::{GenerateOutcome, IndexReport, ListingSummary};
use xcomp_core::downloader::Downloaded;

pub fn print_download(d: &Downloaded) {
    println!("fetched {} ({} bytes, sha256 {})", d.path.display(), d.bytes, d.sha256);
}

pub fn print_generate(outcome: &GenerateOutcome) {
    match outcome {
        GenerateOutcome::Written => println!("compliance suite summary written"),
        GenerateOutcome::Skipped { reason } => {
            println!("compliance suite summary not written: {}", reason)
        }
    }
}

pub fn print_merge(report: &IndexReport, records: usize, listings: &[ListingSummary]) {
    println!(
        "checked {} descriptor(s): {} record(s), {} duplicate name(s), {} skipped",
        report.checked + report.skipped.len(),
        records,
        report.collisions,
        report.skipped.len()
    );
    for skipped in &report.skipped {
        println!("  skipped {}: {}", skipped.path.display(), skipped.reason);
    }
    for listing in listings {
        println!(
            "{}: {} of {} entries have compliance data",
            listing.path.display(),
            listing.matched,
            listing.entries
        );
    }
}
