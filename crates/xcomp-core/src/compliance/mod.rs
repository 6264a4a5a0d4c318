//! Compliance data: checker records, the name index and listing enrichment.

mod generate;
pub(crate) mod index;
mod merge;
mod record;

pub use generate::{generate_compliance_suite, GenerateOutcome};
pub use index::{build_index, ComplianceIndex, IndexReport, SkippedDescriptor};
pub use merge::{enrich_listing, merge_listing_file, merge_listings, ListingSummary};
pub use record::{Badges, ComplianceRecord};
