//! igscreen-tracks - RNA-seq bigwig metadata grouping
//!
//! A run-once converter that reads the igSCREEN experiment metadata TSV
//! and writes a JSON file grouping the bigwig signal tracks by
//! biological lineage.
//!
//! # Example
//!
//! ```ignore
//! use igscreen_tracks::formats::{read_grouping, write_grouping};
//!
//! let grouping = read_grouping("experiment_metadata.tsv")?;
//! for (lineage, entries) in &grouping {
//!     println!("{}: {} entries", lineage, entries.len());
//! }
//! write_grouping(&grouping, "test.json")?;
//! ```

pub mod core;
pub mod formats;

// Re-export commonly used types
pub use core::{
    group_by_lineage, parse_line, LineageGrouping, MetadataError, Result, TrackEntry, ASSAY,
    MIN_FIELDS, SIGNAL_URL_BASE, TRACK_SUFFIX,
};
pub use formats::{read_grouping, write_grouping};
