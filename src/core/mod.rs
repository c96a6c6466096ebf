//! Core metadata model and parsing
//!
//! This module contains the track entry model, the TSV line parser,
//! and the lineage grouping pass.

mod error;
mod metadata;

pub use error::{MetadataError, Result};
pub use metadata::{
    group_by_lineage, parse_line, LineageGrouping, TrackEntry, ASSAY, MIN_FIELDS,
    SIGNAL_URL_BASE, TRACK_SUFFIX,
};
