//! File format adapters
//!
//! Adapters between the on-disk formats (metadata TSV in, grouped JSON out)
//! and the in-memory lineage grouping.

pub mod json;

pub use json::{read_grouping, write_grouping};
