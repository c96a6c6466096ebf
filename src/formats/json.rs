//! Grouped JSON format adapter
//!
//! Reads the metadata TSV into a lineage grouping and serializes the
//! grouping as 2-space-indented JSON.

use crate::core::{group_by_lineage, LineageGrouping, MetadataError, Result};
use std::fs;
use std::path::Path;

/// Read the metadata TSV at `input` and group its entries by lineage.
///
/// The whole file is read into memory; the input is small and the
/// converter runs once. A missing or unreadable file returns an error
/// carrying the path.
pub fn read_grouping<P: AsRef<Path>>(input: P) -> Result<LineageGrouping> {
    let input = input.as_ref();
    let text = fs::read_to_string(input).map_err(|source| MetadataError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;

    Ok(group_by_lineage(&text))
}

/// Serialize the grouping as indented JSON and write it to `output`.
///
/// An existing file at `output` is overwritten. A write failure may
/// leave a truncated file behind; the converter is re-runnable.
pub fn write_grouping<P: AsRef<Path>>(grouping: &LineageGrouping, output: P) -> Result<()> {
    let output = output.as_ref();
    let json = serde_json::to_string_pretty(grouping)?;

    fs::write(output, json).map_err(|source| MetadataError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })
}
