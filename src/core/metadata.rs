//! Track metadata model and TSV parsing
//!
//! Parses the experiment metadata TSV (one signal track per line) and
//! groups the resulting entries by biological lineage.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base URL under which the RNA-seq bigwig files are hosted
pub const SIGNAL_URL_BASE: &str = "https://users.wenglab.org/sheddn/igSCREEN_RNA/";

/// File extension of the hosted signal tracks
pub const TRACK_SUFFIX: &str = ".bw";

/// Assay type for every track this converter emits
pub const ASSAY: &str = "RNA";

/// Minimum number of tab-separated fields a metadata line must have
pub const MIN_FIELDS: usize = 5;

/// One bigwig signal track entry, as it appears in the output JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackEntry {
    pub name: String,
    pub lineage: String,
    pub assay: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    /// Reserved, always empty for tracks produced by this converter
    #[serde(rename = "fileID")]
    pub file_id: String,
    pub url: String,
}

impl TrackEntry {
    /// Build an entry from the consumed metadata columns.
    ///
    /// The URL is derived from the name: base URL + name + `.bw`,
    /// with no escaping or other transformation.
    pub fn new(name: &str, lineage: &str, display_name: &str) -> Self {
        TrackEntry {
            name: name.to_string(),
            lineage: lineage.to_string(),
            assay: ASSAY.to_string(),
            display_name: display_name.to_string(),
            file_id: String::new(),
            url: format!("{}{}{}", SIGNAL_URL_BASE, name, TRACK_SUFFIX),
        }
    }
}

/// Mapping from lineage key to the tracks belonging to it.
///
/// `BTreeMap` keeps key iteration deterministic (sorted) for the summary
/// and the serialized JSON; entries within a lineage keep input order.
pub type LineageGrouping = BTreeMap<String, Vec<TrackEntry>>;

/// Parse a single metadata line into a track entry.
///
/// Returns `None` for lines that are blank after trimming or that have
/// fewer than 5 tab-separated fields. Columns consumed by index:
/// 0 (name), 2 (lineage), 4 (display name).
pub fn parse_line(line: &str) -> Option<TrackEntry> {
    if line.trim().is_empty() {
        return None;
    }

    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < MIN_FIELDS {
        return None;
    }

    Some(TrackEntry::new(fields[0], fields[2], fields[4]))
}

/// Group the metadata text by lineage.
///
/// The first line is treated as a header and skipped unconditionally,
/// even if it would parse. Malformed lines are dropped without error;
/// they are noted at debug level only.
pub fn group_by_lineage(text: &str) -> LineageGrouping {
    let mut grouping = LineageGrouping::new();

    for (idx, line) in text.split('\n').enumerate().skip(1) {
        match parse_line(line) {
            Some(entry) => {
                grouping
                    .entry(entry.lineage.clone())
                    .or_default()
                    .push(entry);
            }
            None => {
                if !line.trim().is_empty() {
                    log::debug!("skipping malformed metadata line {}", idx + 1);
                }
            }
        }
    }

    grouping
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_basic() {
        let entry = parse_line("A1\trep1\tCD4_Tcells\thg38\tA1 label").unwrap();
        assert_eq!(entry.name, "A1");
        assert_eq!(entry.lineage, "CD4_Tcells");
        assert_eq!(entry.assay, "RNA");
        assert_eq!(entry.display_name, "A1 label");
        assert_eq!(entry.file_id, "");
        assert_eq!(
            entry.url,
            "https://users.wenglab.org/sheddn/igSCREEN_RNA/A1.bw"
        );
    }

    #[test]
    fn test_parse_line_too_few_fields() {
        assert!(parse_line("A1\trep1\tCD4_Tcells").is_none());
    }

    #[test]
    fn test_parse_line_blank() {
        assert!(parse_line("").is_none());
        assert!(parse_line("   \t  ").is_none());
    }

    #[test]
    fn test_parse_line_extra_fields_ignored() {
        let entry = parse_line("A1\tx\tB_cells\tx\tlabel\textra\tmore").unwrap();
        assert_eq!(entry.lineage, "B_cells");
        assert_eq!(entry.display_name, "label");
    }

    #[test]
    fn test_group_skips_header() {
        // Header is well-formed but must never become an entry
        let text = "name\tx\tlineage\tx\tdisp\nA1\tx\tCD4_Tcells\tx\tA1 label\n";
        let grouping = group_by_lineage(text);
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping["CD4_Tcells"].len(), 1);
        assert_eq!(grouping["CD4_Tcells"][0].name, "A1");
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_by_lineage("").is_empty());
        assert!(group_by_lineage("name\tx\tlineage\tx\tdisp\n").is_empty());
    }

    #[test]
    fn test_group_short_line_does_not_break_following() {
        let text = "h1\th2\th3\th4\th5\n\
                    A1\tx\tCD4_Tcells\n\
                    A2\tx\tCD8_Tcells\tx\tA2 label\n";
        let grouping = group_by_lineage(text);
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping["CD8_Tcells"][0].name, "A2");
    }

    #[test]
    fn test_group_preserves_order_within_lineage() {
        let text = "h1\th2\th3\th4\th5\n\
                    A1\tx\tB_cells\tx\tfirst\n\
                    A2\tx\tB_cells\tx\tsecond\n\
                    A3\tx\tB_cells\tx\tthird\n";
        let grouping = group_by_lineage(text);
        let names: Vec<&str> = grouping["B_cells"].iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["A1", "A2", "A3"]);
    }

    #[test]
    fn test_group_blank_lines_ignored() {
        let text = "h1\th2\th3\th4\th5\n\
                    \n\
                    A1\tx\tNK_cells\tx\tNK label\n\
                    \t \t\n";
        let grouping = group_by_lineage(text);
        assert_eq!(grouping.len(), 1);
        assert_eq!(grouping["NK_cells"].len(), 1);
    }
}
