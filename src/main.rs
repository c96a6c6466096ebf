//! igscreen-tracks CLI entry point
//!
//! Converts the experiment metadata TSV into a JSON file grouping
//! RNA-seq bigwig tracks by lineage.

use clap::Parser;
use igscreen_tracks::formats::{read_grouping, write_grouping};
use std::path::PathBuf;

/// Fixed input path, relative to the working directory
const DEFAULT_INPUT: &str = "experiment_metadata.tsv";

/// Fixed output path, relative to the working directory
const DEFAULT_OUTPUT: &str = "test.json";

#[derive(Parser)]
#[command(name = "igscreen-tracks")]
#[command(about = "Groups RNA-seq bigwig track metadata by lineage")]
#[command(version)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let _cli = Cli::parse();

    let input = PathBuf::from(DEFAULT_INPUT);
    let output = PathBuf::from(DEFAULT_OUTPUT);

    let grouping = read_grouping(&input)?;

    for (lineage, entries) in &grouping {
        println!("{}: {} entries", lineage, entries.len());
    }

    write_grouping(&grouping, &output)?;
    println!("JSON file created successfully: {}", output.display());

    Ok(())
}
