//! Offline builder for the consolidated tag dictionary artifact.
//!
//! Reads `thresholds.json` and `data.tsv` from the working directory, sorts
//! tags by count, and overwrites `danboru_dictionary.json` with the minified
//! combined document the converter page loads when no API server is running.

mod dictionary;
mod tsv;

use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::Path;
use tagdict_core::TagDictionary;

/// Input: tab-separated tag dump, one record per line.
const TSV_FILE: &str = "data.tsv";
/// Input: display threshold rules.
const THRESHOLDS_FILE: &str = "thresholds.json";
/// Output artifact consumed by the converter page.
const OUTPUT_FILE: &str = "danboru_dictionary.json";

#[derive(Parser, Debug)]
#[command(
    name = "tagdict-publisher",
    version,
    about = "Builds danboru_dictionary.json from data.tsv and thresholds.json"
)]
struct Cli {}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let _cli = Cli::parse();
    run(Path::new("."))
}

/// Run the whole pipeline against one directory; the two inputs and the
/// output artifact all live directly in `base`. Production passes the
/// working directory.
fn run(base: &Path) -> anyhow::Result<()> {
    let thresholds = dictionary::load_thresholds(&base.join(THRESHOLDS_FILE))
        .with_context(|| format!("cannot load {THRESHOLDS_FILE}; put it in the working directory"))?;

    tracing::info!("reading {}", TSV_FILE);
    let input = File::open(base.join(TSV_FILE))
        .with_context(|| format!("cannot open {TSV_FILE}; download the tag dump first"))?;
    let mut tags =
        tsv::read_tags(input).with_context(|| format!("error while reading {TSV_FILE}"))?;

    tracing::info!("sorting {} tags by count", tags.len());
    dictionary::sort_by_count(&mut tags);

    let artifact = TagDictionary { tags, thresholds };
    tracing::info!(
        "writing {} ({} tags, {} thresholds)",
        OUTPUT_FILE,
        artifact.tags.len(),
        artifact.thresholds.len()
    );

    // Input problems above are fatal; a failed write is only reported.
    if let Err(err) = dictionary::write_dictionary(&base.join(OUTPUT_FILE), &artifact) {
        eprintln!("✖ failed to write {OUTPUT_FILE}: {err:#}");
        return Ok(());
    }

    println!("✔ {OUTPUT_FILE} updated");
    Ok(())
}
