//! Assembly and serialization of the published dictionary.

use anyhow::Result;
use std::cmp::Reverse;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tagdict_core::{TagDictionary, TagRecord, ThresholdRule};

/// Load display threshold rules from a JSON file, keeping file order.
pub fn load_thresholds(path: &Path) -> Result<Vec<ThresholdRule>> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// Order tags by occurrence count, most frequent first. The sort is
/// stable, so tags with equal counts keep their input order.
pub fn sort_by_count(tags: &mut [TagRecord]) {
    tags.sort_by_key(|tag| Reverse(tag.count));
}

/// Write the dictionary as minified JSON, replacing any previous artifact.
pub fn write_dictionary(path: &Path, dictionary: &TagDictionary) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, dictionary)?;
    writer.flush()?;
    Ok(())
}
